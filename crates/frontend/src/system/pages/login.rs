use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Role select. No credentials are checked; each button only navigates.
#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let agent_path = format!("/dca/{}", config.agent.default_dca_id);

    let navigate = use_navigate();
    let navigate_agent = navigate.clone();

    view! {
        <div class="login-container">
            <div class="login-box">
                <div class="login-brand">
                    <div class="login-brand__logo">{icon("admin")}</div>
                    <h1>"SmartDCA"</h1>
                    <p>"Debt Collection Assistant System"</p>
                </div>

                <div class="login-options">
                    <button
                        type="button"
                        class="btn-primary login-option login-option--admin"
                        on:click=move |_| navigate("/admin", Default::default())
                    >
                        {icon("admin")}
                        <span>"Login as Admin"</span>
                    </button>

                    <button
                        type="button"
                        class="btn-primary login-option login-option--agent"
                        on:click=move |_| navigate_agent(&agent_path, Default::default())
                    >
                        {icon("agent")}
                        <span>"Login as DCA Agent"</span>
                    </button>
                </div>

                <div class="login-info">
                    <p>"Secure access to SmartDCA platform"</p>
                </div>
            </div>
        </div>
    }
}
