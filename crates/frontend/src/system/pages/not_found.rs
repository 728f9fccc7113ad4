use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="login-container">
            <div class="login-box">
                {icon("alert")}
                <h1>"Page not found"</h1>
                <A href="/">
                    <span class="button button--ghost">"Back to role selection"</span>
                </A>
            </div>
        </div>
    }
}
