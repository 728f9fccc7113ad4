use crate::dashboards::d101_dca_dashboard::api::{
    self, CaseListView, CasesState, RequestTracker,
};
use crate::dashboards::d101_dca_dashboard::ui::CaseCard;
use crate::layout::Navbar;
use crate::shared::api_client::HttpDashboardApi;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

/// Collection agent dashboard for the `:id` route parameter
#[component]
pub fn DcaDashboard() -> impl IntoView {
    let client = HttpDashboardApi::from_context();
    let params = use_params_map();
    let dca_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    let (cases, set_cases) = signal(CasesState::Loading);
    let requests = StoredValue::new(RequestTracker::default());

    // Reload whenever the route id changes
    Effect::new(move |_| {
        let requested = dca_id.get();
        let client = client.clone();
        let ticket = requests.try_update_value(|t| t.begin());
        log::debug!("Loading DCA dashboard for agent {}", requested);
        set_cases.set(CasesState::Loading);

        spawn_local(async move {
            let state = api::load_cases(&client, &requested).await;
            // Disposed or superseded: keep whatever the newer request shows
            let current = ticket
                .and_then(|ticket| requests.try_with_value(|t| t.is_current(ticket)))
                .unwrap_or(false);
            if current {
                set_cases.set(state);
            } else {
                log::debug!("Dropping superseded response for agent {}", requested);
            }
        });
    });

    view! {
        <div id="d101_dca_dashboard" class="dashboard dashboard--agent">
            <Navbar title="DCA Dashboard" />

            <div class="dashboard__content">
                <PageHeader title="Your Dashboard" />

                {move || match cases.get() {
                    CasesState::Loading => view! {
                        <div class="dashboard-loading">
                            <div class="spinner"></div>
                            <span>"Loading your cases..."</span>
                        </div>
                    }.into_any(),
                    CasesState::Failed(err) => view! {
                        <div class="dashboard-error">
                            {icon("alert")}
                            <div>
                                <strong>"Error loading dashboard"</strong>
                                <p>{err}</p>
                            </div>
                        </div>
                    }.into_any(),
                    CasesState::Ready(data) => view! { <CaseList data=data /> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn CaseList(data: CaseListView) -> impl IntoView {
    let count = data.cases.len();
    let count_label = if count == 1 {
        "1 case assigned".to_string()
    } else {
        format!("{} cases assigned", count)
    };
    let has_cases = data.has_cases();

    view! {
        <section class="card welcome-card">
            <div class="card__icon">{icon("agent")}</div>
            <div>
                <h2 class="card__title">{data.message}</h2>
                <p class="card__subtitle">"Here are the cases assigned to you"</p>
            </div>
        </section>

        <section class="card cases">
            <div class="card__header">
                <div class="card__icon">{icon("cases")}</div>
                <div>
                    <h2 class="card__title">"Assigned Cases"</h2>
                    <p class="card__subtitle">{count_label}</p>
                </div>
            </div>

            {if has_cases {
                view! {
                    <div class="case-grid">
                        {data.cases.into_iter().enumerate().map(|(i, line)| {
                            view! { <CaseCard index={i + 1} line=line /> }
                        }).collect_view()}
                    </div>
                }.into_any()
            } else {
                view! { <EmptyState /> }.into_any()
            }}
        </section>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            {icon("inbox")}
            <h3>"No Cases Assigned"</h3>
            <p>
                "You don't have any cases assigned at the moment. "
                "New cases will appear here when they're assigned to you."
            </p>
        </div>
    }
}
