use crate::dashboards::d100_admin_dashboard::api::{self, StatsState};
use crate::dashboards::d100_admin_dashboard::ui::CreateCaseForm;
use crate::layout::Navbar;
use crate::shared::api_client::HttpDashboardApi;
use crate::shared::components::{PageHeader, StatCard};
use crate::shared::icons::icon;
use contracts::dashboards::d100_admin_dashboard::DashboardStats;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Admin Dashboard: system statistics and the create-case form
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let client = HttpDashboardApi::from_context();
    let (stats_state, set_stats_state) = signal(StatsState::Loading);

    let stats = Memo::new(move |_| stats_state.get().stats().cloned());

    // Load stats on mount
    {
        let client = client.clone();
        Effect::new(move |_| {
            let client = client.clone();
            spawn_local(async move {
                set_stats_state.set(api::load_stats(&client).await);
            });
        });
    }

    let on_refreshed = Callback::new(move |fresh: DashboardStats| {
        set_stats_state.set(StatsState::Ready(fresh));
    });

    let stat = move |pick: fn(&DashboardStats) -> i64| {
        Signal::derive(move || stats.get().as_ref().map(pick).unwrap_or_default())
    };

    view! {
        <div id="d100_admin_dashboard" class="dashboard dashboard--admin">
            <Navbar title="Admin Dashboard" />

            <div class="dashboard__content">
                <PageHeader
                    title="Welcome Back"
                    subtitle="Manage cases and monitor system performance".to_string()
                />

                {move || match stats_state.get() {
                    StatsState::Loading => view! {
                        <div class="dashboard-loading">
                            <div class="spinner"></div>
                            <span>"Loading dashboard..."</span>
                        </div>
                    }.into_any(),
                    StatsState::Failed(err) => view! {
                        <div class="dashboard-error">
                            {icon("alert")}
                            <div>
                                <strong>"Unable to load dashboard statistics"</strong>
                                <p>{err}</p>
                            </div>
                        </div>
                    }.into_any(),
                    StatsState::Ready(_) => view! { <></> }.into_any(),
                }}

                <Show when=move || stats.get().is_some()>
                    <div class="stat-grid">
                        <StatCard
                            label="Total DCAs"
                            icon_name="agents"
                            variant="blue"
                            value=stat(|s| s.total_dcas)
                        />
                        <StatCard
                            label="Active Cases"
                            icon_name="cases"
                            variant="pink"
                            value=stat(|s| s.active_cases)
                            subtitle=Signal::derive(move || {
                                stats.get().map(|s| format!("{} in progress", s.active_cases))
                            })
                        />
                        <StatCard
                            label="Resolved Today"
                            icon_name="resolved"
                            variant="green"
                            value=stat(|s| s.resolved_today)
                        />
                    </div>

                    <CreateCaseForm client=client.clone() on_refreshed=on_refreshed />
                </Show>
            </div>
        </div>
    }
}
