use crate::dashboards::d100_admin_dashboard::api::{self, CaseForm, SubmitOutcome};
use crate::shared::api_client::HttpDashboardApi;
use crate::shared::icons::icon;
use contracts::dashboards::d100_admin_dashboard::DashboardStats;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Create-case form. The outcome is shown as soon as the write returns;
/// `on_refreshed` then receives the re-fetched stats.
#[component]
pub fn CreateCaseForm(
    client: HttpDashboardApi,
    on_refreshed: Callback<DashboardStats>,
) -> impl IntoView {
    let (form, set_form) = signal(CaseForm::default());
    let (outcome, set_outcome) = signal(None::<SubmitOutcome>);
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let current = form.get_untracked();
        let client = client.clone();
        set_is_submitting.set(true);
        set_outcome.set(None);

        spawn_local(async move {
            let result = api::submit_case(&client, &current).await;
            if result.is_success() {
                set_form.set(CaseForm::default());
            }
            set_outcome.set(Some(result));
            set_is_submitting.set(false);

            if result == SubmitOutcome::Created {
                if let Some(stats) = api::refresh_stats(&client).await {
                    on_refreshed.run(stats);
                }
            }
        });
    };

    view! {
        <section class="card create-case">
            <div class="card__header">
                <div class="card__icon">{icon("plus")}</div>
                <div>
                    <h2 class="card__title">"Create New Case"</h2>
                    <p class="card__subtitle">"Add a new debt collection case to the system"</p>
                </div>
            </div>

            <form class="create-case__form" on:submit=on_submit>
                <div class="form-grid">
                    <div class="form-group">
                        <label for="customer_name">"Customer Name"</label>
                        <input
                            type="text"
                            id="customer_name"
                            placeholder="John Doe"
                            required
                            prop:value=move || form.get().customer_name
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                set_form.update(|f| f.customer_name = value);
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="amount">"Amount ($)"</label>
                        <div class="input-prefixed">
                            <span class="input-prefixed__prefix">"$"</span>
                            <input
                                type="number"
                                id="amount"
                                step="0.01"
                                placeholder="0.00"
                                required
                                prop:value=move || form.get().amount
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_form.update(|f| f.amount = value);
                                }
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="days_overdue">"Days Overdue"</label>
                        <input
                            type="number"
                            id="days_overdue"
                            placeholder="30"
                            required
                            prop:value=move || form.get().days_overdue
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                set_form.update(|f| f.days_overdue = value);
                            }
                        />
                    </div>
                </div>

                <button
                    type="submit"
                    class="btn-primary"
                    disabled=move || is_submitting.get()
                >
                    {move || if is_submitting.get() { "Creating..." } else { "Create Case" }}
                </button>
            </form>

            {move || outcome.get().map(|result| {
                let class = if result.is_success() {
                    "form-message form-message--success"
                } else {
                    "form-message form-message--error"
                };
                view! {
                    <div class=class>
                        <span>{result.message()}</span>
                    </div>
                }
            })}
        </section>
    }
}
