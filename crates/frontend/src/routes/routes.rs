use crate::dashboards::{AdminDashboard, DcaDashboard};
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// `/` role select, `/admin` admin dashboard, `/dca/:id` agent dashboard.
///
/// No guards: the login page only navigates.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=LoginPage />
                    <Route path=path!("/admin") view=AdminDashboard />
                    <Route path=path!("/dca/:id") view=DcaDashboard />
                </Routes>
            </main>
        </Router>
    }
}
