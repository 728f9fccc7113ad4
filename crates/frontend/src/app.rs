use crate::routes::routes::AppRoutes;
use crate::shared::config::{load_config, AppConfig};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });
    log::info!("SmartDCA backend: {}", config.api.base_url);

    // Every page reads the backend location and default agent from here.
    provide_context(config);

    view! {
        <AppRoutes />
    }
}
