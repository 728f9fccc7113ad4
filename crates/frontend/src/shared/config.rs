use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub agent: AgentConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Backend root, without the endpoint path
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AgentConfig {
    /// Agent opened by "Login as DCA Agent"
    pub default_dca_id: u32,
}

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const DEFAULT_DCA_ID: u32 = 1;

/// localStorage key that overrides `api.base_url` at runtime
pub const API_BASE_OVERRIDE_KEY: &str = "smartdca_api_base";

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://127.0.0.1:8000"

[agent]
default_dca_id = 1
"#;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_API_BASE.to_string(),
            },
            agent: AgentConfig {
                default_dca_id: DEFAULT_DCA_ID,
            },
        }
    }
}

pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents)?;
    Ok(config)
}

/// Load configuration
///
/// Order:
/// 1. Embedded default config
/// 2. `smartdca_api_base` from localStorage replaces the backend URL
pub fn load_config() -> anyhow::Result<AppConfig> {
    let mut config = parse_config(DEFAULT_CONFIG)?;

    if let Some(base_url) = stored_api_base() {
        log::info!("Using backend URL from localStorage: {}", base_url);
        config.api.base_url = base_url;
    }

    Ok(config)
}

fn stored_api_base() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let value = storage.get_item(API_BASE_OVERRIDE_KEY).ok()??;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
