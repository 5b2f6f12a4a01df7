use leavedesk_domain::DEFAULT_ANNUAL_CAP;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

/// Settings read from `config.json` next to the deployed bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub annual_leave_cap: Option<u32>,
}

impl RuntimeConfig {
    pub fn api_base_url(&self) -> String {
        self.api_base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    pub fn annual_leave_cap(&self) -> u32 {
        self.annual_leave_cap.unwrap_or(DEFAULT_ANNUAL_CAP)
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

/// Installs the runtime config. Only the first call wins.
pub fn init(config: RuntimeConfig) -> bool {
    RUNTIME_CONFIG.set(config).is_ok()
}

pub fn current() -> RuntimeConfig {
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}

pub fn api_base_url() -> String {
    current().api_base_url()
}

pub fn annual_leave_cap() -> u32 {
    current().annual_leave_cap()
}

pub async fn fetch_runtime_config(url: &str) -> Option<RuntimeConfig> {
    let response = reqwest::get(url).await.ok()?;
    if !response.status().is_success() {
        log::warn!("runtime config not available at {} ({})", url, response.status());
        return None;
    }
    response.json::<RuntimeConfig>().await.ok()
}

/// Loads `config.json` from the page origin and caches it; falls back to defaults.
#[cfg(target_arch = "wasm32")]
pub async fn init_from_origin() {
    let origin = web_sys::window().and_then(|w| w.location().origin().ok());
    let loaded = match origin {
        Some(origin) => fetch_runtime_config(&format!("{}/config.json", origin)).await,
        None => None,
    };
    init(loaded.unwrap_or_default());
}
