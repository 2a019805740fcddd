use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Runtime settings of the dashboard client.
///
/// Natively these come from defaults overridden by `POLARIS__*` environment
/// variables (a `.env` file is honored). The browser frontend builds the same
/// struct from window location and `localStorage` overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_host: String,
    pub api_port: u16,
    /// Versioned prefix every endpoint path is appended to.
    pub api_path: String,
    pub api_use_https: bool,
    pub request_timeout_ms: u64,
    /// Page size assumed when a list response does not report its `limit`.
    pub default_page_limit: u64,
    pub toast_duration_ms: u32,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_host: "api-polaris.innovativecursor.com".to_string(),
            api_port: 443,
            api_path: "/v1".to_string(),
            api_use_https: true,
            request_timeout_ms: 30_000,
            default_page_limit: 10,
            toast_duration_ms: 5_000,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the environment.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(
                config::Environment::with_prefix("POLARIS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        tracing::debug!("Loaded settings, API base URL: {}", settings.api_base_url());
        Ok(settings)
    }

    /// Base URL all endpoint paths are appended to, e.g.
    /// `https://api-polaris.innovativecursor.com/v1`.
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        let default_port = if self.api_use_https { 443 } else { 80 };
        let path = self.api_path.trim_end_matches('/');

        if self.api_port == default_port {
            format!("{}://{}{}", protocol, self.api_host, path)
        } else {
            format!("{}://{}:{}{}", protocol, self.api_host, self.api_port, path)
        }
    }

    /// Full URL for an endpoint path.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url(), path)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
