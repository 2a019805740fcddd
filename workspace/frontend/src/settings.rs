use log::Level;
use polaris::config::Settings;
use std::cell::RefCell;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Backend location, timeouts and page defaults shared with the core
    pub api: Settings,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api: Settings::default(),
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        // Per-browser overrides, e.g. pointing a deployed build at a local backend
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(api_host)) = storage.get_item("polaris_api_host") {
                settings.api.api_host = api_host;
            }

            if let Ok(Some(api_port)) = storage.get_item("polaris_api_port") {
                if let Ok(port) = api_port.parse::<u16>() {
                    settings.api.api_port = port;
                }
            }

            if let Ok(Some(api_path)) = storage.get_item("polaris_api_path") {
                settings.api.api_path = api_path;
            }

            if let Ok(Some(use_https)) = storage.get_item("polaris_api_use_https") {
                settings.api.api_use_https = use_https.eq_ignore_ascii_case("true");
            }

            if let Ok(Some(limit)) = storage.get_item("polaris_default_page_limit") {
                if let Ok(limit) = limit.parse::<u64>() {
                    settings.api.default_page_limit = limit;
                }
            }

            if let Ok(Some(log_level)) = storage.get_item("polaris_log_level") {
                settings.log_level = match log_level.to_lowercase().as_str() {
                    "error" => Level::Error,
                    "warn" => Level::Warn,
                    "info" => Level::Info,
                    "debug" => Level::Debug,
                    "trace" => Level::Trace,
                    _ => settings.log_level,
                };
            }

            if let Ok(Some(timeout)) = storage.get_item("polaris_request_timeout_ms") {
                if let Ok(timeout) = timeout.parse::<u64>() {
                    settings.api.request_timeout_ms = timeout;
                }
            }
        }

        settings
    }

    pub fn api_base_url(&self) -> String {
        self.api.api_base_url()
    }
}

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
