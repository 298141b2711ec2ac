use log::Level;
use web_sys::window;

const STORAGE_PREFIX: &str = "agripredict_";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Prediction service host (e.g., "127.0.0.1" or "api.example.com")
    pub api_host: String,

    /// Prediction service port (e.g., 5000)
    pub api_port: u16,

    /// Path prefix in front of `/predict` and `/submit_actual_data`
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Email service identifier used by the contact form
    pub email_service_id: String,

    /// Email template identifier used by the contact form
    pub email_template_id: String,

    /// Public key of the email account; the contact form is disabled while empty
    pub email_public_key: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "127.0.0.1".to_string(),
            api_port: 5000,
            api_path: String::new(),
            api_use_https: false,
            log_level: Level::Info,
            debug_mode: false,
            email_service_id: "service_r86w4sl".to_string(),
            email_template_id: "template_ca62lk1".to_string(),
            email_public_key: String::new(),
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

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            let read = |key: &str| storage.get_item(&format!("{STORAGE_PREFIX}{key}")).ok().flatten();

            if let Some(api_host) = read("api_host") {
                settings.api_host = api_host;
            }

            if let Some(port_val) = read("api_port").and_then(|p| p.parse::<u16>().ok()) {
                settings.api_port = port_val;
            }

            if let Some(api_path) = read("api_path") {
                settings.api_path = api_path;
            }

            if let Some(use_https) = read("api_use_https") {
                settings.api_use_https = use_https.to_lowercase() == "true";
            }

            if let Some(log_level) = read("log_level") {
                settings.log_level = match log_level.to_lowercase().as_str() {
                    "error" => Level::Error,
                    "warn" => Level::Warn,
                    "info" => Level::Info,
                    "debug" => Level::Debug,
                    "trace" => Level::Trace,
                    _ => settings.log_level,
                };
            }

            if let Some(service_id) = read("email_service_id") {
                settings.email_service_id = service_id;
            }

            if let Some(template_id) = read("email_template_id") {
                settings.email_template_id = template_id;
            }

            if let Some(public_key) = read("email_public_key") {
                settings.email_public_key = public_key;
            }
        }

        settings
    }

    /// Get the base API URL (protocol + host + port + path)
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}{}", protocol, self.api_host, self.api_port, self.api_path)
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
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
