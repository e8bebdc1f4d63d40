use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use psycenter_shared::Language;
use serde::Deserialize;
use std::{env, time::Duration};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub locale: LocaleConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_contact_path")]
    pub contact_path: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_contact_path() -> String {
    "/api/contact".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LocaleConfig {
    #[serde(default = "default_language")]
    pub default: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default: default_language(),
        }
    }
}

impl LocaleConfig {
    pub fn language(&self) -> psycenter_shared::Result<Language> {
        Language::parse(&self.default)
    }
}

fn default_language() -> String {
    "ru".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (PSYCENTER__API__BASE_URL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("api.base_url", "http://localhost:3001")?
            .set_default("api.contact_path", default_contact_path())?
            .set_default("api.timeout_secs", 30)?
            .set_default("observability.log_level", default_log_level())?
            .set_default("locale.default", default_language())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // optional, a missing file keeps the defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PSYCENTER")
                .separator("__")
                .try_parsing(true),
        );

        // name used by the site's frontend build
        if let Ok(api_url) = env::var("API_URL") {
            builder = builder.set_override("api.base_url", api_url)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        match url::Url::parse(&self.api.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(format!(
                    "API base URL must use http or https, got `{}`",
                    url.scheme()
                ));
            }
            Err(e) => return Err(format!("Invalid API base URL `{}`: {e}", self.api.base_url)),
        }
        if self.api.timeout_secs == 0 {
            return Err("API timeout_secs must be greater than 0".to_string());
        }
        if let Err(e) = self.locale.language() {
            return Err(format!("Invalid default locale: {e}"));
        }
        Ok(())
    }
}
