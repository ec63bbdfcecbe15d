use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub gemini: GeminiSettings,
    #[serde(default)]
    pub export: ExportSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    #[serde(default = "default_gemini_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_gemini_model")]
    pub model: String,
    #[serde(default = "default_gemini_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            endpoint: default_gemini_endpoint(),
            api_key: String::new(),
            model: default_gemini_model(),
            timeout_secs: default_gemini_timeout(),
        }
    }
}

fn default_gemini_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}
fn default_gemini_model() -> String { "gemini-1.5-flash".to_string() }
fn default_gemini_timeout() -> u64 { 60 }

#[derive(Debug, Clone, Deserialize)]
pub struct ExportSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_true() -> bool { true }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

/// Environment variable holding the Gemini API key, as used in `.env` files
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with IDEA_FORGE__)
    /// 5. GEMINI_API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., IDEA_FORGE__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        apply_api_key_override(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        apply_api_key_override(settings)?.try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("IDEA_FORGE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Let the plain `GEMINI_API_KEY` variable win over file-based keys
fn apply_api_key_override(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var(GEMINI_API_KEY_VAR) {
        Ok(key) if !key.is_empty() => Config::builder()
            .add_source(settings)
            .set_override("gemini.api_key", key)?
            .build(),
        _ => Ok(settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gemini_settings() {
        let gemini = GeminiSettings::default();
        assert_eq!(gemini.endpoint, "https://generativelanguage.googleapis.com/v1beta");
        assert_eq!(gemini.model, "gemini-1.5-flash");
        assert_eq!(gemini.timeout_secs, 60);
        assert!(gemini.api_key.is_empty());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "compact");
    }

    #[test]
    fn test_export_enabled_by_default() {
        assert!(ExportSettings::default().enabled);
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("idea-forge-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("test.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9090\n\n[gemini]\nmodel = \"gemini-pro\"\n\n[export]\nenabled = false\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.gemini.model, "gemini-pro");
        assert!(!settings.export.enabled);
        assert_eq!(settings.logging.level, "info");

        std::fs::remove_dir_all(&dir).ok();
    }
}
