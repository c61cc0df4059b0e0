use serde::Deserialize;

use crate::infrastructure::llm::{DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL};

/// Environment variable holding the completion service credential
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Completion service settings
#[derive(Clone, Deserialize)]
pub struct OpenAiConfig {
    #[serde(default)]
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    pub static_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            openai: OpenAiConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV).unwrap_or_default(),
            model: DEFAULT_OPENAI_MODEL.to_string(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
        }
    }
}

impl OpenAiConfig {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

// Debug output never contains the API key.
impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &if self.has_api_key() { "[REDACTED]" } else { "" })
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            static_dir: "public".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, `config/default`, `config/local`
    /// and `APP__*` environment variables, in increasing precedence
    pub fn load() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        let config = config::Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", "pretty")?
            .set_default("openai.api_key", defaults.openai.api_key)?
            .set_default("openai.model", defaults.openai.model)?
            .set_default("openai.base_url", defaults.openai.base_url)?
            .set_default("ui.static_dir", defaults.ui.static_dir)?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.openai.model, "gpt-3.5-turbo");
        assert_eq!(config.openai.base_url, "https://api.openai.com");
        assert_eq!(config.ui.static_dir, "public");
    }

    #[test]
    fn test_deserialize_from_source() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                [server]
                host = "127.0.0.1"
                port = 3000

                [logging]
                level = "debug"
                format = "json"

                [openai]
                api_key = "sk-file"
                model = "gpt-4o-mini"
                base_url = "http://localhost:9999"

                [ui]
                static_dir = "web"
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.openai.api_key, "sk-file");
        assert!(config.openai.has_api_key());
        assert_eq!(config.openai.model, "gpt-4o-mini");
        assert_eq!(config.ui.static_dir, "web");
    }

    #[test]
    fn test_api_key_is_redacted_in_debug() {
        let openai = OpenAiConfig {
            api_key: "sk-very-secret".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            base_url: "https://api.openai.com".to_string(),
        };

        let debug = format!("{:?}", openai);
        assert!(!debug.contains("sk-very-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_blank_api_key_is_not_configured() {
        let openai = OpenAiConfig {
            api_key: "  ".to_string(),
            model: "m".to_string(),
            base_url: "u".to_string(),
        };

        assert!(!openai.has_api_key());
    }
}
