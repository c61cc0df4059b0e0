//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, LogFormat, LoggingConfig, OpenAiConfig, ServerConfig, UiConfig, API_KEY_ENV,
};
