//! Process-level configuration

mod app_config;

pub use app_config::{AppConfig, ConsoleConfig, LogFormat, LoggingConfig};
