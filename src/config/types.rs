use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::api::DEFAULT_BASE_URL;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the posts API lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the posts API (default: the public JSONPlaceholder host).
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Terminal UI timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long a notification stays on screen, in seconds (default: 3).
    #[serde(default = "default_notification_seconds")]
    pub notification_seconds: u64,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Stdout belongs to the UI, so logs always go to a file.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_notification_seconds() -> u64 {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            notification_seconds: default_notification_seconds(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl UiConfig {
    /// Number of ticks a notification stays visible. Never zero.
    pub fn notification_ticks(&self) -> u32 {
        let tick = self.tick_rate_ms.max(1);
        let ticks = self.notification_seconds.saturating_mul(1000).div_ceil(tick);
        ticks.clamp(1, u32::MAX as u64) as u32
    }
}

impl LoggingConfig {
    /// Configured log file, or `<data_local_dir>/postboard/postboard.log`.
    pub fn resolved_file(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("postboard")
                .join("postboard.log")
        })
    }
}
