use serde::Deserialize;

pub const MIN_SPEED_PERCENT: i32 = -100;
pub const MAX_SPEED_PERCENT: i32 = 100;
pub const MIN_REPEAT_COUNT: u32 = 1;
pub const MAX_REPEAT_COUNT: u32 = 99;
pub const MIN_LOOP_INTERVAL_MS: u64 = 100;
pub const MAX_LOOP_INTERVAL_MS: u64 = 5000;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "crate::config::defaults::default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "crate::config::defaults::default_audio_base_url")]
    pub audio_base_url: String,
    #[serde(default = "crate::config::defaults::default_voices")]
    pub voices: Vec<String>,
    #[serde(default = "crate::config::defaults::default_voice")]
    pub default_voice: String,
    #[serde(default = "crate::config::defaults::default_speed_percent")]
    pub speed_percent: i32,
    #[serde(default = "crate::config::defaults::default_repeat_count")]
    pub repeat_count: u32,
    #[serde(default = "crate::config::defaults::default_loop_interval_ms")]
    pub loop_interval_ms: u64,
    #[serde(default = "crate::config::defaults::default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::Night,
            api_base_url: crate::config::defaults::default_api_base_url(),
            audio_base_url: crate::config::defaults::default_audio_base_url(),
            voices: crate::config::defaults::default_voices(),
            default_voice: crate::config::defaults::default_voice(),
            speed_percent: crate::config::defaults::default_speed_percent(),
            repeat_count: crate::config::defaults::default_repeat_count(),
            loop_interval_ms: crate::config::defaults::default_loop_interval_ms(),
            request_timeout_secs: crate::config::defaults::default_request_timeout_secs(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    Night,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Night
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{}", label)
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
