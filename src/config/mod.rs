//! Configuration loading for the speech client.
//!
//! All user-tunable settings are centralized here and loaded from
//! `conf/config.toml` if present. Any missing or invalid entries fall back to
//! sensible defaults so the UI can still launch.

mod defaults;
mod io;
mod models;

pub(crate) use defaults::default_voices;
pub use io::{load_config, parse_config};
pub use models::{
    AppConfig, LogLevel, ThemeMode, MAX_LOOP_INTERVAL_MS, MAX_REPEAT_COUNT, MAX_SPEED_PERCENT,
    MIN_LOOP_INTERVAL_MS, MIN_REPEAT_COUNT, MIN_SPEED_PERCENT,
};
