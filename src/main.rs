//! Entry point for the speech client.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments (an optional text file to preload).
//! - Load user configuration from `conf/config.toml`.
//! - Construct the HTTP client for the remote speech service.
//! - Launch the GUI application.

mod app;
mod cache;
mod client;
mod config;
mod playback;

use crate::app::run_app;
use crate::client::SpeechClient;
use crate::config::load_config;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use std::{env, fs};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

static SIGINT_REQUESTED: AtomicBool = AtomicBool::new(false);

/// True once per Ctrl-C press; consumed by the poll subscription.
pub(crate) fn take_sigint_requested() -> bool {
    SIGINT_REQUESTED.swap(false, Ordering::SeqCst)
}

fn main() {
    let reload_handle = init_tracing();
    install_sigint_handler();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let initial_text = parse_args()?;
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        api = %config.api_base_url,
        audio = %config.audio_base_url,
        voice = %config.default_voice,
        level = %config.log_level,
        "Starting speech client"
    );
    let client = SpeechClient::new(
        &config.api_base_url,
        &config.audio_base_url,
        Duration::from_secs(config.request_timeout_secs.max(1)),
    )?;
    run_app(config, client, initial_text).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Result<Option<String>> {
    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        return Ok(None);
    };

    let path = PathBuf::from(path);
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Reading initial text from {}", path.display()))?;
    info!(path = %path.display(), chars = text.len(), "Preloading text file");
    Ok(Some(text))
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}

fn install_sigint_handler() {
    if let Err(err) = ctrlc::set_handler(|| SIGINT_REQUESTED.store(true, Ordering::SeqCst)) {
        warn!("Failed to install Ctrl-C handler: {err}");
    }
}
