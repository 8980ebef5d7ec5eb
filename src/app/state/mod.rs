mod player;
mod ui;
mod workspace;

use crate::cache::AudioCache;
use crate::client::SpeechClient;
use crate::config::{
    AppConfig, MAX_LOOP_INTERVAL_MS, MAX_REPEAT_COUNT, MAX_SPEED_PERCENT, MIN_LOOP_INTERVAL_MS,
    MIN_REPEAT_COUNT, MIN_SPEED_PERCENT,
};
use iced::widget::scrollable;
use iced::Task;
use once_cell::sync::Lazy;

use super::messages::Message;

pub(in crate::app) use player::{PlayerLifecycle, PlayerState};
pub use player::PlayMode;
pub(in crate::app) use ui::{Severity, StatusLine};
pub(in crate::app) use workspace::{LoadedImage, WorkspaceState};

pub(crate) static SENTENCE_SCROLL_ID: Lazy<scrollable::Id> = Lazy::new(scrollable::Id::unique);

/// Core application state composed of sub-models. One instance lives for the
/// whole UI session; the cache dies with it.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) client: SpeechClient,
    pub(super) voice: String,
    pub(super) speed_percent: i32,
    pub(super) processing: bool,
    pub(super) batch_processing: bool,
    pub(super) player: PlayerState,
    pub(super) workspace: WorkspaceState,
    pub(super) audio_cache: AudioCache,
    pub(super) status: StatusLine,
}

impl App {
    pub(super) fn bootstrap(
        mut config: AppConfig,
        client: SpeechClient,
        initial_text: Option<String>,
    ) -> (App, Task<Message>) {
        clamp_config(&mut config);
        let mut app = App {
            voice: config.default_voice.clone(),
            speed_percent: config.speed_percent,
            processing: false,
            batch_processing: false,
            player: PlayerState::new(config.repeat_count, config.loop_interval_ms),
            workspace: WorkspaceState::new(),
            audio_cache: AudioCache::new(),
            status: StatusLine::ready(),
            client,
            config,
        };
        if let Some(text) = initial_text {
            app.workspace.set_input_text(&text);
        }
        tracing::info!(
            voice = %app.voice,
            speed = app.speed_percent,
            repeat = app.player.repeat_target,
            loop_interval_ms = app.player.loop_interval_ms,
            "Initialized session state"
        );
        (app, Task::none())
    }

    pub(super) fn set_status(&mut self, message: impl Into<String>, severity: Severity) {
        self.status = StatusLine {
            message: message.into(),
            severity,
        };
    }

    pub(super) fn busy(&self) -> bool {
        self.processing || self.batch_processing
    }

    /// Drop the sink and settle the lifecycle; replay bookkeeping is left to
    /// the caller.
    pub(super) fn stop_playback(&mut self) {
        if let Some(playback) = self.player.playback.take() {
            playback.stop();
        }
        self.player.lifecycle = PlayerLifecycle::Idle;
    }

    // Control enablement, mirroring the original button-state table.

    pub(super) fn play_enabled(&self) -> bool {
        !self.busy() && !(self.player.is_playing() && !self.player.looping)
    }

    pub(super) fn pause_enabled(&self) -> bool {
        self.player.is_playing()
    }

    pub(super) fn stop_enabled(&self) -> bool {
        self.player.is_playing() || self.player.looping
    }

    pub(super) fn process_enabled(&self) -> bool {
        !self.busy()
    }

    pub(super) fn batch_enabled(&self) -> bool {
        !self.busy() && !self.workspace.sentences.is_empty()
    }

    pub(super) fn ocr_enabled(&self) -> bool {
        !self.busy()
    }
}

fn clamp_config(config: &mut AppConfig) {
    config.speed_percent = config
        .speed_percent
        .clamp(MIN_SPEED_PERCENT, MAX_SPEED_PERCENT);
    config.repeat_count = config.repeat_count.clamp(MIN_REPEAT_COUNT, MAX_REPEAT_COUNT);
    config.loop_interval_ms = config
        .loop_interval_ms
        .clamp(MIN_LOOP_INTERVAL_MS, MAX_LOOP_INTERVAL_MS);
    config.window_width = config.window_width.clamp(320.0, 7680.0);
    config.window_height = config.window_height.clamp(240.0, 4320.0);
    if config.voices.is_empty() {
        config.voices = crate::config::default_voices();
    }
    if !config.voices.contains(&config.default_voice) {
        config.voices.insert(0, config.default_voice.clone());
    }
}

#[cfg(test)]
pub(in crate::app) fn test_app() -> App {
    let config = AppConfig::default();
    let client = SpeechClient::new(
        &config.api_base_url,
        &config.audio_base_url,
        std::time::Duration::from_secs(1),
    )
    .expect("client should build");
    App::bootstrap(config, client, None).0
}

#[cfg(test)]
mod tests {
    use super::{clamp_config, test_app, PlayerLifecycle};
    use crate::config::AppConfig;

    #[test]
    fn clamping_pulls_values_into_bounds() {
        let mut config = AppConfig {
            speed_percent: 400,
            repeat_count: 0,
            loop_interval_ms: 7,
            ..AppConfig::default()
        };
        clamp_config(&mut config);
        assert_eq!(config.speed_percent, 100);
        assert_eq!(config.repeat_count, 1);
        assert_eq!(config.loop_interval_ms, 100);
    }

    #[test]
    fn clamping_keeps_unknown_default_voice_selectable() {
        let mut config = AppConfig {
            default_voice: "Cantonese Female (HiuGaai)".to_string(),
            ..AppConfig::default()
        };
        clamp_config(&mut config);
        assert_eq!(config.voices[0], "Cantonese Female (HiuGaai)");
    }

    #[test]
    fn button_gates_follow_busy_flags() {
        let mut app = test_app();
        assert!(app.play_enabled());
        assert!(app.process_enabled());
        assert!(!app.batch_enabled());

        app.processing = true;
        assert!(!app.play_enabled());
        assert!(!app.process_enabled());
        assert!(!app.ocr_enabled());
        app.processing = false;

        app.workspace.sentences = vec!["One.".into()];
        assert!(app.batch_enabled());
        app.batch_processing = true;
        assert!(!app.batch_enabled());
    }

    #[test]
    fn stop_and_pause_gates_follow_lifecycle() {
        let mut app = test_app();
        assert!(!app.pause_enabled());
        assert!(!app.stop_enabled());

        app.player.lifecycle = PlayerLifecycle::Playing;
        assert!(app.pause_enabled());
        assert!(app.stop_enabled());
        // playing without loop blocks a second play press
        assert!(!app.play_enabled());
        app.player.looping = true;
        assert!(app.play_enabled());
    }
}
