use super::super::state::{App, PlayMode, PlayerLifecycle, Severity};
use super::Effect;
use crate::playback::Playback;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_play_pressed(&mut self, effects: &mut Vec<Effect>) {
        self.start_play(false, false, effects);
    }

    /// Begin playback of whatever audio the current mode resolves to.
    ///
    /// `is_replay` marks automatic re-invocations scheduled by the loop or
    /// repeat mechanism; only a user-initiated play resets the repeat counter
    /// and cancels a still-pending replay.
    pub(super) fn start_play(
        &mut self,
        skip_missing_check: bool,
        is_replay: bool,
        effects: &mut Vec<Effect>,
    ) {
        if !skip_missing_check && !self.player.has_any_audio() {
            self.set_status("Error: No audio generated yet", Severity::Error);
            return;
        }

        if !is_replay {
            self.player.repeat_counter = 0;
            self.player.cancel_replay();
        }

        let Some((mode, url)) = self.player.resolve_audio() else {
            self.set_status("Error: No audio available", Severity::Error);
            return;
        };
        let url = url.to_string();
        if mode != self.player.mode {
            info!(mode = mode.name(), "Falling back to full-text audio");
            self.player.mode = mode;
        }

        let request_id = self.player.next_request_id();
        self.player.lifecycle = PlayerLifecycle::Loading { request_id };

        match self.player.loaded.clone() {
            Some((loaded_url, bytes)) if loaded_url == url => {
                debug!(url = %url, "Reusing loaded audio data");
                self.begin_playback(url, bytes);
            }
            _ => {
                debug!(url = %url, request_id, "Scheduling audio fetch");
                effects.push(Effect::LoadAudio { request_id, url });
            }
        }
    }

    pub(super) fn handle_audio_loaded(
        &mut self,
        request_id: u64,
        url: String,
        result: Result<Vec<u8>, String>,
    ) {
        match self.player.lifecycle {
            PlayerLifecycle::Loading { request_id: current } if current == request_id => {}
            _ => {
                debug!(request_id, "Ignoring stale audio load");
                return;
            }
        }

        match result {
            Ok(bytes) => self.begin_playback(url, Arc::new(bytes)),
            Err(err) => {
                self.player.lifecycle = PlayerLifecycle::Idle;
                self.set_status(
                    format!("Error: Failed to play audio - {err}"),
                    Severity::Error,
                );
            }
        }
    }

    fn begin_playback(&mut self, url: String, bytes: Arc<Vec<u8>>) {
        if let Some(old) = self.player.playback.take() {
            old.stop();
        }
        match Playback::start(bytes.to_vec()) {
            Ok(playback) => {
                self.player.playback = Some(playback);
                self.player.loaded = Some((url, bytes));
                self.player.lifecycle = PlayerLifecycle::Playing;
                self.set_status(
                    format!(
                        "Playing: {} (Voice: {})",
                        self.player.mode.label(),
                        self.voice
                    ),
                    Severity::Processing,
                );
            }
            Err(err) => {
                warn!("Failed to start playback: {err:#}");
                self.player.lifecycle = PlayerLifecycle::Idle;
                self.set_status(
                    format!("Error: Failed to play audio - {err:#}"),
                    Severity::Error,
                );
            }
        }
    }

    pub(super) fn handle_pause(&mut self) {
        if self.player.lifecycle != PlayerLifecycle::Playing {
            return;
        }
        if let Some(playback) = &self.player.playback {
            playback.pause();
        }
        self.player.lifecycle = PlayerLifecycle::Paused;
        self.set_status(
            format!("Paused: {}", self.player.mode.label()),
            Severity::Warning,
        );
    }

    pub(super) fn handle_stop(&mut self) {
        info!("Stopping playback");
        self.stop_playback();
        self.player.cancel_replay();
        self.player.repeat_counter = 0;
        self.player.looping = false;
        self.set_status(
            format!("Stopped | Ready (Voice: {})", self.voice),
            Severity::Success,
        );
    }

    pub(super) fn handle_toggle_loop(&mut self) {
        self.player.looping = !self.player.looping;
        if self.player.looping {
            self.set_status(
                format!("Loop enabled | Interval: {}ms", self.player.loop_interval_ms),
                Severity::Warning,
            );
        } else {
            self.player.cancel_replay();
            self.player.repeat_counter = 0;
            self.set_status("Loop disabled", Severity::Success);
        }
    }

    pub(super) fn handle_mode_selected(&mut self, mode: PlayMode) {
        // A replay scheduled for the previous mode must not fire over the new
        // one.
        if self.player.replay_pending() {
            self.player.cancel_replay();
            self.player.repeat_counter = 0;
        }
        self.set_mode(mode);
    }

    pub(super) fn set_mode(&mut self, mode: PlayMode) {
        self.player.mode = mode;
        self.set_status(format!("Ready | Mode: {}", mode.name()), Severity::Success);
    }

    /// Loop takes precedence unconditionally; bounded repeat only runs while
    /// loop is off.
    pub(super) fn on_playback_ended(&mut self, now: Instant) {
        self.player.lifecycle = PlayerLifecycle::Idle;
        let interval = Duration::from_millis(self.player.loop_interval_ms);

        if self.player.looping {
            self.player.replay_due = Some(now + interval);
            self.set_status(
                format!(
                    "Loop: Playing again in {}ms",
                    self.player.loop_interval_ms
                ),
                Severity::Processing,
            );
        } else {
            self.player.repeat_counter += 1;
            if self.player.repeat_counter < self.player.repeat_target {
                self.player.replay_due = Some(now + interval);
                self.set_status(
                    format!(
                        "Repeat: {}/{} completed",
                        self.player.repeat_counter, self.player.repeat_target
                    ),
                    Severity::Processing,
                );
            } else {
                self.player.repeat_counter = 0;
                self.player.cancel_replay();
                self.set_status(
                    format!("Completed | Ready (Voice: {})", self.voice),
                    Severity::Success,
                );
            }
        }
    }

    pub(super) fn handle_tick(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        if self.player.lifecycle == PlayerLifecycle::Playing
            && self
                .player
                .playback
                .as_ref()
                .map(Playback::is_finished)
                .unwrap_or(true)
        {
            self.on_playback_ended(now);
        }

        if let Some(due) = self.player.replay_due {
            if now >= due {
                self.player.replay_due = None;
                debug!("Replay timer fired");
                self.start_play(true, true, effects);
            }
        }
    }
}
