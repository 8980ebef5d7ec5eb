use crate::playback::Playback;
use std::sync::Arc;
use std::time::Instant;

/// Playback target: the selected single sentence or the full processed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    Single,
    Full,
}

impl PlayMode {
    pub fn name(self) -> &'static str {
        match self {
            PlayMode::Single => "Single",
            PlayMode::Full => "Full",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayMode::Single => "Single Sentence",
            PlayMode::Full => "Full Text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerLifecycle {
    Idle,
    Loading { request_id: u64 },
    Playing,
    Paused,
}

pub struct PlayerState {
    pub(in crate::app) playback: Option<Playback>,
    pub(in crate::app) lifecycle: PlayerLifecycle,
    pub(in crate::app) mode: PlayMode,
    pub(in crate::app) repeat_target: u32,
    pub(in crate::app) repeat_counter: u32,
    pub(in crate::app) looping: bool,
    pub(in crate::app) loop_interval_ms: u64,
    /// Deadline of the pending automatic replay, if one is scheduled.
    pub(in crate::app) replay_due: Option<Instant>,
    pub(in crate::app) selected_text: Option<String>,
    pub(in crate::app) selected_idx: Option<usize>,
    pub(in crate::app) single_audio: Option<String>,
    pub(in crate::app) full_audio: Option<String>,
    /// Bytes of the most recently fetched audio reference, kept so replays of
    /// the same clip skip the download.
    pub(in crate::app) loaded: Option<(String, Arc<Vec<u8>>)>,
    pub(in crate::app) request_id: u64,
}

impl PlayerState {
    pub(in crate::app) fn new(repeat_target: u32, loop_interval_ms: u64) -> Self {
        Self {
            playback: None,
            lifecycle: PlayerLifecycle::Idle,
            mode: PlayMode::Single,
            repeat_target,
            repeat_counter: 0,
            looping: false,
            loop_interval_ms,
            replay_due: None,
            selected_text: None,
            selected_idx: None,
            single_audio: None,
            full_audio: None,
            loaded: None,
            request_id: 0,
        }
    }

    pub(in crate::app) fn is_playing(&self) -> bool {
        matches!(self.lifecycle, PlayerLifecycle::Playing)
    }

    pub(in crate::app) fn is_loading(&self) -> bool {
        matches!(self.lifecycle, PlayerLifecycle::Loading { .. })
    }

    pub(in crate::app) fn replay_pending(&self) -> bool {
        self.replay_due.is_some()
    }

    pub(in crate::app) fn next_request_id(&mut self) -> u64 {
        self.request_id = self.request_id.wrapping_add(1);
        self.request_id
    }

    pub(in crate::app) fn cancel_replay(&mut self) {
        self.replay_due = None;
    }

    pub(in crate::app) fn has_any_audio(&self) -> bool {
        self.single_audio.is_some() || self.full_audio.is_some()
    }

    /// Pick the audio reference for the current mode, falling back to the
    /// full-text reference when the mode-specific one is absent. The returned
    /// mode tells the caller whether the fallback switched modes.
    pub(in crate::app) fn resolve_audio(&self) -> Option<(PlayMode, &str)> {
        let mode_audio = match self.mode {
            PlayMode::Single => self.single_audio.as_deref(),
            PlayMode::Full => self.full_audio.as_deref(),
        };
        match mode_audio {
            Some(url) => Some((self.mode, url)),
            None => self
                .full_audio
                .as_deref()
                .map(|url| (PlayMode::Full, url)),
        }
    }
}
