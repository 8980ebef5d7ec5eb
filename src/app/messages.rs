use super::state::{LoadedImage, PlayMode};
use crate::cache::AudioKey;
use crate::client::{FullAudio, SplitOutcome};
use iced::widget::text_editor;
use std::time::Instant;

/// Messages emitted by the UI and by background tasks.
#[derive(Debug, Clone)]
pub enum Message {
    InputEdited(text_editor::Action),
    VoiceSelected(String),
    SpeedChanged(i32),
    ModeSelected(PlayMode),
    RepeatDecrement,
    RepeatIncrement,
    RepeatCountChanged(String),
    LoopIntervalChanged(String),
    ToggleLoop,
    Play,
    Pause,
    Stop,
    ProcessText,
    ClearText,
    SentenceClicked(usize),
    BatchGenerate,
    ImagePathChanged(String),
    LoadImage,
    RunOcr,
    TextSplit {
        text: String,
        result: Result<SplitOutcome, String>,
    },
    FullAudioReady {
        result: Result<FullAudio, String>,
    },
    SingleAudioReady {
        request_id: u64,
        key: AudioKey,
        sentence_idx: usize,
        result: Result<String, String>,
    },
    BatchFinished {
        generated: Vec<(AudioKey, String)>,
        succeeded: usize,
        total: usize,
    },
    AudioLoaded {
        request_id: u64,
        url: String,
        result: Result<Vec<u8>, String>,
    },
    ImageLoaded {
        path: String,
        result: Result<LoadedImage, String>,
    },
    OcrFinished {
        result: Result<String, String>,
    },
    Tick(Instant),
    PollSystemSignals,
}
