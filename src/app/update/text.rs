use super::super::state::{App, PlayMode, Severity};
use super::Effect;
use crate::cache::AudioKey;
use crate::client::{FullAudio, SplitOutcome};
use tracing::{debug, info};

impl App {
    /// "Process Text": segmentation followed by full-text synthesis.
    pub(super) fn handle_process_text(&mut self, effects: &mut Vec<Effect>) {
        if self.processing {
            self.set_status(
                "Processing: Please wait for tasks to finish...",
                Severity::Processing,
            );
            return;
        }

        let text = self.workspace.input_text().trim().to_string();
        if text.is_empty() {
            self.set_status("Error: Input text is empty", Severity::Error);
            return;
        }

        self.processing = true;
        info!(chars = text.len(), voice = %self.voice, "Processing input text");
        self.set_status(
            "Processing: Splitting text into sentences...",
            Severity::Processing,
        );
        effects.push(Effect::SplitText { text });
    }

    pub(super) fn handle_text_split(
        &mut self,
        text: String,
        result: Result<SplitOutcome, String>,
        effects: &mut Vec<Effect>,
    ) {
        match result {
            Ok(split) => {
                info!(count = split.count, "Sentence list updated");
                self.workspace.sentences = split.sentences;
                self.set_status(
                    "Processing: Generating full text audio...",
                    Severity::Processing,
                );
                effects.push(Effect::GenerateFullAudio {
                    text,
                    voice: self.voice.clone(),
                    speed: self.speed_percent,
                });
            }
            Err(err) => {
                self.processing = false;
                self.set_status(format!("Error: {err}"), Severity::Error);
            }
        }
    }

    pub(super) fn handle_full_audio_ready(
        &mut self,
        result: Result<FullAudio, String>,
        effects: &mut Vec<Effect>,
    ) {
        self.processing = false;
        match result {
            Ok(full) => {
                self.player.full_audio = Some(full.audio_url);
                self.set_status(
                    format!(
                        "Ready | Generated {} sentences and full audio",
                        self.workspace.sentences.len()
                    ),
                    Severity::Success,
                );
                self.start_play(true, false, effects);
            }
            Err(err) => {
                self.set_status(format!("Error: {err}"), Severity::Error);
            }
        }
    }

    /// Sentence clicked: select it, switch to single mode, and play from the
    /// cache when possible.
    pub(super) fn handle_sentence_clicked(&mut self, idx: usize, effects: &mut Vec<Effect>) {
        if self.batch_processing || self.processing {
            self.set_status(
                "Processing: Please wait for tasks to finish...",
                Severity::Processing,
            );
            return;
        }

        let sentence = self
            .workspace
            .sentences
            .get(idx)
            .cloned()
            .unwrap_or_default();
        if sentence.trim().is_empty() {
            self.set_status("Error: Selected sentence is invalid", Severity::Error);
            return;
        }

        // A replay scheduled for the previous sentence must never fire over
        // the new one.
        self.handle_stop();

        self.player.selected_text = Some(sentence.clone());
        self.player.selected_idx = Some(idx);
        self.set_mode(PlayMode::Single);
        self.set_status(
            format!(
                "Processing: Generating audio for sentence {}... (Voice: {})",
                idx + 1,
                self.voice
            ),
            Severity::Processing,
        );

        let key = AudioKey::new(&self.voice, self.speed_percent, &sentence);
        if let Some(url) = self.audio_cache.get(&key) {
            debug!(sentence_idx = idx, "Cache hit for sentence audio");
            self.player.single_audio = Some(url.to_string());
            self.set_status(
                format!(
                    "Ready | Play Type: Single Sentence (Cached) (Voice: {})",
                    self.voice
                ),
                Severity::Success,
            );
            self.start_play(true, false, effects);
            return;
        }

        let request_id = self.player.next_request_id();
        effects.push(Effect::GenerateSingle {
            request_id,
            key,
            sentence_idx: idx,
        });
    }

    pub(super) fn handle_single_audio_ready(
        &mut self,
        request_id: u64,
        key: AudioKey,
        sentence_idx: usize,
        result: Result<String, String>,
        effects: &mut Vec<Effect>,
    ) {
        match result {
            Ok(url) => {
                // The cache keeps every successful synthesis, even one whose
                // request was superseded while in flight.
                self.audio_cache.insert_if_absent(key.clone(), url);
                if request_id != self.player.request_id {
                    debug!(
                        request_id,
                        current = self.player.request_id,
                        sentence_idx,
                        "Cached result of superseded synthesis request"
                    );
                    return;
                }
                if let Some(cached) = self.audio_cache.get(&key) {
                    self.player.single_audio = Some(cached.to_string());
                }
                self.set_status(
                    format!(
                        "Ready | Play Type: Single Sentence Audio Generated (Voice: {})",
                        self.voice
                    ),
                    Severity::Success,
                );
                self.start_play(true, false, effects);
            }
            Err(err) => {
                if request_id == self.player.request_id {
                    self.set_status(
                        format!(
                            "Error: Play Type: Single Sentence {} (Voice: {})",
                            err, self.voice
                        ),
                        Severity::Error,
                    );
                }
            }
        }
    }

    /// Pre-generate audio for every sentence that is not cached yet.
    pub(super) fn handle_batch_generate(&mut self, effects: &mut Vec<Effect>) {
        if self.processing || self.batch_processing || self.workspace.sentences.is_empty() {
            self.set_status(
                "Error: No sentences to process or already processing",
                Severity::Error,
            );
            return;
        }

        self.batch_processing = true;
        let total = self.workspace.sentences.len();
        self.set_status(
            format!("Processing: Pre-generating audio for {total} sentences..."),
            Severity::Processing,
        );

        let mut pending = Vec::new();
        let mut already_cached = 0;
        for sentence in &self.workspace.sentences {
            let key = AudioKey::new(&self.voice, self.speed_percent, sentence);
            if self.audio_cache.contains(&key) {
                already_cached += 1;
            } else {
                pending.push(key);
            }
        }
        info!(
            total,
            already_cached,
            pending = pending.len(),
            "Dispatching batch pre-generation"
        );
        effects.push(Effect::BatchGenerate {
            pending,
            already_cached,
            total,
        });
    }

    pub(super) fn handle_batch_finished(
        &mut self,
        generated: Vec<(AudioKey, String)>,
        succeeded: usize,
        total: usize,
    ) {
        for (key, url) in generated {
            self.audio_cache.insert_if_absent(key, url);
        }
        self.batch_processing = false;
        self.set_status(
            format!(
                "Ready | Batch generation completed: {succeeded}/{total} sentences successfully generated"
            ),
            Severity::Success,
        );
    }

    pub(super) fn handle_clear_text(&mut self) {
        self.workspace.set_input_text("");
        self.workspace.sentences.clear();
        self.player.full_audio = None;
        self.set_status("Ready | Text cleared", Severity::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::state::{test_app, PlayMode};
    use super::super::Effect;
    use crate::cache::AudioKey;
    use crate::client::SplitOutcome;
    use std::time::Instant;

    fn seeded_app() -> super::App {
        let mut app = test_app();
        app.workspace.sentences = vec![
            "First sentence.".to_string(),
            "Second sentence.".to_string(),
        ];
        app
    }

    #[test]
    fn cached_sentence_plays_without_a_synthesis_request() {
        let mut app = seeded_app();
        let key = AudioKey::new(&app.voice, app.speed_percent, "First sentence.");
        app.audio_cache
            .insert_if_absent(key, "http://localhost:5000/audio/a.wav".into());

        let mut effects = Vec::new();
        app.handle_sentence_clicked(0, &mut effects);

        assert!(
            !effects
                .iter()
                .any(|e| matches!(e, Effect::GenerateSingle { .. })),
            "cache hit must not trigger synthesis"
        );
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::LoadAudio { .. })));
        assert_eq!(app.player.mode, PlayMode::Single);
        assert_eq!(app.player.selected_idx, Some(0));
    }

    #[test]
    fn uncached_sentence_dispatches_one_synthesis_request() {
        let mut app = seeded_app();
        let mut effects = Vec::new();
        app.handle_sentence_clicked(1, &mut effects);
        assert!(matches!(
            effects.as_slice(),
            [Effect::GenerateSingle { key, sentence_idx: 1, .. }]
                if key.text == "Second sentence."
        ));
        assert!(app
            .status
            .message
            .starts_with("Processing: Generating audio for sentence 2"));
    }

    #[test]
    fn clicking_a_sentence_cancels_previous_replay_state() {
        let mut app = seeded_app();
        app.player.replay_due = Some(Instant::now());
        app.player.repeat_counter = 2;
        app.player.looping = true;

        app.handle_sentence_clicked(0, &mut Vec::new());
        assert!(app.player.replay_due.is_none());
        assert_eq!(app.player.repeat_counter, 0);
        assert!(!app.player.looping);
    }

    #[test]
    fn clicks_are_rejected_while_busy() {
        let mut app = seeded_app();
        app.batch_processing = true;
        let mut effects = Vec::new();
        app.handle_sentence_clicked(0, &mut effects);
        assert!(effects.is_empty());
        assert_eq!(
            app.status.message,
            "Processing: Please wait for tasks to finish..."
        );
    }

    #[test]
    fn superseded_synthesis_result_lands_in_cache_only() {
        let mut app = seeded_app();
        let key = AudioKey::new(&app.voice, app.speed_percent, "First sentence.");
        let stale_id = app.player.next_request_id();
        let _fresh_id = app.player.next_request_id();

        let mut effects = Vec::new();
        app.handle_single_audio_ready(
            stale_id,
            key.clone(),
            0,
            Ok("http://localhost:5000/audio/a.wav".into()),
            &mut effects,
        );
        assert!(effects.is_empty());
        assert!(app.player.single_audio.is_none());
        assert!(app.audio_cache.contains(&key));
    }

    #[test]
    fn fresh_synthesis_result_plays_and_caches() {
        let mut app = seeded_app();
        let key = AudioKey::new(&app.voice, app.speed_percent, "First sentence.");
        let request_id = app.player.next_request_id();

        let mut effects = Vec::new();
        app.handle_single_audio_ready(
            request_id,
            key.clone(),
            0,
            Ok("http://localhost:5000/audio/a.wav".into()),
            &mut effects,
        );
        assert!(app.audio_cache.contains(&key));
        assert_eq!(
            app.player.single_audio.as_deref(),
            Some("http://localhost:5000/audio/a.wav")
        );
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::LoadAudio { .. })));
    }

    #[test]
    fn synthesis_failure_surfaces_message_verbatim() {
        let mut app = seeded_app();
        let key = AudioKey::new(&app.voice, app.speed_percent, "First sentence.");
        let request_id = app.player.next_request_id();

        app.handle_single_audio_ready(
            request_id,
            key,
            0,
            Err("synthesis backend unavailable".into()),
            &mut Vec::new(),
        );
        assert!(app
            .status
            .message
            .contains("synthesis backend unavailable"));
    }

    #[test]
    fn process_rejects_empty_input() {
        let mut app = test_app();
        let mut effects = Vec::new();
        app.handle_process_text(&mut effects);
        assert!(effects.is_empty());
        assert_eq!(app.status.message, "Error: Input text is empty");
        assert!(!app.processing);
    }

    #[test]
    fn process_pipeline_clears_busy_flag_on_both_arms() {
        let mut app = test_app();
        app.workspace.set_input_text("Hello there. General text.");
        let mut effects = Vec::new();
        app.handle_process_text(&mut effects);
        assert!(app.processing);
        assert!(matches!(effects.as_slice(), [Effect::SplitText { .. }]));

        // failure arm
        app.handle_text_split(
            "Hello there. General text.".into(),
            Err("segmentation failed".into()),
            &mut Vec::new(),
        );
        assert!(!app.processing);
        assert_eq!(app.status.message, "Error: segmentation failed");

        // success arm runs through full-audio generation
        app.processing = true;
        let mut effects = Vec::new();
        app.handle_text_split(
            "Hello there. General text.".into(),
            Ok(SplitOutcome {
                sentences: vec!["Hello there.".into(), "General text.".into()],
                count: 2,
            }),
            &mut effects,
        );
        assert!(app.processing);
        assert!(matches!(
            effects.as_slice(),
            [Effect::GenerateFullAudio { .. }]
        ));

        app.handle_full_audio_ready(Err("synthesis failed".into()), &mut Vec::new());
        assert!(!app.processing);
    }

    #[test]
    fn finished_processing_autoplays_full_audio() {
        let mut app = test_app();
        app.processing = true;
        app.workspace.sentences = vec!["One.".into(), "Two.".into()];
        let mut effects = Vec::new();
        app.handle_full_audio_ready(
            Ok(crate::client::FullAudio {
                audio_url: "http://localhost:5000/audio/full.wav".into(),
                sentences: vec!["One.".into(), "Two.".into()],
            }),
            &mut effects,
        );
        assert!(!app.processing);
        assert_eq!(app.player.mode, PlayMode::Full);
        assert!(app.player.is_loading());
        assert!(matches!(effects.as_slice(), [Effect::LoadAudio { .. }]));
    }

    #[test]
    fn batch_skips_cached_sentences_and_counts_them_as_successes() {
        let mut app = seeded_app();
        let key = AudioKey::new(&app.voice, app.speed_percent, "First sentence.");
        app.audio_cache.insert_if_absent(key, "a.wav".into());

        let mut effects = Vec::new();
        app.handle_batch_generate(&mut effects);
        assert!(app.batch_processing);
        assert!(matches!(
            effects.as_slice(),
            [Effect::BatchGenerate { pending, already_cached: 1, total: 2 }]
                if pending.len() == 1 && pending[0].text == "Second sentence."
        ));
    }

    #[test]
    fn batch_completion_reports_partial_success_and_clears_flag() {
        let mut app = seeded_app();
        app.batch_processing = true;
        let key = AudioKey::new(&app.voice, app.speed_percent, "Second sentence.");
        app.handle_batch_finished(vec![(key.clone(), "b.wav".into())], 4, 5);
        assert!(!app.batch_processing);
        assert!(app.audio_cache.contains(&key));
        assert_eq!(
            app.status.message,
            "Ready | Batch generation completed: 4/5 sentences successfully generated"
        );
    }

    #[test]
    fn batch_without_sentences_is_an_error() {
        let mut app = test_app();
        let mut effects = Vec::new();
        app.handle_batch_generate(&mut effects);
        assert!(effects.is_empty());
        assert!(!app.batch_processing);
        assert_eq!(
            app.status.message,
            "Error: No sentences to process or already processing"
        );
    }

    #[test]
    fn clear_drops_sentences_and_full_audio_but_keeps_cache() {
        let mut app = seeded_app();
        app.player.full_audio = Some("full.wav".into());
        let key = AudioKey::new(&app.voice, app.speed_percent, "First sentence.");
        app.audio_cache.insert_if_absent(key.clone(), "a.wav".into());

        app.handle_clear_text();
        assert!(app.workspace.sentences.is_empty());
        assert!(app.player.full_audio.is_none());
        assert!(app.audio_cache.contains(&key));
        assert_eq!(app.status.message, "Ready | Text cleared");
    }
}
