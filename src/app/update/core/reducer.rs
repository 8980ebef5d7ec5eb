use super::super::super::messages::Message;
use super::super::super::state::{App, Severity};
use super::super::Effect;
use crate::config::{
    MAX_LOOP_INTERVAL_MS, MAX_REPEAT_COUNT, MAX_SPEED_PERCENT, MIN_LOOP_INTERVAL_MS,
    MIN_REPEAT_COUNT, MIN_SPEED_PERCENT,
};
use tracing::info;

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::InputEdited(action) => self.workspace.input.perform(action),
            Message::VoiceSelected(voice) => self.handle_voice_selected(voice),
            Message::SpeedChanged(percent) => self.handle_speed_changed(percent),
            Message::ModeSelected(mode) => self.handle_mode_selected(mode),
            Message::RepeatDecrement => self.handle_repeat_adjust(-1),
            Message::RepeatIncrement => self.handle_repeat_adjust(1),
            Message::RepeatCountChanged(value) => self.handle_repeat_count_changed(value),
            Message::LoopIntervalChanged(value) => self.handle_loop_interval_changed(value),
            Message::ToggleLoop => self.handle_toggle_loop(),
            Message::Play => self.handle_play_pressed(&mut effects),
            Message::Pause => self.handle_pause(),
            Message::Stop => self.handle_stop(),
            Message::ProcessText => self.handle_process_text(&mut effects),
            Message::ClearText => self.handle_clear_text(),
            Message::SentenceClicked(idx) => self.handle_sentence_clicked(idx, &mut effects),
            Message::BatchGenerate => self.handle_batch_generate(&mut effects),
            Message::ImagePathChanged(path) => self.handle_image_path_changed(path),
            Message::LoadImage => self.handle_load_image(&mut effects),
            Message::RunOcr => self.handle_run_ocr(&mut effects),
            Message::TextSplit { text, result } => {
                self.handle_text_split(text, result, &mut effects)
            }
            Message::FullAudioReady { result } => {
                self.handle_full_audio_ready(result, &mut effects)
            }
            Message::SingleAudioReady {
                request_id,
                key,
                sentence_idx,
                result,
            } => self.handle_single_audio_ready(request_id, key, sentence_idx, result, &mut effects),
            Message::BatchFinished {
                generated,
                succeeded,
                total,
            } => self.handle_batch_finished(generated, succeeded, total),
            Message::AudioLoaded {
                request_id,
                url,
                result,
            } => self.handle_audio_loaded(request_id, url, result),
            Message::ImageLoaded { path, result } => self.handle_image_loaded(path, result),
            Message::OcrFinished { result } => self.handle_ocr_finished(result),
            Message::Tick(now) => self.handle_tick(now, &mut effects),
            Message::PollSystemSignals => {
                if crate::take_sigint_requested() {
                    effects.push(Effect::QuitSafely);
                }
            }
        }

        effects
    }

    fn handle_voice_selected(&mut self, voice: String) {
        self.voice = voice;
        info!(voice = %self.voice, "Voice changed");
        self.set_status(
            format!(
                "Voice changed to: {} (regenerate audio to apply)",
                self.voice
            ),
            Severity::Warning,
        );
    }

    fn handle_speed_changed(&mut self, percent: i32) {
        self.speed_percent = percent.clamp(MIN_SPEED_PERCENT, MAX_SPEED_PERCENT);
    }

    fn handle_repeat_adjust(&mut self, delta: i64) {
        let adjusted = i64::from(self.player.repeat_target) + delta;
        self.player.repeat_target = adjusted
            .clamp(i64::from(MIN_REPEAT_COUNT), i64::from(MAX_REPEAT_COUNT))
            as u32;
    }

    fn handle_repeat_count_changed(&mut self, value: String) {
        if let Ok(parsed) = value.trim().parse::<u32>() {
            self.player.repeat_target = parsed.clamp(MIN_REPEAT_COUNT, MAX_REPEAT_COUNT);
        }
    }

    fn handle_loop_interval_changed(&mut self, value: String) {
        if let Ok(parsed) = value.trim().parse::<u64>() {
            self.player.loop_interval_ms =
                parsed.clamp(MIN_LOOP_INTERVAL_MS, MAX_LOOP_INTERVAL_MS);
        }
    }
}
