use super::messages::Message;
use super::state::{App, PlayMode, Severity, SENTENCE_SCROLL_ID};
use crate::config::{MAX_SPEED_PERCENT, MIN_SPEED_PERCENT};
use iced::alignment::Vertical;
use iced::widget::{
    button, column, container, horizontal_space, image, pick_list, row, scrollable, slider, text,
    text_editor, text_input, Column,
};
use iced::{Color, Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let status_line = container(
            text(format!("Status: {}", self.status.message))
                .color(severity_color(self.status.severity)),
        )
        .padding(8)
        .width(Length::Fill);

        let voice_picker = pick_list(
            self.config.voices.clone(),
            Some(self.voice.clone()),
            Message::VoiceSelected,
        );

        let speed_control = column![
            text(format!("Speed: {}%", self.speed_percent)),
            slider(
                MIN_SPEED_PERCENT..=MAX_SPEED_PERCENT,
                self.speed_percent,
                Message::SpeedChanged,
            ),
        ]
        .spacing(4)
        .width(Length::FillPortion(1));

        let play_button = if self.play_enabled() {
            button("Play").on_press(Message::Play)
        } else {
            button("Play")
        };
        let pause_button = if self.pause_enabled() {
            button("Pause").on_press(Message::Pause)
        } else {
            button("Pause")
        };
        let stop_button = if self.stop_enabled() {
            button("Stop").on_press(Message::Stop)
        } else {
            button("Stop")
        };

        let single_mode_button = button("Single")
            .style(if self.player.mode == PlayMode::Single {
                button::primary
            } else {
                button::secondary
            })
            .on_press(Message::ModeSelected(PlayMode::Single));
        let full_mode_button = button("Full")
            .style(if self.player.mode == PlayMode::Full {
                button::primary
            } else {
                button::secondary
            })
            .on_press(Message::ModeSelected(PlayMode::Full));

        let repeat_value = self.player.repeat_target.to_string();
        let repeat_controls = row![
            text("Repeat:"),
            button("-").on_press(Message::RepeatDecrement),
            text_input("1", &repeat_value)
                .on_input(Message::RepeatCountChanged)
                .width(48.0),
            button("+").on_press(Message::RepeatIncrement),
        ]
        .spacing(4)
        .align_y(Vertical::Center);

        let loop_value = self.player.loop_interval_ms.to_string();
        let loop_controls = row![
            button(if self.player.looping {
                "Loop: On"
            } else {
                "Loop: Off"
            })
            .style(if self.player.looping {
                button::danger
            } else {
                button::secondary
            })
            .on_press(Message::ToggleLoop),
            text("Interval (ms):"),
            text_input("500", &loop_value)
                .on_input(Message::LoopIntervalChanged)
                .width(64.0),
        ]
        .spacing(4)
        .align_y(Vertical::Center);

        let playback_controls = row![
            voice_picker,
            speed_control,
            play_button,
            pause_button,
            stop_button,
            text("Mode:"),
            single_mode_button,
            full_mode_button,
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill);

        let repeat_row = row![repeat_controls, horizontal_space(), loop_controls]
            .spacing(10)
            .align_y(Vertical::Center)
            .width(Length::Fill);

        let editor = text_editor(&self.workspace.input)
            .placeholder("Paste or type the text to read aloud...")
            .on_action(Message::InputEdited)
            .height(140.0);

        let process_button = if self.process_enabled() {
            button("Process Text").on_press(Message::ProcessText)
        } else {
            button("Process Text")
        };
        let batch_button = if self.batch_enabled() {
            button("Pre-generate All").on_press(Message::BatchGenerate)
        } else {
            button("Pre-generate All")
        };
        let mut text_actions = row![
            process_button,
            button("Clear").on_press(Message::ClearText),
            batch_button,
        ]
        .spacing(10)
        .align_y(Vertical::Center);
        if let Some(selected) = &self.player.selected_text {
            text_actions = text_actions.push(text(format!("Selected: {selected}")));
        }

        let sentence_list: Element<'_, Message> = if self.workspace.sentences.is_empty() {
            text("Press \"Process Text\" to build the sentence list.").into()
        } else {
            let items = self
                .workspace
                .sentences
                .iter()
                .enumerate()
                .map(|(idx, sentence)| {
                    let selected = self.player.selected_idx == Some(idx);
                    button(
                        row![
                            text(format!("{}.", idx + 1)).width(36.0),
                            text(sentence.clone()),
                        ]
                        .spacing(8),
                    )
                    .style(if selected {
                        button::primary
                    } else {
                        button::text
                    })
                    .width(Length::Fill)
                    .on_press(Message::SentenceClicked(idx))
                    .into()
                })
                .collect::<Vec<Element<'_, Message>>>();

            scrollable(Column::with_children(items).spacing(2).width(Length::Fill))
                .id(SENTENCE_SCROLL_ID.clone())
                .height(Length::FillPortion(1))
                .into()
        };

        let load_image_button = if self.workspace.image_loading {
            button("Load Image")
        } else {
            button("Load Image").on_press(Message::LoadImage)
        };
        let ocr_button = if self.ocr_enabled() && self.workspace.image.is_some() {
            button("Run OCR").on_press(Message::RunOcr)
        } else {
            button("Run OCR")
        };
        let mut ocr_panel = column![
            row![
                text_input("path/to/image.png", &self.workspace.image_path_input)
                    .on_input(Message::ImagePathChanged)
                    .width(Length::FillPortion(1)),
                load_image_button,
                ocr_button,
            ]
            .spacing(10)
            .align_y(Vertical::Center),
        ]
        .spacing(8);
        if let Some(preview) = &self.workspace.image {
            ocr_panel = ocr_panel.push(
                image(image::Handle::from_bytes(preview.bytes.clone())).width(280.0),
            );
        }

        column![
            status_line,
            playback_controls,
            repeat_row,
            editor,
            text_actions,
            sentence_list,
            ocr_panel,
        ]
        .padding(16)
        .spacing(12)
        .into()
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::from_rgb(0.30, 0.69, 0.31),
        Severity::Error => Color::from_rgb(0.90, 0.22, 0.21),
        Severity::Warning => Color::from_rgb(0.96, 0.64, 0.0),
        Severity::Processing => Color::from_rgb(0.25, 0.56, 0.89),
    }
}
