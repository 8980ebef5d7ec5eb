mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::client::SpeechClient;
use crate::config::{AppConfig, ThemeMode};
use iced::{window, Size, Theme};

/// Helper to launch the app against an already-constructed service client.
pub fn run_app(
    config: AppConfig,
    client: SpeechClient,
    initial_text: Option<String>,
) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application("Speakdeck", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| {
            if matches!(app.config.theme, ThemeMode::Night) {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
        .run_with(move || App::bootstrap(config, client, initial_text))
}
