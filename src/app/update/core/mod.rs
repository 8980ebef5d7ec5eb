mod reducer;
mod runtime;

use super::super::messages::Message;
use super::super::state::App;
use iced::time;
use iced::{Subscription, Task};
use std::time::Duration;

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> = vec![
            time::every(Duration::from_millis(500)).map(|_| Message::PollSystemSignals),
        ];

        if app.player.is_playing() || app.player.is_loading() || app.player.replay_pending() {
            subscriptions.push(time::every(Duration::from_millis(100)).map(Message::Tick));
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }
}
