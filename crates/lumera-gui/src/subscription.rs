//! App-level event subscriptions.

use iced::{window, Subscription};

use crate::app::Message;

/// Window move/resize events, used to persist geometry across sessions.
pub fn window_events() -> Subscription<Message> {
    iced::event::listen_with(|event, _status, _id| match event {
        iced::Event::Window(e @ (window::Event::Resized(_) | window::Event::Moved(_))) => {
            Some(Message::WindowEvent(e))
        }
        _ => None,
    })
}
