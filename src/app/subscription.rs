// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window and keyboard events are turned into top-level messages
//! here; pointer input for the viewer comes from its own widgets.

use super::Message;
use crate::app::config::FEEDBACK_TICK_MS;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Routes window size and focus changes, plus key presses no widget captured
/// (the search box keeps its arrow keys).
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Opened { size, .. })
        | event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Window(window::Event::Focused) => Some(Message::WindowFocusChanged(true)),
        event::Event::Window(window::Event::Unfocused) => {
            Some(Message::WindowFocusChanged(false))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => Some(Message::KeyPressed(key)),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Creates a periodic tick subscription for copy feedback and notification
/// auto-dismiss.
pub fn create_tick_subscription(
    copy_feedback: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if copy_feedback || has_notifications {
        time::every(Duration::from_millis(FEEDBACK_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
