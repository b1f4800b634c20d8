// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval of the housekeeping tick.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes the Escape key to dialog dismissal.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss and
/// the copy confirmation, only while one of them is live.
pub fn create_tick_subscription(
    has_notifications: bool,
    copy_feedback_pending: bool,
) -> Subscription<Message> {
    if has_notifications || copy_feedback_pending {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
