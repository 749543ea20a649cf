// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::browser;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Event, Subscription};
use std::time::Duration;

/// Routes Escape to the detail panel while one is open.
pub fn create_event_subscription(detail_open: bool) -> Subscription<Message> {
    if !detail_open {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window| match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::Browser(browser::Message::DismissDetail)),
        _ => None,
    })
}

/// Ticks only while toasts need their timers checked.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
