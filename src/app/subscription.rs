// SPDX-License-Identifier: MPL-2.0
//! Subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Ticks every 100ms while toasts are on screen so they can expire.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
