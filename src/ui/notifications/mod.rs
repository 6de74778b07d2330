// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for export and storage feedback.
//!
//! - [`notification`] - `Notification` and `Severity`
//! - [`manager`] - queue and auto-dismiss timers
//! - [`toast`] - the rendered cards
//!
//! Success and info toasts last 3s, warnings 5s, errors until dismissed.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
