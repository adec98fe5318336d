// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for failures the user should know about: catalog
//! fallback, browser hand-off and configuration problems.
//!
//! - [`notification`] - `Notification` and its `Severity`
//! - [`manager`] - `Manager`, the visible/queued lifecycle
//! - [`toast`] - rendering of the toast column

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
