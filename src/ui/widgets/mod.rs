// SPDX-License-Identifier: MPL-2.0
//! Custom Iced widgets.

pub mod scroll_lock;

pub use scroll_lock::{scroll_lock, ScrollLock};
