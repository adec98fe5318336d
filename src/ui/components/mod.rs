// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across screens.
//!
//! - [`copy_button`] - Copy-to-clipboard button with transient feedback

pub mod copy_button;

pub use copy_button::{CopyButton, CopyPath, Feedback};
