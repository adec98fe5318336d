// SPDX-License-Identifier: MPL-2.0
//! Clipboard port definition.
//!
//! The copy button tries a primary backend first and a fallback second.
//! Both implement [`ClipboardWriter`].

use crate::error::Result;

/// Something that can put text on the clipboard.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<()>;
}
