// SPDX-License-Identifier: MPL-2.0
//! Clipboard backends for the copy button.
//!
//! [`SystemClipboard`] writes through the platform clipboard directly.
//! [`DeferredClipboard`] only records the text; the app then issues an Iced
//! clipboard write task for it. Iced writes are tied to the window, so the
//! deferred backend refuses text while the window is unfocused.

use crate::application::port::ClipboardWriter;
use crate::error::{Error, Result};

/// The platform clipboard, opened per write.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_owned())?;
        Ok(())
    }
}

/// Clipboard write handed to the Iced runtime.
#[derive(Debug, Default, Clone)]
pub struct DeferredClipboard {
    window_focused: bool,
    pending: Option<String>,
}

impl DeferredClipboard {
    #[must_use]
    pub fn new(window_focused: bool) -> Self {
        Self {
            window_focused,
            pending: None,
        }
    }

    /// Text accepted by the last successful write, to pass to
    /// `iced::clipboard::write`.
    #[must_use]
    pub fn take_pending(&mut self) -> Option<String> {
        self.pending.take()
    }
}

impl ClipboardWriter for DeferredClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if !self.window_focused {
            return Err(Error::Clipboard("window is not focused".into()));
        }
        self.pending = Some(text.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deferred_write_keeps_text_for_the_runtime() {
        let mut clipboard = DeferredClipboard::new(true);
        clipboard.write_text("GE00TB0000000000000000").expect("focused write");
        assert_eq!(
            clipboard.take_pending().as_deref(),
            Some("GE00TB0000000000000000")
        );
        assert_eq!(clipboard.take_pending(), None);
    }

    #[test]
    fn deferred_write_fails_without_focus() {
        let mut clipboard = DeferredClipboard::new(false);
        assert!(matches!(clipboard.write_text("x"), Err(Error::Clipboard(_))));
        assert_eq!(clipboard.take_pending(), None);
    }
}
