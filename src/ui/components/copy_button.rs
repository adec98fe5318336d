// SPDX-License-Identifier: MPL-2.0
//! Copy-to-clipboard button.
//!
//! A press tries the primary clipboard backend, then the fallback. Whichever
//! succeeds, the button shows a "copied" label; when both fail it shows an
//! error label instead. Either way the label reverts after
//! [`COPY_FEEDBACK_MS`](crate::app::config::defaults::COPY_FEEDBACK_MS).
//! Failures stay inside the component: they are logged and never returned.

use crate::app::config::defaults::COPY_FEEDBACK_MS;
use crate::application::port::ClipboardWriter;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, Text};
use iced::{Color, Element};
use std::time::{Duration, Instant};

/// What the button currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feedback {
    #[default]
    Idle,
    Copied { since: Instant },
    Failed { since: Instant },
}

/// Backend that accepted the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    Primary,
    Fallback,
}

#[derive(Debug, Clone, Default)]
pub struct CopyButton {
    feedback: Feedback,
}

impl CopyButton {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Whether a transient label is showing and needs ticks.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.feedback != Feedback::Idle
    }

    /// Copies `text`, returning the backend that accepted it.
    pub fn copy(
        &mut self,
        text: &str,
        primary: &mut impl ClipboardWriter,
        fallback: &mut impl ClipboardWriter,
        now: Instant,
    ) -> Option<CopyPath> {
        let path = match primary.write_text(text) {
            Ok(()) => Some(CopyPath::Primary),
            Err(primary_error) => {
                log::debug!("primary clipboard failed: {primary_error}");
                match fallback.write_text(text) {
                    Ok(()) => Some(CopyPath::Fallback),
                    Err(fallback_error) => {
                        log::warn!("copy failed on both clipboards: {fallback_error}");
                        None
                    }
                }
            }
        };

        self.feedback = match path {
            Some(_) => Feedback::Copied { since: now },
            None => Feedback::Failed { since: now },
        };
        path
    }

    /// Reverts to the idle label once the feedback has been shown long
    /// enough. Returns `true` when the label changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let since = match self.feedback {
            Feedback::Idle => return false,
            Feedback::Copied { since } | Feedback::Failed { since } => since,
        };
        if now.saturating_duration_since(since) >= Duration::from_millis(COPY_FEEDBACK_MS) {
            self.feedback = Feedback::Idle;
            true
        } else {
            false
        }
    }

    /// i18n key of the current label.
    #[must_use]
    pub fn label_key(&self) -> &'static str {
        match self.feedback {
            Feedback::Idle => "copy-button",
            Feedback::Copied { .. } => "copy-button-copied",
            Feedback::Failed { .. } => "copy-button-error",
        }
    }

    fn feedback_color(&self) -> Option<Color> {
        match self.feedback {
            Feedback::Idle => None,
            Feedback::Copied { .. } => Some(palette::SUCCESS_500),
            Feedback::Failed { .. } => Some(palette::ERROR_500),
        }
    }

    pub fn view<'a, Message: Clone + 'a>(
        &self,
        i18n: &I18n,
        on_press: Message,
    ) -> Element<'a, Message> {
        button(Text::new(i18n.tr(self.label_key())).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::SM])
            .style(button_styles::copy(self.feedback_color()))
            .on_press(on_press)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};

    #[derive(Default)]
    struct Recorder {
        fail: bool,
        written: Vec<String>,
    }

    impl Recorder {
        fn failing() -> Self {
            Self {
                fail: true,
                written: Vec::new(),
            }
        }
    }

    impl ClipboardWriter for Recorder {
        fn write_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(Error::Clipboard("unavailable".into()));
            }
            self.written.push(text.to_owned());
            Ok(())
        }
    }

    #[test]
    fn primary_success_skips_fallback() {
        let mut button = CopyButton::new();
        let mut primary = Recorder::default();
        let mut fallback = Recorder::default();

        let path = button.copy("GE00TB0000000000000000", &mut primary, &mut fallback, Instant::now());

        assert_eq!(path, Some(CopyPath::Primary));
        assert_eq!(primary.written, vec!["GE00TB0000000000000000"]);
        assert!(fallback.written.is_empty());
        assert_eq!(button.label_key(), "copy-button-copied");
    }

    #[test]
    fn fallback_is_used_when_primary_fails() {
        let mut button = CopyButton::new();
        let mut primary = Recorder::failing();
        let mut fallback = Recorder::default();

        let path = button.copy("value", &mut primary, &mut fallback, Instant::now());

        assert_eq!(path, Some(CopyPath::Fallback));
        assert_eq!(fallback.written, vec!["value"]);
        assert!(matches!(button.feedback(), Feedback::Copied { .. }));
    }

    #[test]
    fn both_paths_failing_shows_error_then_reverts() {
        let mut button = CopyButton::new();
        let now = Instant::now();

        let path = button.copy(
            "value",
            &mut Recorder::failing(),
            &mut Recorder::failing(),
            now,
        );

        assert_eq!(path, None);
        assert_eq!(button.label_key(), "copy-button-error");
        assert!(!button.tick(now + Duration::from_millis(1999)));
        assert_eq!(button.label_key(), "copy-button-error");
        assert!(button.tick(now + Duration::from_millis(2000)));
        assert_eq!(button.feedback(), Feedback::Idle);
        assert_eq!(button.label_key(), "copy-button");
    }

    #[test]
    fn copied_label_reverts_after_feedback_window() {
        let mut button = CopyButton::new();
        let now = Instant::now();
        button.copy("v", &mut Recorder::default(), &mut Recorder::default(), now);

        assert!(button.is_active());
        button.tick(now + Duration::from_millis(COPY_FEEDBACK_MS));
        assert!(!button.is_active());
    }

    #[test]
    fn idle_tick_is_a_no_op() {
        let mut button = CopyButton::new();
        assert!(!button.tick(Instant::now()));
    }
}
