// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! The interface language is the only preference changed from inside the
//! app; everything else is edited in `settings.toml` directly.

use super::config;
use crate::error::Result;

/// Stores `language` in the config file, keeping every other setting as it
/// is on disk.
///
/// Guarded during tests to keep isolation: unit tests exercise the toggle
/// through `App::update` without writing to the user's config directory.
pub fn persist_language(language: &str) -> Result<()> {
    if cfg!(test) {
        return Ok(());
    }

    let (mut cfg, warning) = config::load();
    if warning.is_some() {
        log::debug!("rewriting unreadable config while saving the language");
    }
    cfg.general.language = Some(language.to_string());
    config::save(&cfg)
}
