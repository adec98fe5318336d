// SPDX-License-Identifier: MPL-2.0
//! Opens links in the system browser.

use crate::error::{Error, Result};

/// Opens `url` in a new browser tab or window.
///
/// The launch blocks until the browser process is spawned, so it runs on
/// the blocking pool.
///
/// # Errors
///
/// Returns [`Error::Browser`] if no browser could be launched.
pub async fn open(url: String) -> Result<()> {
    tokio::task::spawn_blocking(move || webbrowser::open(&url))
        .await
        .map_err(|err| Error::Browser(err.to_string()))?
        .map_err(|err| Error::Browser(err.to_string()))
}
