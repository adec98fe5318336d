// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::catalog::Catalog;
use crate::domain::viewer::Presentation;
use crate::error::Error;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::payment;
use crate::ui::viewer;
use iced::{keyboard, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Gallery(gallery::Message),
    Viewer(viewer::Message),
    Payment(payment::Message),
    Notification(notifications::NotificationMessage),
    /// The catalog provider answered.
    CatalogLoaded(Result<Catalog, Error>),
    /// A remote photo finished downloading.
    PhotoDownloaded {
        url: String,
        result: Result<Vec<u8>, Error>,
    },
    /// The contact link was handed to the browser.
    BrowserOpened(Result<(), Error>),
    /// A key press nothing else captured.
    KeyPressed(keyboard::Key),
    WindowResized(Size),
    WindowFocusChanged(bool),
    Tick(Instant), // Periodic tick for copy feedback and toasts
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ka`, `en-US`).
    pub lang: Option<String>,
    /// Optional TOML catalog table used instead of the configured one.
    pub catalog: Option<PathBuf>,
    /// Query the remote content API whatever the configuration says.
    pub remote: bool,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `NINART_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Directory that relative photo references are resolved against.
    pub assets: Option<PathBuf>,
    /// Forces a viewer presentation instead of picking it from the window width.
    pub presentation: Option<Presentation>,
}
