// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] borrowing the parts of the
//! application state it may touch, turns component events into state changes,
//! and returns the follow-up `Task`s (downloads, browser, clipboard).

use super::config::Config;
use super::{notifications, persistence, Message};
use crate::application::contact::{contact_link, ContactSettings};
use crate::application::query::Page;
use crate::domain::catalog::Catalog;
use crate::domain::viewer::{is_remote, Item, PageScroll, Presentation};
use crate::error::{CatalogError, Error, Result};
use crate::i18n::fluent::{I18n, DEFAULT_LOCALE};
use crate::infrastructure::{browser, photos, PhotoCache};
use crate::ui::gallery::{self, Event as GalleryEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::payment;
use crate::ui::viewer;
use iced::{keyboard, Size, Task};
use unic_langid::langid;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub config: &'a mut Config,
    pub catalog: &'a mut Catalog,
    pub catalog_loading: &'a mut bool,
    pub page: &'a mut Page,
    pub query: &'a mut String,
    pub gallery: &'a mut gallery::State,
    pub viewer: &'a mut viewer::State,
    pub payment: &'a mut payment::State,
    pub page_scroll: &'a mut PageScroll,
    pub notifications: &'a mut notifications::Manager,
    pub photos: &'a mut PhotoCache,
    pub http: Option<&'a reqwest::Client>,
    pub contact: &'a ContactSettings,
    pub presentation_fixed: &'a mut bool,
    pub mobile_breakpoint: f32,
    pub window_focused: bool,
}

impl UpdateContext<'_> {
    /// Starts downloads for the remote photos of the current page.
    fn prefetch_page(&mut self) -> Task<Message> {
        let urls = self
            .gallery
            .remote_photos(&*self.catalog, &*self.page, self.query.as_str());
        self.prefetch(&urls)
    }

    /// Starts downloads for the remote photos of the open viewer session.
    fn prefetch_session(&mut self) -> Task<Message> {
        let urls: Vec<String> = self
            .viewer
            .host()
            .session()
            .map(|session| {
                session
                    .photos()
                    .iter()
                    .filter(|photo| is_remote(photo))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        self.prefetch(&urls)
    }

    fn prefetch(&mut self, urls: &[String]) -> Task<Message> {
        let Some(client) = self.http else {
            return Task::none();
        };
        let missing = self.photos.request(urls);
        if missing.is_empty() {
            return Task::none();
        }
        log::debug!("downloading {} photo(s)", missing.len());
        Task::batch(missing.into_iter().map(|url| {
            let download = photos::download(client.clone(), url.clone());
            Task::perform(download, move |result| Message::PhotoDownloaded { url, result })
        }))
    }

    fn navigate(&mut self, page: Page) -> Task<Message> {
        log::debug!("navigating to {:?}", page);
        *self.page = page;
        self.prefetch_page()
    }

    fn open_artwork(&mut self, id: &str) -> Task<Message> {
        let Some(artwork) = self.catalog.artworks().iter().find(|artwork| artwork.id == id) else {
            log::debug!("open ignored: no artwork {id}");
            return Task::none();
        };
        let item = Item::from_artwork(artwork, &*self.catalog);
        self.viewer.open(
            item,
            self.page.depth(),
            self.page.directory(),
            self.page_scroll,
        );
        self.prefetch_session()
    }
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.query) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(page) => ctx.navigate(page),
        NavbarEvent::SearchChanged => ctx.prefetch_page(),
        NavbarEvent::ToggleLanguage => {
            toggle_language(ctx);
            Task::none()
        }
        NavbarEvent::OpenPayment => {
            ctx.payment.open(ctx.page_scroll);
            Task::none()
        }
    }
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match ctx.gallery.update(message) {
        GalleryEvent::None => ctx.prefetch_page(),
        GalleryEvent::OpenArtwork(id) => ctx.open_artwork(&id),
        GalleryEvent::Navigate(page) => ctx.navigate(page),
    }
}

pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: viewer::Message,
) -> Task<Message> {
    let (effect, task) = ctx.viewer.handle_message(message, ctx.page_scroll);
    let task = task.map(Message::Viewer);

    match effect {
        viewer::Effect::None => task,
        viewer::Effect::OpenContact(item) => {
            let link = contact_link(ctx.i18n, &item, ctx.contact);
            log::debug!("opening contact link for {:?}", item.title);
            Task::batch([
                task,
                Task::perform(browser::open(link), Message::BrowserOpened),
            ])
        }
    }
}

pub fn handle_payment_message(
    ctx: &mut UpdateContext<'_>,
    message: payment::Message,
) -> Task<Message> {
    let effect = ctx.payment.handle_message(
        message,
        &ctx.config.payment.fields,
        ctx.window_focused,
        ctx.page_scroll,
    );
    match effect {
        payment::Effect::None => Task::none(),
        payment::Effect::WriteClipboard(text) => iced::clipboard::write(text),
    }
}

pub fn handle_catalog_loaded(ctx: &mut UpdateContext<'_>, result: Result<Catalog>) -> Task<Message> {
    *ctx.catalog_loading = false;
    match result {
        Ok(catalog) => {
            log::debug!(
                "catalog loaded: {} artist(s), {} artwork(s)",
                catalog.artists().len(),
                catalog.artworks().len()
            );
            *ctx.catalog = catalog;
            ctx.notifications.clear_catalog_errors();
        }
        Err(err) => {
            log::warn!("catalog unavailable, continuing with an empty one: {}", err);
            ctx.notifications.push(catalog_error_notification(&err));
            *ctx.catalog = Catalog::empty();
        }
    }
    ctx.prefetch_page()
}

fn catalog_error_key(error: &Error) -> &'static str {
    match error {
        Error::Catalog(err) => err.i18n_key(),
        _ => "notification-catalog-network",
    }
}

/// Warning toast for a failed catalog fetch; HTTP failures carry the status.
fn catalog_error_notification(error: &Error) -> notifications::Notification {
    let notification = notifications::Notification::warning(catalog_error_key(error));
    match error {
        Error::Catalog(CatalogError::Status(status)) => {
            notification.with_arg("status", status.to_string())
        }
        _ => notification,
    }
}

/// Routes a key press nothing captured: the payment panel closes first,
/// then the viewer gets it.
pub fn handle_key(ctx: &mut UpdateContext<'_>, key: &keyboard::Key) -> Task<Message> {
    if ctx.payment.is_open() {
        if matches!(key, keyboard::Key::Named(keyboard::key::Named::Escape)) {
            ctx.payment.close(ctx.page_scroll);
        }
        return Task::none();
    }

    ctx.viewer
        .handle_key(key, ctx.page_scroll)
        .map_or_else(Task::none, |task| task.map(Message::Viewer))
}

/// Records the window size and, on the first report, settles the viewer
/// presentation from the window width.
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) {
    if !*ctx.presentation_fixed {
        let presentation = Presentation::for_width(size.width, ctx.mobile_breakpoint);
        ctx.viewer.set_presentation(presentation);
        *ctx.presentation_fixed = true;
    }
    ctx.viewer.set_window_size(size);
}

/// Switches between Georgian and English and remembers the choice.
fn toggle_language(ctx: &mut UpdateContext<'_>) {
    let locale = if ctx.i18n.is_georgian() {
        DEFAULT_LOCALE
    } else {
        langid!("ka")
    };
    ctx.i18n.set_locale(locale);
    ctx.notifications
        .push(notifications::Notification::info("notification-language-changed"));

    let selected = ctx.i18n.current_locale().to_string();
    ctx.config.general.language = Some(selected.clone());
    if let Err(err) = persistence::persist_language(&selected) {
        log::warn!("failed to remember language {}: {}", selected, err);
    }
}
