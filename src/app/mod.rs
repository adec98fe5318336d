// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the catalog pages, the
//! product viewer and the payment panel.
//!
//! The `App` struct wires together the catalog snapshot, localization and
//! the overlays, and translates component events into side effects such as
//! photo downloads, browser hand-offs or config persistence.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::contact::ContactSettings;
use crate::application::port::CatalogProvider;
use crate::application::query::Page;
use crate::domain::catalog::Catalog;
use crate::domain::viewer::{PageScroll, Presentation};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{CatalogSource, PhotoCache};
use crate::ui::gallery;
use crate::ui::notifications;
use crate::ui::payment;
use crate::ui::viewer;
use config::{Config, ContactConfig, PresentationOverride};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: Config,
    catalog: Catalog,
    /// The first catalog fetch has not answered yet.
    catalog_loading: bool,
    page: Page,
    query: String,
    gallery: gallery::State,
    viewer: viewer::State,
    payment: payment::State,
    /// Whether the page under the overlays may scroll.
    page_scroll: PageScroll,
    notifications: notifications::Manager,
    photos: PhotoCache,
    /// Client for photo downloads; `None` when it could not be built.
    http: Option<reqwest::Client>,
    theme: Theme,
    asset_root: PathBuf,
    contact: ContactSettings,
    /// Set once the viewer presentation is settled for this run.
    presentation_fixed: bool,
    mobile_breakpoint: f32,
    window_focused: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("page", &self.page)
            .field("artworks", &self.catalog.artworks().len())
            .field("viewer_open", &self.viewer.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 boots through an `Fn`; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_else(|| {
            log::debug!("application booted again; using default flags");
            Flags::default()
        });
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn contact_settings(config: &ContactConfig) -> ContactSettings {
    ContactSettings {
        default_number: config
            .default_number
            .clone()
            .unwrap_or_else(|| config::DEFAULT_CONTACT_NUMBER.to_string()),
        currency: config
            .currency
            .clone()
            .unwrap_or_else(|| config::DEFAULT_CURRENCY.to_string()),
    }
}

fn http_client() -> Option<reqwest::Client> {
    match reqwest::Client::builder()
        .user_agent(concat!("ninart/", env!("CARGO_PKG_VERSION")))
        .build()
    {
        Ok(client) => Some(client),
        Err(err) => {
            log::warn!("remote photos disabled: {}", err);
            None
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::from_config(Config::default(), I18n::default())
    }
}

impl App {
    /// Builds the state described by `config`, without touching the disk or
    /// the network.
    fn from_config(config: Config, i18n: I18n) -> Self {
        let presentation = match config.viewer.presentation {
            PresentationOverride::Auto | PresentationOverride::Desktop => Presentation::Desktop,
            PresentationOverride::Mobile => Presentation::Mobile,
        };
        let cache_entries = config
            .viewer
            .photo_cache_entries
            .unwrap_or(config::DEFAULT_PHOTO_CACHE_ENTRIES);

        Self {
            i18n,
            catalog: Catalog::empty(),
            catalog_loading: false,
            page: Page::Home,
            query: String::new(),
            gallery: gallery::State::default(),
            viewer: viewer::State::new(presentation),
            payment: payment::State::new(config.payment.fields.len()),
            page_scroll: PageScroll::Enabled,
            notifications: notifications::Manager::new(),
            photos: PhotoCache::new(cache_entries),
            http: None,
            theme: config.general.theme_mode.iced_theme(),
            asset_root: config
                .viewer
                .asset_root
                .clone()
                .unwrap_or_else(|| PathBuf::from(".")),
            contact: contact_settings(&config.contact),
            presentation_fixed: config.viewer.presentation != PresentationOverride::Auto,
            mobile_breakpoint: config
                .viewer
                .mobile_breakpoint
                .unwrap_or(config::MOBILE_BREAKPOINT_PX),
            window_focused: true,
            config,
        }
    }

    /// Initializes application state and kicks off the catalog fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let mut app = Self::from_config(config, i18n);

        app.http = http_client();
        if let Some(assets) = flags.assets {
            app.asset_root = assets;
        }
        if let Some(presentation) = flags.presentation {
            app.viewer.set_presentation(presentation);
            app.presentation_fixed = true;
        }

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        let task = match CatalogSource::from_config(&app.config.catalog, flags.catalog, flags.remote)
        {
            Ok(source) => {
                log::debug!("loading catalog from the {} source", source.name());
                app.catalog_loading = true;
                Task::perform(async move { source.fetch().await }, Message::CatalogLoaded)
            }
            Err(err) => {
                log::warn!("catalog source unavailable: {}", err);
                app.notifications
                    .push(notifications::Notification::warning(
                        "notification-catalog-network",
                    ));
                Task::none()
            }
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.viewer.host().session() {
            Some(session) if !session.item().title.is_empty() => {
                format!("{} - {app_name}", session.item().title)
            }
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.payment.is_animating(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            config: &mut self.config,
            catalog: &mut self.catalog,
            catalog_loading: &mut self.catalog_loading,
            page: &mut self.page,
            query: &mut self.query,
            gallery: &mut self.gallery,
            viewer: &mut self.viewer,
            payment: &mut self.payment,
            page_scroll: &mut self.page_scroll,
            notifications: &mut self.notifications,
            photos: &mut self.photos,
            http: self.http.as_ref(),
            contact: &self.contact,
            presentation_fixed: &mut self.presentation_fixed,
            mobile_breakpoint: self.mobile_breakpoint,
            window_focused: self.window_focused,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut ctx, viewer_message)
            }
            Message::Payment(payment_message) => {
                update::handle_payment_message(&mut ctx, payment_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::CatalogLoaded(result) => update::handle_catalog_loaded(&mut ctx, result),
            Message::PhotoDownloaded { url, result } => {
                self.photos.complete(&url, result);
                Task::none()
            }
            Message::BrowserOpened(result) => {
                if let Err(err) = result {
                    log::warn!("contact link not opened: {}", err);
                    self.notifications
                        .push(notifications::Notification::warning(
                            "notification-browser-error",
                        ));
                }
                Task::none()
            }
            Message::KeyPressed(key) => update::handle_key(&mut ctx, &key),
            Message::WindowResized(size) => {
                update::handle_window_resized(&mut ctx, size);
                Task::none()
            }
            Message::WindowFocusChanged(focused) => {
                self.window_focused = focused;
                Task::none()
            }
            Message::Tick(now) => {
                self.payment.tick(now);
                self.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            config: &self.config,
            catalog: &self.catalog,
            catalog_loading: self.catalog_loading,
            page: &self.page,
            query: &self.query,
            gallery: &self.gallery,
            viewer: &self.viewer,
            payment: &self.payment,
            page_scroll: self.page_scroll,
            notifications: &self.notifications,
            photos: &self.photos,
            asset_root: &self.asset_root,
            currency: &self.contact.currency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Artist, Artwork, ArtworkStatus};
    use crate::ui::navbar;
    use iced::keyboard::{self, key::Named};
    use std::time::{Duration, Instant};

    fn artist() -> Artist {
        Artist {
            id: "nini".into(),
            slug: "nini".into(),
            name: "Nini".into(),
            contact_number: Some("+995 555 12 34 56".into()),
            ..Artist::default()
        }
    }

    fn artwork(id: &str, photos: &[&str]) -> Artwork {
        Artwork {
            id: id.into(),
            title: format!("Artwork {id}"),
            price: Some(1200.0),
            status: ArtworkStatus::ForSale,
            image: "images/primary.jpg".into(),
            photos: photos.iter().map(|p| (*p).to_string()).collect(),
            artist: "nini".into(),
            show_in_shop: true,
            ..Artwork::default()
        }
    }

    fn loaded_app() -> App {
        let mut app = App::default();
        let catalog = Catalog::new(
            vec![artist()],
            vec![artwork("a1", &["images/a.jpg", "images/b.jpg", "images/c.jpg"])],
        );
        let _ = app.update(Message::CatalogLoaded(Ok(catalog)));
        app
    }

    #[test]
    fn default_app_starts_on_home_with_viewer_closed() {
        let app = App::default();
        assert_eq!(app.page, Page::Home);
        assert!(!app.viewer.is_open());
        assert_eq!(app.page_scroll, PageScroll::Enabled);
    }

    #[test]
    fn title_follows_open_artwork() {
        let mut app = loaded_app();
        let app_name = app.i18n.tr("window-title");
        assert_eq!(app.title(), app_name);

        let _ = app.update(Message::Gallery(gallery::Message::OpenArtwork("a1".into())));
        assert_eq!(app.title(), format!("Artwork a1 - {app_name}"));
    }

    #[test]
    fn opening_an_artwork_locks_the_page_and_escape_unlocks_it() {
        let mut app = loaded_app();
        let _ = app.update(Message::Gallery(gallery::Message::OpenArtwork("a1".into())));
        assert!(app.viewer.is_open());
        assert_eq!(app.page_scroll, PageScroll::Locked);

        let _ = app.update(Message::KeyPressed(keyboard::Key::Named(Named::Escape)));
        assert!(!app.viewer.is_open());
        assert_eq!(app.page_scroll, PageScroll::Enabled);
    }

    #[test]
    fn arrow_keys_cycle_photos() {
        let mut app = loaded_app();
        let _ = app.update(Message::Gallery(gallery::Message::OpenArtwork("a1".into())));

        let _ = app.update(Message::KeyPressed(keyboard::Key::Named(Named::ArrowLeft)));
        let session = app.viewer.host().session().expect("open session");
        assert_eq!(session.current_index(), 2);
    }

    #[test]
    fn unknown_artwork_keeps_viewer_closed() {
        let mut app = loaded_app();
        let _ = app.update(Message::Gallery(gallery::Message::OpenArtwork("missing".into())));
        assert!(!app.viewer.is_open());
        assert_eq!(app.page_scroll, PageScroll::Enabled);
    }

    #[test]
    fn catalog_failure_falls_back_to_empty_catalog_with_warning() {
        let mut app = loaded_app();
        let _ = app.update(Message::CatalogLoaded(Err(
            crate::error::CatalogError::Network("offline".into()).into()
        )));
        assert!(app.catalog.is_empty());
        assert!(!app.catalog_loading);
        assert_eq!(app.notifications.visible().count(), 1);
    }

    #[test]
    fn successful_reload_clears_catalog_warnings() {
        let mut app = App::default();
        let _ = app.update(Message::CatalogLoaded(Err(
            crate::error::CatalogError::Network("offline".into()).into()
        )));
        assert!(app.notifications.has_notifications());

        let _ = app.update(Message::CatalogLoaded(Ok(Catalog::new(vec![artist()], vec![]))));
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn escape_closes_payment_before_viewer() {
        let mut app = loaded_app();
        let _ = app.update(Message::Navbar(navbar::Message::OpenPayment));
        assert!(app.payment.is_open());
        assert_eq!(app.page_scroll, PageScroll::Locked);

        let _ = app.update(Message::KeyPressed(keyboard::Key::Named(Named::Escape)));
        assert!(!app.payment.is_open());
        assert_eq!(app.page_scroll, PageScroll::Enabled);
    }

    #[test]
    fn first_resize_picks_presentation_once() {
        let mut app = App::default();
        let _ = app.update(Message::WindowResized(iced::Size::new(400.0, 800.0)));
        assert_eq!(app.viewer.presentation(), Presentation::Mobile);

        let _ = app.update(Message::WindowResized(iced::Size::new(1400.0, 900.0)));
        assert_eq!(app.viewer.presentation(), Presentation::Mobile);
    }

    #[test]
    fn configured_presentation_ignores_window_width() {
        let mut config = Config::default();
        config.viewer.presentation = PresentationOverride::Desktop;
        let mut app = App::from_config(config, I18n::default());

        let _ = app.update(Message::WindowResized(iced::Size::new(400.0, 800.0)));
        assert_eq!(app.viewer.presentation(), Presentation::Desktop);
    }

    #[test]
    fn navigating_clears_the_search_query() {
        let mut app = loaded_app();
        let _ = app.update(Message::Navbar(navbar::Message::SearchChanged("nini".into())));
        assert_eq!(app.query, "nini");

        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Page::Shop)));
        assert_eq!(app.page, Page::Shop);
        assert!(app.query.is_empty());
    }

    #[test]
    fn language_toggle_switches_between_georgian_and_english() {
        let mut app = App::default();
        let was_georgian = app.i18n.is_georgian();

        let _ = app.update(Message::Navbar(navbar::Message::ToggleLanguage));
        assert_ne!(app.i18n.is_georgian(), was_georgian);
        assert_eq!(
            app.notifications.visible().next().map(|n| n.message_key()),
            Some("notification-language-changed")
        );

        let _ = app.update(Message::Navbar(navbar::Message::ToggleLanguage));
        assert_eq!(app.i18n.is_georgian(), was_georgian);
    }

    #[test]
    fn tick_expires_notifications() {
        let mut app = App::default();
        app.notifications
            .push(notifications::Notification::info("notification-test"));
        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(10)));
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn failed_photo_download_is_cached_as_failure() {
        let mut app = App::default();
        let url = "https://cdn.example.com/a.jpg".to_string();
        let _ = app.photos.request([&url]);
        let _ = app.update(Message::PhotoDownloaded {
            url: url.clone(),
            result: Err(crate::error::CatalogError::Status(404).into()),
        });
        assert!(app.photos.handle(&url).is_none());
        assert!(app.photos.peek(&url).is_some());
    }
}
