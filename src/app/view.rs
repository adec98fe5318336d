// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The catalog page sits at the bottom of a stack; the viewer, the payment
//! panel and the toasts are layered over it when present.

use super::config::Config;
use super::Message;
use crate::application::query::Page;
use crate::domain::catalog::Catalog;
use crate::domain::viewer::PageScroll;
use crate::i18n::fluent::I18n;
use crate::infrastructure::PhotoCache;
use crate::ui::gallery::{self, ViewContext as GalleryViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::payment;
use crate::ui::photo::PhotoContext;
use crate::ui::styles::container as container_styles;
use crate::ui::viewer::{self, ViewContext as ViewerViewContext};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};
use std::path::Path;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub catalog: &'a Catalog,
    pub catalog_loading: bool,
    pub page: &'a Page,
    pub query: &'a str,
    pub gallery: &'a gallery::State,
    pub viewer: &'a viewer::State,
    pub payment: &'a payment::State,
    pub page_scroll: PageScroll,
    pub notifications: &'a Manager,
    pub photos: &'a PhotoCache,
    pub asset_root: &'a Path,
    pub currency: &'a str,
}

/// Renders the catalog page with whatever overlays are open.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let photos = PhotoContext {
        asset_root: ctx.asset_root,
        cache: ctx.photos,
    };

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        page: ctx.page,
        query: ctx.query,
        has_payment_details: !ctx.config.payment.fields.is_empty(),
    })
    .map(Message::Navbar);

    let page_view = ctx
        .gallery
        .view(GalleryViewContext {
            i18n: ctx.i18n,
            catalog: ctx.catalog,
            page: ctx.page,
            query: ctx.query,
            photos,
            currency: ctx.currency,
            scroll: ctx.page_scroll,
            loading: ctx.catalog_loading,
        })
        .map(Message::Gallery);

    let base = Container::new(
        Column::new()
            .push(navbar_view)
            .push(page_view)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(container_styles::page);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if let Some(viewer_view) = ctx.viewer.view(ViewerViewContext {
        i18n: ctx.i18n,
        photos,
        currency: ctx.currency,
    }) {
        layers = layers.push(viewer_view.map(Message::Viewer));
    }

    if ctx.payment.is_open() {
        layers = layers.push(
            ctx.payment
                .view(&ctx.config.payment.fields, ctx.i18n)
                .map(Message::Payment),
        );
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}
