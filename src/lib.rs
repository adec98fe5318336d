// SPDX-License-Identifier: MPL-2.0
//! `ninart` is the catalog and product viewer of a small art gallery, built
//! with the Iced GUI framework.
//!
//! It lists artists and artworks from a static table or a remote content API,
//! shows each artwork in a photo viewer (desktop modal or fullscreen mobile
//! overlay with zoom, pan and swipe) and hands purchase inquiries off to
//! WhatsApp. Interface strings are localized with Fluent in English and
//! Georgian.

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
