// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`, plus the thin wrappers around system services.
//!
//! # Available Adapters
//!
//! - [`catalog`]: Static table and content API (implement [`CatalogProvider`])
//! - [`clipboard`]: System and deferred clipboards (implement [`ClipboardWriter`])
//! - [`browser`]: System browser launch for contact links
//! - [`photos`]: Download cache for remote photos
//!
//! [`CatalogProvider`]: crate::application::port::CatalogProvider
//! [`ClipboardWriter`]: crate::application::port::ClipboardWriter

pub mod browser;
pub mod catalog;
pub mod clipboard;
pub mod photos;

pub use catalog::{CatalogSource, RemoteCatalog, StaticCatalog};
pub use clipboard::{DeferredClipboard, SystemClipboard};
pub use photos::PhotoCache;
