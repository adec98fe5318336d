// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`catalog`]: Catalog loading (static table, content API)
//! - [`clipboard`]: Clipboard writes for the copy button
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no HTTP types)
//! - Methods return the crate [`Result`](crate::error::Result)

pub mod catalog;
pub mod clipboard;

pub use catalog::CatalogProvider;
pub use clipboard::ClipboardWriter;
