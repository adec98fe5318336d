// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery logic independent of any UI toolkit.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Apart from the `log` facade it depends only on `std`, so every rule here
//! can be unit-tested without a window, a network or a clipboard.
//!
//! # Modules
//!
//! - [`catalog`]: Catalog records ([`Artist`](catalog::Artist),
//!   [`Artwork`](catalog::Artwork)), the shared [`Catalog`](catalog::Catalog)
//!   snapshot, listing order, filters and search
//! - [`viewer`]: The product viewer ([`Item`](viewer::Item),
//!   [`ViewerSession`](viewer::ViewerSession), [`ViewerHost`](viewer::ViewerHost)),
//!   photo path policy, gestures and page scroll locking

pub mod catalog;
pub mod viewer;
