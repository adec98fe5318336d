// SPDX-License-Identifier: MPL-2.0
//! Catalog domain types.
//!
//! This module contains the artist and artwork records delivered by a
//! catalog provider, the shared [`Catalog`] snapshot and the read-side rules
//! applied to it (listing order, filters, search).

mod filter;
mod snapshot;
mod types;

pub use filter::{
    search, ArtistFilter, CatalogFilter, SearchResults, StatusFilter, SEARCH_ARTWORK_LIMIT,
};
pub use snapshot::{canonical_artist_id, listing_order, Catalog};
pub use types::{Artist, Artwork, ArtworkStatus, BioLanguage};
