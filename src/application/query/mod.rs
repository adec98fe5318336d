// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! This module contains query services for reading catalog data.
//! These services do not modify state; they provide read-only access.
//!
//! # Available Services
//!
//! - [`gallery`]: Page listings (artwork cards, artist pages)

pub mod gallery;

pub use gallery::{
    artist_page, artwork_cards, home_artists, ArtistPage, Card, Page, ARTISTS_PER_PAGE,
    HOME_ARTISTS_PREVIEW, HOME_SHOP_PREVIEW,
};
