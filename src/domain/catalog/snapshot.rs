// SPDX-License-Identifier: MPL-2.0
//! Read-only catalog snapshot shared between pages.

use super::types::{Artist, Artwork};
use std::cmp::Ordering;
use std::sync::Arc;

/// Legacy URL slugs that do not start with the artist id.
const SLUG_ALIASES: &[(&str, &str)] = &[
    ("nini-mzhavia", "nini"),
    ("mzia-kashia", "mzia"),
    ("nanuli-gogiberidze", "nanuli"),
    ("salome-mzhavia", "salome"),
];

#[derive(Debug, Default)]
struct Records {
    artists: Vec<Artist>,
    artworks: Vec<Artwork>,
}

/// Immutable list of artists and artworks.
///
/// Cloning is cheap: clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Arc<Records>,
}

impl Catalog {
    #[must_use]
    pub fn new(artists: Vec<Artist>, artworks: Vec<Artwork>) -> Self {
        Self {
            records: Arc::new(Records { artists, artworks }),
        }
    }

    /// Catalog used when no provider could deliver one.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.artists.is_empty() && self.records.artworks.is_empty()
    }

    #[must_use]
    pub fn artists(&self) -> &[Artist] {
        &self.records.artists
    }

    #[must_use]
    pub fn artworks(&self) -> &[Artwork] {
        &self.records.artworks
    }

    /// Artists with a real profile, in catalog order.
    pub fn listed_artists(&self) -> impl Iterator<Item = &Artist> {
        self.records.artists.iter().filter(|artist| !artist.placeholder)
    }

    #[must_use]
    pub fn artist(&self, id: &str) -> Option<&Artist> {
        self.records.artists.iter().find(|artist| artist.id == id)
    }

    /// Finds an artist from a URL slug.
    ///
    /// Tries, in order: an exact slug, an exact id, a known alias and finally
    /// the part of the slug before the first `-`.
    #[must_use]
    pub fn artist_by_slug(&self, slug: &str) -> Option<&Artist> {
        let slug = slug.trim();
        if slug.is_empty() {
            return None;
        }
        if let Some(artist) = self.records.artists.iter().find(|a| a.slug == slug) {
            return Some(artist);
        }
        self.artist(canonical_artist_id(slug))
    }

    /// Every artwork, in listing order.
    #[must_use]
    pub fn ordered_artworks(&self) -> Vec<&Artwork> {
        ordered(self.records.artworks.iter())
    }

    /// Artworks of one artist, in listing order.
    #[must_use]
    pub fn artworks_by(&self, artist_id: &str) -> Vec<&Artwork> {
        ordered(
            self.records
                .artworks
                .iter()
                .filter(|artwork| artwork.artist == artist_id),
        )
    }

    /// Artworks flagged for the shop, in listing order.
    #[must_use]
    pub fn shop_listing(&self) -> Vec<&Artwork> {
        ordered(
            self.records
                .artworks
                .iter()
                .filter(|artwork| artwork.show_in_shop),
        )
    }
}

/// Maps a URL slug onto an artist id.
#[must_use]
pub fn canonical_artist_id(slug: &str) -> &str {
    SLUG_ALIASES
        .iter()
        .find(|(alias, _)| *alias == slug)
        .map(|(_, id)| *id)
        .unwrap_or_else(|| slug.split('-').next().unwrap_or(slug))
}

/// Listing order: unsold first, then curated order, then newest first.
///
/// Artworks with a curated order come before those without one. Full ties
/// keep their catalog order (the sort is stable).
#[must_use]
pub fn listing_order(a: &Artwork, b: &Artwork) -> Ordering {
    a.status
        .is_sold()
        .cmp(&b.status.is_sold())
        .then_with(|| match (a.manual_order, b.manual_order) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| match (a.created_at, b.created_at) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

fn ordered<'a>(artworks: impl Iterator<Item = &'a Artwork>) -> Vec<&'a Artwork> {
    let mut list: Vec<&Artwork> = artworks.collect();
    list.sort_by(|a, b| listing_order(a, b));
    list
}
