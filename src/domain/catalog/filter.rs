// SPDX-License-Identifier: MPL-2.0
//! Catalog filtering and search.
//!
//! # Available Filters
//!
//! - [`StatusFilter`]: Filter by sale state (all, for sale, sold)
//! - [`ArtistFilter`]: Filter by artist
//! - [`CatalogFilter`]: Combined filter with AND logic
//!
//! [`search`] runs a free-text query over artists and artworks.

use super::snapshot::Catalog;
use super::types::{non_blank, Artist, Artwork, ArtworkStatus};

/// Maximum number of artworks returned by a search.
pub const SEARCH_ARTWORK_LIMIT: usize = 10;

// =============================================================================
// Status Filter
// =============================================================================

/// Filter by sale state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    ForSale,
    Sold,
}

impl StatusFilter {
    #[must_use]
    pub fn matches(self, status: ArtworkStatus) -> bool {
        match self {
            Self::All => true,
            Self::ForSale => status == ArtworkStatus::ForSale,
            Self::Sold => status == ArtworkStatus::Sold,
        }
    }
}

// =============================================================================
// Artist Filter
// =============================================================================

/// Filter by artist id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ArtistFilter {
    #[default]
    All,
    Only(String),
}

impl ArtistFilter {
    #[must_use]
    pub fn matches(&self, artist_id: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(id) => id == artist_id,
        }
    }
}

// =============================================================================
// Combined Filter
// =============================================================================

/// Status and artist filters combined with AND logic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogFilter {
    pub status: StatusFilter,
    pub artist: ArtistFilter,
}

impl CatalogFilter {
    #[must_use]
    pub fn matches(&self, artwork: &Artwork) -> bool {
        self.status.matches(artwork.status) && self.artist.matches(&artwork.artist)
    }

    /// Returns `true` if any filter narrows the listing.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status != StatusFilter::All || self.artist != ArtistFilter::All
    }

    /// Keeps the artworks accepted by this filter, preserving order.
    #[must_use]
    pub fn apply<'a>(&self, artworks: Vec<&'a Artwork>) -> Vec<&'a Artwork> {
        artworks.into_iter().filter(|a| self.matches(a)).collect()
    }
}

// =============================================================================
// Search
// =============================================================================

/// Matches of a free-text query.
#[derive(Debug, Default)]
pub struct SearchResults<'a> {
    pub artists: Vec<&'a Artist>,
    pub artworks: Vec<&'a Artwork>,
}

impl SearchResults<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artists.is_empty() && self.artworks.is_empty()
    }
}

/// Case-insensitive substring search.
///
/// Artists match on name, style or about text; placeholder artists never
/// match. Artworks match on title, description, medium or artist id, in
/// listing order and capped at [`SEARCH_ARTWORK_LIMIT`]. A blank query
/// matches nothing.
#[must_use]
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> SearchResults<'a> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SearchResults::default();
    }
    let hit = |field: Option<&str>| {
        non_blank(field).is_some_and(|text| text.to_lowercase().contains(&needle))
    };

    let artists = catalog
        .listed_artists()
        .filter(|artist| {
            hit(Some(&artist.name)) || hit(artist.style.as_deref()) || hit(artist.about.as_deref())
        })
        .collect();

    let artworks = catalog
        .ordered_artworks()
        .into_iter()
        .filter(|artwork| {
            hit(Some(&artwork.title))
                || hit(artwork.description.as_deref())
                || hit(artwork.medium.as_deref())
                || hit(Some(&artwork.artist))
        })
        .take(SEARCH_ARTWORK_LIMIT)
        .collect();

    SearchResults { artists, artworks }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        let artists = vec![
            Artist {
                id: "nini".into(),
                name: "Nini Mzhavia".into(),
                style: Some("Contemporary Abstract".into()),
                ..Artist::default()
            },
            Artist {
                id: "artist4".into(),
                name: "Abstract Placeholder".into(),
                placeholder: true,
                ..Artist::default()
            },
        ];
        let mut artworks: Vec<Artwork> = (0..12)
            .map(|i| Artwork {
                id: format!("nini_{i:02}"),
                title: format!("Painting {i}"),
                medium: Some("Acrylic on canvas".into()),
                artist: "nini".into(),
                ..Artwork::default()
            })
            .collect();
        artworks.push(Artwork {
            id: "mzia_01".into(),
            title: "Sea".into(),
            medium: Some("Oil".into()),
            status: ArtworkStatus::Sold,
            artist: "mzia".into(),
            ..Artwork::default()
        });
        Catalog::new(artists, artworks)
    }

    #[test]
    fn status_filter_matches() {
        assert!(StatusFilter::All.matches(ArtworkStatus::Sold));
        assert!(StatusFilter::ForSale.matches(ArtworkStatus::ForSale));
        assert!(!StatusFilter::ForSale.matches(ArtworkStatus::Sold));
        assert!(StatusFilter::Sold.matches(ArtworkStatus::Sold));
    }

    #[test]
    fn combined_filter_uses_and_logic() {
        let catalog = catalog();
        let filter = CatalogFilter {
            status: StatusFilter::Sold,
            artist: ArtistFilter::Only("nini".into()),
        };
        assert!(filter.is_active());
        assert!(filter.apply(catalog.ordered_artworks()).is_empty());

        let filter = CatalogFilter {
            status: StatusFilter::Sold,
            artist: ArtistFilter::All,
        };
        let sold = filter.apply(catalog.ordered_artworks());
        assert_eq!(sold.len(), 1);
        assert_eq!(sold[0].id, "mzia_01");
    }

    #[test]
    fn default_filter_is_inactive() {
        assert!(!CatalogFilter::default().is_active());
    }

    #[test]
    fn search_is_case_insensitive_and_skips_placeholders() {
        let catalog = catalog();
        let results = search(&catalog, "ABSTRACT");
        assert_eq!(results.artists.len(), 1);
        assert_eq!(results.artists[0].id, "nini");
    }

    #[test]
    fn search_caps_artwork_results() {
        let catalog = catalog();
        let results = search(&catalog, "acrylic");
        assert_eq!(results.artworks.len(), SEARCH_ARTWORK_LIMIT);
    }

    #[test]
    fn search_matches_artist_id_on_artworks() {
        let catalog = catalog();
        let results = search(&catalog, "mzia");
        assert_eq!(results.artworks.len(), 1);
        assert_eq!(results.artworks[0].title, "Sea");
    }

    #[test]
    fn blank_query_matches_nothing() {
        assert!(search(&catalog(), "   ").is_empty());
    }
}
