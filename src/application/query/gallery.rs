// SPDX-License-Identifier: MPL-2.0
//! Page listings: which artists and artwork cards each page shows.

use crate::domain::catalog::{Artist, Artwork, Catalog, CatalogFilter};
use crate::domain::viewer::{Item, PageDepth};

/// Artists per page of the artists listing.
pub const ARTISTS_PER_PAGE: usize = 8;

/// Artists previewed on the home page.
pub const HOME_ARTISTS_PREVIEW: usize = 4;

/// Shop artworks previewed on the home page.
pub const HOME_SHOP_PREVIEW: usize = 3;

/// A page of the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    /// Artist preview and a few shop artworks.
    #[default]
    Home,
    /// Paginated list of artists.
    Artists,
    /// One artist's biography and artworks.
    ArtistShop(String),
    /// Shop artworks of every artist.
    Shop,
    /// Every artwork.
    Gallery,
}

impl Page {
    /// Depth used to resolve photo references of this page.
    #[must_use]
    pub fn depth(&self) -> PageDepth {
        match self {
            Page::ArtistShop(_) | Page::Shop => PageDepth::Nested,
            Page::Home | Page::Artists | Page::Gallery => PageDepth::TopLevel,
        }
    }

    /// Directory of the page relative to the site root, for nested pages.
    #[must_use]
    pub fn directory(&self) -> Option<&'static str> {
        match self {
            Page::ArtistShop(_) => Some("artists"),
            Page::Shop => Some("sale"),
            Page::Home | Page::Artists | Page::Gallery => None,
        }
    }
}

/// A clickable artwork card.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub artwork_id: String,
    pub item: Item,
}

impl Card {
    fn new(artwork: &Artwork, catalog: &Catalog) -> Self {
        Self {
            artwork_id: artwork.id.clone(),
            item: Item::from_artwork(artwork, catalog),
        }
    }
}

/// Artwork cards shown on `page`, filtered by `filter`.
///
/// The home page applies only the status part of the filter and shows a
/// short preview of the shop. The artists page has no artwork cards.
#[must_use]
pub fn artwork_cards(catalog: &Catalog, page: &Page, filter: &CatalogFilter) -> Vec<Card> {
    let artworks: Vec<&Artwork> = match page {
        Page::Home => catalog
            .shop_listing()
            .into_iter()
            .filter(|artwork| filter.status.matches(artwork.status))
            .take(HOME_SHOP_PREVIEW)
            .collect(),
        Page::Artists => Vec::new(),
        Page::ArtistShop(artist_id) => catalog
            .artworks_by(artist_id)
            .into_iter()
            .filter(|artwork| filter.status.matches(artwork.status))
            .collect(),
        Page::Shop => filter.apply(catalog.shop_listing()),
        Page::Gallery => filter.apply(catalog.ordered_artworks()),
    };
    artworks
        .into_iter()
        .map(|artwork| Card::new(artwork, catalog))
        .collect()
}

/// Artists shown on the home page.
#[must_use]
pub fn home_artists(catalog: &Catalog) -> Vec<&Artist> {
    catalog.listed_artists().take(HOME_ARTISTS_PREVIEW).collect()
}

/// One page of the artists listing.
#[derive(Debug)]
pub struct ArtistPage<'a> {
    pub artists: Vec<&'a Artist>,
    /// Zero-based page index, clamped to the available pages.
    pub index: usize,
    pub total_pages: usize,
}

/// Returns page `index` of the artists listing.
#[must_use]
pub fn artist_page(catalog: &Catalog, index: usize) -> ArtistPage<'_> {
    let listed: Vec<&Artist> = catalog.listed_artists().collect();
    let total_pages = listed.len().div_ceil(ARTISTS_PER_PAGE);
    let index = index.min(total_pages.saturating_sub(1));
    let artists = listed
        .into_iter()
        .skip(index * ARTISTS_PER_PAGE)
        .take(ARTISTS_PER_PAGE)
        .collect();
    ArtistPage {
        artists,
        index,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{ArtistFilter, ArtworkStatus, StatusFilter};

    fn catalog() -> Catalog {
        let artists = (0..10)
            .map(|i| Artist {
                id: format!("artist{i}"),
                name: format!("Artist {i}"),
                placeholder: i == 9,
                ..Artist::default()
            })
            .collect();
        let artworks = vec![
            Artwork {
                id: "a".into(),
                artist: "artist0".into(),
                status: ArtworkStatus::Sold,
                show_in_shop: true,
                ..Artwork::default()
            },
            Artwork {
                id: "b".into(),
                artist: "artist0".into(),
                show_in_shop: true,
                ..Artwork::default()
            },
            Artwork {
                id: "c".into(),
                artist: "artist1".into(),
                ..Artwork::default()
            },
        ];
        Catalog::new(artists, artworks)
    }

    fn ids(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|c| c.artwork_id.as_str()).collect()
    }

    #[test]
    fn nested_pages_report_their_depth() {
        assert_eq!(Page::Shop.depth(), PageDepth::Nested);
        assert_eq!(Page::ArtistShop("x".into()).depth(), PageDepth::Nested);
        assert_eq!(Page::Gallery.depth(), PageDepth::TopLevel);
        assert_eq!(Page::Shop.directory(), Some("sale"));
        assert_eq!(Page::Home.directory(), None);
    }

    #[test]
    fn gallery_lists_every_artwork_unsold_first() {
        let cards = artwork_cards(&catalog(), &Page::Gallery, &CatalogFilter::default());
        assert_eq!(ids(&cards), ["b", "c", "a"]);
    }

    #[test]
    fn shop_respects_both_filters() {
        let filter = CatalogFilter {
            status: StatusFilter::Sold,
            artist: ArtistFilter::Only("artist0".into()),
        };
        let cards = artwork_cards(&catalog(), &Page::Shop, &filter);
        assert_eq!(ids(&cards), ["a"]);
    }

    #[test]
    fn artist_shop_ignores_the_artist_filter() {
        let filter = CatalogFilter {
            status: StatusFilter::All,
            artist: ArtistFilter::Only("artist1".into()),
        };
        let cards = artwork_cards(&catalog(), &Page::ArtistShop("artist0".into()), &filter);
        assert_eq!(ids(&cards), ["b", "a"]);
    }

    #[test]
    fn home_previews_shop_by_status() {
        let filter = CatalogFilter {
            status: StatusFilter::ForSale,
            artist: ArtistFilter::All,
        };
        assert_eq!(ids(&artwork_cards(&catalog(), &Page::Home, &filter)), ["b"]);
        assert_eq!(home_artists(&catalog()).len(), HOME_ARTISTS_PREVIEW);
    }

    #[test]
    fn artist_pages_skip_placeholders_and_clamp() {
        let catalog = catalog();
        let first = artist_page(&catalog, 0);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.artists.len(), ARTISTS_PER_PAGE);

        let last = artist_page(&catalog, 99);
        assert_eq!(last.index, 1);
        assert_eq!(last.artists.len(), 1);
        assert!(last.artists.iter().all(|a| !a.placeholder));
    }

    #[test]
    fn empty_catalog_has_no_artist_pages() {
        let empty = Catalog::empty();
        let page = artist_page(&empty, 3);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.index, 0);
        assert!(page.artists.is_empty());
    }
}
