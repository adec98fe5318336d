// SPDX-License-Identifier: MPL-2.0
//! Clickable catalog items and the metadata they carry into the viewer.

use crate::domain::catalog::{Artwork, ArtworkStatus, Catalog};
use std::collections::HashMap;

/// Everything the viewer needs to know about one catalog card.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Item {
    pub title: String,
    pub price: Option<f64>,
    pub size: Option<String>,
    pub medium: Option<String>,
    pub year: Option<String>,
    pub description: Option<String>,
    pub status: ArtworkStatus,
    /// Photo references, possibly empty (see [`Item::photo_list`]).
    pub photos: Vec<String>,
    /// Image displayed on the card itself.
    pub primary_image: String,
    pub seller_contact: Option<String>,
    pub seller_name: Option<String>,
    /// Artist id used to look up the seller.
    pub artist_ref: Option<String>,
}

impl Item {
    /// Builds the item for an artwork card, taking seller details from the
    /// artwork's artist when the catalog knows it.
    #[must_use]
    pub fn from_artwork(artwork: &Artwork, catalog: &Catalog) -> Self {
        let artist = catalog.artist(&artwork.artist);
        Self {
            title: artwork.title.clone(),
            price: artwork.price,
            size: artwork.size.clone(),
            medium: artwork.medium.clone(),
            year: artwork.year.clone(),
            description: artwork.description.clone(),
            status: artwork.status,
            photos: artwork.photos.clone(),
            primary_image: artwork.image.clone(),
            seller_contact: artist.and_then(|a| a.contact_number.clone()),
            seller_name: artist.map(|a| a.name.clone()),
            artist_ref: Some(artwork.artist.clone()).filter(|id| !id.is_empty()),
        }
    }

    /// Builds an item from card attributes.
    ///
    /// Recognized keys: `title`, `price`, `size`, `medium`, `year`,
    /// `desc` (or `description`), `photos` (comma separated), `status` and
    /// `artist`. Missing keys and unparseable prices leave the field empty.
    #[must_use]
    pub fn from_attributes(attributes: &HashMap<String, String>, primary_image: &str) -> Self {
        let text = |key: &str| {
            attributes
                .get(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            title: text("title").unwrap_or_default(),
            price: text("price")
                .and_then(|raw| raw.parse::<f64>().ok())
                .filter(|price| price.is_finite()),
            size: text("size"),
            medium: text("medium"),
            year: text("year"),
            description: text("desc").or_else(|| text("description")),
            status: ArtworkStatus::parse_lenient(&text("status").unwrap_or_default()),
            photos: split_photo_list(attributes.get("photos").map_or("", String::as_str)),
            primary_image: primary_image.to_string(),
            seller_contact: None,
            seller_name: None,
            artist_ref: text("artist"),
        }
    }

    /// Photo references shown by the viewer, never empty.
    ///
    /// Falls back to the card image when the item has no photo list.
    #[must_use]
    pub fn photo_list(&self) -> Vec<String> {
        if self.photos.is_empty() {
            vec![self.primary_image.clone()]
        } else {
            self.photos.clone()
        }
    }
}

/// Splits a comma separated photo list, dropping blank entries.
#[must_use]
pub fn split_photo_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Formats a price without a trailing `.0` for whole amounts.
///
/// Non-finite amounts print as an unknown price.
#[must_use]
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(value) if !value.is_finite() => String::new(),
        Some(value) if value.fract() == 0.0 => format!("{value:.0}"),
        Some(value) => format!("{:.2}", value),
        None => String::new(),
    }
}

/// Display slots of the viewer's details panel.
///
/// Missing fields are empty strings. `price` holds the bare amount; the view
/// adds the currency symbol.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetadataSlots {
    pub title: String,
    pub price: String,
    pub size: String,
    pub medium: String,
    pub year: String,
    pub description: String,
}

impl MetadataSlots {
    #[must_use]
    pub fn bind(item: &Item) -> Self {
        Self {
            title: item.title.clone(),
            price: format_price(item.price),
            size: item.size.clone().unwrap_or_default(),
            medium: item.medium.clone().unwrap_or_default(),
            year: item.year.clone().unwrap_or_default(),
            description: item.description.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Artist;

    fn attributes(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn photo_list_falls_back_to_primary_image() {
        let item = Item {
            primary_image: "images/x.jpg".into(),
            ..Item::default()
        };
        assert_eq!(item.photo_list(), vec!["images/x.jpg".to_string()]);
    }

    #[test]
    fn split_photo_list_trims_and_drops_blanks() {
        assert_eq!(
            split_photo_list(" a.jpg, ,b.jpg,, c.jpg "),
            vec!["a.jpg", "b.jpg", "c.jpg"]
        );
        assert!(split_photo_list("").is_empty());
        assert!(split_photo_list(" , ").is_empty());
    }

    #[test]
    fn from_attributes_tolerates_missing_and_bad_values() {
        let item = Item::from_attributes(
            &attributes(&[("title", "Sea"), ("price", "n/a"), ("status", "sold")]),
            "images/sea.jpg",
        );
        assert_eq!(item.title, "Sea");
        assert_eq!(item.price, None);
        assert_eq!(item.status, ArtworkStatus::Sold);
        assert!(item.size.is_none());
        assert_eq!(item.photo_list(), vec!["images/sea.jpg".to_string()]);
    }

    #[test]
    fn from_attributes_accepts_both_description_keys() {
        let short = Item::from_attributes(&attributes(&[("desc", "Short")]), "x");
        let long = Item::from_attributes(&attributes(&[("description", "Long")]), "x");
        assert_eq!(short.description.as_deref(), Some("Short"));
        assert_eq!(long.description.as_deref(), Some("Long"));
    }

    #[test]
    fn from_artwork_pulls_seller_from_artist() {
        let catalog = Catalog::new(
            vec![Artist {
                id: "nini".into(),
                name: "Nini Mzhavia".into(),
                contact_number: Some("995579388833".into()),
                ..Artist::default()
            }],
            vec![],
        );
        let artwork = Artwork {
            title: "Lily".into(),
            price: Some(250.0),
            artist: "nini".into(),
            image: "images/lily8.jpg".into(),
            ..Artwork::default()
        };
        let item = Item::from_artwork(&artwork, &catalog);
        assert_eq!(item.seller_name.as_deref(), Some("Nini Mzhavia"));
        assert_eq!(item.seller_contact.as_deref(), Some("995579388833"));
        assert_eq!(item.artist_ref.as_deref(), Some("nini"));
    }

    #[test]
    fn from_artwork_without_known_artist_has_no_seller() {
        let artwork = Artwork {
            artist: "ghost".into(),
            ..Artwork::default()
        };
        let item = Item::from_artwork(&artwork, &Catalog::empty());
        assert!(item.seller_contact.is_none());
        assert!(item.seller_name.is_none());
    }

    #[test]
    fn price_formatting() {
        assert_eq!(format_price(Some(250.0)), "250");
        assert_eq!(format_price(Some(99.5)), "99.50");
        assert_eq!(format_price(None), "");
        assert_eq!(format_price(Some(1e20)), "100000000000000000000");
        assert_eq!(format_price(Some(f64::NAN)), "");
        assert_eq!(format_price(Some(f64::INFINITY)), "");
    }

    #[test]
    fn from_attributes_rejects_non_finite_prices() {
        for raw in ["NaN", "inf", "-infinity"] {
            let item = Item::from_attributes(&attributes(&[("price", raw)]), "x");
            assert_eq!(item.price, None, "{raw}");
            assert_eq!(MetadataSlots::bind(&item).price, "");
        }

        let huge = Item::from_attributes(&attributes(&[("price", "1e20")]), "x");
        assert_eq!(MetadataSlots::bind(&huge).price, "100000000000000000000");
    }

    #[test]
    fn metadata_slots_substitute_empty_strings() {
        let item = Item {
            title: "Rose".into(),
            year: Some("2025".into()),
            ..Item::default()
        };
        let slots = MetadataSlots::bind(&item);
        assert_eq!(slots.title, "Rose");
        assert_eq!(slots.year, "2025");
        assert_eq!(slots.price, "");
        assert_eq!(slots.size, "");
        assert_eq!(slots.description, "");
    }
}
