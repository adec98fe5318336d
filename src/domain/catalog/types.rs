// SPDX-License-Identifier: MPL-2.0
//! Catalog record types.

use std::time::SystemTime;

/// Sale state of an artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ArtworkStatus {
    #[default]
    ForSale,
    Sold,
}

impl ArtworkStatus {
    /// Parses the loose status strings found in catalog sources.
    ///
    /// Only `"sold"` (any case) marks an artwork as sold; everything else,
    /// including an empty string, counts as for sale.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("sold") {
            Self::Sold
        } else {
            Self::ForSale
        }
    }

    #[must_use]
    pub fn is_sold(self) -> bool {
        matches!(self, Self::Sold)
    }
}

/// Language of an artist biography.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BioLanguage {
    English,
    Georgian,
}

impl BioLanguage {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::English => Self::Georgian,
            Self::Georgian => Self::English,
        }
    }
}

/// An artist as listed on the artists page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Artist {
    pub id: String,
    pub slug: String,
    pub name: String,
    /// Avatar image reference (relative path or URL).
    pub avatar: String,
    pub bio_en: Option<String>,
    pub bio_ka: Option<String>,
    pub about: Option<String>,
    pub style: Option<String>,
    /// WhatsApp number of the artist, digits with optional formatting.
    pub contact_number: Option<String>,
    pub country: Option<String>,
    /// Reserved slot without a real artist behind it.
    pub placeholder: bool,
}

impl Artist {
    /// Returns the biography in `language`, falling back to the other
    /// language and then to the short `about` text.
    ///
    /// Blank texts count as missing. `None` means the artist has no
    /// biography at all.
    #[must_use]
    pub fn biography(&self, language: BioLanguage) -> Option<&str> {
        let bio = |lang: BioLanguage| match lang {
            BioLanguage::English => non_blank(self.bio_en.as_deref()),
            BioLanguage::Georgian => non_blank(self.bio_ka.as_deref()),
        };
        bio(language)
            .or_else(|| bio(language.other()))
            .or_else(|| non_blank(self.about.as_deref()))
    }
}

/// An artwork with its photos and sale details.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Artwork {
    pub id: String,
    pub title: String,
    pub price: Option<f64>,
    pub status: ArtworkStatus,
    pub size: Option<String>,
    pub medium: Option<String>,
    pub year: Option<String>,
    pub description: Option<String>,
    /// Image shown on the catalog card.
    pub image: String,
    /// Ordered photo references for the viewer; may be empty.
    pub photos: Vec<String>,
    /// Id of the artist who made the artwork.
    pub artist: String,
    pub show_in_shop: bool,
    /// Curated position, lower first.
    pub manual_order: Option<i64>,
    pub created_at: Option<SystemTime>,
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_is_lenient() {
        assert_eq!(ArtworkStatus::parse_lenient("sold"), ArtworkStatus::Sold);
        assert_eq!(ArtworkStatus::parse_lenient(" SOLD "), ArtworkStatus::Sold);
        assert_eq!(ArtworkStatus::parse_lenient("sale"), ArtworkStatus::ForSale);
        assert_eq!(ArtworkStatus::parse_lenient(""), ArtworkStatus::ForSale);
    }

    #[test]
    fn biography_prefers_requested_language() {
        let artist = Artist {
            bio_en: Some("English bio".into()),
            bio_ka: Some("ქართული".into()),
            ..Artist::default()
        };
        assert_eq!(artist.biography(BioLanguage::Georgian), Some("ქართული"));
        assert_eq!(artist.biography(BioLanguage::English), Some("English bio"));
    }

    #[test]
    fn biography_falls_back_to_other_language_then_about() {
        let artist = Artist {
            bio_en: Some("English bio".into()),
            bio_ka: Some("   ".into()),
            about: Some("About".into()),
            ..Artist::default()
        };
        assert_eq!(artist.biography(BioLanguage::Georgian), Some("English bio"));

        let about_only = Artist {
            about: Some("About".into()),
            ..Artist::default()
        };
        assert_eq!(about_only.biography(BioLanguage::English), Some("About"));
        assert_eq!(Artist::default().biography(BioLanguage::English), None);
    }
}
