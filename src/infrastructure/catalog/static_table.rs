// SPDX-License-Identifier: MPL-2.0
//! Catalog read from a TOML table.
//!
//! The table shipped with the application is embedded in the binary. A user
//! may point `--catalog` (or `[catalog] static_path`) at another file with
//! the same layout:
//!
//! ```toml
//! [[artists]]
//! id = "nini"
//! name = "Nini Mzhavia"
//! avatar = "images/artists/ninimzhavia.jpg"
//!
//! [[artworks]]
//! id = "nini_01"
//! artist = "nini"
//! title = "Painting 1"
//! price = 250
//! image = "images/naturmort6.jpg"
//! photos = ["images/naturmort6.jpg", "images/naturmort1.jpg"]
//! show_in_shop = true
//! ```

use super::parse_timestamp;
use crate::application::port::CatalogProvider;
use crate::domain::catalog::{Artist, Artwork, ArtworkStatus, Catalog};
use crate::error::{CatalogError, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct CatalogAsset;

const EMBEDDED_TABLE: &str = "catalog.toml";

#[derive(Debug, Deserialize)]
struct CatalogTable {
    #[serde(default)]
    artists: Vec<ArtistRow>,
    #[serde(default)]
    artworks: Vec<ArtworkRow>,
}

#[derive(Debug, Deserialize)]
struct ArtistRow {
    id: String,
    slug: Option<String>,
    name: String,
    #[serde(default)]
    avatar: String,
    bio_en: Option<String>,
    bio_ka: Option<String>,
    about: Option<String>,
    style: Option<String>,
    contact_number: Option<String>,
    country: Option<String>,
    #[serde(default)]
    placeholder: bool,
}

#[derive(Debug, Deserialize)]
struct ArtworkRow {
    id: String,
    artist: String,
    #[serde(default)]
    status: String,
    title: String,
    price: Option<f64>,
    size: Option<String>,
    medium: Option<String>,
    year: Option<String>,
    description: Option<String>,
    #[serde(default)]
    image: String,
    #[serde(default)]
    photos: Vec<String>,
    #[serde(default)]
    show_in_shop: bool,
    manual_order: Option<i64>,
    created_at: Option<String>,
}

impl From<ArtistRow> for Artist {
    fn from(row: ArtistRow) -> Self {
        Artist {
            slug: row.slug.unwrap_or_else(|| row.id.clone()),
            id: row.id,
            name: row.name,
            avatar: row.avatar,
            bio_en: row.bio_en,
            bio_ka: row.bio_ka,
            about: row.about,
            style: row.style,
            contact_number: row.contact_number,
            country: row.country,
            placeholder: row.placeholder,
        }
    }
}

impl From<ArtworkRow> for Artwork {
    fn from(row: ArtworkRow) -> Self {
        Artwork {
            status: ArtworkStatus::parse_lenient(&row.status),
            created_at: row.created_at.as_deref().and_then(parse_timestamp),
            id: row.id,
            title: row.title,
            price: row.price,
            size: row.size,
            medium: row.medium,
            year: row.year,
            description: row.description,
            image: row.image,
            photos: row.photos,
            artist: row.artist,
            show_in_shop: row.show_in_shop,
            manual_order: row.manual_order,
        }
    }
}

/// Where the table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableOrigin {
    Embedded,
    File(PathBuf),
}

/// Catalog provider backed by a TOML table.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    origin: TableOrigin,
}

impl StaticCatalog {
    /// Provider for the table shipped inside the binary.
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            origin: TableOrigin::Embedded,
        }
    }

    /// Provider for a user-supplied table.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: TableOrigin::File(path.into()),
        }
    }

    #[must_use]
    pub fn origin(&self) -> &TableOrigin {
        &self.origin
    }

    fn read_table(&self) -> Result<String> {
        match &self.origin {
            TableOrigin::Embedded => {
                let file = CatalogAsset::get(EMBEDDED_TABLE).ok_or_else(|| {
                    CatalogError::InvalidTable(format!("{EMBEDDED_TABLE} is not embedded"))
                })?;
                Ok(String::from_utf8_lossy(file.data.as_ref()).into_owned())
            }
            TableOrigin::File(path) => read_file(path),
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Parses a catalog table.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidTable`] when the text is not a valid table.
pub fn parse_table(text: &str) -> Result<Catalog> {
    let table: CatalogTable =
        toml::from_str(text).map_err(|err| CatalogError::InvalidTable(err.to_string()))?;

    let artists: Vec<Artist> = table.artists.into_iter().map(Artist::from).collect();
    let artworks: Vec<Artwork> = table.artworks.into_iter().map(Artwork::from).collect();

    for artwork in &artworks {
        if !artists.iter().any(|artist| artist.id == artwork.artist) {
            log::debug!(
                "artwork {} references unknown artist {}",
                artwork.id,
                artwork.artist
            );
        }
    }

    Ok(Catalog::new(artists, artworks))
}

impl CatalogProvider for StaticCatalog {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn fetch(&self) -> Result<Catalog> {
        let text = self.read_table()?;
        let catalog = parse_table(&text)?;
        log::debug!(
            "static catalog loaded: {} artists, {} artworks",
            catalog.artists().len(),
            catalog.artworks().len()
        );
        Ok(catalog)
    }
}
