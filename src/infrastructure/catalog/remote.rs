// SPDX-License-Identifier: MPL-2.0
//! Catalog fetched from a Sanity content API.
//!
//! Two GROQ queries are sent, one for artists and one for artworks. The
//! API answers `{ "result": [...] }`; a missing `result` counts as an empty
//! list. The CDN is never used and every request carries cache-busting
//! headers so edits show up immediately.

use super::parse_timestamp;
use crate::application::contact::encode_uri_component;
use crate::application::port::CatalogProvider;
use crate::domain::catalog::{Artist, Artwork, ArtworkStatus, Catalog};
use crate::error::{CatalogError, Result};
use reqwest::header::{CACHE_CONTROL, EXPIRES, PRAGMA};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const ARTISTS_QUERY: &str = r#"*[_type == "artist"] | order(_createdAt desc){
  _id,
  name,
  "slug": slug.current,
  "avatar": image.asset->url,
  bio_en,
  bio_ka,
  "about": shortDescription,
  style,
  whatsapp,
  country
}"#;

const ARTWORKS_QUERY: &str = r#"*[_type == "artwork" && (!defined(status) || status in ["published", "sold"])] | order(_createdAt desc){
  _id,
  title,
  price,
  status,
  "size": coalesce(size, dimensions),
  medium,
  year,
  "desc": coalesce(desc, shortDescription),
  "image": image.asset->url,
  "photos": images[].asset->url,
  "artist": artist->_id,
  showInShop,
  manualOrder,
  _createdAt
}"#;

/// Artwork statuses the content API may publish.
const VISIBLE_STATUSES: [&str; 2] = ["published", "sold"];

/// Content API coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSettings {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
}

impl RemoteSettings {
    /// Query endpoint, without the query string.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "https://{}.api.sanity.io/v{}/data/query/{}",
            self.project_id, self.api_version, self.dataset
        )
    }

    /// Full URL for a GROQ query.
    #[must_use]
    pub fn query_url(&self, query: &str) -> String {
        format!("{}?query={}", self.endpoint(), encode_uri_component(query))
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: Option<Vec<T>>,
}

#[derive(Debug, Deserialize)]
struct RemoteArtist {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    name: Option<String>,
    slug: Option<String>,
    avatar: Option<String>,
    bio_en: Option<String>,
    bio_ka: Option<String>,
    about: Option<String>,
    style: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    whatsapp: Option<String>,
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteArtwork {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient_price")]
    price: Option<f64>,
    status: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    size: Option<String>,
    medium: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    year: Option<String>,
    desc: Option<String>,
    image: Option<String>,
    photos: Option<Vec<Option<String>>>,
    artist: Option<String>,
    show_in_shop: Option<bool>,
    manual_order: Option<i64>,
    #[serde(rename = "_createdAt")]
    created_at: Option<String>,
}

/// Accepts a number or a string, as editors fill these fields both ways.
fn lenient_price<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<f64>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}

impl From<RemoteArtist> for Artist {
    fn from(raw: RemoteArtist) -> Self {
        let placeholder = raw
            .avatar
            .as_deref()
            .is_some_and(|avatar| avatar.contains("placeholder"));
        Artist {
            slug: raw.slug.unwrap_or_else(|| raw.id.clone()),
            id: raw.id,
            name: raw.name.unwrap_or_default(),
            avatar: raw.avatar.unwrap_or_default(),
            bio_en: raw.bio_en,
            bio_ka: raw.bio_ka,
            about: raw.about,
            style: raw.style,
            contact_number: raw.whatsapp,
            country: raw.country,
            placeholder,
        }
    }
}

impl From<RemoteArtwork> for Artwork {
    fn from(raw: RemoteArtwork) -> Self {
        let photos = raw
            .photos
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .filter(|url| !url.is_empty())
            .collect();
        Artwork {
            status: ArtworkStatus::parse_lenient(raw.status.as_deref().unwrap_or_default()),
            created_at: raw.created_at.as_deref().and_then(parse_timestamp),
            id: raw.id,
            title: raw.title.unwrap_or_default(),
            price: raw.price,
            size: raw.size,
            medium: raw.medium,
            year: raw.year,
            description: raw.desc,
            image: raw.image.unwrap_or_default(),
            photos,
            artist: raw.artist.unwrap_or_default(),
            show_in_shop: raw.show_in_shop.unwrap_or(true),
            manual_order: raw.manual_order,
        }
    }
}

fn is_visible(artwork: &RemoteArtwork) -> bool {
    artwork
        .status
        .as_deref()
        .is_none_or(|status| VISIBLE_STATUSES.contains(&status))
}

fn parse_result<T: DeserializeOwned>(body: &str) -> Result<Vec<T>> {
    let response: QueryResponse<T> = serde_json::from_str(body)?;
    Ok(response.result.unwrap_or_default())
}

fn parse_artists(body: &str) -> Result<Vec<Artist>> {
    Ok(parse_result::<RemoteArtist>(body)?
        .into_iter()
        .map(Artist::from)
        .collect())
}

fn parse_artworks(body: &str) -> Result<Vec<Artwork>> {
    Ok(parse_result::<RemoteArtwork>(body)?
        .into_iter()
        .filter(is_visible)
        .map(Artwork::from)
        .collect())
}

/// Catalog provider backed by the content API.
#[derive(Debug, Clone)]
pub struct RemoteCatalog {
    settings: RemoteSettings,
    client: reqwest::Client,
}

impl RemoteCatalog {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(settings: RemoteSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("Ninart/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| CatalogError::Network(err.to_string()))?;
        Ok(Self { settings, client })
    }

    #[must_use]
    pub fn settings(&self) -> &RemoteSettings {
        &self.settings
    }

    async fn query(&self, query: &str) -> Result<String> {
        let response = self
            .client
            .get(self.settings.query_url(query))
            .header(CACHE_CONTROL, "no-cache, no-store, must-revalidate")
            .header(PRAGMA, "no-cache")
            .header(EXPIRES, "0")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()).into());
        }
        Ok(response.text().await?)
    }
}

impl CatalogProvider for RemoteCatalog {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn fetch(&self) -> Result<Catalog> {
        let (artists, artworks) =
            tokio::try_join!(self.query(ARTISTS_QUERY), self.query(ARTWORKS_QUERY))?;
        let catalog = Catalog::new(parse_artists(&artists)?, parse_artworks(&artworks)?);
        log::debug!(
            "remote catalog loaded from {}: {} artists, {} artworks",
            self.settings.endpoint(),
            catalog.artists().len(),
            catalog.artworks().len()
        );
        Ok(catalog)
    }
}
