// SPDX-License-Identifier: MPL-2.0
//! Catalog provider adapters.
//!
//! - [`StaticCatalog`]: TOML table, embedded or read from disk
//! - [`RemoteCatalog`]: Sanity content API over HTTPS
//!
//! [`CatalogSource`] picks one of them from the configuration and command
//! line, so the rest of the app only deals with a single provider type.

mod remote;
mod static_table;

pub use remote::{RemoteCatalog, RemoteSettings};
pub use static_table::{parse_table, StaticCatalog, TableOrigin};

use crate::app::config::{CatalogConfig, CatalogSourceKind};
use crate::application::port::CatalogProvider;
use crate::domain::catalog::Catalog;
use crate::error::Result;
use std::path::PathBuf;
use std::time::SystemTime;

/// The configured catalog provider.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    Static(StaticCatalog),
    Remote(RemoteCatalog),
}

impl CatalogSource {
    /// Builds the provider described by `config`.
    ///
    /// `table_override` (from `--catalog`) wins over the configured static
    /// path, and `force_remote` (from `--remote`) wins over the configured
    /// source kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client for the remote source cannot be built.
    pub fn from_config(
        config: &CatalogConfig,
        table_override: Option<PathBuf>,
        force_remote: bool,
    ) -> Result<Self> {
        let kind = if force_remote {
            CatalogSourceKind::Remote
        } else {
            config.source
        };

        match kind {
            CatalogSourceKind::Remote => Ok(Self::Remote(RemoteCatalog::new(RemoteSettings {
                project_id: config.project_id().to_string(),
                dataset: config.dataset().to_string(),
                api_version: config.api_version().to_string(),
            })?)),
            CatalogSourceKind::Static => {
                let path = table_override.or_else(|| config.static_path.clone());
                Ok(Self::Static(match path {
                    Some(path) => StaticCatalog::from_path(path),
                    None => StaticCatalog::embedded(),
                }))
            }
        }
    }
}

impl CatalogProvider for CatalogSource {
    fn name(&self) -> &'static str {
        match self {
            Self::Static(provider) => provider.name(),
            Self::Remote(provider) => provider.name(),
        }
    }

    async fn fetch(&self) -> Result<Catalog> {
        match self {
            Self::Static(provider) => provider.fetch().await,
            Self::Remote(provider) => provider.fetch().await,
        }
    }
}

/// Parses an RFC 3339 timestamp such as `2025-02-05T10:00:00Z`.
pub(crate) fn parse_timestamp(raw: &str) -> Option<SystemTime> {
    match chrono::DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(time) => Some(SystemTime::from(time)),
        Err(err) => {
            log::debug!("ignoring unparseable timestamp {:?}: {}", raw, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn static_is_the_default_source() {
        let source = CatalogSource::from_config(&CatalogConfig::default(), None, false)
            .expect("static source");
        assert!(matches!(
            source,
            CatalogSource::Static(ref provider) if provider.origin() == &TableOrigin::Embedded
        ));
        assert_eq!(source.name(), "static");
    }

    #[test]
    fn table_override_wins_over_config_path() {
        let config = CatalogConfig {
            static_path: Some(PathBuf::from("/config/catalog.toml")),
            ..CatalogConfig::default()
        };
        let source = CatalogSource::from_config(&config, Some("/cli/catalog.toml".into()), false)
            .expect("static source");
        let CatalogSource::Static(provider) = source else {
            panic!("expected static source");
        };
        assert_eq!(
            provider.origin(),
            &TableOrigin::File(PathBuf::from("/cli/catalog.toml"))
        );
    }

    #[test]
    fn remote_flag_selects_the_content_api() {
        let source = CatalogSource::from_config(&CatalogConfig::default(), None, true)
            .expect("remote source");
        let CatalogSource::Remote(provider) = source else {
            panic!("expected remote source");
        };
        assert_eq!(provider.settings().project_id, "8t5h923j");
        assert_eq!(provider.settings().dataset, "production");
    }

    #[test]
    fn timestamps_parse_as_utc() {
        let time = parse_timestamp("1970-01-01T00:01:00Z").expect("valid timestamp");
        assert_eq!(time, SystemTime::UNIX_EPOCH + Duration::from_secs(60));
        assert!(parse_timestamp("yesterday").is_none());
    }
}
