// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
    Clipboard(String),
    Browser(String),
}

/// Failures raised while loading the artist/artwork catalog.
///
/// The app never shows these to the viewer directly: a failed fetch is
/// replaced by an empty catalog and a localized warning.
#[derive(Debug, Clone)]
pub enum CatalogError {
    /// The static table could not be parsed.
    InvalidTable(String),

    /// The content API could not be reached.
    Network(String),

    /// The content API answered with a non-success HTTP status.
    Status(u16),

    /// The content API answered with a body that is not the expected JSON.
    MalformedResponse(String),
}

impl CatalogError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CatalogError::InvalidTable(_) => "notification-catalog-invalid-table",
            CatalogError::Network(_) => "notification-catalog-network",
            CatalogError::Status(_) => "notification-catalog-status",
            CatalogError::MalformedResponse(_) => "notification-catalog-malformed",
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::InvalidTable(msg) => write!(f, "invalid catalog table: {}", msg),
            CatalogError::Network(msg) => write!(f, "network error: {}", msg),
            CatalogError::Status(code) => write!(f, "content API returned HTTP {}", code),
            CatalogError::MalformedResponse(msg) => write!(f, "malformed response: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Clipboard(e) => write!(f, "Clipboard Error: {}", e),
            Error::Browser(e) => write!(f, "Browser Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Catalog(CatalogError::MalformedResponse(err.to_string()))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Error::Catalog(CatalogError::Status(status.as_u16())),
            None => Error::Catalog(CatalogError::Network(err.to_string())),
        }
    }
}

impl From<arboard::Error> for Error {
    fn from(err: arboard::Error) -> Self {
        Error::Clipboard(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
