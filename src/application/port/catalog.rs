// SPDX-License-Identifier: MPL-2.0
//! Catalog provider port definition.
//!
//! Infrastructure adapters implement [`CatalogProvider`] to deliver the
//! artist and artwork records. Callers run [`fetch`](CatalogProvider::fetch)
//! inside an Iced `Task` and fall back to [`Catalog::empty`] on error.

use crate::domain::catalog::Catalog;
use crate::error::Result;
use std::future::Future;

/// Source of the read-only catalog snapshot.
pub trait CatalogProvider {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Loads the complete catalog. Implementations do not retry.
    fn fetch(&self) -> impl Future<Output = Result<Catalog>> + Send;
}
