// SPDX-License-Identifier: MPL-2.0
//! Photo reference resolution.
//!
//! Catalog photo references are either absolute URLs or paths relative to
//! the site root. Pages one directory deep (an artist shop, the shop) see the
//! same relative paths through one `../`.

use std::path::{Component, Path, PathBuf};

/// Directory depth of the page hosting the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageDepth {
    #[default]
    TopLevel,
    Nested,
}

/// Returns `true` for `http://` and `https://` references.
#[must_use]
pub fn is_remote(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

/// Resolves one photo reference for a page at `depth`.
///
/// Remote references are returned verbatim. Relative references are
/// lower-cased and, on nested pages, prefixed with exactly one `../`.
#[must_use]
pub fn resolve_reference(reference: &str, depth: PageDepth) -> String {
    if is_remote(reference) {
        return reference.to_string();
    }
    let lowered = reference.to_lowercase();
    match depth {
        PageDepth::TopLevel => lowered,
        PageDepth::Nested => format!("../{lowered}"),
    }
}

/// Resolves every reference of a photo list.
#[must_use]
pub fn resolve_all(references: &[String], depth: PageDepth) -> Vec<String> {
    references
        .iter()
        .map(|reference| resolve_reference(reference, depth))
        .collect()
}

/// Where a resolved reference can be loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PhotoSource {
    Remote(String),
    Local(PathBuf),
}

impl PhotoSource {
    /// Locates a resolved reference for a page living in `page_dir`.
    ///
    /// `..` segments are applied lexically so the page directory does not
    /// need to exist on disk.
    #[must_use]
    pub fn locate(resolved: &str, page_dir: &Path) -> Self {
        if is_remote(resolved) {
            return Self::Remote(resolved.to_string());
        }
        Self::Local(normalize(&page_dir.join(resolved)))
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            Component::CurDir => {}
            other => normalized.push(other),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_references_are_untouched() {
        let url = "https://cdn.sanity.io/images/Abc/Photo.JPG";
        assert_eq!(resolve_reference(url, PageDepth::TopLevel), url);
        assert_eq!(resolve_reference(url, PageDepth::Nested), url);
    }

    #[test]
    fn relative_references_are_lowercased() {
        assert_eq!(
            resolve_reference("images/Rose11.PNG", PageDepth::TopLevel),
            "images/rose11.png"
        );
    }

    #[test]
    fn nested_pages_get_exactly_one_parent_prefix() {
        assert_eq!(
            resolve_reference("images/sea4.jpg", PageDepth::Nested),
            "../images/sea4.jpg"
        );
        let all = resolve_all(
            &["A.jpg".to_string(), "http://x/B.jpg".to_string()],
            PageDepth::Nested,
        );
        assert_eq!(all, vec!["../a.jpg", "http://x/B.jpg"]);
    }

    #[test]
    fn locate_joins_parent_segments_lexically() {
        let root = Path::new("/srv/gallery");
        assert_eq!(
            PhotoSource::locate("../images/a.jpg", &root.join("artists")),
            PhotoSource::Local(PathBuf::from("/srv/gallery/images/a.jpg"))
        );
        assert_eq!(
            PhotoSource::locate("images/a.jpg", root),
            PhotoSource::Local(PathBuf::from("/srv/gallery/images/a.jpg"))
        );
    }

    #[test]
    fn locate_keeps_remote_urls() {
        assert_eq!(
            PhotoSource::locate("https://x/y.jpg", Path::new("/srv")),
            PhotoSource::Remote("https://x/y.jpg".to_string())
        );
    }
}
