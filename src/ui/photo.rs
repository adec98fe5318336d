// SPDX-License-Identifier: MPL-2.0
//! Turns resolved photo references into Iced image widgets.

use crate::domain::viewer::PhotoSource;
use crate::infrastructure::photos::{CachedPhoto, PhotoCache};
use crate::ui::design_tokens::typography;
use iced::widget::image::{Handle, Image};
use iced::widget::{Container, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::path::{Path, PathBuf};

/// Where relative photo references of a page are looked up.
#[derive(Debug, Clone, Copy)]
pub struct PhotoContext<'a> {
    pub asset_root: &'a Path,
    pub cache: &'a PhotoCache,
}

impl PhotoContext<'_> {
    /// Locates a resolved reference used on a page living in `page_directory`
    /// (relative to the asset root).
    #[must_use]
    pub fn locate(&self, resolved: &str, page_directory: Option<&str>) -> PhotoSource {
        PhotoSource::locate(resolved, &page_dir(self.asset_root, page_directory))
    }

    /// Image handle of `source`, if it can be shown right now.
    #[must_use]
    pub fn handle(&self, source: &PhotoSource) -> Option<Handle> {
        match source {
            PhotoSource::Local(path) => Some(Handle::from_path(path)),
            PhotoSource::Remote(url) => self.cache.handle(url).cloned(),
        }
    }

    /// Renders `source` filling `width` × `height`, or a placeholder glyph
    /// while it is downloading or after it failed.
    pub fn view<'a, Message: 'a>(
        &self,
        source: &PhotoSource,
        width: Length,
        height: Length,
        fit: ContentFit,
    ) -> Element<'a, Message> {
        if let Some(handle) = self.handle(source) {
            return Image::new(handle)
                .width(width)
                .height(height)
                .content_fit(fit)
                .into();
        }

        let glyph = match source {
            PhotoSource::Remote(url) => match self.cache.peek(url) {
                Some(CachedPhoto::Failed) => "⚠",
                _ => "…",
            },
            PhotoSource::Local(_) => "…",
        };
        Container::new(Text::new(glyph).size(typography::TITLE_LG))
            .width(width)
            .height(height)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    }
}

fn page_dir(asset_root: &Path, page_directory: Option<&str>) -> PathBuf {
    match page_directory {
        Some(directory) => asset_root.join(directory),
        None => asset_root.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_page_references_resolve_back_to_the_root() {
        let cache = PhotoCache::new(8);
        let context = PhotoContext {
            asset_root: Path::new("/srv/ninart"),
            cache: &cache,
        };
        assert_eq!(
            context.locate("../images/a.jpg", Some("artists")),
            PhotoSource::Local(PathBuf::from("/srv/ninart/images/a.jpg"))
        );
        assert_eq!(
            context.locate("images/a.jpg", None),
            PhotoSource::Local(PathBuf::from("/srv/ninart/images/a.jpg"))
        );
    }

    #[test]
    fn remote_photos_wait_for_the_cache() {
        let cache = PhotoCache::new(8);
        let context = PhotoContext {
            asset_root: Path::new("/srv"),
            cache: &cache,
        };
        let source = context.locate("https://cdn.example.com/a.jpg", Some("sale"));
        assert!(matches!(source, PhotoSource::Remote(_)));
        assert!(context.handle(&source).is_none());
    }
}
