// SPDX-License-Identifier: MPL-2.0
//! State of one open viewer, from activation to close.

use super::gesture::{PanOffset, RenderedSize};
use super::item::{Item, MetadataSlots};
use super::path::{resolve_all, PageDepth};

/// An open viewer: the photo snapshot and the navigation/zoom state over it.
///
/// Invariants: `photos` is never empty and `current_index < photos.len()`.
/// The pan offset is zero whenever the photo is not zoomed.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerSession {
    item: Item,
    photos: Vec<String>,
    current_index: usize,
    zoomed: bool,
    pan: PanOffset,
    thumbnails_visible: bool,
    metadata: MetadataSlots,
}

impl ViewerSession {
    /// Snapshots the item's photos, resolved for a page at `depth`.
    #[must_use]
    pub fn new(item: Item, depth: PageDepth) -> Self {
        let photos = resolve_all(&item.photo_list(), depth);
        let metadata = MetadataSlots::bind(&item);
        Self {
            item,
            photos,
            current_index: 0,
            zoomed: false,
            pan: PanOffset::ZERO,
            thumbnails_visible: false,
            metadata,
        }
    }

    #[must_use]
    pub fn item(&self) -> &Item {
        &self.item
    }

    #[must_use]
    pub fn photos(&self) -> &[String] {
        &self.photos
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_photo(&self) -> &str {
        &self.photos[self.current_index]
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    #[must_use]
    pub fn pan_offset(&self) -> PanOffset {
        self.pan
    }

    #[must_use]
    pub fn thumbnails_visible(&self) -> bool {
        self.thumbnails_visible
    }

    #[must_use]
    pub fn metadata(&self) -> &MetadataSlots {
        &self.metadata
    }

    /// Arrows and the thumbnail toggle are only shown for several photos.
    #[must_use]
    pub fn shows_navigation(&self) -> bool {
        self.photos.len() > 1
    }

    pub(super) fn next(&mut self) {
        self.show((self.current_index + 1) % self.photos.len());
    }

    pub(super) fn previous(&mut self) {
        let len = self.photos.len();
        self.show((self.current_index + len - 1) % len);
    }

    /// Jumps to photo `index` and hides the strip. Returns `false` for an
    /// out-of-range index, leaving the session untouched.
    pub(super) fn select(&mut self, index: usize) -> bool {
        if index >= self.photos.len() {
            return false;
        }
        self.show(index);
        self.thumbnails_visible = false;
        true
    }

    pub(super) fn toggle_zoom(&mut self) {
        self.zoomed = !self.zoomed;
        self.pan = PanOffset::ZERO;
    }

    /// Returns `false` when the photo is not zoomed.
    pub(super) fn pan(&mut self, dx: f32, dy: f32, rendered: RenderedSize) -> bool {
        if !self.zoomed {
            return false;
        }
        self.pan = self.pan.shifted(dx, dy, rendered);
        true
    }

    pub(super) fn toggle_thumbnails(&mut self) {
        self.thumbnails_visible = !self.thumbnails_visible;
    }

    fn show(&mut self, index: usize) {
        self.current_index = index;
        self.zoomed = false;
        self.pan = PanOffset::ZERO;
    }
}
