// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gestures**: Swipe threshold and pan limits of the product viewer
//! - **Presentation**: Breakpoint selecting the mobile viewer
//! - **Feedback**: Transient copy-button feedback
//! - **Contact**: Fallback WhatsApp number and currency
//! - **Catalog**: Content API coordinates, listing limits and page sizes

// ==========================================================================
// Gesture Defaults
// ==========================================================================

pub use crate::domain::viewer::{PAN_LIMIT_RATIO, SWIPE_THRESHOLD_PX};

/// Scale applied to the photo while the mobile viewer is zoomed.
pub const ZOOMED_SCALE: f32 = 2.0;

// ==========================================================================
// Presentation Defaults
// ==========================================================================

/// Window widths at or below this value use the mobile viewer.
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

// ==========================================================================
// Feedback Defaults
// ==========================================================================

/// How long the copy button shows its confirmation or error state.
pub const COPY_FEEDBACK_MS: u64 = 2000;

/// Interval of the tick subscription that expires transient feedback.
pub const FEEDBACK_TICK_MS: u64 = 100;

// ==========================================================================
// Contact Defaults
// ==========================================================================

/// Gallery number used when an artwork has no seller of its own.
pub const DEFAULT_CONTACT_NUMBER: &str = "995579388833";

/// Currency symbol prefixed to prices (Georgian lari).
pub const DEFAULT_CURRENCY: &str = "₾";

pub use crate::application::contact::WHATSAPP_BASE_URL;

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Content API project identifier.
pub const DEFAULT_REMOTE_PROJECT_ID: &str = "8t5h923j";

/// Content API dataset.
pub const DEFAULT_REMOTE_DATASET: &str = "production";

/// Content API version segment (without the leading `v`).
pub const DEFAULT_REMOTE_API_VERSION: &str = "2025-02-05";

pub use crate::application::query::{ARTISTS_PER_PAGE, HOME_ARTISTS_PREVIEW, HOME_SHOP_PREVIEW};
pub use crate::domain::catalog::SEARCH_ARTWORK_LIMIT;

/// Number of remote photos kept decoded in memory.
pub const DEFAULT_PHOTO_CACHE_ENTRIES: usize = 48;

/// Minimum photo cache capacity.
pub const MIN_PHOTO_CACHE_ENTRIES: usize = 4;

/// Maximum photo cache capacity.
pub const MAX_PHOTO_CACHE_ENTRIES: usize = 256;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(SWIPE_THRESHOLD_PX > 0.0);
    assert!(PAN_LIMIT_RATIO > 0.0);
    assert!(PAN_LIMIT_RATIO <= 1.0);
    assert!(ZOOMED_SCALE > 1.0);
    assert!(MOBILE_BREAKPOINT_PX > 0.0);
    assert!(COPY_FEEDBACK_MS > FEEDBACK_TICK_MS);
    assert!(SEARCH_ARTWORK_LIMIT > 0);
    assert!(ARTISTS_PER_PAGE > 0);
    assert!(HOME_ARTISTS_PREVIEW > 0);
    assert!(HOME_SHOP_PREVIEW > 0);
    assert!(MIN_PHOTO_CACHE_ENTRIES > 0);
    assert!(MAX_PHOTO_CACHE_ENTRIES >= MIN_PHOTO_CACHE_ENTRIES);
    assert!(DEFAULT_PHOTO_CACHE_ENTRIES >= MIN_PHOTO_CACHE_ENTRIES);
    assert!(DEFAULT_PHOTO_CACHE_ENTRIES <= MAX_PHOTO_CACHE_ENTRIES);
};
