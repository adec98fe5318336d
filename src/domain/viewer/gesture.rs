// SPDX-License-Identifier: MPL-2.0
//! Pointer gestures of the mobile viewer: swipes and pan drags.

/// Minimum horizontal drag (in logical pixels) interpreted as a swipe.
///
/// A drag must strictly exceed this distance to navigate.
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Maximum pan distance on each axis, as a fraction of the rendered image
/// dimension on that axis.
pub const PAN_LIMIT_RATIO: f32 = 0.5;

/// Navigation requested by a horizontal swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left.
    Next,
    /// Finger moved right.
    Previous,
}

/// Classifies a horizontal drag of `dx` pixels (end minus start).
///
/// Drags of at most [`SWIPE_THRESHOLD_PX`] are not swipes.
#[must_use]
pub fn classify_swipe(dx: f32) -> Option<SwipeDirection> {
    if !dx.is_finite() || dx.abs() <= SWIPE_THRESHOLD_PX {
        None
    } else if dx < 0.0 {
        Some(SwipeDirection::Next)
    } else {
        Some(SwipeDirection::Previous)
    }
}

/// On-screen size of the displayed photo, before zoom.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderedSize {
    pub width: f32,
    pub height: f32,
}

impl RenderedSize {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

/// Translation of a zoomed photo, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanOffset {
    pub x: f32,
    pub y: f32,
}

impl PanOffset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Adds a drag delta and clamps each axis to half the rendered size.
    #[must_use]
    pub fn shifted(self, dx: f32, dy: f32, rendered: RenderedSize) -> Self {
        let max_x = rendered.width * PAN_LIMIT_RATIO;
        let max_y = rendered.height * PAN_LIMIT_RATIO;
        Self {
            x: clamp_axis(self.x + dx, max_x),
            y: clamp_axis(self.y + dy, max_y),
        }
    }
}

fn clamp_axis(value: f32, limit: f32) -> f32 {
    if value.is_finite() {
        value.clamp(-limit, limit)
    } else {
        0.0
    }
}

/// Tracks one press-move-release pointer sequence.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    start: Option<(f32, f32)>,
    last: Option<(f32, f32)>,
}

impl PointerTracker {
    pub fn press(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
        self.last = Some((x, y));
    }

    /// Records a move and returns the delta since the previous position,
    /// or `None` when no press is in progress.
    pub fn moved(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        let (last_x, last_y) = self.last?;
        self.last = Some((x, y));
        Some((x - last_x, y - last_y))
    }

    /// Ends the sequence and returns the total horizontal travel.
    pub fn release(&mut self) -> Option<f32> {
        let (start_x, _) = self.start.take()?;
        let (end_x, _) = self.last.take().unwrap_or((start_x, 0.0));
        Some(end_x - start_x)
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.start.is_some()
    }

    pub fn cancel(&mut self) {
        self.start = None;
        self.last = None;
    }
}
