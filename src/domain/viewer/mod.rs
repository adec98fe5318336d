// SPDX-License-Identifier: MPL-2.0
//! Product viewer state machine.
//!
//! The viewer is either closed or showing one [`ViewerSession`]. All
//! mutations go through [`ViewerHost`], which owns the only viewer of the
//! application, so two sessions can never be active at once. Transitions
//! requested while closed (or not legal in the current mode) are ignored and
//! logged at debug level.

mod gesture;
mod item;
mod path;
mod scroll;
mod session;

pub use gesture::{
    classify_swipe, PanOffset, PointerTracker, RenderedSize, SwipeDirection, PAN_LIMIT_RATIO,
    SWIPE_THRESHOLD_PX,
};
pub use item::{format_price, split_photo_list, Item, MetadataSlots};
pub use path::{is_remote, resolve_all, resolve_reference, PageDepth, PhotoSource};
pub use scroll::{PageScroll, ScrollLock};
pub use session::ViewerSession;

/// How the viewer is laid out, chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presentation {
    /// Modal with a thumbnail strip; no zoom.
    #[default]
    Desktop,
    /// Fullscreen overlay with zoom, pan and swipe.
    Mobile,
}

impl Presentation {
    /// Widths at or below `breakpoint` get the mobile viewer.
    #[must_use]
    pub fn for_width(width: f32, breakpoint: f32) -> Self {
        if width <= breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

/// Overlay state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewerState {
    #[default]
    Closed,
    Open(ViewerSession),
}

/// Owner of the application's single viewer.
#[derive(Debug, Clone, Default)]
pub struct ViewerHost {
    presentation: Presentation,
    state: ViewerState,
    scroll_lock: ScrollLock,
}

impl ViewerHost {
    #[must_use]
    pub fn new(presentation: Presentation) -> Self {
        Self {
            presentation,
            state: ViewerState::Closed,
            scroll_lock: ScrollLock::default(),
        }
    }

    #[must_use]
    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    #[must_use]
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    #[must_use]
    pub fn session(&self) -> Option<&ViewerSession> {
        match &self.state {
            ViewerState::Open(session) => Some(session),
            ViewerState::Closed => None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, ViewerState::Open(_))
    }

    /// Opens `item`, replacing any open session, and locks page scroll.
    pub fn open(&mut self, item: Item, depth: PageDepth, page: &mut PageScroll) {
        log::debug!("opening viewer for {:?}", item.title);
        self.scroll_lock.acquire(page);
        self.state = ViewerState::Open(ViewerSession::new(item, depth));
    }

    /// Closes the viewer and restores page scroll to its pre-open value.
    pub fn close(&mut self, page: &mut PageScroll) {
        if !self.is_open() {
            log::debug!("close ignored: viewer is closed");
            return;
        }
        self.state = ViewerState::Closed;
        self.scroll_lock.release(page);
    }

    pub fn next(&mut self) {
        if let Some(session) = self.session_mut("next") {
            session.next();
        }
    }

    pub fn previous(&mut self) {
        if let Some(session) = self.session_mut("previous") {
            session.previous();
        }
    }

    pub fn select_thumbnail(&mut self, index: usize) {
        if let Some(session) = self.session_mut("select thumbnail") {
            if !session.select(index) {
                log::debug!("thumbnail {} out of range", index);
            }
        }
    }

    /// Flips zoom. Only the mobile presentation zooms.
    pub fn toggle_zoom(&mut self) {
        if self.presentation != Presentation::Mobile {
            log::debug!("zoom ignored in desktop presentation");
            return;
        }
        if let Some(session) = self.session_mut("toggle zoom") {
            session.toggle_zoom();
        }
    }

    /// Pans a zoomed photo by `(dx, dy)`.
    pub fn pan(&mut self, dx: f32, dy: f32, rendered: RenderedSize) {
        if let Some(session) = self.session_mut("pan") {
            if !session.pan(dx, dy, rendered) {
                log::debug!("pan ignored: photo is not zoomed");
            }
        }
    }

    /// Applies a finished horizontal drag of `dx` pixels (end minus start).
    pub fn swipe(&mut self, dx: f32) {
        let Some(session) = self.session_mut("swipe") else {
            return;
        };
        if session.is_zoomed() {
            log::debug!("swipe ignored: photo is zoomed");
            return;
        }
        match classify_swipe(dx) {
            Some(SwipeDirection::Next) => session.next(),
            Some(SwipeDirection::Previous) => session.previous(),
            None => {}
        }
    }

    pub fn toggle_thumbnails(&mut self) {
        if let Some(session) = self.session_mut("toggle thumbnails") {
            session.toggle_thumbnails();
        }
    }

    fn session_mut(&mut self, transition: &str) -> Option<&mut ViewerSession> {
        match &mut self.state {
            ViewerState::Open(session) => Some(session),
            ViewerState::Closed => {
                log::debug!("{} ignored: viewer is closed", transition);
                None
            }
        }
    }
}
