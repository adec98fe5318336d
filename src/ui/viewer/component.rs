// SPDX-License-Identifier: MPL-2.0
//! Viewer component: maps pointer, keyboard and button input onto the
//! [`ViewerHost`] transitions.

use super::{desktop, mobile, ViewContext};
use crate::app::config::defaults::ZOOMED_SCALE;
use crate::domain::viewer::{
    Item, PageDepth, PageScroll, PointerTracker, Presentation, RenderedSize, ViewerHost,
};
use crate::ui::design_tokens::sizing;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{keyboard, Element, Point, Size, Task};

/// Identifier of the scrollable holding a zoomed photo.
pub const ZOOM_SCROLLABLE_ID: &str = "viewer-zoom-scrollable";

#[derive(Debug, Clone)]
pub enum Message {
    Close,
    Next,
    Previous,
    SelectThumbnail(usize),
    ToggleThumbnails,
    ToggleZoom,
    PointerPressed,
    PointerMoved(Point),
    PointerReleased,
    /// The pointer left the photo area.
    PointerExited,
    ContactSeller,
}

/// Side effects the application performs after a viewer message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Hand the item over to the seller's messaging link.
    OpenContact(Item),
}

#[derive(Debug, Default)]
pub struct State {
    host: ViewerHost,
    pointer: PointerTracker,
    cursor: Option<Point>,
    rendered: RenderedSize,
    /// Directory of the page the viewer was opened from.
    page_directory: Option<&'static str>,
}

impl State {
    #[must_use]
    pub fn new(presentation: Presentation) -> Self {
        Self {
            host: ViewerHost::new(presentation),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn host(&self) -> &ViewerHost {
        &self.host
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.host.is_open()
    }

    #[must_use]
    pub fn presentation(&self) -> Presentation {
        self.host.presentation()
    }

    /// Switches presentation. Only allowed while closed, so an open session
    /// never changes layout under the user.
    pub fn set_presentation(&mut self, presentation: Presentation) {
        if self.host.is_open() {
            log::debug!("presentation change ignored: viewer is open");
            return;
        }
        if self.host.presentation() != presentation {
            log::debug!("viewer presentation: {:?}", presentation);
            self.host = ViewerHost::new(presentation);
        }
    }

    /// Tracks the window size; the mobile photo area is the window minus
    /// its top bar. Pan limits are measured against this area, since the
    /// photo's intrinsic size is unknown here.
    pub fn set_window_size(&mut self, size: Size) {
        self.rendered = RenderedSize::new(size.width, size.height - sizing::MOBILE_BAR_HEIGHT);
    }

    #[must_use]
    pub fn rendered_size(&self) -> RenderedSize {
        self.rendered
    }

    pub fn open(
        &mut self,
        item: Item,
        depth: PageDepth,
        page_directory: Option<&'static str>,
        page: &mut PageScroll,
    ) {
        self.pointer.cancel();
        self.page_directory = page_directory;
        self.host.open(item, depth, page);
    }

    pub fn handle_message(
        &mut self,
        message: Message,
        page: &mut PageScroll,
    ) -> (Effect, Task<Message>) {
        match message {
            Message::Close => {
                self.pointer.cancel();
                self.host.close(page);
            }
            Message::Next => {
                self.host.next();
            }
            Message::Previous => {
                self.host.previous();
            }
            Message::SelectThumbnail(index) => {
                self.host.select_thumbnail(index);
            }
            Message::ToggleThumbnails => {
                self.host.toggle_thumbnails();
            }
            Message::ToggleZoom => {
                self.pointer.cancel();
                self.host.toggle_zoom();
                return (Effect::None, self.sync_zoom_scroll());
            }
            Message::PointerPressed => {
                if let (true, Some(cursor)) = (self.host.is_open(), self.cursor) {
                    self.pointer.press(cursor.x, cursor.y);
                }
            }
            Message::PointerMoved(position) => {
                self.cursor = Some(position);
                let zoomed = self.host.session().is_some_and(|s| s.is_zoomed());
                if let Some((dx, dy)) = self.pointer.moved(position.x, position.y) {
                    if zoomed {
                        self.host.pan(dx, dy, self.rendered);
                        return (Effect::None, self.sync_zoom_scroll());
                    }
                }
            }
            Message::PointerReleased | Message::PointerExited => {
                let zoomed = self.host.session().is_some_and(|s| s.is_zoomed());
                if let Some(dx) = self.pointer.release() {
                    if !zoomed {
                        self.host.swipe(dx);
                    }
                }
            }
            Message::ContactSeller => {
                return match self.host.session() {
                    Some(session) => (Effect::OpenContact(session.item().clone()), Task::none()),
                    None => {
                        log::debug!("contact ignored: viewer is closed");
                        (Effect::None, Task::none())
                    }
                };
            }
        }
        (Effect::None, Task::none())
    }

    /// Escape closes, the horizontal arrows navigate. Returns `None` for
    /// keys the viewer does not use or while it is closed.
    pub fn handle_key(&mut self, key: &keyboard::Key, page: &mut PageScroll) -> Option<Task<Message>> {
        if !self.host.is_open() {
            return None;
        }
        let message = match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => Message::Close,
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Message::Previous,
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Message::Next,
            _ => return None,
        };
        let (_, task) = self.handle_message(message, page);
        Some(task)
    }

    /// Scrolls the zoomed photo so the pan offset is centered on screen.
    fn sync_zoom_scroll(&self) -> Task<Message> {
        let Some(session) = self.host.session().filter(|s| s.is_zoomed()) else {
            return Task::none();
        };
        let pan = session.pan_offset();
        operation::snap_to(
            Id::new(ZOOM_SCROLLABLE_ID),
            zoom_offset(pan.x, pan.y, self.rendered),
        )
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
        let session = self.host.session()?;
        Some(match self.host.presentation() {
            Presentation::Desktop => desktop::view(session, ctx, self.page_directory),
            Presentation::Mobile => mobile::view(session, ctx, self.page_directory, self.rendered),
        })
    }
}

/// Relative scroll offset showing a zoomed photo panned by `(x, y)`: zero
/// pan is the center and dragging right reveals the left edge.
fn zoom_offset(x: f32, y: f32, rendered: RenderedSize) -> RelativeOffset {
    let axis = |pan: f32, size: f32| {
        let scrollable = size * (ZOOMED_SCALE - 1.0);
        if scrollable > 0.0 {
            (0.5 - pan / scrollable).clamp(0.0, 1.0)
        } else {
            0.5
        }
    };
    RelativeOffset {
        x: axis(x, rendered.width),
        y: axis(y, rendered.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::viewer::PanOffset;

    fn item(photos: &[&str]) -> Item {
        Item {
            title: "Garden".into(),
            photos: photos.iter().map(|p| (*p).to_string()).collect(),
            primary_image: "images/garden.jpg".into(),
            ..Item::default()
        }
    }

    fn open_state(presentation: Presentation, photos: &[&str]) -> (State, PageScroll) {
        let mut state = State::new(presentation);
        state.set_window_size(Size::new(400.0, 856.0));
        let mut page = PageScroll::Enabled;
        state.open(item(photos), PageDepth::TopLevel, None, &mut page);
        (state, page)
    }

    fn index(state: &State) -> usize {
        state.host().session().map_or(usize::MAX, |s| s.current_index())
    }

    #[test]
    fn rendered_size_excludes_the_top_bar() {
        let (state, _) = open_state(Presentation::Mobile, &["a"]);
        assert_eq!(state.rendered_size(), RenderedSize::new(400.0, 800.0));
    }

    #[test]
    fn keyboard_navigates_and_closes() {
        let (mut state, mut page) = open_state(Presentation::Desktop, &["a", "b", "c"]);
        assert_eq!(page, PageScroll::Locked);

        let right = keyboard::Key::Named(keyboard::key::Named::ArrowRight);
        let left = keyboard::Key::Named(keyboard::key::Named::ArrowLeft);
        let escape = keyboard::Key::Named(keyboard::key::Named::Escape);

        assert!(state.handle_key(&right, &mut page).is_some());
        assert_eq!(index(&state), 1);
        state.handle_key(&left, &mut page);
        state.handle_key(&left, &mut page);
        assert_eq!(index(&state), 2);

        state.handle_key(&escape, &mut page);
        assert!(!state.is_open());
        assert_eq!(page, PageScroll::Enabled);
        assert!(state.handle_key(&escape, &mut page).is_none());
    }

    #[test]
    fn drag_past_threshold_swipes() {
        let (mut state, mut page) = open_state(Presentation::Mobile, &["a", "b", "c"]);

        state.handle_message(Message::PointerMoved(Point::new(200.0, 300.0)), &mut page);
        state.handle_message(Message::PointerPressed, &mut page);
        state.handle_message(Message::PointerMoved(Point::new(149.0, 300.0)), &mut page);
        state.handle_message(Message::PointerReleased, &mut page);
        assert_eq!(index(&state), 1);

        state.handle_message(Message::PointerPressed, &mut page);
        state.handle_message(Message::PointerMoved(Point::new(198.0, 300.0)), &mut page);
        state.handle_message(Message::PointerReleased, &mut page);
        assert_eq!(index(&state), 1, "49 px is not a swipe");
    }

    #[test]
    fn zoomed_drag_pans_instead_of_swiping() {
        let (mut state, mut page) = open_state(Presentation::Mobile, &["a", "b"]);
        state.handle_message(Message::ToggleZoom, &mut page);

        state.handle_message(Message::PointerMoved(Point::new(0.0, 0.0)), &mut page);
        state.handle_message(Message::PointerPressed, &mut page);
        state.handle_message(Message::PointerMoved(Point::new(-1000.0, 30.0)), &mut page);
        state.handle_message(Message::PointerReleased, &mut page);

        let session = state.host().session().cloned();
        let session = session.as_ref();
        assert_eq!(session.map(|s| s.current_index()), Some(0));
        let pan = session.map(|s| s.pan_offset()).unwrap_or_default();
        assert_eq!(pan.x, -200.0);
        assert_eq!(pan.y, 30.0);
    }

    #[test]
    fn leaving_the_photo_ends_a_zoomed_drag() {
        let (mut state, mut page) = open_state(Presentation::Mobile, &["a", "b"]);
        state.handle_message(Message::ToggleZoom, &mut page);

        state.handle_message(Message::PointerMoved(Point::new(100.0, 100.0)), &mut page);
        state.handle_message(Message::PointerPressed, &mut page);
        state.handle_message(Message::PointerMoved(Point::new(90.0, 100.0)), &mut page);
        state.handle_message(Message::PointerExited, &mut page);
        // Hovering back with no button held must not pan.
        state.handle_message(Message::PointerMoved(Point::new(10.0, 300.0)), &mut page);

        let pan = state.host().session().map(|s| s.pan_offset());
        assert_eq!(pan, Some(PanOffset { x: -10.0, y: 0.0 }));
        assert_eq!(index(&state), 0);
    }

    #[test]
    fn swipe_leaving_the_photo_still_navigates() {
        let (mut state, mut page) = open_state(Presentation::Mobile, &["a", "b", "c"]);

        state.handle_message(Message::PointerMoved(Point::new(300.0, 300.0)), &mut page);
        state.handle_message(Message::PointerPressed, &mut page);
        state.handle_message(Message::PointerMoved(Point::new(150.0, 300.0)), &mut page);
        state.handle_message(Message::PointerExited, &mut page);
        assert_eq!(index(&state), 1);

        // The exit ended the gesture; a later hover-and-leave does nothing.
        state.handle_message(Message::PointerMoved(Point::new(380.0, 300.0)), &mut page);
        state.handle_message(Message::PointerExited, &mut page);
        assert_eq!(index(&state), 1);
    }

    #[test]
    fn mobile_thumbnails_toggle_and_select() {
        let (mut state, mut page) = open_state(Presentation::Mobile, &["a", "b", "c"]);
        let strip_visible = |state: &State| state.host().session().map(|s| s.thumbnails_visible());

        state.handle_message(Message::ToggleThumbnails, &mut page);
        assert_eq!(strip_visible(&state), Some(true));
        assert_eq!(index(&state), 0);

        state.handle_message(Message::ToggleZoom, &mut page);
        state.handle_message(Message::SelectThumbnail(2), &mut page);
        assert_eq!(index(&state), 2);
        assert_eq!(strip_visible(&state), Some(false));
        assert_eq!(state.host().session().map(|s| s.is_zoomed()), Some(false));

        state.handle_message(Message::ToggleThumbnails, &mut page);
        state.handle_message(Message::SelectThumbnail(7), &mut page);
        assert_eq!(index(&state), 2);
        assert_eq!(strip_visible(&state), Some(true));
    }

    #[test]
    fn zoom_is_ignored_on_desktop() {
        let (mut state, mut page) = open_state(Presentation::Desktop, &["a"]);
        state.handle_message(Message::ToggleZoom, &mut page);
        assert_eq!(
            state.host().session().map(|s| s.is_zoomed()),
            Some(false)
        );
    }

    #[test]
    fn contact_carries_the_open_item() {
        let (mut state, mut page) = open_state(Presentation::Desktop, &["a"]);
        let (effect, _) = state.handle_message(Message::ContactSeller, &mut page);
        assert!(matches!(effect, Effect::OpenContact(item) if item.title == "Garden"));

        state.handle_message(Message::Close, &mut page);
        let (effect, _) = state.handle_message(Message::ContactSeller, &mut page);
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn presentation_is_fixed_while_open() {
        let (mut state, mut page) = open_state(Presentation::Desktop, &["a"]);
        state.set_presentation(Presentation::Mobile);
        assert_eq!(state.presentation(), Presentation::Desktop);

        state.handle_message(Message::Close, &mut page);
        state.set_presentation(Presentation::Mobile);
        assert_eq!(state.presentation(), Presentation::Mobile);
    }

    #[test]
    fn zoom_offset_maps_pan_limits_to_scroll_edges() {
        let rendered = RenderedSize::new(400.0, 800.0);
        assert_eq!(zoom_offset(0.0, 0.0, rendered), RelativeOffset { x: 0.5, y: 0.5 });
        assert_eq!(
            zoom_offset(200.0, -400.0, rendered),
            RelativeOffset { x: 0.0, y: 1.0 }
        );
        assert_eq!(
            zoom_offset(10.0, 10.0, RenderedSize::default()),
            RelativeOffset { x: 0.5, y: 0.5 }
        );
    }
}
