// SPDX-License-Identifier: MPL-2.0
//! Page scroll suppression while an overlay is open.

/// Whether the page behind overlays reacts to scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageScroll {
    #[default]
    Enabled,
    Locked,
}

/// Remembers the page scroll value an overlay replaced.
///
/// Acquiring twice keeps the first saved value, so reopening an overlay
/// cannot lose the original state.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    saved: Option<PageScroll>,
}

impl ScrollLock {
    pub fn acquire(&mut self, page: &mut PageScroll) {
        if self.saved.is_none() {
            self.saved = Some(*page);
            *page = PageScroll::Locked;
        }
    }

    /// Restores the value saved by [`acquire`](Self::acquire).
    pub fn release(&mut self, page: &mut PageScroll) {
        if let Some(previous) = self.saved.take() {
            *page = previous;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_restores_previous_value() {
        let mut page = PageScroll::Enabled;
        let mut lock = ScrollLock::default();
        lock.acquire(&mut page);
        assert_eq!(page, PageScroll::Locked);
        lock.release(&mut page);
        assert_eq!(page, PageScroll::Enabled);
    }

    #[test]
    fn nested_locks_unwind_in_order() {
        let mut page = PageScroll::Enabled;
        let mut outer = ScrollLock::default();
        let mut inner = ScrollLock::default();
        outer.acquire(&mut page);
        inner.acquire(&mut page);
        inner.release(&mut page);
        assert_eq!(page, PageScroll::Locked);
        outer.release(&mut page);
        assert_eq!(page, PageScroll::Enabled);
    }

    #[test]
    fn double_acquire_keeps_first_value() {
        let mut page = PageScroll::Enabled;
        let mut lock = ScrollLock::default();
        lock.acquire(&mut page);
        lock.acquire(&mut page);
        lock.release(&mut page);
        assert_eq!(page, PageScroll::Enabled);
        assert!(lock.saved.is_none());
    }

    #[test]
    fn release_without_acquire_is_harmless() {
        let mut page = PageScroll::Locked;
        ScrollLock::default().release(&mut page);
        assert_eq!(page, PageScroll::Locked);
    }
}
