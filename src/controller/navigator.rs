use log::debug;
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

use crate::config;
use crate::controller::sections::SectionLayout;
use crate::controller::view_state::ViewAction;

/// Something that can be scrolled to an absolute vertical offset.
pub trait Viewport {
    fn smooth_scroll_to(&self, top: f64);
}

pub struct WindowViewport(Window);

impl WindowViewport {
    pub fn current() -> Option<Self> {
        web_sys::window().map(WindowViewport)
    }
}

impl Viewport for WindowViewport {
    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.0.scroll_to_with_scroll_to_options(&options);
    }
}

/// Offset that leaves the section's top edge just below the fixed header.
pub fn scroll_target<L: SectionLayout + ?Sized>(layout: &L, key: &str) -> Option<f64> {
    layout
        .bounds(key)
        .map(|bounds| bounds.top - config::HEADER_HEIGHT)
}

/// Scrolls to `key` if it is on the page, then closes the menu either way.
/// Returns whether a scroll was started.
pub fn navigate_to<L, V, D>(key: &str, layout: Option<&L>, viewport: Option<&V>, dispatch: D) -> bool
where
    L: SectionLayout + ?Sized,
    V: Viewport + ?Sized,
    D: FnOnce(ViewAction),
{
    let target = layout.and_then(|layout| scroll_target(layout, key));
    let scrolled = match (target, viewport) {
        (Some(top), Some(viewport)) => {
            debug!("Scrolling to #{} at {}", key, top);
            viewport.smooth_scroll_to(top);
            true
        }
        _ => false,
    };
    dispatch(ViewAction::CloseMenu);
    scrolled
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::controller::sections::fixtures::{stacked, FixedLayout};
    use crate::controller::view_state::ViewState;

    #[derive(Default)]
    struct RecordingViewport(RefCell<Vec<f64>>);

    impl Viewport for RecordingViewport {
        fn smooth_scroll_to(&self, top: f64) {
            self.0.borrow_mut().push(top);
        }
    }

    fn open_menu() -> ViewState {
        let mut state = ViewState::default();
        state.apply(ViewAction::ToggleMenu);
        state
    }

    #[test]
    fn test_target_subtracts_header() {
        assert_eq!(scroll_target(&stacked(), "services"), Some(1520.0));
        assert_eq!(scroll_target(&stacked(), "home"), Some(-80.0));
        assert_eq!(scroll_target(&stacked(), "contact"), None);
    }

    #[test]
    fn test_navigate_scrolls_and_closes_menu() {
        let viewport = RecordingViewport::default();
        let mut state = open_menu();
        let scrolled = navigate_to("about", Some(&stacked()), Some(&viewport), |a| state.apply(a));
        assert!(scrolled);
        assert_eq!(*viewport.0.borrow(), vec![720.0]);
        assert!(!state.is_menu_open());
    }

    #[test]
    fn test_missing_section_still_closes_menu() {
        let viewport = RecordingViewport::default();
        let mut state = open_menu();
        let scrolled = navigate_to("contact", Some(&stacked()), Some(&viewport), |a| state.apply(a));
        assert!(!scrolled);
        assert!(viewport.0.borrow().is_empty());
        assert!(!state.is_menu_open());
    }

    #[test]
    fn test_no_document_is_noop_scroll() {
        let viewport = RecordingViewport::default();
        let mut state = open_menu();
        let scrolled = navigate_to::<FixedLayout, _, _>("about", None, Some(&viewport), |a| state.apply(a));
        assert!(!scrolled);
        assert!(!state.is_menu_open());
    }

    #[test]
    fn test_navigate_does_not_touch_active_section() {
        let viewport = RecordingViewport::default();
        let mut state = ViewState::default();
        navigate_to("services", Some(&stacked()), Some(&viewport), |a| state.apply(a));
        assert_eq!(state.active_section(), "home");
    }
}
