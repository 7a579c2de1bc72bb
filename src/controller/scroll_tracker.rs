use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;
use crate::controller::sections::{DocumentLayout, Section, SectionLayout};
use crate::controller::timers::Throttle;
use crate::controller::view_state::{ScrollReading, ViewAction, ViewState};

pub fn scroll_position(scroll_y: f64) -> f64 {
    scroll_y + config::LOOKAHEAD_MARGIN
}

/// First registered section whose extent contains the lookahead position.
/// Sections missing from the layout are skipped.
pub fn locate<L: SectionLayout + ?Sized>(
    sections: &[Section],
    layout: &L,
    scroll_y: f64,
) -> Option<&'static str> {
    let position = scroll_position(scroll_y);
    sections
        .iter()
        .find(|section| {
            layout
                .bounds(section.key)
                .map_or(false, |bounds| bounds.contains(position))
        })
        .map(|section| section.key)
}

/// Sections whose top edge has crossed the reveal line of the viewport.
pub fn entered<L: SectionLayout + ?Sized>(
    sections: &[Section],
    layout: &L,
    scroll_y: f64,
    viewport_height: f64,
) -> Vec<&'static str> {
    let reveal_line = scroll_y + viewport_height * config::REVEAL_RATIO;
    sections
        .iter()
        .filter(|section| {
            layout
                .bounds(section.key)
                .map_or(false, |bounds| bounds.top < reveal_line)
        })
        .map(|section| section.key)
        .collect()
}

pub fn read<L: SectionLayout + ?Sized>(
    sections: &[Section],
    layout: &L,
    scroll_y: f64,
    viewport_height: f64,
) -> ScrollReading {
    ScrollReading {
        active: locate(sections, layout, scroll_y),
        scrolled: scroll_y > config::SCROLLED_THRESHOLD,
        entered: entered(sections, layout, scroll_y, viewport_height),
    }
}

fn read_window(sections: &[Section]) -> Option<ScrollReading> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let layout = DocumentLayout::new(window.document()?);
    Some(read(sections, &layout, scroll_y, viewport_height))
}

/// Feeds window scroll readings into `view` until the calling component unmounts.
#[hook]
pub fn use_scroll_tracker(sections: &'static [Section], view: UseReducerDispatcher<ViewState>) {
    use_effect_with_deps(
        move |_| {
            let measure = Rc::new(move || {
                if let Some(reading) = read_window(sections) {
                    view.dispatch(ViewAction::Scrolled(reading));
                }
            });

            let throttle: Rc<RefCell<Throttle<Timeout>>> = Rc::new(RefCell::new(Throttle::default()));

            let callback = Closure::<dyn Fn()>::new({
                let throttle = throttle.clone();
                let measure = measure.clone();
                move || {
                    let fired = throttle.clone();
                    let measure = measure.clone();
                    throttle.borrow_mut().request(move || {
                        Timeout::new(config::SCROLL_THROTTLE_MS, move || {
                            fired.borrow_mut().fired();
                            measure();
                        })
                    });
                }
            });

            let window = web_sys::window();
            if let Some(window) = &window {
                if let Err(e) = window.add_event_listener_with_callback(
                    "scroll",
                    callback.as_ref().unchecked_ref(),
                ) {
                    error!("Failed to attach scroll listener: {:?}", e);
                }
            }

            // Initial check
            measure();

            move || {
                if let Some(window) = window {
                    if let Err(e) = window.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    ) {
                        error!("Failed to remove scroll listener: {:?}", e);
                    }
                }
                throttle.borrow_mut().cancel();
            }
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::sections::fixtures::{stacked, FixedLayout, THREE};
    use crate::controller::sections::{SectionBounds, SECTIONS};
    use crate::controller::view_state::ViewState;

    #[test]
    fn test_lookahead_moves_into_next_section() {
        // raw 750 + margin 100 = 850, inside about
        assert_eq!(locate(THREE, &stacked(), 750.0), Some("about"));
    }

    #[test]
    fn test_position_strictly_inside_each_section() {
        let layout = stacked();
        for (raw, expected) in [(0.0, "home"), (650.0, "home"), (1000.0, "about"), (2000.0, "services")] {
            assert_eq!(locate(THREE, &layout, raw), Some(expected), "scroll_y = {}", raw);
        }
    }

    #[test]
    fn test_boundary_belongs_to_lower_section() {
        // 700 + 100 = 800 is the first pixel of about
        assert_eq!(locate(THREE, &stacked(), 700.0), Some("about"));
        assert_eq!(locate(THREE, &stacked(), 699.0), Some("home"));
    }

    #[test]
    fn test_below_last_section_matches_nothing() {
        assert_eq!(locate(THREE, &stacked(), 2400.0), None);
    }

    #[test]
    fn test_overlap_prefers_earlier_registration() {
        let layout = FixedLayout(vec![
            ("home", SectionBounds::new(0.0, 1000.0)),
            ("about", SectionBounds::new(800.0, 800.0)),
            ("services", SectionBounds::new(1600.0, 800.0)),
        ]);
        assert_eq!(locate(THREE, &layout, 750.0), Some("home"));
    }

    #[test]
    fn test_missing_section_is_skipped() {
        let layout = FixedLayout(vec![
            ("home", SectionBounds::new(0.0, 800.0)),
            ("services", SectionBounds::new(1600.0, 800.0)),
        ]);
        assert_eq!(locate(THREE, &layout, 900.0), None);
        assert_eq!(locate(THREE, &layout, 1600.0), Some("services"));
    }

    #[test]
    fn test_entered_uses_viewport_fraction() {
        // reveal line = 0 + 1000 * 0.85 = 850
        assert_eq!(entered(THREE, &stacked(), 0.0, 1000.0), vec!["home", "about"]);
        assert_eq!(entered(THREE, &stacked(), 900.0, 1000.0), vec!["home", "about", "services"]);
    }

    #[test]
    fn test_read_sets_scrolled_flag() {
        assert!(!read(THREE, &stacked(), 50.0, 900.0).scrolled);
        assert!(read(THREE, &stacked(), 51.0, 900.0).scrolled);
    }

    #[test]
    fn test_active_section_always_registered() {
        let layout = stacked();
        let mut state = ViewState::default();
        for raw in [-300.0, 0.0, 420.0, 1300.0, 2350.0, 5000.0, 10.0] {
            state.apply(ViewAction::Scrolled(read(THREE, &layout, raw, 900.0)));
            assert!(THREE.iter().any(|s| s.key == state.active_section()));
        }
        // 10 + 100 lands back in home
        assert_eq!(state.active_section(), "home");
    }

    #[test]
    fn test_default_holds_until_first_match() {
        let layout = FixedLayout(vec![("about", SectionBounds::new(2000.0, 500.0))]);
        let mut state = ViewState::default();
        state.apply(ViewAction::Scrolled(read(SECTIONS, &layout, 0.0, 900.0)));
        assert_eq!(state.active_section(), "home");
        state.apply(ViewAction::Scrolled(read(SECTIONS, &layout, 1950.0, 900.0)));
        assert_eq!(state.active_section(), "about");
    }
}
