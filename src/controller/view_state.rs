use std::collections::BTreeSet;
use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::controller::sections::DEFAULT_SECTION;

/// One pass of the scroll tracker over the registry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollReading {
    /// First section containing the lookahead position, if any.
    pub active: Option<&'static str>,
    pub scrolled: bool,
    /// Sections whose top edge is inside the reveal line.
    pub entered: Vec<&'static str>,
}

pub enum ViewAction {
    Scrolled(ScrollReading),
    ToggleMenu,
    CloseMenu,
}

/// Navigation state for one mounted page. Created on mount, dropped on teardown.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    active_section: &'static str,
    menu_open: bool,
    scrolled: bool,
    revealed: BTreeSet<&'static str>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_section: DEFAULT_SECTION,
            menu_open: false,
            scrolled: false,
            revealed: BTreeSet::new(),
        }
    }
}

impl ViewState {
    pub fn active_section(&self) -> &'static str {
        self.active_section
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    pub fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::Scrolled(reading) => {
                // No match keeps whatever was active before.
                if let Some(key) = reading.active {
                    if key != self.active_section {
                        debug!("Active section {} -> {}", self.active_section, key);
                        self.active_section = key;
                    }
                }
                self.scrolled = reading.scrolled;
                self.revealed.extend(reading.entered);
            }
            ViewAction::ToggleMenu => {
                self.menu_open = !self.menu_open;
            }
            ViewAction::CloseMenu => {
                self.menu_open = false;
            }
        }
    }
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(active: Option<&'static str>) -> ScrollReading {
        ScrollReading { active, ..Default::default() }
    }

    #[test]
    fn test_default_state() {
        let state = ViewState::default();
        assert_eq!(state.active_section(), "home");
        assert!(!state.is_menu_open());
        assert!(!state.is_scrolled());
        assert!(!state.is_revealed("home"));
    }

    #[test]
    fn test_unmatched_reading_keeps_active_section() {
        let mut state = ViewState::default();
        state.apply(ViewAction::Scrolled(reading(Some("about"))));
        state.apply(ViewAction::Scrolled(reading(None)));
        assert_eq!(state.active_section(), "about");
    }

    #[test]
    fn test_toggle_menu_flips() {
        let mut state = ViewState::default();
        state.apply(ViewAction::ToggleMenu);
        assert!(state.is_menu_open());
        state.apply(ViewAction::ToggleMenu);
        assert!(!state.is_menu_open());
    }

    #[test]
    fn test_close_menu_when_already_closed() {
        let mut state = ViewState::default();
        state.apply(ViewAction::CloseMenu);
        assert!(!state.is_menu_open());
    }

    #[test]
    fn test_revealed_never_shrinks() {
        let mut state = ViewState::default();
        state.apply(ViewAction::Scrolled(ScrollReading {
            active: Some("home"),
            scrolled: true,
            entered: vec!["home", "about"],
        }));
        state.apply(ViewAction::Scrolled(ScrollReading {
            active: Some("home"),
            scrolled: false,
            entered: vec!["home"],
        }));
        assert!(state.is_revealed("about"));
        assert!(!state.is_scrolled());
    }

    #[test]
    fn test_reduce_returns_same_rc_when_unchanged() {
        let state = Rc::new(ViewState::default());
        let next = state.clone().reduce(ViewAction::CloseMenu);
        assert!(Rc::ptr_eq(&state, &next));

        let toggled = state.clone().reduce(ViewAction::ToggleMenu);
        assert!(!Rc::ptr_eq(&state, &toggled));
        assert!(toggled.is_menu_open());
    }
}
