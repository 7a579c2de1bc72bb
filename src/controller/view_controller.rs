use log::{debug, warn};
use yew::prelude::*;

use crate::controller::navigator::{navigate_to, WindowViewport};
use crate::controller::scroll_tracker::use_scroll_tracker;
use crate::controller::sections::{find_section, DocumentLayout, SECTIONS};
use crate::controller::view_state::{ViewAction, ViewState};

/// Everything the page needs from the navigation controller.
#[derive(Clone, PartialEq)]
pub struct ViewController {
    pub state: UseReducerHandle<ViewState>,
    pub navigate: Callback<&'static str>,
    pub toggle_menu: Callback<()>,
}

#[hook]
pub fn use_view_controller() -> ViewController {
    let state = use_reducer(ViewState::default);

    use_scroll_tracker(SECTIONS, state.dispatcher());

    // Keyed on the dispatcher, which is stable, so scroll readings don't hand Nav and Hero
    // fresh callbacks.
    let navigate = use_callback(
        |key: &'static str, dispatcher: &UseReducerDispatcher<ViewState>| {
            if find_section(SECTIONS, key).is_none() {
                warn!("Navigating to unregistered section #{}", key);
            }
            let layout = DocumentLayout::current();
            let viewport = WindowViewport::current();
            let dispatcher = dispatcher.clone();
            let scrolled = navigate_to(key, layout.as_ref(), viewport.as_ref(), move |action| {
                dispatcher.dispatch(action)
            });
            if !scrolled {
                debug!("#{} is not on the page, only closing the menu", key);
            }
        },
        state.dispatcher(),
    );

    let toggle_menu = use_callback(
        |_: (), dispatcher: &UseReducerDispatcher<ViewState>| {
            dispatcher.dispatch(ViewAction::ToggleMenu)
        },
        state.dispatcher(),
    );

    ViewController {
        state,
        navigate,
        toggle_menu,
    }
}
