use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::controller::timers::TimerSlot;

/// `Loading -> Ready`, terminal. There is no way back to `Loading`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
}

impl Default for LoadPhase {
    fn default() -> Self {
        LoadPhase::Loading
    }
}

impl LoadPhase {
    pub fn is_loading(self) -> bool {
        self == LoadPhase::Loading
    }

    /// The load timer fired.
    pub fn elapse(self) -> Self {
        LoadPhase::Ready
    }
}

/// Starts the one-shot load timer on mount. Unmounting before it fires cancels it.
#[hook]
pub fn use_load_sequencer(duration_ms: u32) -> LoadPhase {
    let phase = use_state_eq(LoadPhase::default);

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |_| {
                let mut timer = TimerSlot::default();
                timer.arm(Timeout::new(duration_ms, move || {
                    info!("Load sequence finished after {}ms", duration_ms);
                    phase.set(phase.elapse());
                }));
                move || {
                    timer.cancel();
                }
            },
            (),
        );
    }

    *phase
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::controller::timers::fixtures::FakeTimer;

    #[test]
    fn test_starts_loading() {
        assert!(LoadPhase::default().is_loading());
    }

    #[test]
    fn test_elapse_is_terminal() {
        let ready = LoadPhase::default().elapse();
        assert_eq!(ready, LoadPhase::Ready);
        assert!(!ready.is_loading());
        assert_eq!(ready.elapse(), LoadPhase::Ready);
    }

    #[test]
    fn test_unmount_before_fire_cancels_timer() {
        let dropped = Rc::new(Cell::new(0));
        let phase = LoadPhase::default();
        let mut timer = TimerSlot::default();
        timer.arm(FakeTimer(dropped.clone()));

        assert!(timer.cancel());
        assert_eq!(dropped.get(), 1);
        // nothing fired, so the phase never moved
        assert!(phase.is_loading());
    }
}
