/// Holds at most one pending timer. Dropping a gloo timer cancels it, so clearing the slot
/// is the cancel.
#[derive(Debug)]
pub struct TimerSlot<T> {
    pending: Option<T>,
}

impl<T> Default for TimerSlot<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> TimerSlot<T> {
    /// Replaces (and so cancels) whatever was pending.
    pub fn arm(&mut self, timer: T) {
        self.pending = Some(timer);
    }

    /// Returns whether there was a timer to drop.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

/// Trailing-edge throttle: the first event of a window arms one timer, later events in the
/// same window are absorbed until that timer reports it fired.
#[derive(Debug)]
pub struct Throttle<T> {
    slot: TimerSlot<T>,
    scheduled: bool,
}

impl<T> Default for Throttle<T> {
    fn default() -> Self {
        Self { slot: TimerSlot::default(), scheduled: false }
    }
}

impl<T> Throttle<T> {
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Arms `start()` unless a run is already scheduled. Returns whether it armed.
    pub fn request(&mut self, start: impl FnOnce() -> T) -> bool {
        if self.is_scheduled() {
            return false;
        }
        self.scheduled = true;
        self.slot.arm(start());
        true
    }

    /// Called from the timer's own callback, so the fired timer is kept until the next
    /// `request` or `cancel` replaces it.
    pub fn fired(&mut self) {
        self.scheduled = false;
    }

    pub fn cancel(&mut self) -> bool {
        self.scheduled = false;
        self.slot.cancel()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::cell::Cell;
    use std::rc::Rc;

    /// Stands in for a gloo timer: counts how many times it was dropped (cancelled).
    pub struct FakeTimer(pub Rc<Cell<usize>>);

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::FakeTimer;
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_cancel_drops_pending_timer() {
        let dropped = Rc::new(Cell::new(0));
        let mut slot = TimerSlot::default();
        slot.arm(FakeTimer(dropped.clone()));

        assert!(slot.cancel());
        assert_eq!(dropped.get(), 1);
        assert!(!slot.cancel());
    }

    #[test]
    fn test_rearming_cancels_previous() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut slot = TimerSlot::default();
        slot.arm(FakeTimer(first.clone()));
        slot.arm(FakeTimer(second.clone()));
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);
    }

    #[test]
    fn test_throttle_absorbs_events_within_window() {
        let dropped = Rc::new(Cell::new(0));
        let started = Cell::new(0);
        let mut throttle = Throttle::default();

        for _ in 0..5 {
            throttle.request(|| {
                started.set(started.get() + 1);
                FakeTimer(dropped.clone())
            });
        }
        assert_eq!(started.get(), 1);
        assert!(throttle.is_scheduled());
        assert_eq!(dropped.get(), 0);
    }

    #[test]
    fn test_throttle_opens_new_window_after_fire() {
        let dropped = Rc::new(Cell::new(0));
        let mut throttle = Throttle::default();

        assert!(throttle.request(|| FakeTimer(dropped.clone())));
        throttle.fired();
        // the fired timer is still held, not dropped from inside its own callback
        assert_eq!(dropped.get(), 0);
        assert!(!throttle.is_scheduled());

        assert!(throttle.request(|| FakeTimer(dropped.clone())));
        assert_eq!(dropped.get(), 1);
        assert!(!throttle.request(|| FakeTimer(dropped.clone())));
    }

    #[test]
    fn test_throttle_cancel_on_teardown() {
        let dropped = Rc::new(Cell::new(0));
        let mut throttle = Throttle::default();
        throttle.request(|| FakeTimer(dropped.clone()));

        assert!(throttle.cancel());
        assert_eq!(dropped.get(), 1);
        assert!(!throttle.is_scheduled());
    }
}
