use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

/// Cyclic index over `len` items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotator {
    index: usize,
    len: usize,
}

pub enum RotatorAction {
    Tick,
    /// Jump straight to an item. Out-of-range indices are ignored.
    Select(usize),
}

impl Rotator {
    /// `len` is clamped to at least one item.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len: len.max(1) }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn tick(self) -> Self {
        Self { index: (self.index + 1) % self.len, ..self }
    }

    /// What the tick interval is keyed on. Only a change here restarts it, so the index
    /// (and with it any `Select`) is left out.
    pub fn interval_deps(&self, interval_ms: u32) -> (usize, u32) {
        (self.len, interval_ms)
    }

    pub fn select(self, index: usize) -> Self {
        if index < self.len {
            Self { index, ..self }
        } else {
            self
        }
    }
}

impl Reducible for Rotator {
    type Action = RotatorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            RotatorAction::Tick => self.tick(),
            RotatorAction::Select(index) => self.select(index),
        };
        if next == *self {
            self
        } else {
            debug!("Rotator {} -> {} of {}", self.index, next.index, next.len);
            Rc::new(next)
        }
    }
}

/// Advances a rotator every `interval_ms` while the calling component is mounted.
/// Manual `Select`s go through the same handle and keep the tick schedule.
#[hook]
pub fn use_rotator(len: usize, interval_ms: u32) -> UseReducerHandle<Rotator> {
    let rotator = use_reducer(move || Rotator::new(len));

    {
        let dispatcher = rotator.dispatcher();
        use_effect_with_deps(
            move |&(_, interval_ms)| {
                let interval = Interval::new(interval_ms, move || {
                    dispatcher.dispatch(RotatorAction::Tick);
                });
                move || drop(interval)
            },
            rotator.interval_deps(interval_ms),
        );
    }

    rotator
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks(mut rotator: Rotator, k: usize) -> Rotator {
        for _ in 0..k {
            rotator = rotator.tick();
        }
        rotator
    }

    #[test]
    fn test_four_ticks_round_trip() {
        let start = Rotator::new(4);
        assert_eq!(ticks(start, 4), start);
    }

    #[test]
    fn test_k_ticks_from_any_start() {
        for n in 1..=6 {
            for i in 0..n {
                for k in 0..(3 * n) {
                    let rotator = ticks(Rotator::new(n).select(i), k);
                    assert_eq!(rotator.index(), (i + k) % n, "n={} i={} k={}", n, i, k);
                }
            }
        }
    }

    #[test]
    fn test_single_item_stays_put() {
        let rotator = Rotator::new(1);
        assert_eq!(rotator.tick().index(), 0);
    }

    #[test]
    fn test_zero_len_clamped() {
        let rotator = Rotator::new(0);
        assert_eq!(rotator.len(), 1);
        assert_eq!(rotator.tick().index(), 0);
    }

    #[test]
    fn test_select_then_tick_continues_from_selection() {
        let rotator = Rotator::new(5).tick().select(3);
        assert_eq!(rotator.index(), 3);
        assert_eq!(rotator.tick().index(), 4);
        assert_eq!(rotator.tick().tick().index(), 0);
    }

    #[test]
    fn test_select_out_of_range_ignored() {
        let rotator = Rotator::new(4).tick();
        assert_eq!(rotator.select(4), rotator);
        assert_eq!(rotator.select(99).index(), 1);
    }

    #[test]
    fn test_select_keeps_interval_deps() {
        let rotator = Rotator::new(5);
        let deps = rotator.interval_deps(3000);
        let after_select = Rc::new(rotator.tick()).reduce(RotatorAction::Select(3));
        assert_eq!(after_select.index(), 3);
        assert_eq!(after_select.interval_deps(3000), deps);
        assert_ne!(rotator.interval_deps(1000), deps);
    }

    #[test]
    fn test_reduce_select() {
        let rotator = Rc::new(Rotator::new(5));
        let selected = rotator.reduce(RotatorAction::Select(2));
        assert_eq!(selected.index(), 2);
        let ticked = selected.reduce(RotatorAction::Tick);
        assert_eq!(ticked.index(), 3);
    }
}
