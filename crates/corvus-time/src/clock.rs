use std::cell::Cell;
use std::rc::Rc;

use crate::TimeStamp;

/// Deterministic simulation clock.
///
/// Clones share the same underlying counter, so the dispatch loop and the
/// devices it drives (or a test and the component under test) can hold
/// separate handles to one clock. Simulated time never goes backwards:
/// [`SimClock::advance_to`] is a no-op for targets at or before `now`.
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    now: Rc<Cell<u64>>,
}

impl SimClock {
    /// A clock at machine reset ([`TimeStamp::ZERO`]).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> TimeStamp {
        TimeStamp::new(self.now.get())
    }

    /// Moves the clock forward by `cycles`, clamping at [`TimeStamp::MAX`].
    pub fn advance(&self, cycles: u64) {
        self.now.set(self.now.get().saturating_add(cycles));
    }

    /// Moves the clock forward to `target`; does nothing if `target` is not
    /// in the future.
    pub fn advance_to(&self, target: TimeStamp) {
        if target.cycles() > self.now.get() {
            self.now.set(target.cycles());
        }
    }
}
