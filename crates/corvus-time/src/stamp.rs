use std::fmt;

/// A point in simulated time, measured in cycles since machine reset.
///
/// The rest of the simulator treats this as opaque: it is constructed either
/// at reset ([`TimeStamp::ZERO`]) or by offsetting an existing stamp
/// ([`TimeStamp::checked_add`]), and consumed only through ordering
/// comparisons. The derived `Ord` is the total order every scheduling
/// decision uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeStamp(u64);

impl TimeStamp {
    /// Machine reset time.
    pub const ZERO: TimeStamp = TimeStamp(0);

    /// The latest representable instant.
    pub const MAX: TimeStamp = TimeStamp(u64::MAX);

    pub const fn new(cycles: u64) -> Self {
        TimeStamp(cycles)
    }

    pub const fn cycles(self) -> u64 {
        self.0
    }

    /// Derives the stamp `increment` cycles after `self`, or `None` if that
    /// instant is not representable.
    pub const fn checked_add(self, increment: u64) -> Option<TimeStamp> {
        match self.0.checked_add(increment) {
            Some(cycles) => Some(TimeStamp(cycles)),
            None => None,
        }
    }

    /// Like [`TimeStamp::checked_add`], but clamps to [`TimeStamp::MAX`].
    pub const fn saturating_add(self, increment: u64) -> TimeStamp {
        TimeStamp(self.0.saturating_add(increment))
    }

    /// Cycles elapsed from `earlier` to `self`, saturating at zero if
    /// `earlier` is actually later.
    pub const fn cycles_since(self, earlier: TimeStamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for TimeStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cycle {}", self.0)
    }
}

impl From<u64> for TimeStamp {
    fn from(cycles: u64) -> Self {
        TimeStamp(cycles)
    }
}
