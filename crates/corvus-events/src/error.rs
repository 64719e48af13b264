use corvus_time::TimeStamp;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors surfaced by [`EventQueue::insert`](crate::EventQueue::insert).
///
/// A failed insertion leaves the queue exactly as it was. The queue never
/// aborts the simulation itself; whether a failed scheduling request is fatal
/// is the bus loop's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// `base + increment` is past the end of representable simulated time.
    #[error("invalid scheduling request: {increment} cycles past {base} is not representable")]
    InvalidIncrement { base: TimeStamp, increment: u64 },

    /// The queue was built with a capacity limit and is full.
    #[error("scheduling capacity exceeded ({capacity} events pending)")]
    CapacityExceeded { capacity: usize },
}
