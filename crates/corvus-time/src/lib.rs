//! Simulated-time primitives for the Corvus machine simulator.
//!
//! The simulator uses **simulated cycles** (monotonic count since machine
//! reset) as the single source of truth for device completion times and
//! interrupt deadlines. Simulated time only ever moves forward, one bus/CPU
//! tick at a time, so the types here are deliberately small: an ordered
//! [`TimeStamp`] value and a [`SimClock`] that the dispatch loop (and unit
//! tests) can advance deterministically.

#![forbid(unsafe_code)]

mod clock;
mod stamp;

pub use clock::SimClock;
pub use stamp::TimeStamp;
