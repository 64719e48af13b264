//! Device-event scheduling for the Corvus system bus.
//!
//! Every device model that starts an operation tells the bus *when* (in
//! simulated cycles) the operation will complete or its interrupt will be
//! raised. The bus records that as a pending event in an [`EventQueue`] and,
//! once per tick, asks the queue for the next due event. The queue is the
//! only owner of pending events; the bus only ever sees the head's time,
//! interrupt line and device number through the queue's accessors.
//!
//! Insertion is optimized for the access pattern a running machine produces:
//! most newly scheduled events land at or after the most recently scheduled
//! one, so the queue remembers the last insertion point and starts its
//! ordered search there whenever that is provably safe.

#![forbid(unsafe_code)]

mod error;
mod event;
mod queue;

pub use error::{Result, ScheduleError};
pub use queue::EventQueue;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod proptests;
