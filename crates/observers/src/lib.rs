//! Reusable observers for oscstep drivers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any driver whose events carry a time and a state.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for driver-agnostic observers
//!   ([`HasTime`], [`HasState`], [`CanStopEarly`])
//! - [`LinePrinter`] — writes one line per event to any [`std::io::Write`]
//! - [`StopAfter`] — stops a run after a fixed number of events
//!
//! [`Observer`]: oscstep_core::Observer
//! [`HasTime`]: traits::HasTime
//! [`HasState`]: traits::HasState
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod print;
mod stop;

pub use print::LinePrinter;
pub use stop::StopAfter;
