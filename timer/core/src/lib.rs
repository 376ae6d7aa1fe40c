// Licensed under the Apache-2.0 license

//! Cycle-accurate emulation of a parametric hardware delay timer.
//!
//! A timer instance is bound once, at construction, to an input clock
//! frequency and a requested delay, exactly like elaboration-time generics on
//! the real hardware. The delay is converted to a whole number of clock
//! cycles up front ([`cycle_count`]) and the counter state machine
//! ([`DelayTimer`]) is then advanced one active clock edge at a time by
//! whatever drives the clock domain. There is no real clock source in this
//! crate; edges are explicit calls, which keeps the machine deterministic and
//! testable in isolation.

mod config;
mod counter;
mod cycles;
mod error;

pub use config::{TimerConfig, TimerMode};
pub use counter::{DelayTimer, EdgeInputs, TimerState};
pub use cycles::{cycle_count, NS_PER_SEC};
pub use error::TimerError;
