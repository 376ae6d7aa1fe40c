// Licensed under the Apache-2.0 license

use crate::cycles;
use crate::error::TimerError;

/// Re-arm policy applied on the edge after the elapsed pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerMode {
    /// Pulse once, then hold the output low until an explicit re-arm.
    #[default]
    OneShot,
    /// Free-running: restart the count immediately, pulsing once per period.
    AutoRearm,
}

/// Construction-time parameters of a timer instance.
///
/// Bound once and never mutated, like generics on the hardware entity.
/// Changing the delay means building a new timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    clock_freq_hz: u64,
    delay_ns: u64,
    mode: TimerMode,
}

impl TimerConfig {
    /// Validates and binds an input clock frequency (Hz) and a requested
    /// delay (ns). Both must be positive.
    pub fn new(clock_freq_hz: u64, delay_ns: u64) -> Result<Self, TimerError> {
        if clock_freq_hz == 0 || delay_ns == 0 {
            return Err(TimerError::InvalidConfig {
                clock_freq_hz,
                delay_ns,
            });
        }
        Ok(Self {
            clock_freq_hz,
            delay_ns,
            mode: TimerMode::default(),
        })
    }

    /// Same parameters with a different re-arm policy.
    pub fn with_mode(mut self, mode: TimerMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn clock_freq_hz(&self) -> u64 {
        self.clock_freq_hz
    }

    pub fn delay_ns(&self) -> u64 {
        self.delay_ns
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    /// Whole clock cycles covering the requested delay on this clock.
    pub fn cycle_count(&self) -> Result<u64, TimerError> {
        cycles::cycle_count(self.clock_freq_hz, self.delay_ns)
    }
}
