// Licensed under the Apache-2.0 license

use log::{debug, trace};

use crate::config::{TimerConfig, TimerMode};
use crate::error::TimerError;

/// Observable state of the counter machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Reset was the last thing sampled; nothing counted yet.
    Idle,
    /// Armed and counting edges toward the programmed cycle count.
    Counting,
    /// The elapsed output is asserted, for this single edge only.
    Elapsed,
    /// One-shot count finished; inert until re-arm or reset.
    Held,
    /// Latched internal-consistency fault; the instance refuses to operate.
    Faulted,
}

/// External signals as sampled at one active clock edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeInputs {
    /// Synchronous reset. Wins over every other input on the same edge.
    pub reset: bool,
    /// Re-arm command: restart the count from zero. Cancels an in-progress
    /// count.
    pub rearm: bool,
}

impl EdgeInputs {
    pub const RESET: EdgeInputs = EdgeInputs {
        reset: true,
        rearm: false,
    };
    pub const REARM: EdgeInputs = EdgeInputs {
        reset: false,
        rearm: true,
    };
}

/// Synchronous up-counter that asserts its output for exactly one clock
/// period once the configured delay has elapsed.
///
/// The machine is advanced exclusively by [`DelayTimer::clock_edge`]; all
/// state mutation happens inside that call and nothing is observable between
/// calls. The cycle count is derived once at construction and fixed for the
/// lifetime of the instance.
#[derive(Debug)]
pub struct DelayTimer {
    config: TimerConfig,
    cycle_count: u64,
    state: TimerState,
    elapsed_ticks: u64,
}

impl DelayTimer {
    /// Builds a timer for `config`, deriving the cycle count up front.
    /// Fails eagerly on invalid parameters or counter-width overflow.
    pub fn new(config: TimerConfig) -> Result<Self, TimerError> {
        let cycle_count = config.cycle_count()?;
        debug!(
            "timer configured: {} Hz, {} ns -> {} cycles, {:?}",
            config.clock_freq_hz(),
            config.delay_ns(),
            cycle_count,
            config.mode()
        );
        Ok(Self {
            config,
            cycle_count,
            state: TimerState::Idle,
            elapsed_ticks: 0,
        })
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Number of clock cycles the output takes to assert after arming.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Edges counted in the current period.
    pub fn elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks
    }

    /// Whether the elapsed output is asserted for the current edge.
    pub fn elapsed(&self) -> bool {
        self.state == TimerState::Elapsed
    }

    /// Advances the machine by one active clock edge and returns the elapsed
    /// output for that edge.
    ///
    /// Reset takes priority over counting and re-arm within the edge and is
    /// idempotent across consecutive edges. The first edge sampled with
    /// reset low arms the counter and already counts, so the output asserts
    /// on the Nth un-reset edge. A re-arm edge clears the count without
    /// counting itself; the pulse then lands exactly N edges later.
    ///
    /// A latched consistency fault is terminal: every further edge,
    /// including reset edges, fails with [`TimerError::InternalConsistency`].
    pub fn clock_edge(&mut self, inputs: EdgeInputs) -> Result<bool, TimerError> {
        if self.state == TimerState::Faulted {
            return Err(self.consistency_fault());
        }

        if inputs.reset {
            trace!("reset sampled, back to idle");
            self.state = TimerState::Idle;
            self.elapsed_ticks = 0;
            return Ok(false);
        }

        if inputs.rearm {
            trace!("re-arm sampled at tick {}", self.elapsed_ticks);
            self.state = TimerState::Counting;
            self.elapsed_ticks = 0;
            return Ok(false);
        }

        match self.state {
            TimerState::Idle => {
                // Self-arms on the first edge out of reset; the edge counts.
                Ok(self.count_edge(1))
            }
            TimerState::Counting => {
                if self.elapsed_ticks >= self.cycle_count {
                    self.state = TimerState::Faulted;
                    return Err(self.consistency_fault());
                }
                Ok(self.count_edge(self.elapsed_ticks + 1))
            }
            TimerState::Elapsed => match self.config.mode() {
                // The edge after a pulse is tick 1 of the next period, so
                // pulses land every cycle_count edges with no drift.
                TimerMode::AutoRearm => Ok(self.count_edge(1)),
                TimerMode::OneShot => {
                    self.state = TimerState::Held;
                    Ok(false)
                }
            },
            TimerState::Held => Ok(false),
            TimerState::Faulted => Err(self.consistency_fault()),
        }
    }

    fn count_edge(&mut self, ticks: u64) -> bool {
        self.elapsed_ticks = ticks;
        if self.elapsed_ticks == self.cycle_count {
            trace!("elapsed after {} ticks", self.elapsed_ticks);
            self.state = TimerState::Elapsed;
            true
        } else {
            self.state = TimerState::Counting;
            false
        }
    }

    fn consistency_fault(&self) -> TimerError {
        TimerError::InternalConsistency {
            elapsed_ticks: self.elapsed_ticks,
            cycle_count: self.cycle_count,
        }
    }
}
