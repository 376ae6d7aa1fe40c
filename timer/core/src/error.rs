// Licensed under the Apache-2.0 license

use thiserror::Error;

/// Faults a timer instance can raise.
///
/// All of them are detected eagerly and leave the instance refusing to
/// operate; a timer that fires at the wrong time is worse than one that
/// refuses to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimerError {
    /// Construction-time parameters outside the valid range.
    #[error("invalid configuration: clock_freq_hz={clock_freq_hz}, delay_ns={delay_ns} (both must be positive)")]
    InvalidConfig { clock_freq_hz: u64, delay_ns: u64 },

    /// The derived cycle count does not fit the 64-bit tick counter.
    #[error("cycle count for clock_freq_hz={clock_freq_hz}, delay_ns={delay_ns} exceeds the 64-bit counter range")]
    CycleCountOverflow { clock_freq_hz: u64, delay_ns: u64 },

    /// The tick counter ran past the programmed cycle count while still
    /// counting. Unreachable in correct operation; latched once raised.
    #[error("internal consistency fault: elapsed_ticks={elapsed_ticks} outside 0..{cycle_count} while counting")]
    InternalConsistency { elapsed_ticks: u64, cycle_count: u64 },
}
