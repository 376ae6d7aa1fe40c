// Licensed under the Apache-2.0 license

use crate::error::TimerError;

/// Nanoseconds per second, the time base delays are expressed in.
pub const NS_PER_SEC: u64 = 1_000_000_000;

/// Converts a requested delay into a whole number of clock cycles.
///
/// The conversion is `ceil(delay_ns * clock_freq_hz / 1e9)`, evaluated as an
/// exact integer expression rather than through a pre-rounded clock period.
/// Rounding up means the timer never fires before the requested delay has
/// fully elapsed; a delay shorter than one clock period still costs one
/// cycle, so the output always takes at least one edge to assert.
///
/// Referentially transparent. Callers compute it once per configuration and
/// hold on to the result.
pub fn cycle_count(clock_freq_hz: u64, delay_ns: u64) -> Result<u64, TimerError> {
    if clock_freq_hz == 0 || delay_ns == 0 {
        return Err(TimerError::InvalidConfig {
            clock_freq_hz,
            delay_ns,
        });
    }

    // The u128 product is exact for any pair of u64 inputs.
    let product = clock_freq_hz as u128 * delay_ns as u128;
    let cycles = product.div_ceil(NS_PER_SEC as u128);
    if cycles > u64::MAX as u128 {
        return Err(TimerError::CycleCountOverflow {
            clock_freq_hz,
            delay_ns,
        });
    }

    Ok((cycles as u64).max(1))
}
