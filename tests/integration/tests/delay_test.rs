// Licensed under the Apache-2.0 license

//! End-to-end delay accuracy: reset, release, and check the tick the
//! elapsed pulse lands on for each reference configuration.

use tests_integration::{init_test_logger, REFERENCE_CYCLES};
use timer_core::{TimerConfig, TimerError};
use timer_harness::{TestBench, REFERENCE_CONFIGS};

const WATCHDOG_EDGES: u64 = 1_000;

#[test]
fn test_reference_sweep_pulses_at_the_derived_cycle_count() {
    init_test_logger();

    for reference in &REFERENCE_CONFIGS {
        let config = TimerConfig::new(reference.clock_freq_hz, reference.delay_ns).unwrap();
        assert_eq!(
            config.cycle_count().unwrap(),
            REFERENCE_CYCLES,
            "{}",
            reference.name
        );

        let mut bench = TestBench::new(config).unwrap();
        bench.hold_reset(4).unwrap();
        let released_at = bench.now();

        let fired_at = bench
            .run_until_elapsed(WATCHDOG_EDGES)
            .unwrap()
            .unwrap_or_else(|| panic!("{}: no pulse", reference.name));
        assert_eq!(fired_at - released_at, REFERENCE_CYCLES, "{}", reference.name);

        // Pulse lasts one edge, then the one-shot default holds low.
        assert!(!bench.step().unwrap(), "{}", reference.name);
        assert_eq!(bench.capture_pulses(50).unwrap(), vec![], "{}", reference.name);
    }
}

#[test]
fn test_sub_period_delay_clamps_to_a_single_cycle() {
    init_test_logger();

    // 3 Hz clock, 1 ns delay: period of ~333 ms versus a 1 ns request.
    let config = TimerConfig::new(3, 1).unwrap();
    let mut bench = TestBench::new(config).unwrap();
    bench.hold_reset(2).unwrap();
    let released_at = bench.now();

    let fired_at = bench.run_until_elapsed(WATCHDOG_EDGES).unwrap().unwrap();
    assert_eq!(fired_at - released_at, 1);
}

#[test]
fn test_invalid_configuration_is_rejected_at_construction() {
    assert_eq!(
        TimerConfig::new(100_000_000, 0).unwrap_err(),
        TimerError::InvalidConfig {
            clock_freq_hz: 100_000_000,
            delay_ns: 0
        }
    );
    assert_eq!(
        TimerConfig::new(0, 100).unwrap_err(),
        TimerError::InvalidConfig {
            clock_freq_hz: 0,
            delay_ns: 100
        }
    );
}

#[test]
fn test_oversized_cycle_count_is_rejected_at_construction() {
    let config = TimerConfig::new(u64::MAX, u64::MAX).unwrap();
    assert!(matches!(
        TestBench::new(config).unwrap_err(),
        TimerError::CycleCountOverflow { .. }
    ));
}
