// Licensed under the Apache-2.0 license

//! Reset and re-arm behavior across full count cycles: cancellation,
//! idempotence, one-shot hold, and free-running periodicity.

use tests_integration::{init_test_logger, REFERENCE_CYCLES};
use timer_core::{TimerConfig, TimerMode, TimerState};
use timer_harness::TestBench;

fn one_shot_bench() -> TestBench {
    let config = TimerConfig::new(100_000_000, 100).unwrap();
    TestBench::new(config).unwrap()
}

#[test]
fn test_reset_mid_count_restarts_the_full_delay() {
    init_test_logger();

    let mut bench = one_shot_bench();
    bench.hold_reset(2).unwrap();

    // Burn over half the period, then pull reset again.
    for _ in 0..6 {
        bench.step().unwrap();
    }
    bench.reset_edge().unwrap();
    assert_eq!(bench.timer().state(), TimerState::Idle);
    assert_eq!(bench.timer().elapsed_ticks(), 0);

    let released_at = bench.now();
    let fired_at = bench.run_until_elapsed(100).unwrap().unwrap();
    assert_eq!(fired_at - released_at, REFERENCE_CYCLES);
}

#[test]
fn test_double_reset_equals_single_reset() {
    init_test_logger();

    let mut once = one_shot_bench();
    once.hold_reset(1).unwrap();
    let release_once = once.now();
    let delta_once = once.run_until_elapsed(100).unwrap().unwrap() - release_once;

    let mut twice = one_shot_bench();
    twice.hold_reset(2).unwrap();
    let release_twice = twice.now();
    let delta_twice = twice.run_until_elapsed(100).unwrap().unwrap() - release_twice;

    assert_eq!(delta_once, delta_twice);
    assert_eq!(delta_once, REFERENCE_CYCLES);
}

#[test]
fn test_one_shot_waits_in_held_until_rearmed() {
    init_test_logger();

    let mut bench = one_shot_bench();
    bench.hold_reset(2).unwrap();
    bench.run_until_elapsed(100).unwrap().unwrap();

    // Output stays low indefinitely after the pulse.
    assert_eq!(bench.capture_pulses(100).unwrap(), vec![]);
    assert_eq!(bench.timer().state(), TimerState::Held);

    // Re-arm starts a clean period: the pulse lands exactly N edges later.
    bench.rearm_edge().unwrap();
    let rearmed_at = bench.now();
    let fired_at = bench.run_until_elapsed(100).unwrap().unwrap();
    assert_eq!(fired_at - rearmed_at, REFERENCE_CYCLES);
}

#[test]
fn test_rearm_mid_count_cancels_and_restarts() {
    init_test_logger();

    let mut bench = one_shot_bench();
    bench.hold_reset(2).unwrap();
    for _ in 0..7 {
        bench.step().unwrap();
    }

    bench.rearm_edge().unwrap();
    let rearmed_at = bench.now();
    let fired_at = bench.run_until_elapsed(100).unwrap().unwrap();
    assert_eq!(fired_at - rearmed_at, REFERENCE_CYCLES);
}

#[test]
fn test_auto_rearm_pulse_train_is_exactly_periodic() {
    init_test_logger();

    let config = TimerConfig::new(50_000_000, 200)
        .unwrap()
        .with_mode(TimerMode::AutoRearm);
    let mut bench = TestBench::new(config).unwrap();
    bench.hold_reset(2).unwrap();
    let released_at = bench.now();

    let pulses = bench.capture_pulses(5 * REFERENCE_CYCLES).unwrap();
    let expected: Vec<u64> = (1..=5).map(|i| released_at + i * REFERENCE_CYCLES).collect();
    assert_eq!(pulses, expected);
}
