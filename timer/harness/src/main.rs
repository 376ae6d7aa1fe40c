// Licensed under the Apache-2.0 license

//! Runnable verification harness: sweeps the built-in reference
//! configurations, or drives one user-supplied configuration, and checks
//! that the elapsed pulse lands on exactly the derived cycle count.

use clap::Parser;
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;
use std::process::exit;
use timer_core::{TimerConfig, TimerError, TimerMode};
use timer_harness::{TestBench, REFERENCE_CONFIGS};

/// Reset is held this many edges before every run, mirroring how a
/// testbench settles the entity before releasing the domain.
const RESET_EDGES: u64 = 4;

#[derive(Parser)]
#[command(about = "Cycle-accurate verification harness for the parametric delay timer")]
struct Args {
    /// Input clock frequency in Hz (omit to run the built-in sweep)
    #[arg(long, requires = "delay_ns")]
    clock_freq_hz: Option<u64>,

    /// Requested delay in nanoseconds
    #[arg(long, requires = "clock_freq_hz")]
    delay_ns: Option<u64>,

    /// Re-arm automatically after each pulse and verify the next two periods
    #[arg(long)]
    auto_rearm: bool,

    /// Watchdog budget in clock edges per run
    #[arg(long, default_value_t = 1_000_000)]
    max_edges: u64,

    /// Log state transitions and pulse edges
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    };
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("Failed to initialize logging: {e}");
        exit(1);
    }

    let mode = if args.auto_rearm {
        TimerMode::AutoRearm
    } else {
        TimerMode::OneShot
    };

    let runs: Vec<(String, u64, u64)> = match (args.clock_freq_hz, args.delay_ns) {
        (Some(clock_freq_hz), Some(delay_ns)) => {
            vec![(format!("{clock_freq_hz}Hz/{delay_ns}ns"), clock_freq_hz, delay_ns)]
        }
        _ => REFERENCE_CONFIGS
            .iter()
            .map(|r| (r.name.to_string(), r.clock_freq_hz, r.delay_ns))
            .collect(),
    };

    let mut failures = 0;
    for (name, clock_freq_hz, delay_ns) in &runs {
        match verify(*clock_freq_hz, *delay_ns, mode, args.max_edges, name) {
            Ok(true) => {}
            Ok(false) => failures += 1,
            Err(e) => {
                error!("{name}: {e}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        error!("{failures} of {} runs failed", runs.len());
        exit(1);
    }
    info!("all {} runs passed", runs.len());
}

fn verify(
    clock_freq_hz: u64,
    delay_ns: u64,
    mode: TimerMode,
    max_edges: u64,
    name: &str,
) -> Result<bool, TimerError> {
    let config = TimerConfig::new(clock_freq_hz, delay_ns)?.with_mode(mode);
    let expected = config.cycle_count()?;

    let mut bench = TestBench::new(config)?;
    bench.hold_reset(RESET_EDGES)?;
    let released_at = bench.now();

    let fired_at = match bench.run_until_elapsed(max_edges)? {
        Some(tick) => tick,
        None => {
            error!("{name}: no elapsed pulse within {max_edges} edges");
            return Ok(false);
        }
    };

    let observed = fired_at - released_at;
    if observed != expected {
        error!("{name}: elapsed at tick {observed}, expected {expected}");
        return Ok(false);
    }
    info!("{name}: elapsed at tick {observed} as expected");

    if mode == TimerMode::AutoRearm {
        // Two more periods prove the free-running pulse train stays on grid.
        let pulses = bench.capture_pulses(2 * expected)?;
        let on_grid = pulses == vec![fired_at + expected, fired_at + 2 * expected];
        if !on_grid {
            error!("{name}: auto re-arm pulses off grid: {pulses:?}");
            return Ok(false);
        }
        info!("{name}: auto re-arm pulses stayed on the {expected}-cycle grid");
    }

    Ok(true)
}
