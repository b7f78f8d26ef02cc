//! Benchmark driver.
//!
//! Each epoch runs `WRITE(epoch) -> SETTLE -> SEEK_ROUND(nnext, round)...`,
//! with every configured advance count getting `rounds` consecutive rounds
//! on one iterator so the later rounds see a warmer cache. The sampling
//! generator is created once and keeps advancing across epochs.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::BenchConfig;
use crate::engine::{Cursor, RawIterator, Store};
use crate::error::Result;
use crate::key::{value_payload, Key};
use crate::report::{PhaseReport, SeekReport, WriteReport};
use crate::rng::XorShift64;
use crate::timer::Stopwatch;

/// Individual put failures logged per phase before only the total is.
const LOGGED_WRITE_FAILURES: u64 = 8;

/// Totals for a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub epochs: u64,
    pub keys_written: u64,
    pub write_failures: u64,
    pub seek_rounds: u64,
    pub total_matches: u64,
}

/// Run the full workload against `store`, handing each phase's report to
/// `emit` as soon as the phase completes.
///
/// Only config or key-encoding errors abort; write and iterator errors are
/// logged and reflected in the reports.
pub fn run<S, F>(store: &S, config: &BenchConfig, mut emit: F) -> Result<RunSummary>
where
    S: Store,
    F: FnMut(&PhaseReport),
{
    config.validate()?;
    info!(
        n_keys = config.n_keys,
        n_seeks = config.n_seeks,
        epochs = config.epochs,
        nnext = ?config.nnext,
        rounds = config.rounds,
        settle_ms = config.settle.as_millis() as u64,
        "starting benchmark"
    );

    let mut rng = XorShift64::new(config.seed);
    let value = value_payload(config.value_len);
    let mut summary = RunSummary::default();

    for epoch in 0..config.epochs {
        let write = write_phase(store, epoch, config.n_keys, &value)?;
        summary.keys_written += write.count - write.failures;
        summary.write_failures += write.failures;
        emit(&PhaseReport::Write(write));

        settle(config.settle);

        let mut cursor = Cursor::new(store.raw_iter());
        for &nnext in &config.nnext {
            for round in 0..config.rounds {
                let seek = seek_round(&mut cursor, &mut rng, config, epoch, nnext, round)?;
                summary.seek_rounds += 1;
                summary.total_matches += seek.matches;
                emit(&PhaseReport::Seek(seek));
            }
        }
        drop(cursor);

        summary.epochs += 1;
        debug!(epoch, "epoch complete");
    }

    info!(
        epochs = summary.epochs,
        keys_written = summary.keys_written,
        write_failures = summary.write_failures,
        seek_rounds = summary.seek_rounds,
        total_matches = summary.total_matches,
        "benchmark complete"
    );
    Ok(summary)
}

/// Write sequence ids `[0, n_keys)` tagged with `epoch`.
pub fn write_phase<S: Store>(
    store: &S,
    epoch: u64,
    n_keys: u64,
    value: &[u8],
) -> Result<WriteReport> {
    let mut key = Key::default();
    let mut failures = 0u64;

    let sw = Stopwatch::start();
    for seq in 0..n_keys {
        key.update(seq, epoch)?;
        if let Err(e) = store.put(key.as_bytes(), value) {
            failures += 1;
            if failures <= LOGGED_WRITE_FAILURES {
                warn!(epoch, seq, error = %e, "put failed");
            }
        }
    }
    let elapsed = sw.elapsed();

    if failures > LOGGED_WRITE_FAILURES {
        warn!(
            epoch,
            failures,
            suppressed = failures - LOGGED_WRITE_FAILURES,
            "write phase had further put failures"
        );
    }
    debug!(epoch, n_keys, elapsed_ms = elapsed.as_millis() as u64, "write phase done");

    Ok(WriteReport {
        epoch,
        count: n_keys,
        elapsed,
        failures,
    })
}

/// One round of `config.n_seeks` random prefix seeks, each followed by up to
/// `nnext` advances. Rejects an invalid `config` before touching the cursor.
pub fn seek_round<I: RawIterator>(
    cursor: &mut Cursor<I>,
    rng: &mut XorShift64,
    config: &BenchConfig,
    epoch: u64,
    nnext: u64,
    round: u32,
) -> Result<SeekReport> {
    config.validate()?;
    let mut target = Key::default();
    let mut matches = 0u64;

    let sw = Stopwatch::start();
    for _ in 0..config.n_seeks {
        let seq = rng.next_below(config.n_keys);
        target.update(seq, 0)?;
        let prefix = target.prefix();
        cursor.seek(prefix);
        cursor.advance_by(nnext);
        if cursor.matches_prefix(prefix) {
            matches += 1;
        }
    }
    let elapsed = sw.elapsed();

    if let Err(e) = cursor.status() {
        warn!(epoch, nnext, round, error = %e, "iterator reported an error");
    }

    let report = SeekReport {
        nnext,
        round,
        epoch,
        count: config.n_seeks,
        elapsed,
        matches,
        write_keys: config.n_keys,
    };
    debug!(
        epoch,
        nnext,
        round,
        matches,
        kops = report.kops(),
        seek_kops = report.seek_kops(),
        "seek round done"
    );
    Ok(report)
}

fn settle(pause: Duration) {
    if pause.is_zero() {
        return;
    }
    debug!(pause_ms = pause.as_millis() as u64, "settling");
    std::thread::sleep(pause);
}
