//! Prefix-seek benchmark against RocksDB.
//!
//! Run: `cargo run --release --bin seek-bench`
//! Logs: `RUST_LOG=debug cargo run --release --bin seek-bench 2>bench.log`
//!
//! Report lines go to stdout; diagnostics go to stderr.

use std::process::ExitCode;

use lsm_seek_bench::hardware::log_hardware_info;
use lsm_seek_bench::{run, BenchConfig, RocksConfig, RocksStore};
use tracing::error;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    log_hardware_info();

    let config = BenchConfig::default();
    let store = match RocksStore::open(&RocksConfig::default()) {
        Ok(store) => store,
        Err(e) => {
            error!(error = %e, "cannot open storage engine");
            eprintln!("seek-bench: {e}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = run(&store, &config, |report| println!("{report}"));
    store.close();

    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "benchmark aborted");
            eprintln!("seek-bench: {e}");
            ExitCode::FAILURE
        }
    }
}
