//! Prefix-seek micro-benchmark harness for LSM-tree key-value engines.
//!
//! The harness writes a deterministic keyspace once per epoch, then measures
//! random prefix seeks followed by a fixed number of iterator advances,
//! repeating each round so the report shows the cache warming up.

pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod hardware;
pub mod key;
pub mod mem;
pub mod report;
pub mod rng;
#[cfg(feature = "rocksdb")]
pub mod rocks;
pub mod timer;

pub use config::BenchConfig;
pub use driver::{run, RunSummary};
pub use engine::{Cursor, RawIterator, Store};
pub use error::{BenchError, Result};
pub use key::Key;
pub use mem::MemStore;
pub use report::{PhaseReport, SeekReport, WriteReport};
pub use rng::XorShift64;
#[cfg(feature = "rocksdb")]
pub use rocks::{RocksConfig, RocksStore};
