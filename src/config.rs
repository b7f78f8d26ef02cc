//! Benchmark parameters.
//!
//! Defaults reproduce the fixed workload: 100 epochs of 1,000,000 writes,
//! each followed by three rounds of 100,000 seeks for every advance count.

use std::time::Duration;

use crate::error::{BenchError, Result};
use crate::key::{FIELD_LIMIT, VALUE_LEN};

pub const N_KEYS: u64 = 1_000_000;
pub const N_SEEKS: u64 = 100_000;
pub const N_EPOCHS: u64 = 100;
pub const NNEXT: [u64; 3] = [1, 8, 64];
pub const ROUNDS: u32 = 3;
pub const SETTLE: Duration = Duration::from_secs(1);

/// Workload shape for one run.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Records written per epoch, sequence ids `[0, n_keys)`.
    pub n_keys: u64,
    /// Seeks per round.
    pub n_seeks: u64,
    /// Number of write+seek cycles.
    pub epochs: u64,
    /// Advance counts, one group of rounds each.
    pub nnext: Vec<u64>,
    /// Rounds per advance count; the first runs against a cold cache.
    pub rounds: u32,
    /// Value payload length in bytes.
    pub value_len: usize,
    /// Pause after each write phase for engine background work.
    pub settle: Duration,
    /// Seed for seek-target sampling. Zero selects the built-in constant.
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            n_keys: N_KEYS,
            n_seeks: N_SEEKS,
            epochs: N_EPOCHS,
            nnext: NNEXT.to_vec(),
            rounds: ROUNDS,
            value_len: VALUE_LEN,
            settle: SETTLE,
            seed: 0,
        }
    }
}

impl BenchConfig {
    /// Small workload with no settle pause.
    pub fn for_testing() -> Self {
        BenchConfig {
            n_keys: 10,
            n_seeks: 5,
            epochs: 1,
            settle: Duration::ZERO,
            ..Default::default()
        }
    }

    pub fn with_keys(mut self, n: u64) -> Self {
        self.n_keys = n;
        self
    }

    pub fn with_seeks(mut self, n: u64) -> Self {
        self.n_seeks = n;
        self
    }

    pub fn with_epochs(mut self, n: u64) -> Self {
        self.epochs = n;
        self
    }

    pub fn with_nnext(mut self, nnext: impl Into<Vec<u64>>) -> Self {
        self.nnext = nnext.into();
        self
    }

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_settle(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject shapes that would overflow a key field or divide by zero.
    pub fn validate(&self) -> Result<()> {
        if self.n_keys == 0 {
            return Err(BenchError::Config("n_keys must be non-zero".into()));
        }
        if self.n_keys > FIELD_LIMIT {
            return Err(BenchError::Config(format!(
                "n_keys {} exceeds the 8-digit sequence field",
                self.n_keys
            )));
        }
        if self.epochs > FIELD_LIMIT {
            return Err(BenchError::Config(format!(
                "epochs {} exceeds the 8-digit epoch field",
                self.epochs
            )));
        }
        if self.nnext.is_empty() {
            return Err(BenchError::Config("nnext list is empty".into()));
        }
        Ok(())
    }
}
