//! Shared test utilities: stores and iterators with scripted behavior.

#![allow(dead_code)]

use std::cell::Cell;

use lsm_seek_bench::{BenchConfig, BenchError, MemStore, PhaseReport, RawIterator, Result, Store};

// =============================================================================
// Stores
// =============================================================================

pub fn fresh_store() -> MemStore {
    MemStore::new()
}

/// Run `config` against `store`, collecting every report line.
pub fn run_collect<S: Store>(
    store: &S,
    config: &BenchConfig,
) -> (lsm_seek_bench::RunSummary, Vec<PhaseReport>) {
    let mut reports = Vec::new();
    let summary = lsm_seek_bench::run(store, config, |r| reports.push(r.clone()))
        .expect("run should complete");
    (summary, reports)
}

/// Wraps a [`MemStore`] and rejects every put whose ordinal (0-based, across
/// the store's lifetime) is a multiple of `fail_every`.
pub struct FlakyStore {
    inner: MemStore,
    fail_every: u64,
    attempts: Cell<u64>,
}

impl FlakyStore {
    pub fn new(fail_every: u64) -> Self {
        Self {
            inner: MemStore::new(),
            fail_every,
            attempts: Cell::new(0),
        }
    }

    pub fn stored(&self) -> usize {
        self.inner.len()
    }
}

impl Store for FlakyStore {
    type Iter<'a> = <MemStore as Store>::Iter<'a>;

    fn put(&self, key: &[u8], value: &[u8]) -> Result<()> {
        let n = self.attempts.get();
        self.attempts.set(n + 1);
        if n % self.fail_every == 0 {
            return Err(BenchError::write(key, "injected failure"));
        }
        self.inner.put(key, value)
    }

    fn raw_iter(&self) -> Self::Iter<'_> {
        self.inner.raw_iter()
    }
}

// =============================================================================
// Scripted iterator
// =============================================================================

/// Iterator over a fixed key list that ignores the seek target: every seek
/// lands on the first key. Panics on `next`/`key` while invalid, so any
/// contract violation fails the test.
pub struct ScriptedIter {
    keys: Vec<Vec<u8>>,
    pos: usize,
    pub seeks: u64,
    pub nexts: u64,
    pub key_reads: Cell<u64>,
}

impl ScriptedIter {
    pub fn new(keys: Vec<Vec<u8>>) -> Self {
        Self {
            pos: keys.len(),
            keys,
            seeks: 0,
            nexts: 0,
            key_reads: Cell::new(0),
        }
    }

    /// `valid_positions` keys, so the iterator ends after that many
    /// positions (seek counts as the first).
    pub fn ending_after(valid_positions: usize, key: &[u8]) -> Self {
        Self::new(vec![key.to_vec(); valid_positions])
    }
}

impl RawIterator for ScriptedIter {
    fn seek(&mut self, _target: &[u8]) {
        self.seeks += 1;
        self.pos = 0;
    }

    fn valid(&self) -> bool {
        self.pos < self.keys.len()
    }

    fn next(&mut self) {
        assert!(self.valid(), "next() called on an invalid iterator");
        self.nexts += 1;
        self.pos += 1;
    }

    fn key(&self) -> Option<&[u8]> {
        assert!(self.valid(), "key() called on an invalid iterator");
        self.key_reads.set(self.key_reads.get() + 1);
        self.keys.get(self.pos).map(|k| k.as_slice())
    }
}
