//! Storage-engine contract used by the driver, and the validity-tracking
//! [`Cursor`] that guards it.
//!
//! Engines expose the raw iterator contract as-is: `next` and `key` are only
//! legal while `valid()` holds. The driver never touches a [`RawIterator`]
//! directly; it goes through [`Cursor`], which turns further positional
//! requests on an ended iterator into no-ops.

use crate::error::Result;

/// An ordered key-value store the harness can write to and seek in.
pub trait Store {
    type Iter<'a>: RawIterator
    where
        Self: 'a;

    /// Write one record.
    fn put(&self, key: &[u8], value: &[u8]) -> Result<()>;

    /// Open an unpositioned iterator over the whole keyspace.
    fn raw_iter(&self) -> Self::Iter<'_>;
}

/// Raw engine iterator. Calling [`next`](RawIterator::next) or
/// [`key`](RawIterator::key) while invalid is a contract violation.
pub trait RawIterator {
    /// Position at the first key `>= target`.
    fn seek(&mut self, target: &[u8]);

    fn valid(&self) -> bool;

    fn next(&mut self);

    fn key(&self) -> Option<&[u8]>;

    /// Engine-level error hit while iterating, if any.
    fn status(&self) -> Result<()> {
        Ok(())
    }
}

/// Wraps a [`RawIterator`] and tracks its validity after every positional
/// call.
pub struct Cursor<I> {
    inner: I,
    valid: bool,
}

impl<I: RawIterator> Cursor<I> {
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            valid: false,
        }
    }

    /// Seek is legal from any state, including after the cursor ended.
    pub fn seek(&mut self, target: &[u8]) -> bool {
        self.inner.seek(target);
        self.valid = self.inner.valid();
        self.valid
    }

    /// Step once. Returns `false` without touching the iterator once ended.
    pub fn advance(&mut self) -> bool {
        if !self.valid {
            return false;
        }
        self.inner.next();
        self.valid = self.inner.valid();
        self.valid
    }

    /// Step up to `n` times, stopping at the first invalid position.
    /// Returns the number of steps actually issued to the engine.
    pub fn advance_by(&mut self, n: u64) -> u64 {
        let mut steps = 0;
        while steps < n && self.valid {
            self.advance();
            steps += 1;
        }
        steps
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Current key, or `None` once ended.
    pub fn key(&self) -> Option<&[u8]> {
        if self.valid {
            self.inner.key()
        } else {
            None
        }
    }

    /// Does the current key start with `prefix`? Always `false` once ended.
    pub fn matches_prefix(&self, prefix: &[u8]) -> bool {
        self.key().is_some_and(|k| k.starts_with(prefix))
    }

    pub fn status(&self) -> Result<()> {
        self.inner.status()
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}
