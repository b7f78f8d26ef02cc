//! Per-phase results and their one-line text rendering.
//!
//! Lines are space separated `label value` pairs:
//!
//! ```text
//! put e 0 n 1000000 dt 2.315
//! seek+next8 e 0 n 100000 dt 0.781 kops 1280.410 match5 99998
//! ```

use std::fmt;
use std::time::Duration;

use crate::timer::kops;

/// Outcome of one write phase.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteReport {
    pub epoch: u64,
    /// Puts issued, failed ones included.
    pub count: u64,
    pub elapsed: Duration,
    pub failures: u64,
}

/// Outcome of one seek round.
#[derive(Debug, Clone, PartialEq)]
pub struct SeekReport {
    pub nnext: u64,
    pub round: u32,
    pub epoch: u64,
    /// Seeks issued.
    pub count: u64,
    pub elapsed: Duration,
    /// Seeks whose final position still shared the 40-byte prefix.
    pub matches: u64,
    /// Numerator of the reported `kops`: the write-phase key count.
    pub write_keys: u64,
}

impl SeekReport {
    /// Reported throughput: write-phase key count over this round's time.
    /// Kept for comparability with earlier runs; see [`seek_kops`](Self::seek_kops)
    /// for seeks per second.
    pub fn kops(&self) -> f64 {
        kops(self.write_keys, self.elapsed)
    }

    /// Seeks completed per second, in thousands.
    pub fn seek_kops(&self) -> f64 {
        kops(self.count, self.elapsed)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PhaseReport {
    Write(WriteReport),
    Seek(SeekReport),
}

impl fmt::Display for WriteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "put e {} n {} dt {:.3}",
            self.epoch,
            self.count,
            self.elapsed.as_secs_f64()
        )?;
        if self.failures > 0 {
            write!(f, " err {}", self.failures)?;
        }
        Ok(())
    }
}

impl fmt::Display for SeekReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seek+next{} e {} n {} dt {:.3} kops {:.3} match5 {}",
            self.nnext,
            self.epoch,
            self.count,
            self.elapsed.as_secs_f64(),
            self.kops(),
            self.matches
        )
    }
}

impl fmt::Display for PhaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhaseReport::Write(r) => fmt::Display::fmt(r, f),
            PhaseReport::Seek(r) => fmt::Display::fmt(r, f),
        }
    }
}
