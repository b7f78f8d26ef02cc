//! Fixed-layout 48-byte keys and their 200-byte values.
//!
//! Layout: bytes `[0, 8)` hold the zero-padded decimal sequence id, bytes
//! `[8, 40)` repeat that block four more times, and bytes `[40, 48)` hold
//! the zero-padded decimal epoch id.

use crate::error::{BenchError, Result};

/// Width of one decimal field.
pub const FIELD_LEN: usize = 8;
/// Total key length.
pub const KEY_LEN: usize = 48;
/// Length of the seek prefix: the five repeated sequence blocks.
pub const PREFIX_LEN: usize = 40;
/// Value payload length.
pub const VALUE_LEN: usize = 200;
/// Exclusive upper bound for either field.
pub const FIELD_LIMIT: u64 = 100_000_000;

/// A 48-byte benchmark key.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key([u8; KEY_LEN]);

impl Key {
    /// Encode `(seq, epoch)`. Either field at or above 10^8 is rejected.
    pub fn encode(seq: u64, epoch: u64) -> Result<Self> {
        let mut key = Key([0u8; KEY_LEN]);
        key.update(seq, epoch)?;
        Ok(key)
    }

    /// Re-encode in place. On error the key is left unchanged.
    pub fn update(&mut self, seq: u64, epoch: u64) -> Result<()> {
        check_field("sequence id", seq)?;
        check_field("epoch", epoch)?;

        let (head, tail) = self.0.split_at_mut(FIELD_LEN);
        write_decimal(head, seq);
        let (repeats, suffix) = tail.split_at_mut(PREFIX_LEN - FIELD_LEN);
        fill_repeated(repeats, head);
        write_decimal(suffix, epoch);
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The first 40 bytes, shared by every epoch of the same sequence id.
    pub fn prefix(&self) -> &[u8] {
        &self.0[..PREFIX_LEN]
    }
}

impl Default for Key {
    fn default() -> Self {
        Key([b'0'; KEY_LEN])
    }
}

impl AsRef<[u8]> for Key {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Key")
            .field(&String::from_utf8_lossy(&self.0))
            .finish()
    }
}

/// Zero-filled value payload. Only its length matters to the engine.
pub fn value_payload(len: usize) -> Vec<u8> {
    vec![0u8; len]
}

/// Copy `block` into `dst` back to back. `dst.len()` must be a multiple of
/// `block.len()`.
pub fn fill_repeated(dst: &mut [u8], block: &[u8]) {
    debug_assert_eq!(dst.len() % block.len(), 0);
    for chunk in dst.chunks_exact_mut(block.len()) {
        chunk.copy_from_slice(block);
    }
}

fn check_field(field: &'static str, value: u64) -> Result<()> {
    if value >= FIELD_LIMIT {
        return Err(BenchError::KeyFieldOverflow { field, value });
    }
    Ok(())
}

/// Zero-padded decimal, right-aligned in `dst`.
fn write_decimal(dst: &mut [u8], mut value: u64) {
    for b in dst.iter_mut().rev() {
        *b = b'0' + (value % 10) as u8;
        value /= 10;
    }
}
