//! In-memory ordered store.
//!
//! Follows the same seek semantics as an LSM engine (first key `>=` target)
//! so driver behavior can be checked without a native engine.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::ops::Bound;

use crate::engine::{RawIterator, Store};
use crate::error::Result;

#[derive(Debug, Default)]
pub struct MemStore {
    map: RefCell<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.map.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.borrow().is_empty()
    }

    pub fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.map.borrow().get(key).cloned()
    }
}

impl Store for MemStore {
    type Iter<'a> = MemIter<'a>;

    fn put(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.map.borrow_mut().insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn raw_iter(&self) -> MemIter<'_> {
        MemIter {
            map: &self.map,
            current: None,
        }
    }
}

/// Iterator over a [`MemStore`]. Holds a copy of the current key rather than
/// a borrow, so the store is only borrowed for the duration of each call.
pub struct MemIter<'a> {
    map: &'a RefCell<BTreeMap<Vec<u8>, Vec<u8>>>,
    current: Option<Vec<u8>>,
}

impl MemIter<'_> {
    fn first_after(&self, lower: Bound<&[u8]>) -> Option<Vec<u8>> {
        self.map
            .borrow()
            .range::<[u8], _>((lower, Bound::Unbounded))
            .next()
            .map(|(k, _)| k.clone())
    }
}

impl RawIterator for MemIter<'_> {
    fn seek(&mut self, target: &[u8]) {
        self.current = self.first_after(Bound::Included(target));
    }

    fn valid(&self) -> bool {
        self.current.is_some()
    }

    fn next(&mut self) {
        let next = match self.current.as_deref() {
            Some(cur) => self.first_after(Bound::Excluded(cur)),
            None => None,
        };
        self.current = next;
    }

    fn key(&self) -> Option<&[u8]> {
        self.current.as_deref()
    }
}
