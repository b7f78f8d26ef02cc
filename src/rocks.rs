//! RocksDB-backed [`Store`].
//!
//! Opened once with a fixed tuning: no compression, a large LRU block cache
//! shared by the table reader, index and filter blocks kept in that cache,
//! and reads that populate it. Nothing is pinned, so index and filter blocks
//! compete in the LRU like data blocks and the first round of a group starts
//! from whatever survived the write phase.

use std::path::{Path, PathBuf};

use rocksdb::{
    BlockBasedOptions, Cache, DBCompressionType, DBRawIterator, Options, ReadOptions,
    WriteOptions, DB,
};
use tracing::info;

use crate::engine::{RawIterator, Store};
use crate::error::{BenchError, Result};

/// 4 GiB.
pub const DEFAULT_CACHE_BYTES: usize = 1 << 32;
pub const DEFAULT_PATH: &str = "/tmp/crdb";

/// Configuration for a [`RocksStore`].
#[derive(Debug, Clone)]
pub struct RocksConfig {
    /// Filesystem path for the database.
    pub path: PathBuf,
    /// Create the database directory if it does not exist.
    pub create_if_missing: bool,
    /// LRU block cache capacity in bytes.
    pub cache_bytes: usize,
    /// Keep index and filter blocks in the block cache.
    pub cache_index_and_filter_blocks: bool,
    /// Populate the block cache on reads.
    pub fill_cache: bool,
}

impl Default for RocksConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            create_if_missing: true,
            cache_bytes: DEFAULT_CACHE_BYTES,
            cache_index_and_filter_blocks: true,
            fill_cache: true,
        }
    }
}

impl RocksConfig {
    /// Default tuning at a different path.
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    pub fn with_cache_bytes(mut self, bytes: usize) -> Self {
        self.cache_bytes = bytes;
        self
    }

    pub fn with_create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }
}

pub struct RocksStore {
    db: DB,
    write_opts: WriteOptions,
    fill_cache: bool,
    path: PathBuf,
    // Owned here so the cache outlives every table reader using it.
    _cache: Cache,
}

impl RocksStore {
    /// Open (or create) the database. Failure is fatal for a run.
    pub fn open(config: &RocksConfig) -> Result<Self> {
        let cache = Cache::new_lru_cache(config.cache_bytes);

        let mut table = BlockBasedOptions::default();
        table.set_block_cache(&cache);
        table.set_cache_index_and_filter_blocks(config.cache_index_and_filter_blocks);

        let mut opts = Options::default();
        opts.set_compression_type(DBCompressionType::None);
        opts.create_if_missing(config.create_if_missing);
        opts.set_block_based_table_factory(&table);

        let db = DB::open(&opts, &config.path).map_err(|e| BenchError::Open {
            path: config.path.clone(),
            message: e.to_string(),
        })?;

        info!(
            path = %config.path.display(),
            cache_bytes = config.cache_bytes,
            "opened rocksdb"
        );

        Ok(Self {
            db,
            write_opts: WriteOptions::default(),
            fill_cache: config.fill_cache,
            path: config.path.clone(),
            _cache: cache,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Point lookup, used to verify what a run wrote.
    pub fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        self.db
            .get(key)
            .map_err(|e| BenchError::Read(e.to_string()))
    }

    /// Release the handle. Dropping does the same without the log line.
    pub fn close(self) {
        let path = self.path().to_path_buf();
        drop(self);
        info!(path = %path.display(), "closed rocksdb");
    }
}

impl Store for RocksStore {
    type Iter<'a> = RocksIter<'a>;

    fn put(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.db
            .put_opt(key, value, &self.write_opts)
            .map_err(|e| BenchError::write(key, e.to_string()))
    }

    fn raw_iter(&self) -> RocksIter<'_> {
        let mut read_opts = ReadOptions::default();
        read_opts.fill_cache(self.fill_cache);
        RocksIter(self.db.raw_iterator_opt(read_opts))
    }
}

pub struct RocksIter<'a>(DBRawIterator<'a>);

impl RawIterator for RocksIter<'_> {
    fn seek(&mut self, target: &[u8]) {
        self.0.seek(target);
    }

    fn valid(&self) -> bool {
        self.0.valid()
    }

    fn next(&mut self) {
        self.0.next();
    }

    fn key(&self) -> Option<&[u8]> {
        self.0.key()
    }

    fn status(&self) -> Result<()> {
        self.0
            .status()
            .map_err(|e| BenchError::Iterator(e.to_string()))
    }
}
