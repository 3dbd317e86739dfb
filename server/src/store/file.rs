//! Flat-file record store.
//!
//! Each record type lives in its own JSON Lines file, one self-contained
//! record per line in insertion order. Every mutation is a whole-file
//! rewrite: read everything, modify the in-memory set, write everything
//! back. Record volumes are small, so correctness of the encode/decode
//! round trip matters far more than throughput here.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use dealer_engine::Record;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::Mutex;

/// Errors from the flat-file store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode record for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// File-backed store for one record type.
///
/// Mutations on the same store are serialized behind `write_lock`, so two
/// concurrent creates both persist; mutations on different stores proceed
/// in parallel. Reads never lock: they see whatever is on disk at that
/// moment, and a read racing a rewrite can catch a truncated file and
/// recover only a prefix of the records.
pub struct FileStore<R> {
    path: PathBuf,
    write_lock: Mutex<()>,
    _record: PhantomData<fn() -> R>,
}

impl<R> FileStore<R>
where
    R: Record + Serialize + DeserializeOwned,
{
    /// Create a store bound to the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
            _record: PhantomData,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record in on-disk (insertion) order.
    ///
    /// A missing file is an empty dataset, not an error. A line that fails
    /// to decode stops the read; whatever decoded before it is returned and
    /// the failure is only logged.
    pub fn read_all(&self) -> Result<Vec<R>, StoreError> {
        if !self.path.exists() {
            tracing::debug!(
                "store file {} not found, treating as empty",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let file = File::open(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        let reader = BufReader::new(file);
        let mut records = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!(
                        "read of {} stopped at line {}: {}",
                        self.path.display(),
                        line_num + 1,
                        e
                    );
                    break;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(
                        "malformed record at {} line {}, keeping the {} decoded so far: {}",
                        self.path.display(),
                        line_num + 1,
                        records.len(),
                        e
                    );
                    break;
                }
            }
        }

        Ok(records)
    }

    /// Replace the file contents with the given records, in sequence order.
    pub async fn write_all(&self, records: &[R]) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.rewrite(records)
    }

    /// Append one record: read everything, add it, rewrite the file.
    ///
    /// No duplicate-key check; the primary key is advisory only.
    pub async fn append(&self, record: R) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.read_all()?;
        records.push(record);
        self.rewrite(&records)
    }

    /// Seed the store with `defaults` if the backing file does not exist
    /// yet. Returns whether seeding ran.
    pub async fn ensure_initialized(&self, defaults: Vec<R>) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        if self.path.exists() {
            return Ok(false);
        }
        self.rewrite(&defaults)?;
        Ok(true)
    }

    /// Truncate and rewrite the backing file.
    ///
    /// A failure partway leaves a malformed prefix behind; there is no
    /// rollback, the next read recovers what still decodes.
    fn rewrite(&self, records: &[R]) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(io_err)?;

        let mut writer = BufWriter::new(file);
        for record in records {
            let line = serde_json::to_string(record).map_err(|source| StoreError::Encode {
                path: self.path.clone(),
                source,
            })?;
            writeln!(writer, "{}", line).map_err(io_err)?;
        }

        writer.flush().map_err(io_err)
    }
}
