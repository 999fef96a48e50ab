//! Persistence of a [`PlanetStore`] to its flat text file.
//!
//! Each call opens the file, does its work, and drops the handle before
//! returning, including on error paths.

mod format;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::store::PlanetStore;

pub use format::{decode, encode, Decoded, Malformed};

/// Well-known data file name, resolved against the working directory.
pub const DEFAULT_DATA_FILE: &str = "planet_data.txt";

/// Persistence errors.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("unable to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("unable to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
}

/// How a load went.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    /// The file existed and was decoded, possibly stopping early.
    Read {
        records: usize,
        malformed: Option<Malformed>,
    },
    /// No file at the path. Expected on first run.
    Absent,
}

#[derive(Debug, Clone)]
pub struct Loaded {
    pub store: PlanetStore,
    pub status: LoadStatus,
}

/// Handle on the file holding the most recent save.
#[derive(Debug, Clone)]
pub struct DataFile {
    path: PathBuf,
}

impl DataFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_DATA_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the file with the store's records in current order.
    ///
    /// Returns the number of records written.
    pub fn save(&self, store: &PlanetStore) -> Result<usize, CodecError> {
        let write_err = |source: io::Error| CodecError::Write {
            path: self.path.clone(),
            source,
        };

        let file = File::create(&self.path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(encode(store).as_bytes())
            .map_err(write_err)?;
        writer.flush().map_err(write_err)?;

        tracing::info!(path = %self.path.display(), records = store.len(), "saved planets");
        Ok(store.len())
    }

    /// Read the file into a fresh store.
    ///
    /// A missing file is not an error: it yields an empty store and
    /// [`LoadStatus::Absent`]. Malformed data stops decoding at that point and
    /// keeps everything read before it.
    pub fn load(&self) -> Result<Loaded, CodecError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no previous data found");
                return Ok(Loaded {
                    store: PlanetStore::new(),
                    status: LoadStatus::Absent,
                });
            }
            Err(source) => {
                return Err(CodecError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let Decoded { planets, malformed } = decode(&content);
        if let Some(ref m) = malformed {
            tracing::warn!(path = %self.path.display(), "stopped reading data file at {}", m);
        }
        tracing::info!(path = %self.path.display(), records = planets.len(), "loaded planets");

        Ok(Loaded {
            status: LoadStatus::Read {
                records: planets.len(),
                malformed,
            },
            store: PlanetStore::from(planets),
        })
    }
}

impl Default for DataFile {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}
