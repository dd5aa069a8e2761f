//! File-backed record store

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, StoreError};
use crate::format::{Format, Json};

/// Capability for values persisted as a single named record.
///
/// Implementors pick a canonical record name; the default-name store
/// operations for a type always address the file derived from it, so
/// a save followed by a load needs no name bookkeeping by the caller.
pub trait Persistable: Serialize + DeserializeOwned + Sized {
    /// Canonical record name, used whenever no explicit name is given.
    /// Must be stable across calls and unique among the types stored
    /// under one base directory.
    const NAME: &'static str;

    /// Save this value under its canonical name
    fn save_to<F: Format>(&self, store: &Store<F>) -> Result<()> {
        store.save(self)
    }

    /// Load the canonical record of this type
    fn load_from<F: Format>(store: &Store<F>) -> Result<Self> {
        store.load()
    }

    /// Delete the canonical record of this type
    fn delete_from<F: Format>(store: &Store<F>) -> Result<()> {
        store.delete::<Self>()
    }
}

/// Store holding one record file per logical name under a base
/// directory.
///
/// The store is stateless between calls: paths are resolved fresh on
/// every operation and no file handle outlives the call that opened
/// it. Concurrent operations against the same name are not
/// synchronized; the last completed write wins.
#[derive(Debug, Clone)]
pub struct Store<F = Json> {
    base: PathBuf,
    format: F,
}

impl Store<Json> {
    /// Create a JSON store over `base`.
    ///
    /// The directory is not created here; saving into a missing
    /// directory fails with [`StoreError::Write`].
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Store {
            base: base.into(),
            format: Json,
        }
    }
}

impl<F: Format> Store<F> {
    /// Create a store over `base` using the given format
    pub fn with_format(base: impl Into<PathBuf>, format: F) -> Self {
        Store {
            base: base.into(),
            format,
        }
    }

    /// Base directory this store resolves record paths under
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Resolve the file path for a logical name.
    ///
    /// Deterministic: the same name always maps to the same path, and
    /// distinct names map to distinct paths. The name is used
    /// verbatim as the file stem.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.base.join(format!("{}.{}", name, F::EXTENSION))
    }

    /// Save `value` under its canonical name
    pub fn save<T: Persistable>(&self, value: &T) -> Result<()> {
        self.save_as(value, T::NAME)
    }

    /// Save `value` under an explicit name, replacing any existing
    /// record file in full
    pub fn save_as<T: Persistable>(&self, value: &T, name: &str) -> Result<()> {
        let encoded = self
            .format
            .encode(value)
            .map_err(|source| StoreError::Encode {
                name: name.to_string(),
                source,
            })?;

        let path = self.path_for(name);
        fs::write(&path, encoded).map_err(|source| StoreError::Write {
            name: name.to_string(),
            source,
        })?;

        log::debug!("saved record `{}` to {}", name, path.display());
        Ok(())
    }

    /// Load the canonical record of `T`
    pub fn load<T: Persistable>(&self) -> Result<T> {
        self.load_as(T::NAME)
    }

    /// Load the record stored under an explicit name
    pub fn load_as<T: Persistable>(&self, name: &str) -> Result<T> {
        let path = self.path_for(name);
        log::trace!("loading record `{}` from {}", name, path.display());

        let bytes = fs::read(&path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                StoreError::NotFound {
                    name: name.to_string(),
                }
            } else {
                StoreError::Read {
                    name: name.to_string(),
                    source: e,
                }
            }
        })?;

        self.format
            .decode(&bytes)
            .map_err(|source| StoreError::Decode {
                name: name.to_string(),
                source,
            })
    }

    /// Delete the canonical record of `T`
    pub fn delete<T: Persistable>(&self) -> Result<()> {
        self.delete_as(T::NAME)
    }

    /// Delete the record stored under an explicit name
    pub fn delete_as(&self, name: &str) -> Result<()> {
        let path = self.path_for(name);

        fs::remove_file(&path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                StoreError::NotFound {
                    name: name.to_string(),
                }
            } else {
                StoreError::Delete {
                    name: name.to_string(),
                    source: e,
                }
            }
        })?;

        log::debug!("deleted record `{}` at {}", name, path.display());
        Ok(())
    }

    /// Whether the canonical record of `T` is currently present
    pub fn exists<T: Persistable>(&self) -> bool {
        self.exists_as(T::NAME)
    }

    /// Whether a record file exists under an explicit name.
    /// Filesystem failures read as absent.
    pub fn exists_as(&self, name: &str) -> bool {
        self.path_for(name).exists()
    }
}
