//! Key-value JSON storage for app data.
//!
//! Each key is persisted as its own JSON file under the app data directory
//! (`~/.local/share/chronolens/` or platform equivalent). Values are written
//! wholesale on every mutation: a temp file is written first and renamed over
//! the previous one, so readers never observe a half-written value.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors during key-value storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create data directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path}")]
    ReadKey {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    WriteKey {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("stored data at {path} is not valid JSON")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize value for key '{key}'")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Durable key-value store backed by one JSON file per key.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Store rooted at the default app data directory.
    /// Falls back to the current directory if no platform data dir exists.
    pub fn open_default() -> Self {
        let dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chronolens");
        Self { dir }
    }

    /// Store rooted at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read and deserialize the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key has never been written. A present but
    /// unparseable value is an error; callers decide whether to treat that as
    /// fatal or fall back to a default.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let path = self.path_for(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StorageError::ReadKey { path, source: err }),
        };

        let value =
            serde_json::from_slice(&bytes).map_err(|err| StorageError::Corrupt {
                path,
                source: err,
            })?;
        Ok(Some(value))
    }

    /// Serialize `value` and replace whatever is stored under `key`.
    ///
    /// The write is atomic at the file level: the payload lands in a temp
    /// file which is then renamed over the destination.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|err| StorageError::CreateDir {
            path: self.dir.clone(),
            source: err,
        })?;

        let bytes = serde_json::to_vec(value).map_err(|err| StorageError::Serialize {
            key: key.to_string(),
            source: err,
        })?;

        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, &bytes).map_err(|err| StorageError::WriteKey {
            path: tmp.clone(),
            source: err,
        })?;
        fs::rename(&tmp, &path).map_err(|err| StorageError::WriteKey { path, source: err })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests;
