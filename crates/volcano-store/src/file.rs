//! Directory-backed key-value store.
//!
//! Each key lives in its own file, `<dir>/<key>.json`. Writes go to a
//! temporary sibling first and are renamed into place, so a crash mid-write
//! leaves either the old value or the new one.
//!
//! # Key Mapping
//!
//! Keys map onto file names one to one. A key must be non-empty, must not
//! start with `.`, and may only contain ASCII letters, digits, `.`, `-` and
//! `_`. Anything else is rejected with [`StoreError::InvalidKey`].
//!
//! | Key | File |
//! |-----|------|
//! | `rw.v3.wallet` | `rw.v3.wallet.json` |
//! | `rw.v3.opened.map.ids` | `rw.v3.opened.map.ids.json` |
//! | `some/odd key` | rejected |

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// A [`KeyValueStore`] that keeps one file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Open`] if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StoreError::Open {
            path: root.display().to_string(),
            source,
        })?;
        tracing::debug!(root = %root.display(), "Opened file store");
        Ok(Self { root })
    }

    /// The directory this store writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The file that holds `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidKey`] if `key` has no file name.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let key = validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

const fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_')
}

/// Accept `key` only if it is usable verbatim as a file stem.
fn validate_key(key: &str) -> Result<&str, StoreError> {
    if key.is_empty() || key.starts_with('.') || !key.chars().all(is_key_char) {
        tracing::warn!(key, "Rejected store key");
        return Err(StoreError::InvalidKey {
            key: key.to_owned(),
        });
    }
    Ok(key)
}

impl KeyValueStore for FileStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)?) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let target = self.path_for(key)?;
        let staging = self.root.join(format!(".{key}.tmp"));
        let io_err = |source| StoreError::Io {
            key: key.to_owned(),
            source,
        };

        fs::write(&staging, value).map_err(io_err)?;
        fs::rename(&staging, &target).map_err(io_err)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }
}
