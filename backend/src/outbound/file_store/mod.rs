//! Durable key-value store keeping one JSON file per key.
//!
//! Each key `k` lives in `<root>/k.json`. Writes go through a temp file and
//! rename, so a crash mid-write leaves the previous value intact.

mod atomic_write;

use std::io;

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use tracing::debug;

use self::atomic_write::{TEMP_PREFIX, write_atomic};
use crate::domain::ports::{KeyValueStore, KeyValueStoreError};

const FILE_EXTENSION: &str = "json";

/// Key-value store rooted at a directory on disk.
#[derive(Debug)]
pub struct FileKeyValueStore {
    dir: Dir,
    root: Utf8PathBuf,
}

impl FileKeyValueStore {
    /// Open the store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl AsRef<Utf8Path>) -> Result<Self, KeyValueStoreError> {
        let root = root.as_ref();
        let unavailable = |err: io::Error| {
            KeyValueStoreError::unavailable(format!("cannot open store at {root}: {err}"))
        };
        Dir::create_ambient_dir_all(root, ambient_authority()).map_err(unavailable)?;
        let dir = Dir::open_ambient_dir(root, ambient_authority()).map_err(unavailable)?;
        debug!(%root, "file store opened");
        Ok(Self {
            dir,
            root: root.to_path_buf(),
        })
    }

    /// Directory holding the store's files.
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn file_name(key: &str) -> Option<String> {
        let mut components = Utf8Path::new(key).components();
        match (components.next(), components.next()) {
            (Some(Utf8Component::Normal(name)), None) if !name.starts_with(TEMP_PREFIX) => {
                Some(format!("{name}.{FILE_EXTENSION}"))
            }
            _ => None,
        }
    }

    fn checked_file_name(key: &str) -> Result<String, KeyValueStoreError> {
        Self::file_name(key).ok_or_else(|| {
            KeyValueStoreError::write(key, "key must be a single visible path component")
        })
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        let Some(file_name) = Self::file_name(key) else {
            return Ok(None);
        };
        match self.dir.read_to_string(&file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(KeyValueStoreError::read(key, err.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        let file_name = Self::checked_file_name(key)?;
        write_atomic(&self.dir, &file_name, value)
            .map_err(|err| KeyValueStoreError::write(key, err.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        let file_name = Self::checked_file_name(key)?;
        match self.dir.remove_file(&file_name) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(KeyValueStoreError::write(key, err.to_string())),
        }
    }

    fn clear(&self) -> Result<(), KeyValueStoreError> {
        let root = self.root.as_str();
        let entries = self
            .dir
            .entries()
            .map_err(|err| KeyValueStoreError::write(root, err.to_string()))?;
        let mut removed = 0_usize;
        for listed in entries {
            let entry = listed.map_err(|err| KeyValueStoreError::write(root, err.to_string()))?;
            let os_name = entry.file_name();
            let Some(name) = os_name.to_str() else {
                continue;
            };
            let is_value = Utf8Path::new(name).extension() == Some(FILE_EXTENSION)
                && !name.starts_with(TEMP_PREFIX);
            if !is_value {
                continue;
            }
            match self.dir.remove_file(name) {
                Ok(()) => removed += 1,
                Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                Err(err) => return Err(KeyValueStoreError::write(name, err.to_string())),
            }
        }
        debug!(%root, removed, "file store cleared");
        Ok(())
    }
}
