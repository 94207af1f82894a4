//! Client-local key-value persistence.
//!
//! The browser build talks to `window.localStorage`. Native builds keep a flat
//! JSON object in the per-user data directory. Every mutation writes a sibling
//! temp file and renames it over the original, so a crash mid-write leaves the
//! previous contents in place. Tests use [`MemoryStore`].

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is not available on this platform")]
    Unavailable,
    #[error("failed to read `{0}`")]
    Read(String),
    #[error("failed to write `{0}`")]
    Write(String),
    #[error("storage file is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("storage file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Minimal string-to-string store, mirroring the Web Storage API.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore as PlatformStore;
#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStore as PlatformStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{KeyValueStore, StorageError};
    use crate::core::config::AppConfig;

    /// `window.localStorage`, looked up on every call.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserStore;

    impl BrowserStore {
        pub fn open(_config: &AppConfig) -> Self {
            Self
        }

        fn storage(&self) -> Result<web_sys::Storage, StorageError> {
            web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or(StorageError::Unavailable)
        }
    }

    impl KeyValueStore for BrowserStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.storage()?
                .get_item(key)
                .map_err(|_| StorageError::Read(key.to_string()))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage()?
                .set_item(key, value)
                .map_err(|_| StorageError::Write(key.to_string()))
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.storage()?
                .remove_item(key)
                .map_err(|_| StorageError::Write(key.to_string()))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::collections::BTreeMap;
    use std::fs;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    use directories::ProjectDirs;
    use tempfile::NamedTempFile;

    use super::{KeyValueStore, StorageError};
    use crate::core::config::AppConfig;

    /// Flat JSON object on disk.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        /// Store in the per-user data directory, or the working directory when
        /// no home directory can be resolved.
        pub fn open(config: &AppConfig) -> Self {
            let (qualifier, organization, application) = config.project_dirs;
            let path = match ProjectDirs::from(qualifier, organization, application) {
                Some(dirs) => dirs.data_dir().join(config.storage_file),
                None => {
                    tracing::warn!("[storage] no home directory; using ./{}", config.storage_file);
                    PathBuf::from(config.storage_file)
                }
            };
            Self::at(path)
        }

        pub fn at(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
            if !self.path.exists() {
                return Ok(BTreeMap::new());
            }
            let raw = fs::read_to_string(&self.path)?;
            if raw.trim().is_empty() {
                return Ok(BTreeMap::new());
            }
            Ok(serde_json::from_str(&raw)?)
        }

        /// Entries to mutate. A file that no longer parses is discarded so the
        /// next write replaces it instead of failing forever.
        fn load_for_write(&self) -> Result<BTreeMap<String, String>, StorageError> {
            match self.load() {
                Err(StorageError::Serde(err)) => {
                    tracing::warn!(
                        "[storage] {} is corrupt ({err}); starting from an empty store",
                        self.path.display()
                    );
                    Ok(BTreeMap::new())
                }
                other => other,
            }
        }

        fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
            let parent = match self.path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            fs::create_dir_all(parent)?;

            let json = serde_json::to_string_pretty(entries)?;
            let mut staged = NamedTempFile::new_in(parent)?;
            staged.write_all(json.as_bytes())?;
            staged.as_file().sync_all()?;
            staged.persist(&self.path).map_err(|err| err.error)?;
            Ok(())
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.load()?.remove(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let mut entries = self.load_for_write()?;
            entries.insert(key.to_string(), value.to_string());
            self.persist(&entries)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            let mut entries = self.load_for_write()?;
            entries.remove(key);
            self.persist(&entries)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn missing_file_reads_as_empty() {
            let dir = tempfile::tempdir().unwrap();
            let store = FileStore::at(dir.path().join("nested/storage.json"));
            assert_eq!(store.get("isLoggedIn").unwrap(), None);
            assert!(!store.path().exists());
        }

        #[test]
        fn values_survive_reopening() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("nested/storage.json");

            FileStore::at(&path).set("userPhone", "+261341234567").unwrap();

            let reopened = FileStore::at(&path);
            assert_eq!(
                reopened.get("userPhone").unwrap().as_deref(),
                Some("+261341234567")
            );

            reopened.remove("userPhone").unwrap();
            assert_eq!(FileStore::at(&path).get("userPhone").unwrap(), None);
        }

        #[test]
        fn corrupt_file_is_reported() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("storage.json");
            fs::write(&path, "{not json").unwrap();

            let err = FileStore::at(&path).get("isLoggedIn").unwrap_err();
            assert!(matches!(err, StorageError::Serde(_)));
        }

        #[test]
        fn writes_recover_from_a_truncated_file() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("storage.json");
            fs::write(&path, r#"{"language": "fr-"#).unwrap();

            let store = FileStore::at(&path);
            store.set("isLoggedIn", "true").unwrap();

            assert_eq!(store.get("isLoggedIn").unwrap().as_deref(), Some("true"));
            assert_eq!(store.get("language").unwrap(), None);
        }

        #[test]
        fn remove_rewrites_a_corrupt_file() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("storage.json");
            fs::write(&path, "{not json").unwrap();

            let store = FileStore::at(&path);
            store.remove("isLoggedIn").unwrap();
            assert_eq!(store.get("isLoggedIn").unwrap(), None);
        }

        #[test]
        fn rewrite_leaves_no_temp_files_behind() {
            let dir = tempfile::tempdir().unwrap();
            let store = FileStore::at(dir.path().join("storage.json"));
            store.set("userPhone", "+261341234567").unwrap();
            store.set("isLoggedIn", "true").unwrap();

            let names: Vec<_> = fs::read_dir(dir.path())
                .unwrap()
                .map(|entry| entry.unwrap().file_name())
                .collect();
            assert_eq!(names, vec![std::ffi::OsString::from("storage.json")]);
        }
    }
}
