//! Persistent key-value storage for client state.
//!
//! `FileStorage` keeps a flat JSON object of string keys to string values in
//! `<BLOG_HOME>/storage.json`, written with restricted permissions (0600).
//! Values are never logged.

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};

use crate::config::paths;

/// String key-value store with local-storage semantics.
pub trait Storage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    /// Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// JSON-file backed storage.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    // Serializes load-modify-save so each operation is atomic within the process.
    lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Storage at the default location under `BLOG_HOME`.
    pub fn open_default() -> Self {
        Self::new(paths::storage_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read storage from {}", self.path.display()))?;
        if contents.trim().is_empty() {
            return Ok(HashMap::new());
        }
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse storage from {}", self.path.display()))
    }

    fn save(&self, items: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(items).context("Failed to serialize storage")?;
        let tmp_path = self.path.with_extension("json.tmp");

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&tmp_path)
                .with_context(|| format!("Failed to open {} for writing", tmp_path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", tmp_path.display()))?;
        }

        #[cfg(not(unix))]
        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&tmp_path)
                .with_context(|| format!("Failed to open {} for writing", tmp_path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", tmp_path.display()))?;
        }

        fs::rename(&tmp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                self.path.display()
            )
        })
    }

    fn with_items<T>(
        &self,
        f: impl FnOnce(&mut HashMap<String, String>) -> (T, bool),
    ) -> Result<T> {
        let _guard = self
            .lock
            .lock()
            .map_err(|e| anyhow!("storage lock poisoned: {e}"))?;
        let mut items = self.load()?;
        let (out, dirty) = f(&mut items);
        if dirty {
            self.save(&items)?;
        }
        Ok(out)
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.with_items(|items| (items.get(key).cloned(), false))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.with_items(|items| {
            items.insert(key.to_string(), value.to_string());
            ((), true)
        })
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.with_items(|items| {
            let existed = items.remove(key).is_some();
            ((), existed)
        })
    }
}

/// In-process storage, lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self
            .items
            .lock()
            .map_err(|e| anyhow!("storage lock poisoned: {e}"))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .lock()
            .map_err(|e| anyhow!("storage lock poisoned: {e}"))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items
            .lock()
            .map_err(|e| anyhow!("storage lock poisoned: {e}"))?
            .remove(key);
        Ok(())
    }
}
