use super::StorageBackend;
use crate::error::{JobdeckError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const SLOT_EXT: &str = ".json";

/// File-backed storage area: each key lives in `<root>/<key>.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}{}", key, SLOT_EXT))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(JobdeckError::Io)?;
        }
        Ok(())
    }
}

fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(JobdeckError::Store(format!("Invalid storage key: {:?}", key)))
    }
}

impl StorageBackend for FsBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(JobdeckError::Io)?;
        Ok(Some(content))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.ensure_root()?;

        // Atomic write: a reader never sees a half-written slot
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        let written = fs::write(&tmp_path, value)
            .and_then(|()| fs::rename(&tmp_path, self.slot_path(key)));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(JobdeckError::Io(e));
        }
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        let path = self.slot_path(key);
        if path.exists() {
            fs::remove_file(path).map_err(JobdeckError::Io)?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(JobdeckError::Io)? {
            let path = entry.map_err(JobdeckError::Io)?.path();
            if !path.is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                if let Some(key) = name.strip_suffix(SLOT_EXT) {
                    if !key.starts_with('.') && validate_key(key).is_ok() {
                        keys.push(key.to_string());
                    }
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}
