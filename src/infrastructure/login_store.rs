//! JSON-file persistence for the login record.
//!
//! One small record under one fixed path: an opaque key-value store with
//! no atomicity guarantees beyond the single-writer assumption.

use std::fs;
use std::path::PathBuf;

use crate::domain::{AppError, LoginRecord, Result};

/// Durable storage for the login record.
pub struct LoginStore {
    path: PathBuf,
}

impl LoginStore {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the stored record. A missing file reads as `None`; a corrupt
    /// record is discarded, the file removed, and `None` returned, so the
    /// caller falls back to logged-out.
    ///
    /// # Errors
    /// Returns an IO error if the file exists but cannot be read.
    pub fn load(&self) -> Result<Option<LoginRecord>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| AppError::io(format!("Failed to read {}", self.path.display()), e))?;

        match serde_json::from_str(&content) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "discarding corrupt login record"
                );
                let _ = fs::remove_file(&self.path);
                Ok(None)
            }
        }
    }

    /// Write the record, creating the parent directory as needed.
    ///
    /// # Errors
    /// Returns an IO error if the directory or file cannot be written.
    pub fn save(&self, record: &LoginRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::io("Failed to create data directory", e))?;
        }

        let content = serde_json::to_string_pretty(record).map_err(AppError::json_parse)?;
        fs::write(&self.path, content)
            .map_err(|e| AppError::io(format!("Failed to write {}", self.path.display()), e))?;

        Ok(())
    }

    /// Remove the record. Returns whether one existed.
    ///
    /// # Errors
    /// Returns an IO error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)
            .map_err(|e| AppError::io(format!("Failed to remove {}", self.path.display()), e))?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_reads_logged_out() {
        let dir = tempdir().unwrap();
        let store = LoginStore::new(dir.path().join("session.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempdir().unwrap();
        let store = LoginStore::new(dir.path().join("session.json"));

        store.save(&LoginRecord::new("admin")).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert!(loaded.is_logged_in);
        assert_eq!(loaded.username, "admin");
    }

    #[test]
    fn test_corrupt_record_discarded_and_removed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not valid json").unwrap();

        let store = LoginStore::new(path.clone());
        assert!(store.load().unwrap().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_clear() {
        let dir = tempdir().unwrap();
        let store = LoginStore::new(dir.path().join("session.json"));

        assert!(!store.clear().unwrap());
        store.save(&LoginRecord::new("admin")).unwrap();
        assert!(store.clear().unwrap());
        assert!(store.load().unwrap().is_none());
    }
}
