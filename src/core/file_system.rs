// src/core/file_system.rs
use crate::core::errors::StoreError;
use crate::core::state::BudgetStoreState;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use log::{debug, info};

pub struct FileSystem;

impl FileSystem {
    pub fn save_state(state: &BudgetStoreState, state_file: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(state)?;

        if let Some(parent) = state_file.parent() {
            fs::create_dir_all(parent).map_err(|source| Self::io_error(parent, source))?;
        }

        let temp_file = Self::temp_path(state_file);
        fs::write(&temp_file, &json).map_err(|source| Self::io_error(&temp_file, source))?;
        fs::rename(&temp_file, state_file).map_err(|source| Self::io_error(state_file, source))?;

        debug!("Wrote {} budget(s) to {}", state.item_count(), state_file.display());
        Ok(())
    }

    pub fn load_state(path: &Path) -> Result<BudgetStoreState, StoreError> {
        let json = fs::read_to_string(path).map_err(|source| Self::io_error(path, source))?;
        if json.trim().is_empty() {
            return Ok(BudgetStoreState::new());
        }
        serde_json::from_str(&json).map_err(|source| StoreError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the state file, treating a missing file as an empty store.
    pub fn try_load_state(path: &Path) -> Result<BudgetStoreState, StoreError> {
        match Self::load_state(path) {
            Err(StoreError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                info!("No existing budgets found at {}, starting fresh", path.display());
                Ok(BudgetStoreState::new())
            }
            result => result,
        }
    }

    fn temp_path(state_file: &Path) -> PathBuf {
        let mut name = state_file.as_os_str().to_os_string();
        name.push(".temp");
        PathBuf::from(name)
    }

    fn io_error(path: &Path, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
