use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[cfg(test)]
use mockall::automock;

use crate::core::errors::StoreError;
use crate::core::file_system::FileSystem;
use crate::core::state::BudgetStoreState;

/// Where the budget list lives between invocations.
#[cfg_attr(test, automock)]
pub trait StorageServiceTrait {
    fn load(&self) -> Result<BudgetStoreState, StoreError>;
    fn save(&self, state: &BudgetStoreState) -> Result<(), StoreError>;
}

/// Budget list kept in a JSON file on disk.
pub struct JsonFileStorage {
    state_file: PathBuf,
}

/// Budget list kept in memory, for callers that never touch disk.
#[derive(Default)]
pub struct MemoryStorage {
    state: Mutex<BudgetStoreState>,
}

impl JsonFileStorage {
    pub fn new(state_file: impl Into<PathBuf>) -> Self {
        Self {
            state_file: state_file.into(),
        }
    }

    pub fn state_file(&self) -> &Path {
        &self.state_file
    }
}

impl StorageServiceTrait for JsonFileStorage {
    fn load(&self) -> Result<BudgetStoreState, StoreError> {
        FileSystem::try_load_state(&self.state_file)
    }

    fn save(&self, state: &BudgetStoreState) -> Result<(), StoreError> {
        FileSystem::save_state(state, &self.state_file)
    }
}

impl MemoryStorage {
    pub fn new(state: BudgetStoreState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    pub fn snapshot(&self) -> BudgetStoreState {
        self.lock_state().clone()
    }

    fn lock_state(&self) -> MutexGuard<'_, BudgetStoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StorageServiceTrait for MemoryStorage {
    fn load(&self) -> Result<BudgetStoreState, StoreError> {
        Ok(self.snapshot())
    }

    fn save(&self, state: &BudgetStoreState) -> Result<(), StoreError> {
        *self.lock_state() = state.clone();
        Ok(())
    }
}
