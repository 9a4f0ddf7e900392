// src/core/budget_store.rs

use crate::commands::common::{Command, CommandExecutor, CommandOutcome, UpdateItemDetails};
use crate::core::errors::StoreError;
use crate::core::models::{BudgetItem, Figure};
use crate::core::state::BudgetStoreState;
use crate::services::storage::StorageServiceTrait;

use std::sync::Arc;
use log::{debug, info};

pub struct BudgetStore {
    state: BudgetStoreState,
    storage: Arc<dyn StorageServiceTrait>,
}

impl BudgetStore {
    /// Reads the whole budget list from `storage`.
    pub fn open(storage: Arc<dyn StorageServiceTrait>) -> Result<Self, StoreError> {
        let state = storage.load()?;
        debug!("Loaded {} budget(s)", state.item_count());
        Ok(Self { state, storage })
    }

    pub fn state(&self) -> &BudgetStoreState {
        &self.state
    }

    pub fn save_state(&self) -> Result<(), StoreError> {
        self.storage.save(&self.state)
    }

    pub fn add(&mut self, title: String, quantity: Figure, price: Figure) -> Result<&BudgetItem, StoreError> {
        if self.state.contains_title(&title) {
            return Err(StoreError::DuplicateTitle { title });
        }

        info!("Adding budget '{}'", title);
        self.state.push_item(BudgetItem::new(title.clone(), quantity, price));
        self.save_state()?;
        self.get(&title)
    }

    pub fn update(&mut self, title: &str, updates: UpdateItemDetails) -> Result<&BudgetItem, StoreError> {
        let item = self.state.get_item_mut(title).ok_or_else(|| StoreError::NotFound {
            title: title.to_string(),
        })?;

        if let Some(quantity) = updates.quantity {
            item.set_quantity(quantity);
        }
        if let Some(price) = updates.price {
            item.set_price(price);
        }
        item.touch();

        info!("Updated budget '{}'", title);
        self.save_state()?;
        self.get(title)
    }

    pub fn get(&self, title: &str) -> Result<&BudgetItem, StoreError> {
        if self.state.is_empty() {
            return Err(StoreError::NoItems);
        }
        self.state.get_item(title).ok_or_else(|| StoreError::NotFound {
            title: title.to_string(),
        })
    }

    pub fn delete(&mut self, title: &str) -> Result<BudgetItem, StoreError> {
        if self.state.is_empty() {
            return Err(StoreError::NothingToDelete);
        }
        let removed = self.state.remove_item(title).ok_or_else(|| StoreError::NotFound {
            title: title.to_string(),
        })?;

        info!("Deleted budget '{}'", title);
        self.save_state()?;
        Ok(removed)
    }
}

impl CommandExecutor for BudgetStore {
    fn execute_command(&mut self, command: Command) -> Result<CommandOutcome, StoreError> {
        match command {
            Command::AddItem { title, quantity, price } => {
                let starting_fresh = self.state.is_empty();
                self.add(title, quantity, price)?;
                let outcome = CommandOutcome::new("New budget added successfully!");
                if starting_fresh {
                    Ok(outcome.with_notice("No existing budgets found, starting fresh..."))
                } else {
                    Ok(outcome)
                }
            },
            Command::UpdateItem { title, updates } => {
                self.update(&title, updates)?;
                Ok(CommandOutcome::new(format!("Budget with title '{}' updated successfully!", title)))
            },
            Command::GetItem { title } => {
                let item = self.get(&title)?;
                let body = serde_json::to_string_pretty(item)?;
                Ok(CommandOutcome::new("Budget found:").with_body(body))
            },
            Command::DeleteItem { title } => {
                self.delete(&title)?;
                Ok(CommandOutcome::new(format!("Budget with title '{}' deleted successfully", title)))
            },
        }
    }
}
