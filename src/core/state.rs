// src/core/state.rs

use serde::{Serialize, Deserialize};

use crate::core::models::BudgetItem;

/// Every budget item in the store, in insertion order.
///
/// Serialized as a bare JSON array so the file stays readable by hand.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetStoreState {
    items: Vec<BudgetItem>,
}

impl BudgetStoreState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<BudgetItem>) -> Self {
        Self { items }
    }

    // Getters
    pub fn items(&self) -> &[BudgetItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    // Modifiers
    pub fn push_item(&mut self, item: BudgetItem) {
        self.items.push(item);
    }

    pub fn remove_item(&mut self, title: &str) -> Option<BudgetItem> {
        let index = self.position(title)?;
        Some(self.items.remove(index))
    }

    // Helper methods
    pub fn get_item(&self, title: &str) -> Option<&BudgetItem> {
        self.items.iter().find(|item| item.title_matches(title))
    }

    pub fn get_item_mut(&mut self, title: &str) -> Option<&mut BudgetItem> {
        self.items.iter_mut().find(|item| item.title_matches(title))
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.get_item(title).is_some()
    }

    fn position(&self, title: &str) -> Option<usize> {
        self.items.iter().position(|item| item.title_matches(title))
    }
}
