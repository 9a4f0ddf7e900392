// src/core/models/mod.rs

pub mod budget_item;

pub use budget_item::*;
