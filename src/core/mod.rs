pub mod budget_store;
pub mod errors;
pub mod file_system;
pub mod models;
pub mod state;
