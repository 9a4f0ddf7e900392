use crate::app_config::AppConfig;
use crate::commands::common::Command;
use crate::core::budget_store::BudgetStore;
use crate::core::errors::StoreError;
use crate::services::storage::JsonFileStorage;
use std::io::Write;
use std::sync::Arc;
use dotenvy::dotenv;
use log::debug;

pub mod core;
pub mod services;
pub mod commands;
pub mod app_config;

pub fn initialize_environment() {
    // A missing .env file is fine; variables may come from the shell.
    dotenv().ok();
    pretty_env_logger::init();
}

pub fn initialize_store(config: &AppConfig) -> Result<BudgetStore, StoreError> {
    debug!("Using budget file {}", config.state_file.display());
    let storage = Arc::new(JsonFileStorage::new(config.state_file.clone()));
    BudgetStore::open(storage)
}

pub fn run_command<W: Write>(config: &AppConfig, command: Command, output: &mut W) -> Result<(), StoreError> {
    let mut store = initialize_store(config)?;
    commands::cli::execute_command(&mut store, command, output)
}
