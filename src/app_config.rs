use serde::Deserialize;
use config::{Config, ConfigError, Environment, File};
use std::path::PathBuf;

pub const DEFAULT_STATE_FILE: &str = "./data/budgets.json";

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AppConfig {
    pub state_file: PathBuf,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_sources("budgettracker", "APP")
    }

    fn from_sources(config_file: &str, env_prefix: &str) -> Result<Self, ConfigError> {
        Config::builder()
            // Start off with default values
            .set_default("state_file", DEFAULT_STATE_FILE)?
            .add_source(File::with_name(config_file).required(false))
            // APP_STATE_FILE overrides the config file
            .add_source(Environment::with_prefix(env_prefix))
            .build()?
            .try_deserialize()
    }

    pub fn with_state_file(mut self, state_file: Option<PathBuf>) -> Self {
        if let Some(state_file) = state_file {
            self.state_file = state_file;
        }
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            state_file: PathBuf::from(DEFAULT_STATE_FILE),
        }
    }
}
