//! Errors from the budget store.
use std::path::PathBuf;

use thiserror::Error;

/// Every way a budget command can fail.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required command-line field was not given.
    #[error("{0}")]
    MissingField(String),

    /// A field was given but its value is unusable.
    #[error("{0}")]
    InvalidField(String),

    /// An item with this title is already tracked.
    #[error("Budget with title '{title}' already exists")]
    DuplicateTitle {
        title: String,
    },

    /// No item carries this title.
    #[error("No budget found with the title '{title}'")]
    NotFound {
        title: String,
    },

    /// A lookup ran against a store with no items.
    #[error("You don't have any items yet")]
    NoItems,

    /// A delete ran against a store with no items.
    #[error("Nothing to delete")]
    NothingToDelete,

    /// The budget file exists but does not hold a valid budget list.
    #[error("Budget file {} is not valid JSON: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The budget file could not be read or written.
    #[error("Could not access budget file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Command output could not be written.
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("Failed to serialize budgets: {0}")]
    Serialize(#[from] serde_json::Error),
}

