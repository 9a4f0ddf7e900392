use crate::core::errors::StoreError;
use crate::core::models::Figure;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddItem {
        title: String,
        quantity: Figure,
        price: Figure,
    },
    UpdateItem {
        title: String,
        updates: UpdateItemDetails,
    },
    GetItem {
        title: String,
    },
    DeleteItem {
        title: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateItemDetails {
    pub quantity: Option<Figure>,
    pub price: Option<Figure>,
}

/// What a finished command has to tell the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandOutcome {
    /// Informational lines shown before the result.
    pub notices: Vec<String>,
    pub headline: String,
    /// Extra detail printed under the headline, uncolored.
    pub body: Option<String>,
}

impl CommandOutcome {
    pub fn new(headline: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            ..Self::default()
        }
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notices.push(notice.into());
        self
    }
}

pub trait CommandExecutor {
    fn execute_command(&mut self, command: Command) -> Result<CommandOutcome, StoreError>;
}
