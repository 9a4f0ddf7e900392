// src/commands/cli.rs
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

use crate::core::budget_store::BudgetStore;
use crate::core::errors::StoreError;
use crate::core::models::Figure;
use super::common::{Command, CommandExecutor, CommandOutcome, UpdateItemDetails};

const ALL_FIELDS_REQUIRED: &str = "All fields (title, quantity, price) are required!";
const TITLE_REQUIRED: &str = "Please provide a title using the --title or -t option";

#[derive(Parser, Debug)]
#[command(name = "budgettracker", about = "A tracker to help you manage your money", version)]
pub struct Cli {
    /// Budget file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Adds a new item
    New(NewArgs),
    /// Update an existing budget item
    Update(UpdateArgs),
    /// Get a specific budget item by title
    Get(TitleArgs),
    /// Deletes a specified budget item
    Delete(TitleArgs),
}

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Title of the new budget to be added
    #[arg(long, short)]
    title: Option<String>,

    /// Quantity of the new budget
    #[arg(long, short)]
    quantity: Option<String>,

    /// Price per quantity of the new budget
    #[arg(long, short)]
    price: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Title of the budget to update
    #[arg(long, short)]
    title: Option<String>,

    /// New quantity of the budget
    #[arg(long, short)]
    quantity: Option<String>,

    /// New price per quantity
    #[arg(long, short)]
    price: Option<String>,
}

#[derive(Args, Debug)]
pub struct TitleArgs {
    /// Title of the budget item
    #[arg(long, short)]
    title: Option<String>,
}

impl TryFrom<CliCommand> for Command {
    type Error = StoreError;

    fn try_from(command: CliCommand) -> Result<Self, Self::Error> {
        match command {
            CliCommand::New(args) => {
                let missing = || StoreError::MissingField(ALL_FIELDS_REQUIRED.to_string());
                let title = non_empty(args.title).ok_or_else(missing)?;
                let quantity = parse_figure(args.quantity).ok_or_else(missing)?;
                let price = parse_figure(args.price).ok_or_else(missing)?;
                Ok(Command::AddItem { title, quantity, price })
            },
            CliCommand::Update(args) => {
                let title = require_title(args.title)?;
                let updates = UpdateItemDetails {
                    quantity: update_figure(args.quantity, "Quantity")?,
                    price: update_figure(args.price, "Price")?,
                };
                Ok(Command::UpdateItem { title, updates })
            },
            CliCommand::Get(args) => Ok(Command::GetItem { title: require_title(args.title)? }),
            CliCommand::Delete(args) => Ok(Command::DeleteItem { title: require_title(args.title)? }),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_figure(value: Option<String>) -> Option<Figure> {
    value.and_then(|v| Figure::new(v).ok())
}

/// An empty flag means "leave unchanged"; a whitespace-only one is refused.
fn update_figure(value: Option<String>, field: &str) -> Result<Option<Figure>, StoreError> {
    match non_empty(value) {
        None => Ok(None),
        Some(v) => Figure::new(v)
            .map(Some)
            .map_err(|_| StoreError::InvalidField(format!("{} cannot be blank", field))),
    }
}

fn require_title(title: Option<String>) -> Result<String, StoreError> {
    non_empty(title).ok_or_else(|| StoreError::MissingField(TITLE_REQUIRED.to_string()))
}

pub fn parse_cli_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Runs one command against `store` and writes the outcome to `output`.
pub fn execute_command<W: Write>(
    store: &mut BudgetStore,
    command: Command,
    output: &mut W,
) -> Result<(), StoreError> {
    let outcome = store.execute_command(command)?;
    write_outcome(&outcome, output).map_err(StoreError::Output)
}

fn write_outcome<W: Write>(outcome: &CommandOutcome, output: &mut W) -> std::io::Result<()> {
    for notice in &outcome.notices {
        writeln!(output, "{}", notice.yellow())?;
    }
    writeln!(output, "{}", outcome.headline.on_green())?;
    if let Some(body) = &outcome.body {
        writeln!(output, "{}", body)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::MemoryStorage;
    use std::sync::Arc;

    fn parse(args: &[&str]) -> Result<Command, StoreError> {
        let cli = parse_cli_args(args.iter().copied()).unwrap();
        Command::try_from(cli.command)
    }

    #[test]
    fn test_parse_new_with_short_flags() {
        let command = parse(&["budgettracker", "new", "-t", "Rent", "-q", "1", "-p", "1200"]).unwrap();
        assert_eq!(command, Command::AddItem {
            title: "Rent".to_string(),
            quantity: Figure::new("1").unwrap(),
            price: Figure::new("1200").unwrap(),
        });
    }

    #[test]
    fn test_parse_new_requires_every_field() {
        let result = parse(&["budgettracker", "new", "--title", "Rent", "--quantity", "1"]);
        match result {
            Err(StoreError::MissingField(message)) => assert_eq!(message, ALL_FIELDS_REQUIRED),
            other => panic!("Expected MissingField, got {:?}", other),
        }

        let blank = parse(&["budgettracker", "new", "-t", "", "-q", "1", "-p", "2"]);
        assert!(matches!(blank, Err(StoreError::MissingField(_))));
    }

    #[test]
    fn test_parse_update_with_partial_fields() {
        let command = parse(&["budgettracker", "update", "-t", "Rent", "-p", "1300"]).unwrap();
        assert_eq!(command, Command::UpdateItem {
            title: "Rent".to_string(),
            updates: UpdateItemDetails {
                quantity: None,
                price: Some(Figure::new("1300").unwrap()),
            },
        });
    }

    #[test]
    fn test_parse_update_rejects_whitespace_figures() {
        match parse(&["budgettracker", "update", "-t", "Rent", "-q", "  "]) {
            Err(StoreError::InvalidField(message)) => assert_eq!(message, "Quantity cannot be blank"),
            other => panic!("Expected InvalidField, got {:?}", other),
        }
        assert!(matches!(
            parse(&["budgettracker", "update", "-t", "Rent", "-p", "\t"]),
            Err(StoreError::InvalidField(_))
        ));
    }

    #[test]
    fn test_parse_update_treats_empty_figure_as_unchanged() {
        let command = parse(&["budgettracker", "update", "-t", "Rent", "-q", "", "-p", "9"]).unwrap();
        assert_eq!(command, Command::UpdateItem {
            title: "Rent".to_string(),
            updates: UpdateItemDetails {
                quantity: None,
                price: Some(Figure::new("9").unwrap()),
            },
        });
    }

    #[test]
    fn test_parse_title_only_commands_require_title() {
        for name in ["update", "get", "delete"] {
            match parse(&["budgettracker", name]) {
                Err(StoreError::MissingField(message)) => assert_eq!(message, TITLE_REQUIRED),
                other => panic!("Expected MissingField for {}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_parse_global_file_flag() {
        let cli = parse_cli_args(["budgettracker", "get", "-t", "Rent", "--file", "/tmp/b.json"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/b.json")));
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(parse_cli_args(["budgettracker", "list"]).is_err());
    }

    #[test]
    fn test_execute_command_writes_messages() {
        let mut store = BudgetStore::open(Arc::new(MemoryStorage::default())).unwrap();
        let mut output = Vec::new();

        let add = parse(&["budgettracker", "new", "-t", "Rent", "-q", "1", "-p", "1200"]).unwrap();
        execute_command(&mut store, add, &mut output).unwrap();
        let get = parse(&["budgettracker", "get", "-t", "Rent"]).unwrap();
        execute_command(&mut store, get, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("No existing budgets found, starting fresh..."));
        assert!(text.contains("New budget added successfully!"));
        assert!(text.contains("Budget found:"));
        assert!(text.contains("\"title\": \"Rent\""));
    }

    #[test]
    fn test_execute_command_reports_not_found() {
        let mut store = BudgetStore::open(Arc::new(MemoryStorage::default())).unwrap();
        let add = parse(&["budgettracker", "new", "-t", "Rent", "-q", "1", "-p", "1200"]).unwrap();
        execute_command(&mut store, add, &mut Vec::new()).unwrap();

        let mut output = Vec::new();
        let delete = parse(&["budgettracker", "delete", "-t", "Power"]).unwrap();
        let err = execute_command(&mut store, delete, &mut output).unwrap_err();

        assert_eq!(err.to_string(), "No budget found with the title 'Power'");
        assert!(output.is_empty());
    }

    #[test]
    fn test_execute_command_on_empty_store() {
        let mut store = BudgetStore::open(Arc::new(MemoryStorage::default())).unwrap();

        let get = parse(&["budgettracker", "get", "-t", "Rent"]).unwrap();
        let err = execute_command(&mut store, get, &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "You don't have any items yet");

        let delete = parse(&["budgettracker", "delete", "-t", "Rent"]).unwrap();
        let err = execute_command(&mut store, delete, &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "Nothing to delete");
    }

    #[test]
    fn test_write_outcome_orders_notice_headline_body() {
        let outcome = CommandOutcome::new("Budget found:")
            .with_notice("first")
            .with_body("{\n  \"title\": \"a\\nb\"\n}".to_string());
        let mut output = Vec::new();
        write_outcome(&outcome, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let notice = text.find("first").unwrap();
        let headline = text.find("Budget found:").unwrap();
        let body = text.find("\"title\"").unwrap();
        assert!(notice < headline && headline < body);
    }
}
