// src/bin/budgettracker.rs

use budgettracker::{initialize_environment, run_command};
use budgettracker::app_config::AppConfig;
use budgettracker::commands::cli::Cli;
use budgettracker::commands::common::Command;
use clap::Parser;
use colored::Colorize;
use log::error;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    initialize_environment();

    let cli = Cli::parse();
    let config = AppConfig::new()?.with_state_file(cli.file);

    let mut stdout = std::io::stdout();
    let result = Command::try_from(cli.command)
        .and_then(|command| run_command(&config, command, &mut stdout));

    if let Err(e) = result {
        error!("Command failed: {:?}", e);
        eprintln!("{}", e.to_string().on_red());
        std::process::exit(1);
    }

    Ok(())
}
