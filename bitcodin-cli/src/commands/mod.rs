//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod input;
mod job;
mod output;
mod profile;

pub use input::InputCommands;
pub use job::JobCommands;
pub use output::OutputCommands;
pub use profile::ProfileCommands;

use anyhow::Result;
use clap::Subcommand;
use colored::*;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Input management
    Input {
        #[command(subcommand)]
        command: InputCommands,
    },
    /// Encoding profile management
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Job inspection and transfers
    Job {
        #[command(subcommand)]
        command: JobCommands,
    },
    /// Output management
    Output {
        #[command(subcommand)]
        command: OutputCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Input { command } => input::handle_input_command(command, config).await,
        Commands::Profile { command } => profile::handle_profile_command(command, config).await,
        Commands::Job { command } => job::handle_job_command(command, config).await,
        Commands::Output { command } => output::handle_output_command(command, config).await,
    }
}

/// Print the confirmation shared by all delete commands
fn print_deleted(kind: &str, id: u64) {
    println!("{}", format!("✓ {} {} deleted", kind, id).green().bold());
}

/// Render an optional field, dimmed placeholder when absent
fn or_dash(value: Option<&str>) -> ColoredString {
    match value {
        Some(value) => value.normal(),
        None => "-".dimmed(),
    }
}
