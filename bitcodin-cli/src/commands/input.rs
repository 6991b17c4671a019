//! Input command handlers

use anyhow::{Context, Result};
use bitcodin_core::domain::ResourceId;
use bitcodin_core::domain::input::Input;
use clap::Subcommand;
use colored::*;

use super::{or_dash, print_deleted};
use crate::config::Config;

/// Input subcommands
#[derive(Subcommand)]
pub enum InputCommands {
    /// Get input details
    Get {
        /// Input ID
        id: ResourceId,
    },
    /// List inputs
    List {
        /// Page number
        #[arg(short, long, default_value = "1")]
        page: u32,
    },
    /// Delete an input
    Delete {
        /// Input ID
        id: ResourceId,
    },
}

/// Handle input commands
pub async fn handle_input_command(command: InputCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        InputCommands::Get { id } => {
            let input = client
                .get_input(id)
                .await
                .with_context(|| format!("Failed to get input {}", id))?;
            print_input_details(&input);
        }
        InputCommands::List { page } => {
            let inputs = client.list_inputs(page).await.context("Failed to list inputs")?;
            if inputs.is_empty() {
                println!("{}", "No inputs found.".yellow());
            } else {
                println!("{}", format!("Found {} input(s):", inputs.len()).bold());
                println!();
                for input in inputs {
                    println!(
                        "  {} Input {}  {}",
                        "▸".cyan(),
                        input.input_id.to_string().cyan(),
                        or_dash(input.filename.as_deref())
                    );
                }
            }
        }
        InputCommands::Delete { id } => {
            client
                .delete_input(id)
                .await
                .with_context(|| format!("Failed to delete input {}", id))?;
            print_deleted("Input", id);
        }
    }

    Ok(())
}

fn print_input_details(input: &Input) {
    println!("{}", "Input Details:".bold());
    println!("  ID:        {}", input.input_id.to_string().cyan());
    println!("  Filename:  {}", or_dash(input.filename.as_deref()));
    println!("  Type:      {}", or_dash(input.input_type.as_deref()));
    println!("  Thumbnail: {}", or_dash(input.thumbnail_url.as_deref()));

    if !input.media_configurations.is_empty() {
        println!("\n{}", "Streams:".bold());
        for stream in &input.media_configurations {
            let resolution = match (stream.width, stream.height) {
                (Some(w), Some(h)) => format!("{}x{}", w, h),
                _ => String::new(),
            };
            println!(
                "  #{} {} {} {}",
                stream.stream_id,
                stream.media_type.cyan(),
                stream.codec.as_deref().unwrap_or_default(),
                resolution.dimmed()
            );
        }
    }
}
