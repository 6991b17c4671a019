//! Output command handlers

use anyhow::{Context, Result};
use bitcodin_core::domain::ResourceId;
use clap::Subcommand;
use colored::*;

use super::{or_dash, print_deleted};
use crate::config::Config;

/// Output subcommands
#[derive(Subcommand)]
pub enum OutputCommands {
    /// Get output details
    Get {
        /// Output ID
        id: ResourceId,
    },
    /// Delete an output
    Delete {
        /// Output ID
        id: ResourceId,
    },
}

/// Handle output commands
pub async fn handle_output_command(command: OutputCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        OutputCommands::Get { id } => {
            let output = client
                .get_output(id)
                .await
                .with_context(|| format!("Failed to get output {}", id))?;

            println!("{}", "Output Details:".bold());
            println!("  ID:     {}", output.output_id.to_string().cyan());
            println!("  Name:   {}", output.name.bold());
            println!("  Type:   {}", output.output_type);
            println!("  Host:   {}", or_dash(output.host.as_deref()));
            println!("  Bucket: {}", or_dash(output.bucket.as_deref()));
            println!("  Prefix: {}", or_dash(output.prefix.as_deref()));
            println!("  Region: {}", or_dash(output.region.as_deref()));
            if let Some(public) = output.make_public {
                println!("  Public: {}", public);
            }
        }
        OutputCommands::Delete { id } => {
            client
                .delete_output(id)
                .await
                .with_context(|| format!("Failed to delete output {}", id))?;
            print_deleted("Output", id);
        }
    }

    Ok(())
}
