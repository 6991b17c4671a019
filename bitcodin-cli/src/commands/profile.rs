//! Encoding profile command handlers

use anyhow::{Context, Result};
use bitcodin_core::domain::ResourceId;
use clap::Subcommand;
use colored::*;

use super::print_deleted;
use crate::config::Config;

/// Encoding profile subcommands
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Get encoding profile details
    Get {
        /// Encoding profile ID
        id: ResourceId,
    },
    /// Delete an encoding profile
    Delete {
        /// Encoding profile ID
        id: ResourceId,
    },
}

/// Handle encoding profile commands
pub async fn handle_profile_command(command: ProfileCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        ProfileCommands::Get { id } => {
            let profile = client
                .get_encoding_profile(id)
                .await
                .with_context(|| format!("Failed to get encoding profile {}", id))?;

            println!("{}", "Encoding Profile Details:".bold());
            println!("  ID:   {}", profile.encoding_profile_id.to_string().cyan());
            println!("  Name: {}", profile.name.bold());

            for video in &profile.video_stream_configs {
                println!(
                    "  {} video {} bps, {:?}/{:?} {}",
                    "▸".cyan(),
                    video.bitrate,
                    video.profile,
                    video.preset,
                    match (video.width, video.height) {
                        (Some(w), Some(h)) => format!("{}x{}", w, h),
                        _ => String::new(),
                    }
                    .dimmed()
                );
            }
            for audio in &profile.audio_stream_configs {
                println!("  {} audio {} bps", "▸".cyan(), audio.bitrate);
            }
        }
        ProfileCommands::Delete { id } => {
            client
                .delete_encoding_profile(id)
                .await
                .with_context(|| format!("Failed to delete encoding profile {}", id))?;
            print_deleted("Encoding profile", id);
        }
    }

    Ok(())
}
