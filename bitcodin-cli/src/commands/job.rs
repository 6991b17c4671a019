//! Job command handlers
//!
//! Handles all job-related CLI commands including details, status
//! polling, listing and transfers.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use std::time::Duration;

use super::print_deleted;
use crate::config::Config;
use bitcodin_client::{BitcodinClient, PollOptions};
use bitcodin_core::domain::ResourceId;
use bitcodin_core::domain::job::{Job, JobStatus};
use bitcodin_core::domain::transfer::TransferJob;

/// Job subcommands
#[derive(Subcommand)]
pub enum JobCommands {
    /// Get job details
    Get {
        /// Job ID
        id: ResourceId,
    },
    /// Show the current job status
    Status {
        /// Job ID
        id: ResourceId,
    },
    /// Wait until a job finishes
    Wait {
        /// Job ID
        id: ResourceId,

        /// Seconds between status queries
        #[arg(long, default_value = "2", value_parser = clap::value_parser!(u64).range(1..))]
        interval: u64,

        /// Seconds to wait before giving up
        #[arg(long, default_value = "1200", value_parser = clap::value_parser!(u64).range(1..))]
        timeout: u64,
    },
    /// List jobs
    List {
        /// Page number
        #[arg(short, long, default_value = "1")]
        page: u32,

        /// Only jobs with this status (e.g. finished, error)
        #[arg(short, long)]
        status: Option<String>,
    },
    /// List transfers of a job
    Transfers {
        /// Job ID
        id: ResourceId,
    },
    /// Delete a job
    Delete {
        /// Job ID
        id: ResourceId,
    },
}

/// Handle job commands
///
/// Routes job subcommands to their respective handlers.
pub async fn handle_job_command(command: JobCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        JobCommands::Get { id } => get_job(&client, id).await,
        JobCommands::Status { id } => job_status(&client, id).await,
        JobCommands::Wait {
            id,
            interval,
            timeout,
        } => {
            let options =
                PollOptions::new(Duration::from_secs(interval), Duration::from_secs(timeout));
            wait_for_job(&client, id, options).await
        }
        JobCommands::List { page, status } => list_jobs(&client, page, status.as_deref()).await,
        JobCommands::Transfers { id } => list_transfers(&client, id).await,
        JobCommands::Delete { id } => {
            client
                .delete_job(id)
                .await
                .with_context(|| format!("Failed to delete job {}", id))?;
            print_deleted("Job", id);
            Ok(())
        }
    }
}

/// Get and display a single job
async fn get_job(client: &BitcodinClient, id: ResourceId) -> Result<()> {
    let job = client
        .get_job(id)
        .await
        .with_context(|| format!("Failed to get job {}", id))?;

    print_job_details(&job);

    Ok(())
}

async fn job_status(client: &BitcodinClient, id: ResourceId) -> Result<()> {
    let report = client
        .get_job_status(id)
        .await
        .with_context(|| format!("Failed to get status of job {}", id))?;

    match report.progress {
        Some(progress) => println!(
            "Job {}: {} ({:.1}%)",
            id,
            colorize_status(&report.status),
            progress
        ),
        None => println!("Job {}: {}", id, colorize_status(&report.status)),
    }

    Ok(())
}

async fn wait_for_job(client: &BitcodinClient, id: ResourceId, options: PollOptions) -> Result<()> {
    println!(
        "{}",
        format!("Waiting for job {} (timeout {:?})...", id, options.timeout).dimmed()
    );

    let report = client.wait_for_job(id, options).await?;

    println!(
        "{} Job {} is {}",
        "✓".green(),
        id,
        colorize_status(&report.status)
    );

    Ok(())
}

async fn list_jobs(client: &BitcodinClient, page: u32, status: Option<&str>) -> Result<()> {
    let listing = client
        .list_jobs(page, status)
        .await
        .context("Failed to list jobs")?;

    if listing.jobs.is_empty() {
        println!("{}", "No jobs found.".yellow());
    } else {
        println!(
            "{}",
            format!(
                "Showing {} of {} job(s), page {}:",
                listing.jobs.len(),
                listing.total_count,
                page
            )
            .bold()
        );
        println!();
        for job in &listing.jobs {
            print_job_summary(job);
        }
    }

    Ok(())
}

async fn list_transfers(client: &BitcodinClient, id: ResourceId) -> Result<()> {
    let transfers = client
        .list_transfer_jobs(id)
        .await
        .with_context(|| format!("Failed to list transfers of job {}", id))?;

    if transfers.is_empty() {
        println!("{}", format!("No transfers found for job {}.", id).yellow());
    } else {
        println!(
            "{}",
            format!("Found {} transfer(s) for job {}:", transfers.len(), id).bold()
        );
        for transfer in &transfers {
            print_transfer(transfer);
        }
    }

    Ok(())
}

/// Print a one-entry job summary
fn print_job_summary(job: &Job) {
    println!("  {} Job {}", "▸".cyan(), job.job_id.to_string().dimmed());
    println!("    Status:   {}", colorize_status(&job.status));
    if let Some(created) = job.created_at {
        println!(
            "    Created:  {}",
            created.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
        );
    }
    println!();
}

/// Print detailed job information
fn print_job_details(job: &Job) {
    println!("{}", "Job Details:".bold());
    println!("  ID:        {}", job.job_id.to_string().cyan());
    println!("  Status:    {}", colorize_status(&job.status));

    if let Some(input) = &job.input {
        println!("  Input:     {}", input.input_id);
    }

    if let Some(created) = job.created_at {
        println!("  Created:   {}", created.format("%Y-%m-%d %H:%M:%S"));
    }

    if let Some(finished) = job.finished_at {
        println!("  Finished:  {}", finished.format("%Y-%m-%d %H:%M:%S"));

        if let Some(created) = job.created_at {
            let duration = finished.signed_duration_since(created);
            println!("  Duration:  {}s", duration.num_seconds());
        }
    }

    for profile in &job.encoding_profiles {
        println!(
            "  Profile:   {} ({})",
            profile.encoding_profile_id,
            profile.name.dimmed()
        );
    }

    if let Some(urls) = &job.manifest_urls {
        println!("\n{}", "Manifests:".bold());
        if let Some(m3u8) = &urls.m3u8_url {
            println!("  HLS:  {}", m3u8);
        }
        if let Some(mpd) = &urls.mpd_url {
            println!("  DASH: {}", mpd);
        }
    }
}

fn print_transfer(transfer: &TransferJob) {
    let id = transfer
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    let status = transfer.status.as_deref().unwrap_or("unknown");
    let progress = transfer
        .progress
        .map(|p| format!(" ({:.0}%)", p))
        .unwrap_or_default();

    println!(
        "  {} Transfer {} {}{}",
        "▸".cyan(),
        id.dimmed(),
        status,
        progress.dimmed()
    );
}

/// Colorize job status for display
fn colorize_status(status: &JobStatus) -> ColoredString {
    let status_str = status.as_str();
    match status {
        JobStatus::Enqueued => status_str.yellow(),
        JobStatus::InProgress => status_str.cyan(),
        JobStatus::Finished => status_str.green(),
        JobStatus::Error => status_str.red(),
        JobStatus::Other(_) => status_str.dimmed(),
    }
}
