//! Job status polling
//!
//! Waits for a job to reach a terminal status by querying it at a fixed
//! interval. This is a bounded wait on the caller's side; the service does the
//! actual scheduling.

use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::BitcodinClient;
use crate::error::{ClientError, Result};
use bitcodin_core::domain::ResourceId;
use bitcodin_core::domain::job::{JobStatus, JobStatusReport};

/// Polling parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOptions {
    /// Pause between two status queries
    pub interval: Duration,
    /// Wall-clock budget for the whole wait
    pub timeout: Duration,
}

impl PollOptions {
    pub fn new(interval: Duration, timeout: Duration) -> Self {
        Self { interval, timeout }
    }

    /// Reject a zero interval or timeout
    ///
    /// A zero interval would query the service back to back until the
    /// timeout runs out.
    pub fn validate(&self) -> Result<()> {
        if self.interval.is_zero() {
            return Err(ClientError::InvalidPollOptions(
                "interval must be greater than 0".to_string(),
            ));
        }

        if self.timeout.is_zero() {
            return Err(ClientError::InvalidPollOptions(
                "timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            timeout: Duration::from_secs(1200),
        }
    }
}

impl BitcodinClient {
    /// Poll a job until it finishes
    ///
    /// Returns the final status report once the job is finished. A job that
    /// switches to the error status yields [`ClientError::JobFailed`]; a job
    /// still running after `options.timeout` yields [`ClientError::JobTimeout`].
    /// A failing status request is returned as-is, without retry. Options
    /// with a zero interval or timeout are rejected before the first request.
    ///
    /// # Example
    /// ```no_run
    /// # use bitcodin_client::{BitcodinClient, PollOptions};
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = BitcodinClient::new("my-api-key");
    /// let report = client.wait_for_job(1234, PollOptions::default()).await?;
    /// println!("job finished: {}", report.status);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn wait_for_job(
        &self,
        job_id: ResourceId,
        options: PollOptions,
    ) -> Result<JobStatusReport> {
        options.validate()?;

        info!(
            "Waiting for job {} (interval: {:?}, timeout: {:?})",
            job_id, options.interval, options.timeout
        );

        let started = Instant::now();

        loop {
            let report = self.get_job_status(job_id).await?;

            match report.status {
                JobStatus::Finished => {
                    info!("Job {} finished after {:?}", job_id, started.elapsed());
                    return Ok(report);
                }
                JobStatus::Error => {
                    warn!("Job {} changed to status {}", job_id, report.status);
                    return Err(ClientError::JobFailed {
                        job_id,
                        status: report.status,
                    });
                }
                _ => {}
            }

            if started.elapsed() > options.timeout {
                warn!(
                    "Job {} still {} after {:?}, giving up",
                    job_id, report.status, options.timeout
                );
                return Err(ClientError::JobTimeout {
                    job_id,
                    timeout: options.timeout,
                    last_status: report.status,
                });
            }

            debug!(
                "Job {} is {} ({:.1}%)",
                job_id,
                report.status,
                report.progress.unwrap_or_default()
            );

            tokio::time::sleep(options.interval).await;
        }
    }
}
