//! Integration-test scenarios
//!
//! Each scenario sets up its fixture, runs its assertions under
//! [`run_with_cleanup`] and returns the outcome. They take the client and
//! configuration as arguments so the same code runs against the live API and
//! against a mock server.

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::{S3Settings, TestConfig};
use crate::fixture::{Fixture, FixtureOptions, run_with_cleanup};
use bitcodin_client::{BitcodinClient, ClientError};
use bitcodin_core::domain::encoding_profile::Preset;
use bitcodin_core::dto::job::{CreateJob, MANIFEST_DASH, MANIFEST_HLS, Speed};

/// Every create call hands back a server-assigned identifier
///
/// An S3 output is created and checked too when the configuration has S3
/// settings.
pub async fn created_resources_have_identifiers(
    client: &BitcodinClient,
    config: &TestConfig,
) -> Result<()> {
    let mut options = FixtureOptions::new(&config.test_video_url, Preset::Standard);
    if let Some(s3) = config.s3.clone() {
        options = options.with_s3_output(s3);
    }
    let (fixture, cleanup) = Fixture::setup(client.clone(), &options).await?;

    run_with_cleanup(cleanup, async move {
        assert_ne!(fixture.input.input_id, 0, "input id must be assigned");
        assert_ne!(
            fixture.encoding_profile.encoding_profile_id, 0,
            "encoding profile id must be assigned"
        );
        assert!(fixture.encoding_profile.name.starts_with("API Test Profile"));
        if let Some(output) = &fixture.output {
            assert_ne!(output.output_id, 0, "output id must be assigned");
        }
        Ok(())
    })
    .await
}

/// Submitting a job with an unknown manifest type is rejected with a bad request
pub async fn create_job_with_invalid_data(
    client: &BitcodinClient,
    config: &TestConfig,
) -> Result<()> {
    let options = FixtureOptions::new(&config.test_video_url, Preset::Standard);
    let (fixture, cleanup) = Fixture::setup(client.clone(), &options).await?;

    run_with_cleanup(cleanup, async move {
        let request = CreateJob::new(
            fixture.input.input_id,
            fixture.encoding_profile.encoding_profile_id,
            [MANIFEST_HLS, "invalid"],
        );

        match fixture.client.create_job(request).await {
            Err(ClientError::BadRequest { message }) => {
                info!("Job rejected as expected: {}", message);
                Ok(())
            }
            Err(other) => Err(anyhow::Error::new(other).context("Expected a bad request")),
            Ok(job) => {
                if let Err(e) = fixture.client.delete_job(job.job_id).await {
                    warn!("Failed to delete job {}: {}", job.job_id, e);
                }
                anyhow::bail!(
                    "job {} was created despite an invalid manifest type",
                    job.job_id
                )
            }
        }
    })
    .await
}

/// Encode a job, transfer it to S3 and check the transfer is listed once
pub async fn transfer_job_to_s3(
    client: &BitcodinClient,
    config: &TestConfig,
    s3: S3Settings,
) -> Result<()> {
    let options =
        FixtureOptions::new(&config.test_video_url, Preset::Premium).with_s3_output(s3);
    let (fixture, cleanup) = Fixture::setup(client.clone(), &options).await?;
    let poll = config.poll_options();

    run_with_cleanup(cleanup, async move {
        let client = &fixture.client;
        let output = fixture
            .output
            .as_ref()
            .context("fixture was set up without an output")?;
        assert_ne!(output.output_id, 0, "output id must be assigned");

        let job = client
            .create_job(
                CreateJob::new(
                    fixture.input.input_id,
                    fixture.encoding_profile.encoding_profile_id,
                    [MANIFEST_HLS, MANIFEST_DASH],
                )
                .with_speed(Speed::Standard),
            )
            .await
            .context("Failed to create job")?;
        assert_ne!(job.job_id, 0, "job id must be assigned");
        info!("Created job {}", job.job_id);

        let report = client
            .wait_for_job(job.job_id, poll)
            .await
            .context("An error occurred while waiting for job to be FINISHED")?;
        assert_eq!(report.status.as_str().to_lowercase(), "finished");

        let transfer = client
            .transfer_job(job.job_id, output.output_id)
            .await
            .context("Failed to transfer job")?;
        assert_eq!(transfer.job_id, job.job_id);
        assert!(
            transfer.id.is_some_and(|id| id != 0),
            "transfer id must be assigned"
        );

        let transfers = client
            .list_transfer_jobs(job.job_id)
            .await
            .context("Failed to list transfer jobs")?;
        assert_eq!(transfers.len(), 1, "expected exactly one transfer");
        assert_eq!(transfers[0].job_id, job.job_id);

        Ok(())
    })
    .await
}
