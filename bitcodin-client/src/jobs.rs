//! Job-related API endpoints

use crate::BitcodinClient;
use crate::error::Result;
use bitcodin_core::domain::ResourceId;
use bitcodin_core::domain::job::{Job, JobPage, JobStatusReport};
use bitcodin_core::dto::job::CreateJob;
use reqwest::Method;

impl BitcodinClient {
    // =============================================================================
    // Job Lifecycle
    // =============================================================================

    /// Create a new encoding job
    ///
    /// The service validates the manifest types; an unknown one yields
    /// [`ClientError::BadRequest`](crate::ClientError::BadRequest) and no job.
    ///
    /// # Example
    /// ```no_run
    /// # use bitcodin_client::BitcodinClient;
    /// # use bitcodin_core::dto::job::{CreateJob, Speed, MANIFEST_DASH, MANIFEST_HLS};
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = BitcodinClient::new("my-api-key");
    /// let job = client
    ///     .create_job(CreateJob::new(1, 2, [MANIFEST_HLS, MANIFEST_DASH]).with_speed(Speed::Standard))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_job(&self, req: CreateJob) -> Result<Job> {
        let response = self
            .request(Method::POST, "/job/create")
            .json(&req)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get a job by ID
    pub async fn get_job(&self, job_id: ResourceId) -> Result<Job> {
        let path = format!("/job/{}", job_id);
        let response = self.request(Method::GET, &path).send().await?;

        self.handle_response(response).await
    }

    /// Get the current status of a job
    pub async fn get_job_status(&self, job_id: ResourceId) -> Result<JobStatusReport> {
        let path = format!("/job/{}/status", job_id);
        let response = self.request(Method::GET, &path).send().await?;

        self.handle_response(response).await
    }

    /// List jobs, one page at a time, optionally filtered by status
    ///
    /// # Arguments
    /// * `page` - Page number, starting at 1
    /// * `status` - Status filter as the API spells it (e.g. "finished")
    pub async fn list_jobs(&self, page: u32, status: Option<&str>) -> Result<JobPage> {
        let path = match status {
            Some(status) => format!("/jobs/{}/{}", page, status),
            None => format!("/jobs/{}", page),
        };
        let response = self.request(Method::GET, &path).send().await?;

        self.handle_response(response).await
    }

    /// Delete a job
    pub async fn delete_job(&self, job_id: ResourceId) -> Result<()> {
        let path = format!("/job/{}", job_id);
        let response = self.request(Method::DELETE, &path).send().await?;

        self.handle_empty_response(response).await
    }
}
