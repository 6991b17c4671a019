//! Transfer API endpoints

use crate::BitcodinClient;
use crate::error::Result;
use bitcodin_core::domain::ResourceId;
use bitcodin_core::domain::transfer::TransferJob;
use bitcodin_core::dto::job::TransferJobRequest;
use reqwest::Method;

impl BitcodinClient {
    // =============================================================================
    // Transfers
    // =============================================================================

    /// Copy the artifacts of a finished job to an output
    ///
    /// # Arguments
    /// * `job_id` - A job in the finished state
    /// * `output_id` - The destination output
    pub async fn transfer_job(
        &self,
        job_id: ResourceId,
        output_id: ResourceId,
    ) -> Result<TransferJob> {
        let response = self
            .request(Method::POST, "/job/transfer")
            .json(&TransferJobRequest { job_id, output_id })
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// List every transfer started for a job
    pub async fn list_transfer_jobs(&self, job_id: ResourceId) -> Result<Vec<TransferJob>> {
        let path = format!("/job/{}/transfers", job_id);
        let response = self.request(Method::GET, &path).send().await?;

        self.handle_response(response).await
    }
}
