//! Input-related API endpoints

use crate::BitcodinClient;
use crate::error::Result;
use bitcodin_core::domain::ResourceId;
use bitcodin_core::domain::input::Input;
use bitcodin_core::dto::input::CreateInput;
use reqwest::Method;

impl BitcodinClient {
    // =============================================================================
    // Inputs
    // =============================================================================

    /// Register a new input
    ///
    /// The service fetches and analyzes the media before answering, so this
    /// call can take a while for large files.
    ///
    /// # Example
    /// ```no_run
    /// # use bitcodin_client::BitcodinClient;
    /// # use bitcodin_core::dto::input::CreateInput;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = BitcodinClient::new("my-api-key");
    /// let input = client
    ///     .create_input(CreateInput::url("http://example.com/video.mkv"))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_input(&self, req: CreateInput) -> Result<Input> {
        let response = self
            .request(Method::POST, "/input/create")
            .json(&req)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get an input by ID
    pub async fn get_input(&self, input_id: ResourceId) -> Result<Input> {
        let path = format!("/input/{}", input_id);
        let response = self.request(Method::GET, &path).send().await?;

        self.handle_response(response).await
    }

    /// List inputs, one page at a time (pages start at 1)
    pub async fn list_inputs(&self, page: u32) -> Result<Vec<Input>> {
        let path = format!("/inputs/{}", page);
        let response = self.request(Method::GET, &path).send().await?;

        self.handle_response(response).await
    }

    /// Delete an input
    pub async fn delete_input(&self, input_id: ResourceId) -> Result<()> {
        let path = format!("/input/{}", input_id);
        let response = self.request(Method::DELETE, &path).send().await?;

        self.handle_empty_response(response).await
    }
}
