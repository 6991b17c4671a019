//! Encoding profile API endpoints

use crate::BitcodinClient;
use crate::error::Result;
use bitcodin_core::domain::ResourceId;
use bitcodin_core::domain::encoding_profile::EncodingProfile;
use bitcodin_core::dto::encoding_profile::CreateEncodingProfile;
use reqwest::Method;

impl BitcodinClient {
    // =============================================================================
    // Encoding Profiles
    // =============================================================================

    /// Create a new encoding profile
    ///
    /// # Example
    /// ```no_run
    /// # use bitcodin_client::BitcodinClient;
    /// # use bitcodin_core::domain::encoding_profile::*;
    /// # use bitcodin_core::dto::encoding_profile::CreateEncodingProfile;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = BitcodinClient::new("my-api-key");
    /// let profile = client
    ///     .create_encoding_profile(CreateEncodingProfile::new(
    ///         "480p",
    ///         vec![VideoStreamConfig::new(512_000, VideoProfile::Main, Preset::Standard, 640, 480)],
    ///         vec![AudioStreamConfig::new(192_000)],
    ///     ))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_encoding_profile(
        &self,
        req: CreateEncodingProfile,
    ) -> Result<EncodingProfile> {
        let response = self
            .request(Method::POST, "/encoding-profile/create")
            .json(&req)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get an encoding profile by ID
    pub async fn get_encoding_profile(&self, profile_id: ResourceId) -> Result<EncodingProfile> {
        let path = format!("/encoding-profile/{}", profile_id);
        let response = self.request(Method::GET, &path).send().await?;

        self.handle_response(response).await
    }

    /// Delete an encoding profile
    pub async fn delete_encoding_profile(&self, profile_id: ResourceId) -> Result<()> {
        let path = format!("/encoding-profile/{}", profile_id);
        let response = self.request(Method::DELETE, &path).send().await?;

        self.handle_empty_response(response).await
    }
}
