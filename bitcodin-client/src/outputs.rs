//! Output-related API endpoints

use crate::BitcodinClient;
use crate::error::Result;
use bitcodin_core::domain::ResourceId;
use bitcodin_core::domain::output::Output;
use bitcodin_core::dto::output::CreateOutput;
use reqwest::Method;

impl BitcodinClient {
    // =============================================================================
    // Outputs
    // =============================================================================

    /// Create a new output
    ///
    /// The service verifies the credentials before answering; a bucket it
    /// cannot write to yields a bad request.
    pub async fn create_output(&self, req: CreateOutput) -> Result<Output> {
        let response = self
            .request(Method::POST, "/output/create")
            .json(&req)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get an output by ID
    pub async fn get_output(&self, output_id: ResourceId) -> Result<Output> {
        let path = format!("/output/{}", output_id);
        let response = self.request(Method::GET, &path).send().await?;

        self.handle_response(response).await
    }

    /// Delete an output
    pub async fn delete_output(&self, output_id: ResourceId) -> Result<()> {
        let path = format!("/output/{}", output_id);
        let response = self.request(Method::DELETE, &path).send().await?;

        self.handle_empty_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use crate::BitcodinClient;
    use bitcodin_core::dto::output::{CreateOutput, CreateS3Output};
    use mockito::Matcher;

    #[tokio::test]
    async fn test_create_s3_output() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/output/create")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "type": "s3",
                "bucket": "bucket",
                "makePublic": false
            })))
            .with_status(201)
            .with_body(r#"{"outputId": 6, "name": "out", "type": "s3", "bucket": "bucket"}"#)
            .create_async()
            .await;

        let client = BitcodinClient::with_base_url(server.url(), "key");
        let output = client
            .create_output(CreateOutput::S3(CreateS3Output {
                name: "out".to_string(),
                host: "s3.amazonaws.com".to_string(),
                access_key: "a".to_string(),
                secret_key: "s".to_string(),
                bucket: "bucket".to_string(),
                prefix: "p".to_string(),
                region: "eu-west-1".to_string(),
                make_public: false,
            }))
            .await
            .unwrap();

        assert_eq!(output.output_id, 6);
        assert_eq!(output.bucket.as_deref(), Some("bucket"));
        mock.assert_async().await;
    }
}
