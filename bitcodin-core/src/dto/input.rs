//! Input DTOs

use serde::{Deserialize, Serialize};

/// Request to register a new input from a URL
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInput {
    pub url: String,
    pub input_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_analysis: Option<bool>,
}

impl CreateInput {
    /// Input fetched by the service from a public URL
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            input_type: "url".to_string(),
            skip_analysis: None,
        }
    }
}
