//! Input domain types

use serde::{Deserialize, Serialize};

use super::ResourceId;

/// Source media registered with the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    pub input_id: ResourceId,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub input_type: Option<String>,
    #[serde(default)]
    pub media_configurations: Vec<MediaConfiguration>,
}

/// One stream discovered while analyzing an input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaConfiguration {
    pub stream_id: u32,
    #[serde(rename = "type")]
    pub media_type: String,
    #[serde(default)]
    pub codec: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub bitrate: Option<u64>,
    #[serde(default)]
    pub rate: Option<f64>,
}
