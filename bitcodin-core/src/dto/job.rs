//! Job DTOs

use serde::{Deserialize, Serialize};

use crate::domain::ResourceId;

/// HLS manifest type
pub const MANIFEST_HLS: &str = "m3u8";

/// MPEG-DASH manifest type
pub const MANIFEST_DASH: &str = "mpd";

/// Request to create a new encoding job
///
/// Manifest types are plain strings; validating them is the service's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJob {
    pub input_id: ResourceId,
    pub encoding_profile_id: ResourceId,
    pub manifest_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<Speed>,
}

impl CreateJob {
    pub fn new<I, S>(input_id: ResourceId, encoding_profile_id: ResourceId, manifest_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input_id,
            encoding_profile_id,
            manifest_types: manifest_types.into_iter().map(Into::into).collect(),
            speed: None,
        }
    }

    pub fn with_speed(mut self, speed: Speed) -> Self {
        self.speed = Some(speed);
        self
    }
}

/// Encoding speed requested for a job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    Standard,
    Premium,
}

/// Request to copy a finished job's artifacts to an output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferJobRequest {
    pub job_id: ResourceId,
    pub output_id: ResourceId,
}
