//! Encoding profile DTOs

use serde::{Deserialize, Serialize};

use crate::domain::encoding_profile::{AudioStreamConfig, VideoStreamConfig};

/// Request to create a new encoding profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEncodingProfile {
    pub name: String,
    pub video_stream_configs: Vec<VideoStreamConfig>,
    pub audio_stream_configs: Vec<AudioStreamConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<i32>,
}

impl CreateEncodingProfile {
    pub fn new(
        name: impl Into<String>,
        video_stream_configs: Vec<VideoStreamConfig>,
        audio_stream_configs: Vec<AudioStreamConfig>,
    ) -> Self {
        Self {
            name: name.into(),
            video_stream_configs,
            audio_stream_configs,
            rotation: None,
        }
    }
}
