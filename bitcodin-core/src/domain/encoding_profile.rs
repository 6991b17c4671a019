//! Encoding profile domain types

use serde::{Deserialize, Serialize};

use super::ResourceId;

/// Named collection of target video and audio renditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodingProfile {
    pub encoding_profile_id: ResourceId,
    pub name: String,
    #[serde(default)]
    pub video_stream_configs: Vec<VideoStreamConfig>,
    #[serde(default)]
    pub audio_stream_configs: Vec<AudioStreamConfig>,
}

/// One video rendition of an encoding profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStreamConfig {
    pub default_stream_id: u32,
    pub bitrate: u64,
    pub profile: VideoProfile,
    pub preset: Preset,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<u32>,
}

impl VideoStreamConfig {
    /// Video rendition with an explicit resolution
    pub fn new(bitrate: u64, profile: VideoProfile, preset: Preset, width: u32, height: u32) -> Self {
        Self {
            default_stream_id: 0,
            bitrate,
            profile,
            preset,
            height: Some(height),
            width: Some(width),
            rate: None,
        }
    }
}

/// One audio rendition of an encoding profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioStreamConfig {
    pub default_stream_id: u32,
    pub bitrate: u64,
}

impl AudioStreamConfig {
    pub fn new(bitrate: u64) -> Self {
        Self {
            default_stream_id: 0,
            bitrate,
        }
    }
}

/// H.264 codec profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoProfile {
    Baseline,
    Main,
    High,
}

/// Encoder quality preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Standard,
    Professional,
    Premium,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_stream_config_wire_names() {
        let config = VideoStreamConfig::new(512_000, VideoProfile::Main, Preset::Premium, 640, 480);
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["defaultStreamId"], 0);
        assert_eq!(value["bitrate"], 512_000);
        assert_eq!(value["profile"], "Main");
        assert_eq!(value["preset"], "premium");
        assert_eq!(value["width"], 640);
        assert_eq!(value["height"], 480);
        assert!(value.get("rate").is_none());
    }

    #[test]
    fn test_encoding_profile_from_response() {
        let json = r#"{
            "encodingProfileId": 77,
            "name": "API Test Profile",
            "videoStreamConfigs": [
                { "defaultStreamId": 0, "bitrate": 512000, "profile": "Main", "preset": "standard", "height": 480, "width": 640 }
            ],
            "audioStreamConfigs": [ { "defaultStreamId": 0, "bitrate": 192000 } ]
        }"#;

        let profile: EncodingProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.encoding_profile_id, 77);
        assert_eq!(profile.video_stream_configs[0].preset, Preset::Standard);
        assert_eq!(profile.audio_stream_configs[0], AudioStreamConfig::new(192_000));
    }
}
