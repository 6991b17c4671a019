//! Job domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ResourceId;
use super::encoding_profile::EncodingProfile;
use super::input::Input;

/// Server-side encoding job
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub job_id: ResourceId,
    pub status: JobStatus,
    #[serde(default)]
    pub input: Option<Input>,
    #[serde(default)]
    pub encoding_profiles: Vec<EncodingProfile>,
    #[serde(default)]
    pub manifest_urls: Option<ManifestUrls>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
}

/// Locations of the manifests produced by a finished job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestUrls {
    #[serde(default)]
    pub m3u8_url: Option<String>,
    #[serde(default)]
    pub mpd_url: Option<String>,
}

/// Result of a job status query
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatusReport {
    pub job_id: ResourceId,
    pub status: JobStatus,
    #[serde(default)]
    pub progress: Option<f64>,
}

/// One page of the job listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPage {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub jobs: Vec<Job>,
}

/// Job execution status
///
/// The service is inconsistent about casing ("Finished", "FINISHED", "In Progress"),
/// so parsing ignores case, spaces and underscores. Anything unrecognized is kept
/// verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    Enqueued,
    InProgress,
    Finished,
    Error,
    Other(String),
}

impl JobStatus {
    /// Canonical spelling used by the API
    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::Enqueued => "Enqueued",
            JobStatus::InProgress => "In Progress",
            JobStatus::Finished => "Finished",
            JobStatus::Error => "Error",
            JobStatus::Other(raw) => raw,
        }
    }

    /// Whether the job can no longer change status
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Finished | JobStatus::Error)
    }
}

impl From<&str> for JobStatus {
    fn from(raw: &str) -> Self {
        let normalized: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "enqueued" | "queued" | "created" => JobStatus::Enqueued,
            "inprogress" | "processing" => JobStatus::InProgress,
            "finished" => JobStatus::Finished,
            "error" => JobStatus::Error,
            _ => JobStatus::Other(raw.to_string()),
        }
    }
}

impl From<String> for JobStatus {
    fn from(raw: String) -> Self {
        JobStatus::from(raw.as_str())
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        match status {
            JobStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
