//! Transfer domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ResourceId;

/// Copy of a finished job's artifacts to an output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferJob {
    pub job_id: ResourceId,
    #[serde(default)]
    pub id: Option<ResourceId>,
    #[serde(default)]
    pub output_id: Option<ResourceId>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
