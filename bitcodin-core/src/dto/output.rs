//! Output DTOs

use serde::{Deserialize, Serialize};

/// Request to create a new output, tagged by destination type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CreateOutput {
    S3(CreateS3Output),
    Ftp(CreateFtpOutput),
}

impl CreateOutput {
    pub fn name(&self) -> &str {
        match self {
            CreateOutput::S3(s3) => &s3.name,
            CreateOutput::Ftp(ftp) => &ftp.name,
        }
    }
}

/// Amazon S3 (or S3-compatible) bucket destination
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateS3Output {
    pub name: String,
    pub host: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
    pub prefix: String,
    pub region: String,
    pub make_public: bool,
}

impl std::fmt::Debug for CreateS3Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateS3Output")
            .field("name", &self.name)
            .field("host", &self.host)
            .field("access_key", &"<redacted>")
            .field("secret_key", &"<redacted>")
            .field("bucket", &self.bucket)
            .field("prefix", &self.prefix)
            .field("region", &self.region)
            .field("make_public", &self.make_public)
            .finish()
    }
}

/// FTP server destination
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFtpOutput {
    pub name: String,
    pub host: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub passive: bool,
}

impl std::fmt::Debug for CreateFtpOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateFtpOutput")
            .field("name", &self.name)
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("passive", &self.passive)
            .finish()
    }
}
