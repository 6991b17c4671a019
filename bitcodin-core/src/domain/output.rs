//! Output domain types

use serde::{Deserialize, Serialize};

use super::ResourceId;

/// Credentialed destination for encoded artifacts
///
/// Secrets are never echoed back by the service, so only the location fields appear here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    pub output_id: ResourceId,
    pub name: String,
    #[serde(rename = "type")]
    pub output_type: String,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub bucket: Option<String>,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub make_public: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_deserialization() {
        let json = r#"{
            "outputId": 3,
            "name": "Python API Test Output",
            "type": "s3",
            "host": "s3.amazonaws.com",
            "bucket": "bitcodin-test",
            "prefix": "runs",
            "region": "eu-west-1",
            "makePublic": false
        }"#;

        let output: Output = serde_json::from_str(json).unwrap();
        assert_eq!(output.output_id, 3);
        assert_eq!(output.output_type, "s3");
        assert_eq!(output.make_public, Some(false));
    }
}
