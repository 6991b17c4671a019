//! Test configuration
//!
//! Credentials, endpoints and polling parameters for the integration tests.
//! Everything comes from environment variables; a `.env` file in the working
//! directory is loaded first when present.

use std::time::Duration;

use bitcodin_client::{BitcodinClient, DEFAULT_BASE_URL, PollOptions};

/// Sample video fetched by the service when no other URL is configured
pub const DEFAULT_TEST_VIDEO_URL: &str =
    "http://ftp.nluug.nl/pub/graphics/blender/demo/movies/Sintel.2010.720p.mkv";

/// Integration-test configuration
#[derive(Clone)]
pub struct TestConfig {
    /// API key sent with every request
    pub api_key: String,

    /// API base URL (e.g., "https://portal.bitcodin.com/api")
    pub api_url: String,

    /// Media the tests register as input
    pub test_video_url: String,

    /// Pause between two job status queries
    pub poll_interval: Duration,

    /// How long a job may take before the test gives up
    pub job_timeout: Duration,

    /// Destination for transfer tests; those tests are skipped without it
    pub s3: Option<S3Settings>,
}

/// S3 bucket used as transfer destination
#[derive(Clone, PartialEq, Eq)]
pub struct S3Settings {
    pub host: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
    pub prefix: String,
    pub region: String,
}

impl std::fmt::Debug for TestConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestConfig")
            .field("api_url", &self.api_url)
            .field("test_video_url", &self.test_video_url)
            .field("poll_interval", &self.poll_interval)
            .field("job_timeout", &self.job_timeout)
            .field("s3", &self.s3)
            .finish()
    }
}

impl std::fmt::Debug for S3Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Settings")
            .field("host", &self.host)
            .field("bucket", &self.bucket)
            .field("prefix", &self.prefix)
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

impl TestConfig {
    /// Creates a configuration with defaults for everything but the API key
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            api_url: DEFAULT_BASE_URL.to_string(),
            test_video_url: DEFAULT_TEST_VIDEO_URL.to_string(),
            poll_interval: Duration::from_secs(2),
            job_timeout: Duration::from_secs(1200),
            s3: None,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - BITCODIN_API_KEY (required)
    /// - BITCODIN_API_URL (optional, default: production endpoint)
    /// - BITCODIN_TEST_VIDEO_URL (optional)
    /// - BITCODIN_POLL_INTERVAL (optional, seconds, default: 2)
    /// - BITCODIN_JOB_TIMEOUT (optional, seconds, default: 1200)
    /// - BITCODIN_S3_HOST, BITCODIN_S3_ACCESS_KEY, BITCODIN_S3_SECRET_KEY,
    ///   BITCODIN_S3_BUCKET, BITCODIN_S3_REGION, BITCODIN_S3_PREFIX (optional, all or none)
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Creates configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("BITCODIN_API_KEY")
            .ok_or_else(|| anyhow::anyhow!("BITCODIN_API_KEY environment variable not set"))?;

        let mut config = Self::new(api_key);

        if let Some(url) = lookup("BITCODIN_API_URL") {
            config.api_url = url;
        }

        if let Some(url) = lookup("BITCODIN_TEST_VIDEO_URL") {
            config.test_video_url = url;
        }

        if let Some(secs) = parse_secs(&lookup, "BITCODIN_POLL_INTERVAL")? {
            config.poll_interval = Duration::from_secs(secs);
        }

        if let Some(secs) = parse_secs(&lookup, "BITCODIN_JOB_TIMEOUT")? {
            config.job_timeout = Duration::from_secs(secs);
        }

        config.s3 = S3Settings::from_lookup(&lookup)?;

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("api_key cannot be empty");
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            anyhow::bail!("api_url must start with http:// or https://");
        }

        if self.test_video_url.is_empty() {
            anyhow::bail!("test_video_url cannot be empty");
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.job_timeout.is_zero() {
            anyhow::bail!("job_timeout must be greater than 0");
        }

        Ok(())
    }

    /// Client for the configured endpoint
    pub fn client(&self) -> BitcodinClient {
        BitcodinClient::with_base_url(&self.api_url, &self.api_key)
    }

    /// Polling parameters for waiting on jobs
    pub fn poll_options(&self) -> PollOptions {
        PollOptions::new(self.poll_interval, self.job_timeout)
    }
}

impl S3Settings {
    const REQUIRED: [&'static str; 5] = [
        "BITCODIN_S3_HOST",
        "BITCODIN_S3_ACCESS_KEY",
        "BITCODIN_S3_SECRET_KEY",
        "BITCODIN_S3_BUCKET",
        "BITCODIN_S3_REGION",
    ];

    /// Reads S3 settings; `None` when none of them is set
    fn from_lookup<F>(lookup: &F) -> anyhow::Result<Option<Self>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let values: Vec<Option<String>> = Self::REQUIRED.iter().map(|&key| lookup(key)).collect();

        if values.iter().all(Option::is_none) {
            return Ok(None);
        }

        let missing: Vec<&str> = Self::REQUIRED
            .iter()
            .zip(&values)
            .filter(|(_, value)| value.is_none())
            .map(|(key, _)| *key)
            .collect();

        if !missing.is_empty() {
            anyhow::bail!("incomplete S3 settings, missing: {}", missing.join(", "));
        }

        let mut values = values.into_iter().flatten();
        let mut next = || values.next().unwrap_or_default();

        Ok(Some(Self {
            host: next(),
            access_key: next(),
            secret_key: next(),
            bucket: next(),
            region: next(),
            prefix: lookup("BITCODIN_S3_PREFIX").unwrap_or_default(),
        }))
    }
}

fn parse_secs<F>(lookup: &F, key: &str) -> anyhow::Result<Option<u64>>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.parse::<u64>()
                .map_err(|e| anyhow::anyhow!("{} must be a number of seconds: {}", key, e))
        })
        .transpose()
}
