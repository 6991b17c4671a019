//! Test fixtures with guaranteed cleanup
//!
//! Every resource a test creates is recorded in a [`Cleanup`] ledger.
//! [`run_with_cleanup`] runs the test body and then deletes the recorded
//! resources, whether the body succeeded, returned an error or panicked on a
//! failed assertion.

use anyhow::{Context, Result};
use std::future::Future;
use tracing::{info, warn};

use crate::config::S3Settings;
use bitcodin_client::BitcodinClient;
use bitcodin_core::domain::ResourceId;
use bitcodin_core::domain::encoding_profile::{
    AudioStreamConfig, EncodingProfile, Preset, VideoProfile, VideoStreamConfig,
};
use bitcodin_core::domain::input::Input;
use bitcodin_core::domain::output::Output;
use bitcodin_core::dto::encoding_profile::CreateEncodingProfile;
use bitcodin_core::dto::input::CreateInput;
use bitcodin_core::dto::output::{CreateOutput, CreateS3Output};

/// A resource that must be deleted once the test is over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Input(ResourceId),
    EncodingProfile(ResourceId),
    Output(ResourceId),
}

/// Ledger of resources created by a test
#[derive(Debug)]
pub struct Cleanup {
    client: BitcodinClient,
    resources: Vec<Resource>,
}

impl Cleanup {
    pub fn new(client: BitcodinClient) -> Self {
        Self {
            client,
            resources: Vec::new(),
        }
    }

    /// Record a resource for deletion
    pub fn track(&mut self, resource: Resource) {
        self.resources.push(resource);
    }

    /// Resources recorded so far, in creation order
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Delete every recorded resource, newest first
    ///
    /// All deletions are attempted even when some fail. The first failure is
    /// returned once the ledger is exhausted.
    pub async fn teardown(self) -> Result<()> {
        let mut first_error = None;

        for resource in self.resources.into_iter().rev() {
            let result = match resource {
                Resource::Input(id) => self.client.delete_input(id).await,
                Resource::EncodingProfile(id) => self.client.delete_encoding_profile(id).await,
                Resource::Output(id) => self.client.delete_output(id).await,
            };

            match result {
                Ok(()) => info!("Deleted {:?}", resource),
                Err(e) => {
                    warn!("Failed to delete {:?}: {}", resource, e);
                    if first_error.is_none() {
                        first_error = Some(
                            anyhow::Error::new(e).context(format!("Failed to delete {:?}", resource)),
                        );
                    }
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Run a test body, then tear down its resources no matter how it ended
///
/// The body runs in its own task so that a panicking assertion can be
/// observed. After teardown the panic is resumed, so the test still fails
/// with its original message. A teardown failure is only reported when the
/// body itself succeeded.
pub async fn run_with_cleanup<Fut>(cleanup: Cleanup, body: Fut) -> Result<()>
where
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    let outcome = tokio::spawn(body).await;
    let teardown = cleanup.teardown().await;

    match outcome {
        Ok(Ok(())) => teardown,
        Ok(Err(e)) => {
            if let Err(cleanup_error) = teardown {
                warn!("Cleanup also failed: {:#}", cleanup_error);
            }
            Err(e)
        }
        Err(join_error) if join_error.is_panic() => {
            std::panic::resume_unwind(join_error.into_panic())
        }
        Err(join_error) => Err(anyhow::Error::new(join_error).context("Test body was cancelled")),
    }
}

/// What to create before a test runs
#[derive(Debug, Clone)]
pub struct FixtureOptions {
    /// Media registered as input
    pub video_url: String,
    /// Encoder preset of the single video rendition
    pub preset: Preset,
    /// Create an S3 output when set
    pub s3_output: Option<S3Settings>,
    /// Suffix that makes resource names of this run recognizable
    pub run_tag: String,
}

impl FixtureOptions {
    pub fn new(video_url: impl Into<String>, preset: Preset) -> Self {
        Self {
            video_url: video_url.into(),
            preset,
            s3_output: None,
            run_tag: uuid::Uuid::new_v4().simple().to_string()[..8].to_string(),
        }
    }

    pub fn with_s3_output(mut self, settings: S3Settings) -> Self {
        self.s3_output = Some(settings);
        self
    }
}

/// Resources shared by a test case
#[derive(Debug, Clone)]
pub struct Fixture {
    pub client: BitcodinClient,
    pub input: Input,
    pub encoding_profile: EncodingProfile,
    pub output: Option<Output>,
}

impl Fixture {
    /// Create the input, the encoding profile and optionally the output
    ///
    /// If any step fails, whatever was already created is deleted before the
    /// error is returned.
    pub async fn setup(client: BitcodinClient, options: &FixtureOptions) -> Result<(Self, Cleanup)> {
        let mut cleanup = Cleanup::new(client.clone());

        match Self::create_resources(&client, options, &mut cleanup).await {
            Ok((input, encoding_profile, output)) => Ok((
                Self {
                    client,
                    input,
                    encoding_profile,
                    output,
                },
                cleanup,
            )),
            Err(e) => {
                if let Err(cleanup_error) = cleanup.teardown().await {
                    warn!("Cleanup after failed setup also failed: {:#}", cleanup_error);
                }
                Err(e)
            }
        }
    }

    async fn create_resources(
        client: &BitcodinClient,
        options: &FixtureOptions,
        cleanup: &mut Cleanup,
    ) -> Result<(Input, EncodingProfile, Option<Output>)> {
        let input = client
            .create_input(CreateInput::url(&options.video_url))
            .await
            .context("Failed to create input")?;
        cleanup.track(Resource::Input(input.input_id));
        info!("Created input {}", input.input_id);

        let encoding_profile = client
            .create_encoding_profile(test_profile(options))
            .await
            .context("Failed to create encoding profile")?;
        cleanup.track(Resource::EncodingProfile(encoding_profile.encoding_profile_id));
        info!("Created encoding profile {}", encoding_profile.encoding_profile_id);

        let output = match &options.s3_output {
            Some(settings) => {
                let output = client
                    .create_output(s3_output(settings, &options.run_tag))
                    .await
                    .context("Failed to create S3 output")?;
                cleanup.track(Resource::Output(output.output_id));
                info!("Created output {}", output.output_id);
                Some(output)
            }
            None => None,
        };

        Ok((input, encoding_profile, output))
    }
}

/// 640x480 Main-profile video at 512 kbps plus 192 kbps audio
fn test_profile(options: &FixtureOptions) -> CreateEncodingProfile {
    CreateEncodingProfile::new(
        format!("API Test Profile {}", options.run_tag),
        vec![VideoStreamConfig::new(
            512_000,
            VideoProfile::Main,
            options.preset,
            640,
            480,
        )],
        vec![AudioStreamConfig::new(192_000)],
    )
}

fn s3_output(settings: &S3Settings, run_tag: &str) -> CreateOutput {
    CreateOutput::S3(CreateS3Output {
        name: format!("API Test Output {}", run_tag),
        host: settings.host.clone(),
        access_key: settings.access_key.clone(),
        secret_key: settings.secret_key.clone(),
        bucket: settings.bucket.clone(),
        prefix: settings.prefix.clone(),
        region: settings.region.clone(),
        make_public: false,
    })
}
