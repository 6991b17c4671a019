//! Scenarios against a mock of the bitcodin API
//!
//! The mock plays the remote service closely enough to drive every scenario
//! through its success and failure paths without network access.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use bitcodin_client::{API_KEY_HEADER, ClientError};
use bitcodin_tests::{S3Settings, TestConfig, init_tracing, scenarios};
use mockito::{Matcher, Mock, ServerGuard};

const INPUT_ID: u64 = 101;
const PROFILE_ID: u64 = 202;
const OUTPUT_ID: u64 = 303;
const JOB_ID: u64 = 404;
const API_KEY: &str = "test-key";

struct FakeService {
    server: ServerGuard,
}

/// Deletions the fixture is expected to issue during teardown
struct Teardown {
    mocks: Vec<Mock>,
}

impl Teardown {
    async fn assert(&self) {
        for mock in &self.mocks {
            mock.assert_async().await;
        }
    }
}

impl FakeService {
    async fn start() -> Self {
        init_tracing();
        Self {
            server: mockito::Server::new_async().await,
        }
    }

    fn config(&self) -> TestConfig {
        let mut config = TestConfig::new(API_KEY.to_string());
        config.api_url = self.server.url();
        config.test_video_url = "http://example.com/sintel.mkv".to_string();
        config.poll_interval = Duration::from_millis(10);
        config.job_timeout = Duration::from_secs(5);
        config
    }

    fn s3() -> S3Settings {
        S3Settings {
            host: "s3.amazonaws.com".to_string(),
            access_key: "AKIA".to_string(),
            secret_key: "secret".to_string(),
            bucket: "bitcodin-test".to_string(),
            prefix: "runs".to_string(),
            region: "eu-west-1".to_string(),
        }
    }

    async fn json(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .match_header(API_KEY_HEADER, API_KEY)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    async fn delete(&mut self, path: &str, hits: usize) -> Mock {
        self.server
            .mock("DELETE", path)
            .match_header(API_KEY_HEADER, API_KEY)
            .with_status(204)
            .expect(hits)
            .create_async()
            .await
    }

    /// Accept input and profile creation, plus output creation when an id is given
    async fn accept_fixture(&mut self, output_id: Option<u64>) -> Teardown {
        self.server
            .mock("POST", "/input/create")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "url": "http://example.com/sintel.mkv",
                "inputType": "url"
            })))
            .with_status(201)
            .with_body(format!(r#"{{"inputId": {INPUT_ID}, "filename": "sintel.mkv"}}"#))
            .create_async()
            .await;
        self.json(
            "POST",
            "/encoding-profile/create",
            201,
            &format!(r#"{{"encodingProfileId": {PROFILE_ID}, "name": "API Test Profile"}}"#),
        )
        .await;

        let mut mocks = vec![
            self.delete(&format!("/input/{INPUT_ID}"), 1).await,
            self.delete(&format!("/encoding-profile/{PROFILE_ID}"), 1).await,
        ];

        if let Some(output_id) = output_id {
            self.server
                .mock("POST", "/output/create")
                .match_body(Matcher::PartialJson(serde_json::json!({
                    "type": "s3",
                    "bucket": "bitcodin-test",
                    "makePublic": false
                })))
                .with_status(201)
                .with_body(format!(
                    r#"{{"outputId": {output_id}, "name": "API Test Output", "type": "s3"}}"#
                ))
                .create_async()
                .await;
            mocks.push(self.delete(&format!("/output/{output_id}"), 1).await);
        }

        Teardown { mocks }
    }

    async fn accept_job(&mut self) -> Mock {
        self.server
            .mock("POST", "/job/create")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "inputId": INPUT_ID,
                "encodingProfileId": PROFILE_ID,
                "manifestTypes": ["m3u8", "mpd"],
                "speed": "standard"
            })))
            .with_status(201)
            .with_body(format!(r#"{{"jobId": {JOB_ID}, "status": "Enqueued"}}"#))
            .expect(1)
            .create_async()
            .await
    }

    /// Answer status queries with `statuses` in order, repeating the last one
    async fn job_statuses(&mut self, statuses: &'static [&'static str]) -> Arc<AtomicUsize> {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        self.server
            .mock("GET", format!("/job/{JOB_ID}/status").as_str())
            .with_status(200)
            .with_body_from_request(move |_| {
                let n = counter.fetch_add(1, Ordering::SeqCst);
                let status = statuses[n.min(statuses.len() - 1)];
                format!(r#"{{"jobId": {JOB_ID}, "status": "{status}"}}"#).into_bytes()
            })
            .create_async()
            .await;
        calls
    }

    async fn transfer(&mut self, hits: usize) -> Mock {
        self.transfer_with_id(1, hits).await
    }

    async fn transfer_with_id(&mut self, transfer_id: u64, hits: usize) -> Mock {
        self.server
            .mock("POST", "/job/transfer")
            .match_body(Matcher::Json(serde_json::json!({
                "jobId": JOB_ID,
                "outputId": OUTPUT_ID
            })))
            .with_status(201)
            .with_body(format!(
                r#"{{"id": {transfer_id}, "jobId": {JOB_ID}, "outputId": {OUTPUT_ID}, "status": "Enqueued"}}"#
            ))
            .expect(hits)
            .create_async()
            .await
    }

    async fn transfers_listed(&mut self, count: usize) -> Mock {
        let entries: Vec<String> = (0..count)
            .map(|i| format!(r#"{{"id": {}, "jobId": {JOB_ID}, "status": "Finished"}}"#, i + 1))
            .collect();
        self.json(
            "GET",
            &format!("/job/{JOB_ID}/transfers"),
            200,
            &format!("[{}]", entries.join(",")),
        )
        .await
    }
}

#[tokio::test]
async fn created_resources_have_identifiers() {
    let mut service = FakeService::start().await;
    let teardown = service.accept_fixture(Some(OUTPUT_ID)).await;
    let mut config = service.config();
    config.s3 = Some(FakeService::s3());

    scenarios::created_resources_have_identifiers(&config.client(), &config)
        .await
        .unwrap();

    teardown.assert().await;
}

#[tokio::test]
async fn unassigned_output_id_fails_identifier_check() {
    let mut service = FakeService::start().await;
    let teardown = service.accept_fixture(Some(0)).await;
    let mut config = service.config();
    config.s3 = Some(FakeService::s3());

    let outcome = tokio::spawn(async move {
        scenarios::created_resources_have_identifiers(&config.client(), &config).await
    })
    .await;

    assert!(outcome.unwrap_err().is_panic());
    teardown.assert().await;
}

#[tokio::test]
async fn invalid_manifest_type_is_a_bad_request() {
    let mut service = FakeService::start().await;
    let teardown = service.accept_fixture(None).await;
    let create_job = service
        .server
        .mock("POST", "/job/create")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "manifestTypes": ["m3u8", "invalid"]
        })))
        .with_status(400)
        .with_body(r#"{"message":"Invalid manifest type","error":"invalid"}"#)
        .expect(1)
        .create_async()
        .await;
    let config = service.config();

    scenarios::create_job_with_invalid_data(&config.client(), &config)
        .await
        .unwrap();

    create_job.assert_async().await;
    teardown.assert().await;
}

#[tokio::test]
async fn accepting_an_invalid_manifest_type_fails_the_scenario() {
    let mut service = FakeService::start().await;
    let teardown = service.accept_fixture(None).await;
    service
        .json(
            "POST",
            "/job/create",
            201,
            &format!(r#"{{"jobId": {JOB_ID}, "status": "Enqueued"}}"#),
        )
        .await;
    let delete_job = service.delete(&format!("/job/{JOB_ID}"), 1).await;
    let config = service.config();

    let err = scenarios::create_job_with_invalid_data(&config.client(), &config)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("despite an invalid manifest type"));
    delete_job.assert_async().await;
    teardown.assert().await;
}

#[tokio::test]
async fn transfer_job_to_s3() {
    let mut service = FakeService::start().await;
    let teardown = service.accept_fixture(Some(OUTPUT_ID)).await;
    let create_job = service.accept_job().await;
    let polls = service
        .job_statuses(&["Enqueued", "In Progress", "FINISHED"])
        .await;
    let transfer = service.transfer(1).await;
    let listed = service.transfers_listed(1).await;
    let config = service.config();

    scenarios::transfer_job_to_s3(&config.client(), &config, FakeService::s3())
        .await
        .unwrap();

    assert_eq!(polls.load(Ordering::SeqCst), 3);
    create_job.assert_async().await;
    transfer.assert_async().await;
    listed.assert_async().await;
    teardown.assert().await;
}

#[tokio::test]
async fn unassigned_output_id_stops_before_job() {
    let mut service = FakeService::start().await;
    let teardown = service.accept_fixture(Some(0)).await;
    let create_job = service
        .server
        .mock("POST", "/job/create")
        .with_status(201)
        .expect(0)
        .create_async()
        .await;
    let config = service.config();

    let outcome = tokio::spawn(async move {
        scenarios::transfer_job_to_s3(&config.client(), &config, FakeService::s3()).await
    })
    .await;

    assert!(outcome.unwrap_err().is_panic());
    create_job.assert_async().await;
    teardown.assert().await;
}

#[tokio::test]
async fn unassigned_transfer_id_fails_the_scenario() {
    let mut service = FakeService::start().await;
    let teardown = service.accept_fixture(Some(OUTPUT_ID)).await;
    service.accept_job().await;
    service.job_statuses(&["Finished"]).await;
    let transfer = service.transfer_with_id(0, 1).await;
    let config = service.config();

    let outcome = tokio::spawn(async move {
        scenarios::transfer_job_to_s3(&config.client(), &config, FakeService::s3()).await
    })
    .await;

    assert!(outcome.unwrap_err().is_panic());
    transfer.assert_async().await;
    teardown.assert().await;
}

#[tokio::test]
async fn job_error_stops_before_transfer() {
    let mut service = FakeService::start().await;
    let teardown = service.accept_fixture(Some(OUTPUT_ID)).await;
    service.accept_job().await;
    service.job_statuses(&["In Progress", "ERROR"]).await;
    let transfer = service.transfer(0).await;
    let config = service.config();

    let err = scenarios::transfer_job_to_s3(&config.client(), &config, FakeService::s3())
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ClientError>(),
        Some(ClientError::JobFailed { job_id: JOB_ID, .. })
    ));
    transfer.assert_async().await;
    teardown.assert().await;
}

#[tokio::test]
async fn job_timeout_stops_before_transfer() {
    let mut service = FakeService::start().await;
    let teardown = service.accept_fixture(Some(OUTPUT_ID)).await;
    service.accept_job().await;
    service.job_statuses(&["In Progress"]).await;
    let transfer = service.transfer(0).await;
    let mut config = service.config();
    config.job_timeout = Duration::from_millis(50);

    let err = scenarios::transfer_job_to_s3(&config.client(), &config, FakeService::s3())
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ClientError>(),
        Some(ClientError::JobTimeout { .. })
    ));
    transfer.assert_async().await;
    teardown.assert().await;
}

#[tokio::test]
async fn cleanup_runs_after_failed_assertion() {
    let mut service = FakeService::start().await;
    let teardown = service.accept_fixture(Some(OUTPUT_ID)).await;
    service.accept_job().await;
    service.job_statuses(&["Finished"]).await;
    service.transfer(1).await;
    // A second, unexpected transfer makes the count assertion fail
    service.transfers_listed(2).await;
    let config = service.config();

    let outcome = tokio::spawn(async move {
        scenarios::transfer_job_to_s3(&config.client(), &config, FakeService::s3()).await
    })
    .await;

    assert!(outcome.unwrap_err().is_panic());
    teardown.assert().await;
}

#[tokio::test]
async fn rejected_api_key_fails_setup_without_cleanup() {
    let mut service = FakeService::start().await;
    service
        .json(
            "POST",
            "/input/create",
            401,
            r#"{"message":"Invalid API key"}"#,
        )
        .await;
    let no_delete = service.delete(&format!("/input/{INPUT_ID}"), 0).await;
    let config = service.config();

    let err = scenarios::create_job_with_invalid_data(&config.client(), &config)
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ClientError>(),
        Some(ClientError::Unauthorized { status: 401, .. })
    ));
    no_delete.assert_async().await;
}
