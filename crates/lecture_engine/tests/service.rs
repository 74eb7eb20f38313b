use std::time::Duration;

use lecture_engine::{
    FailureKind, HistoryEntry, LectureService, ReqwestLectureService, ServiceSettings,
    UploadPayload,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(server: &MockServer) -> ReqwestLectureService {
    ReqwestLectureService::new(ServiceSettings {
        base_url: server.uri(),
        ..ServiceSettings::default()
    })
}

fn audio() -> UploadPayload {
    UploadPayload::Audio {
        file_name: "lecture1.mp3".to_string(),
        bytes: bytes::Bytes::from_static(b"ID3 fake audio"),
    }
}

#[test]
fn default_timeouts_are_bounded() {
    let settings = ServiceSettings::default();
    assert_eq!(settings.submit_timeout, Duration::from_secs(120));
    assert_eq!(settings.ask_timeout, Duration::from_secs(120));
}

#[tokio::test]
async fn submit_uploads_file_and_returns_result() {
    client_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"lecture1.mp3\""))
        .and(body_string_contains("ID3 fake audio"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transcript": "T",
            "analysis": "A",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = service_for(&server).submit(audio()).await.expect("submit ok");

    assert_eq!(output.transcript, "T");
    assert_eq!(output.analysis, "A");
    assert_eq!(output.job_id, None);
}

#[tokio::test]
async fn submit_sends_youtube_url_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(body_string_contains("name=\"youtube_url\""))
        .and(body_string_contains("https://youtu.be/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transcript": "T",
            "analysis": "A",
            "job_id": "job-7",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = service_for(&server)
        .submit(UploadPayload::YoutubeUrl("https://youtu.be/abc".to_string()))
        .await
        .expect("submit ok");

    assert_eq!(output.job_id.as_deref(), Some("job-7"));
}

#[tokio::test]
async fn submit_failure_carries_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "error": "Processing error: whisper crashed" })),
        )
        .mount(&server)
        .await;

    let err = service_for(&server).submit(audio()).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(
        err.server_message.as_deref(),
        Some("Processing error: whisper crashed")
    );
}

#[tokio::test]
async fn submit_failure_without_body_has_no_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let err = service_for(&server).submit(audio()).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(502));
    assert_eq!(err.server_message, None);
}

#[tokio::test]
async fn submit_times_out_on_slow_service() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(300))
                .set_body_json(json!({ "transcript": "T", "analysis": "A" })),
        )
        .mount(&server)
        .await;

    let service = ReqwestLectureService::new(ServiceSettings {
        base_url: server.uri(),
        submit_timeout: Duration::from_millis(50),
        ..ServiceSettings::default()
    });

    let err = service.submit(audio()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn submit_rejects_malformed_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "transcript": "T" })))
        .mount(&server)
        .await;

    let err = service_for(&server).submit(audio()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidResponse);
}

#[tokio::test]
async fn ask_posts_question_and_returns_history() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .and(body_json(json!({ "question": "What is the main topic?" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "history": [
                { "role": "user", "content": "What is the main topic?" },
                { "role": "assistant", "content": "X" },
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let history = service_for(&server)
        .ask(None, "What is the main topic?")
        .await
        .expect("ask ok");

    assert_eq!(
        history,
        vec![
            HistoryEntry {
                role: "user".to_string(),
                content: "What is the main topic?".to_string(),
            },
            HistoryEntry {
                role: "assistant".to_string(),
                content: "X".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn ask_includes_job_id_when_known() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .and(body_json(json!({ "question": "Q?", "job_id": "job-7" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "history": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let history = service_for(&server)
        .ask(Some("job-7"), "Q?")
        .await
        .expect("ask ok");
    assert!(history.is_empty());
}

#[tokio::test]
async fn ask_failure_carries_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "No lecture loaded" })),
        )
        .mount(&server)
        .await;

    let err = service_for(&server).ask(None, "Q?").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(400));
    assert_eq!(err.server_message.as_deref(), Some("No lecture loaded"));
}

#[tokio::test]
async fn ask_times_out_on_slow_service() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(300))
                .set_body_json(json!({ "history": [] })),
        )
        .mount(&server)
        .await;

    let service = ReqwestLectureService::new(ServiceSettings {
        base_url: server.uri(),
        ask_timeout: Duration::from_millis(50),
        ..ServiceSettings::default()
    });

    let err = service.ask(None, "Q?").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn unreachable_service_is_network_error() {
    let service = ReqwestLectureService::new(ServiceSettings {
        base_url: "http://127.0.0.1:9".to_string(),
        ..ServiceSettings::default()
    });

    let err = service.ask(None, "Q?").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}
