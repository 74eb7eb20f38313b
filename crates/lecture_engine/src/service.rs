use client_logging::{client_debug, client_warn};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{FailureKind, HistoryEntry, JobOutput, RequestError, ServiceSettings, UploadPayload};

/// Remote transcription, summarization and question answering.
#[async_trait::async_trait]
pub trait LectureService: Send + Sync {
    async fn submit(&self, payload: UploadPayload) -> Result<JobOutput, RequestError>;

    async fn ask(
        &self,
        job_id: Option<&str>,
        question: &str,
    ) -> Result<Vec<HistoryEntry>, RequestError>;
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    transcript: String,
    analysis: String,
    #[serde(default)]
    job_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    job_id: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct AskResponse {
    history: Vec<HistoryEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReqwestLectureService {
    settings: ServiceSettings,
}

impl ReqwestLectureService {
    pub fn new(settings: ServiceSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, RequestError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .build()
            .map_err(|err| RequestError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl LectureService for ReqwestLectureService {
    async fn submit(&self, payload: UploadPayload) -> Result<JobOutput, RequestError> {
        let client = self.build_client()?;
        let form = match payload {
            UploadPayload::Audio { file_name, bytes } => {
                client_debug!("Uploading file={} bytes={}", file_name, bytes.len());
                Form::new().part("file", Part::bytes(bytes.to_vec()).file_name(file_name))
            }
            UploadPayload::YoutubeUrl(url) => {
                client_debug!("Uploading youtube_url={}", url);
                Form::new().text("youtube_url", url)
            }
        };

        let response = client
            .post(self.settings.endpoint("upload"))
            .multipart(form)
            .timeout(self.settings.submit_timeout)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let body: SubmitResponse = read_json(response).await?;
        Ok(JobOutput {
            transcript: body.transcript,
            analysis: body.analysis,
            job_id: body.job_id,
        })
    }

    async fn ask(
        &self,
        job_id: Option<&str>,
        question: &str,
    ) -> Result<Vec<HistoryEntry>, RequestError> {
        let client = self.build_client()?;
        let response = client
            .post(self.settings.endpoint("ask"))
            .json(&AskRequest { question, job_id })
            .timeout(self.settings.ask_timeout)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let body: AskResponse = read_json(response).await?;
        Ok(body.history)
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, RequestError> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(map_reqwest_error)?;

    if !status.is_success() {
        let server_message = serde_json::from_slice::<ErrorBody>(&bytes)
            .ok()
            .and_then(|body| body.error);
        client_warn!(
            "Service returned status={} error={:?}",
            status.as_u16(),
            server_message
        );
        return Err(
            RequestError::new(FailureKind::HttpStatus(status.as_u16()), status.to_string())
                .with_server_message(server_message),
        );
    }

    serde_json::from_slice(&bytes)
        .map_err(|err| RequestError::new(FailureKind::InvalidResponse, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> RequestError {
    if err.is_timeout() {
        return RequestError::new(FailureKind::Timeout, err.to_string());
    }
    RequestError::new(FailureKind::Network, err.to_string())
}
