use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

pub type Generation = u64;

/// What gets sent to the upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadPayload {
    Audio { file_name: String, bytes: Bytes },
    YoutubeUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOutput {
    pub transcript: String,
    pub analysis: String,
    pub job_id: Option<String>,
}

/// One turn of the conversation as the service reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SubmitCompleted {
        generation: Generation,
        result: Result<JobOutput, RequestError>,
    },
    AskCompleted {
        generation: Generation,
        result: Result<Vec<HistoryEntry>, RequestError>,
    },
    ClipboardCompleted {
        result: Result<(), String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestError {
    pub kind: FailureKind,
    pub message: String,
    /// The `error` field from the service's response body, if any.
    pub server_message: Option<String>,
}

impl RequestError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            server_message: None,
        }
    }

    pub(crate) fn with_server_message(mut self, server_message: Option<String>) -> Self {
        self.server_message = server_message;
        self
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.server_message {
            Some(server) => write!(f, "{}: {} ({})", self.kind, self.message, server),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for RequestError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Timeout,
    HttpStatus(u16),
    InvalidResponse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::InvalidResponse => write!(f, "invalid response"),
        }
    }
}
