use thiserror::Error;

/// Input rejected before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no artifact selected")]
    NoArtifact,
    #[error("question is empty")]
    EmptyQuestion,
    #[error("an upload is still in progress")]
    UploadPending,
    #[error("no processed lecture to ask about")]
    NoResult,
    #[error("a question is still pending")]
    AskPending,
    #[error("not a valid YouTube URL: {0}")]
    InvalidYoutubeUrl(String),
}

/// Failure of a user action, as seen by the state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Network failure, timeout, or a response that could not be decoded.
    #[error("transport error: {message}")]
    Transport { message: String, timed_out: bool },
    /// A success status whose body the client cannot use.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    /// Non-success response from the service.
    #[error("service error (status {status})")]
    Service {
        status: u16,
        message: Option<String>,
    },
}

impl ClientError {
    /// Text to show the user: the server's message when one was supplied,
    /// the validation message for client-side rejections, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Validation(err) => err.to_string(),
            ClientError::Service {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            ClientError::Service { .. }
            | ClientError::Transport { .. }
            | ClientError::InvalidResponse(_) => fallback.to_string(),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Transport { timed_out: true, .. })
    }
}
