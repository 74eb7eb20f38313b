//! Lecture client core: pure interaction state machine and view-model helpers.
mod artifact;
mod effect;
mod error;
mod msg;
mod state;
mod update;
mod view_model;

pub use artifact::{is_youtube_url, Artifact, ArtifactSource};
pub use effect::Effect;
pub use error::{ClientError, ValidationError};
pub use msg::Msg;
pub use state::{
    AppState, ConversationTurn, Generation, Notification, ProcessingResult, Role, Severity,
    UploadPhase,
};
pub use update::{
    check_ask, check_question, check_submit, update, ASK_FALLBACK_TEXT, COPY_FAILURE_TEXT,
    COPY_SUCCESS_TEXT, SUBMIT_FALLBACK_TEXT, SUBMIT_SUCCESS_TEXT,
};
pub use view_model::{AppViewModel, ResultView};
