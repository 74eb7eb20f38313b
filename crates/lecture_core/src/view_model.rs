use crate::{ConversationTurn, Notification, UploadPhase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub transcript: String,
    pub analysis: String,
    pub job_id: Option<String>,
}

/// Read-only snapshot handed to presentation code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: UploadPhase,
    pub artifact_name: Option<String>,
    pub result: Option<ResultView>,
    pub conversation: Vec<ConversationTurn>,
    pub question: String,
    pub asking: bool,
    pub notification: Option<Notification>,
    /// Whether the submit action should be offered.
    pub submit_enabled: bool,
    /// Whether the ask action should be offered.
    pub ask_enabled: bool,
    pub dirty: bool,
}
