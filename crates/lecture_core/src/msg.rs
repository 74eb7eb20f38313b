use crate::{Artifact, ClientError, ConversationTurn, Generation, Notification, ProcessingResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a new input artifact.
    ArtifactSelected(Artifact),
    /// User entered a YouTube link instead of a file.
    YoutubeUrlEntered(String),
    /// User clicked Upload & Analyze.
    SubmitClicked,
    /// Service finished (or failed) processing a submission.
    SubmitFinished {
        generation: Generation,
        result: Result<ProcessingResult, ClientError>,
    },
    /// User edited the question input.
    QuestionChanged(String),
    /// User clicked Ask.
    AskClicked,
    /// Service answered (or failed) a question.
    AskFinished {
        generation: Generation,
        result: Result<Vec<ConversationTurn>, ClientError>,
    },
    /// User asked to copy some text to the clipboard.
    CopyRequested(String),
    /// Clipboard write completed.
    ClipboardFinished(Result<(), String>),
    /// Show an advisory message, replacing any current one.
    Notify(Notification),
    /// User closed the notification.
    NotificationDismissed,
    /// User clicked Reset.
    ResetClicked,
}
