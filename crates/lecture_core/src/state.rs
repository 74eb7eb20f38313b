use crate::view_model::{AppViewModel, ResultView};
use crate::Artifact;

/// Token identifying the submission/reset epoch a request was issued under.
pub type Generation = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    Selected,
    Processing,
    Ready,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    /// Turns the service injects on its own, e.g. corrections.
    System,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            "system" => Some(Role::System),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Transcript and markdown analysis returned for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingResult {
    pub transcript: String,
    pub analysis: String,
    /// Service-side identifier for follow-up questions, when provided.
    pub job_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Info)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    artifact: Option<Artifact>,
    phase: UploadPhase,
    result: Option<ProcessingResult>,
    conversation: Vec<ConversationTurn>,
    question: String,
    /// Generation of the outstanding upload request, if any.
    upload_in_flight: Option<Generation>,
    /// Generation of the outstanding question request, if any.
    ask_in_flight: Option<Generation>,
    notification: Option<Notification>,
    generation: Generation,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            phase: self.phase,
            artifact_name: self.artifact.as_ref().map(|a| a.name().to_string()),
            result: self.result.as_ref().map(|result| ResultView {
                transcript: result.transcript.clone(),
                analysis: result.analysis.clone(),
                job_id: result.job_id.clone(),
            }),
            conversation: self.conversation.clone(),
            question: self.question.clone(),
            asking: self.ask_in_flight == Some(self.generation),
            notification: self.notification.clone(),
            submit_enabled: self.artifact.is_some() && self.upload_in_flight.is_none(),
            ask_enabled: self.phase == UploadPhase::Ready
                && self.ask_in_flight.is_none()
                && !self.question.trim().is_empty(),
            dirty: self.dirty,
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    /// True while an upload request is outstanding, including one whose
    /// result will be discarded.
    pub fn is_uploading(&self) -> bool {
        self.upload_in_flight.is_some()
    }

    /// True while a question request is outstanding, including one whose
    /// answer will be discarded.
    pub fn is_asking(&self) -> bool {
        self.ask_in_flight.is_some()
    }

    /// True while a submit or ask request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.is_uploading() || self.is_asking()
    }

    pub fn artifact(&self) -> Option<&Artifact> {
        self.artifact.as_ref()
    }

    pub fn result(&self) -> Option<&ProcessingResult> {
        self.result.as_ref()
    }

    pub fn conversation(&self) -> &[ConversationTurn] {
        &self.conversation
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Returns whether state changed since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn bump_generation(&mut self) -> Generation {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub(crate) fn is_current(&self, generation: Generation) -> bool {
        self.generation == generation
    }

    /// Drops the result and conversation and invalidates in-flight requests.
    /// The requests stay outstanding until their completions arrive.
    fn clear_results(&mut self) {
        self.result = None;
        self.conversation.clear();
        self.bump_generation();
    }

    pub(crate) fn select_artifact(&mut self, artifact: Artifact) {
        self.artifact = Some(artifact);
        self.phase = UploadPhase::Selected;
        self.clear_results();
        self.notification = None;
        self.mark_dirty();
    }

    /// Enters `Processing` and returns the generation the request belongs to.
    pub(crate) fn begin_processing(&mut self) -> Generation {
        self.phase = UploadPhase::Processing;
        self.clear_results();
        self.upload_in_flight = Some(self.generation);
        self.notification = None;
        self.mark_dirty();
        self.generation
    }

    /// Clears the upload marker if `generation` is the outstanding upload.
    /// Returns false for completions of requests that are no longer tracked.
    pub(crate) fn settle_upload(&mut self, generation: Generation) -> bool {
        if self.upload_in_flight != Some(generation) {
            return false;
        }
        self.upload_in_flight = None;
        self.mark_dirty();
        true
    }

    /// Clears the question marker if `generation` is the outstanding question.
    pub(crate) fn settle_ask(&mut self, generation: Generation) -> bool {
        if self.ask_in_flight != Some(generation) {
            return false;
        }
        self.ask_in_flight = None;
        self.mark_dirty();
        true
    }

    pub(crate) fn finish_processing(&mut self, result: ProcessingResult) {
        self.result = Some(result);
        self.conversation.clear();
        self.phase = UploadPhase::Ready;
        self.mark_dirty();
    }

    pub(crate) fn fail_processing(&mut self) {
        self.result = None;
        self.phase = UploadPhase::Failed;
        self.mark_dirty();
    }

    pub(crate) fn set_question(&mut self, text: String) {
        if self.question != text {
            self.question = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn begin_asking(&mut self) {
        self.ask_in_flight = Some(self.generation);
        self.mark_dirty();
    }

    pub(crate) fn finish_asking(&mut self, history: Vec<ConversationTurn>) {
        self.conversation = history;
        self.question.clear();
        self.mark_dirty();
    }

    pub(crate) fn set_notification(&mut self, notification: Notification) {
        self.notification = Some(notification);
        self.mark_dirty();
    }

    pub(crate) fn dismiss_notification(&mut self) {
        if self.notification.take().is_some() {
            self.mark_dirty();
        }
    }

    /// Back to the initial state. Outstanding requests stay tracked so a
    /// new one cannot start before their completions arrive.
    pub(crate) fn reset(&mut self) {
        *self = Self {
            generation: self.generation,
            upload_in_flight: self.upload_in_flight,
            ask_in_flight: self.ask_in_flight,
            ..Self::default()
        };
        self.bump_generation();
        self.mark_dirty();
    }
}
