use std::sync::mpsc;
use std::time::{Duration, Instant};

use client_logging::client_debug;
use lecture_core::{
    check_ask, check_submit, update, AppState, AppViewModel, Artifact, Msg, Notification,
    ValidationError,
};
use lecture_engine::{EngineError, EngineEvent, EngineHandle, ServiceSettings};

use super::effects::EffectRunner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Transcript,
    Analysis,
}

/// Owns the client state; the operations below are its only mutators.
pub struct Controller {
    state: AppState,
    runner: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
}

impl Controller {
    pub fn new(settings: ServiceSettings) -> Result<Self, EngineError> {
        Self::with_engine(move |event_tx| EngineHandle::new(settings, event_tx))
    }

    pub fn with_engine<F>(build_engine: F) -> Result<Self, EngineError>
    where
        F: FnOnce(mpsc::Sender<EngineEvent>) -> Result<EngineHandle, EngineError>,
    {
        let (msg_tx, msg_rx) = mpsc::channel();
        let runner = EffectRunner::start(build_engine, msg_tx)?;
        Ok(Self {
            state: AppState::new(),
            runner,
            msg_rx,
        })
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    /// Returns whether anything changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    pub fn select_artifact(&mut self, artifact: Artifact) {
        self.dispatch(Msg::ArtifactSelected(artifact));
    }

    pub fn select_youtube(&mut self, url: &str) -> Result<(), ValidationError> {
        let checked = Artifact::youtube(url).map(|_| ());
        self.dispatch(Msg::YoutubeUrlEntered(url.to_string()));
        checked
    }

    /// Starts processing the selected artifact.
    ///
    /// A missing artifact is reported both as the returned error and as an
    /// error notification. While an upload is outstanding the call returns
    /// `UploadPending` and changes nothing.
    pub fn submit(&mut self) -> Result<(), ValidationError> {
        let checked = check_submit(&self.state).map(|_| ());
        self.dispatch(Msg::SubmitClicked);
        checked
    }

    pub fn set_question(&mut self, text: impl Into<String>) {
        self.dispatch(Msg::QuestionChanged(text.into()));
    }

    /// Asks `question` about the processed lecture.
    ///
    /// Blank input, a missing result, or a question still pending are
    /// rejected without touching state, so the draft is only replaced when
    /// the question is actually sent.
    pub fn ask(&mut self, question: &str) -> Result<(), ValidationError> {
        check_ask(&self.state, question)?;
        self.set_question(question);
        self.dispatch(Msg::AskClicked);
        Ok(())
    }

    pub fn copy(&mut self, text: impl Into<String>) {
        self.dispatch(Msg::CopyRequested(text.into()));
    }

    pub fn copy_target(&mut self, target: CopyTarget) {
        let text = self
            .state
            .result()
            .map(|result| match target {
                CopyTarget::Transcript => result.transcript.clone(),
                CopyTarget::Analysis => result.analysis.clone(),
            })
            .unwrap_or_default();
        self.copy(text);
    }

    pub fn notify(&mut self, notification: Notification) {
        self.dispatch(Msg::Notify(notification));
    }

    pub fn dismiss(&mut self) {
        self.dispatch(Msg::NotificationDismissed);
    }

    pub fn reset(&mut self) {
        self.dispatch(Msg::ResetClicked);
    }

    /// Applies every completion that has already arrived. Returns the count.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch(msg);
            applied += 1;
        }
        applied
    }

    /// Blocks until no request is outstanding or `timeout` elapses.
    /// Returns `true` if the controller went idle.
    pub fn wait_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.state.is_busy() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            match self.msg_rx.recv_timeout(remaining) {
                Ok(msg) => self.dispatch(msg),
                Err(mpsc::RecvTimeoutError::Timeout) => return false,
                Err(mpsc::RecvTimeoutError::Disconnected) => return false,
            }
        }
        true
    }

    /// Waits for the next completion of any kind and applies it.
    pub fn wait_next(&mut self, timeout: Duration) -> bool {
        match self.msg_rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.dispatch(msg);
                true
            }
            Err(_) => false,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        if !effects.is_empty() {
            client_debug!("Running {} effect(s)", effects.len());
            self.runner.run(effects);
        }
    }
}
