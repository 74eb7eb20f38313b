use client_logging::{client_debug, client_info, client_warn};

use crate::{
    AppState, Artifact, ClientError, Effect, Msg, Notification, UploadPhase, ValidationError,
};

pub const SUBMIT_SUCCESS_TEXT: &str = "Lecture summarized successfully!";
pub const SUBMIT_FALLBACK_TEXT: &str = "Processing failed, please try again.";
pub const ASK_FALLBACK_TEXT: &str = "Failed to get answer.";
pub const COPY_SUCCESS_TEXT: &str = "Copied to clipboard!";
pub const COPY_FAILURE_TEXT: &str = "Failed to copy.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ArtifactSelected(artifact) => {
            client_info!("Artifact selected name={}", artifact.name());
            state.select_artifact(artifact);
            Vec::new()
        }
        Msg::YoutubeUrlEntered(raw) => {
            match Artifact::youtube(&raw) {
                Ok(artifact) => {
                    client_info!("YouTube link selected url={}", artifact.name());
                    state.select_artifact(artifact);
                }
                Err(err) => {
                    client_warn!("Rejected link: {}", err);
                    state.set_notification(Notification::error(err.to_string()));
                }
            }
            Vec::new()
        }
        Msg::SubmitClicked => match check_submit(&state).cloned() {
            Ok(artifact) => {
                let generation = state.begin_processing();
                client_info!(
                    "Submitting name={} generation={}",
                    artifact.name(),
                    generation
                );
                vec![Effect::SubmitJob {
                    generation,
                    artifact,
                }]
            }
            Err(ValidationError::UploadPending) => {
                client_debug!("Submit ignored: an upload is still in flight");
                Vec::new()
            }
            Err(err) => {
                client_warn!("Submit rejected: {}", err);
                state.set_notification(Notification::error(format!(
                    "Please upload an audio file ({err})."
                )));
                Vec::new()
            }
        },
        Msg::SubmitFinished { generation, result } => {
            if !state.settle_upload(generation) {
                client_debug!("Ignoring untracked submit result generation={}", generation);
                return (state, Vec::new());
            }
            if !state.is_current(generation) {
                client_debug!(
                    "Discarding stale submit result generation={} current={}",
                    generation,
                    state.generation()
                );
                return (state, Vec::new());
            }
            match result {
                Ok(result) => {
                    client_info!(
                        "Processing done transcript_len={} analysis_len={}",
                        result.transcript.len(),
                        result.analysis.len()
                    );
                    state.finish_processing(result);
                    state.set_notification(Notification::success(SUBMIT_SUCCESS_TEXT));
                }
                Err(err) => {
                    client_warn!("Processing failed: {}", err);
                    state.fail_processing();
                    state.set_notification(failure_notification(&err, SUBMIT_FALLBACK_TEXT));
                }
            }
            Vec::new()
        }
        Msg::QuestionChanged(text) => {
            state.set_question(text);
            Vec::new()
        }
        Msg::AskClicked => {
            if let Err(err) = check_ask(&state, state.question()) {
                client_debug!("Ask ignored: {}", err);
                return (state, Vec::new());
            }
            let question = state.question().to_string();
            let job_id = state.result().and_then(|result| result.job_id.clone());
            state.begin_asking();
            client_info!(
                "Asking question_len={} generation={}",
                question.len(),
                state.generation()
            );
            vec![Effect::AskQuestion {
                generation: state.generation(),
                job_id,
                question,
            }]
        }
        Msg::AskFinished { generation, result } => {
            if !state.settle_ask(generation) {
                client_debug!("Ignoring untracked answer generation={}", generation);
                return (state, Vec::new());
            }
            if !state.is_current(generation) {
                client_debug!(
                    "Discarding stale answer generation={} current={}",
                    generation,
                    state.generation()
                );
                return (state, Vec::new());
            }
            match result {
                Ok(history) => {
                    client_info!("Answer received turns={}", history.len());
                    state.finish_asking(history);
                }
                Err(err) => {
                    client_warn!("Question failed: {}", err);
                    state.set_notification(failure_notification(&err, ASK_FALLBACK_TEXT));
                }
            }
            Vec::new()
        }
        Msg::CopyRequested(text) => {
            if text.is_empty() {
                Vec::new()
            } else {
                vec![Effect::CopyToClipboard { text }]
            }
        }
        Msg::ClipboardFinished(result) => {
            let notification = match result {
                Ok(()) => Notification::success(COPY_SUCCESS_TEXT),
                Err(err) => {
                    client_warn!("Clipboard write failed: {}", err);
                    Notification::error(COPY_FAILURE_TEXT)
                }
            };
            state.set_notification(notification);
            Vec::new()
        }
        Msg::Notify(notification) => {
            state.set_notification(notification);
            Vec::new()
        }
        Msg::NotificationDismissed => {
            state.dismiss_notification();
            Vec::new()
        }
        Msg::ResetClicked => {
            client_info!("Reset");
            state.reset();
            Vec::new()
        }
    };

    (state, effects)
}

/// Checks the submit precondition, returning the artifact to upload.
pub fn check_submit(state: &AppState) -> Result<&Artifact, ValidationError> {
    if state.is_uploading() {
        return Err(ValidationError::UploadPending);
    }
    state.artifact().ok_or(ValidationError::NoArtifact)
}

/// Checks whether `question` would be sent if asked now.
pub fn check_ask(state: &AppState, question: &str) -> Result<(), ValidationError> {
    check_question(question)?;
    if state.phase() != UploadPhase::Ready {
        return Err(ValidationError::NoResult);
    }
    if state.is_asking() {
        return Err(ValidationError::AskPending);
    }
    Ok(())
}

/// Checks that a question has content once surrounding whitespace is ignored.
pub fn check_question(question: &str) -> Result<&str, ValidationError> {
    let trimmed = question.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyQuestion)
    } else {
        Ok(trimmed)
    }
}

fn failure_notification(err: &ClientError, fallback: &str) -> Notification {
    Notification::error(err.user_message(fallback))
}
