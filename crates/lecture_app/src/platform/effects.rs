use std::sync::mpsc;
use std::thread;

use client_logging::{client_debug, client_info, client_warn};
use lecture_core::{
    ArtifactSource, ClientError, ConversationTurn, Effect, Msg, ProcessingResult, Role,
};
use lecture_engine::{
    EngineError, EngineEvent, EngineHandle, FailureKind, HistoryEntry, JobOutput, RequestError,
    UploadPayload,
};

/// Executes core effects on the engine and feeds completions back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn start<F>(build_engine: F, msg_tx: mpsc::Sender<Msg>) -> Result<Self, EngineError>
    where
        F: FnOnce(mpsc::Sender<EngineEvent>) -> Result<EngineHandle, EngineError>,
    {
        let (event_tx, event_rx) = mpsc::channel();
        let engine = build_engine(event_tx)?;
        spawn_event_loop(event_rx, msg_tx);
        Ok(Self { engine })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitJob {
                    generation,
                    artifact,
                } => {
                    client_info!(
                        "SubmitJob generation={} name={}",
                        generation,
                        artifact.name()
                    );
                    let payload = match artifact.source() {
                        ArtifactSource::Audio(bytes) => UploadPayload::Audio {
                            file_name: artifact.name().to_string(),
                            bytes: bytes.clone(),
                        },
                        ArtifactSource::YoutubeUrl(url) => UploadPayload::YoutubeUrl(url.clone()),
                    };
                    self.engine.submit(generation, payload);
                }
                Effect::AskQuestion {
                    generation,
                    job_id,
                    question,
                } => {
                    client_info!(
                        "AskQuestion generation={} job_id={:?}",
                        generation,
                        job_id
                    );
                    self.engine.ask(generation, job_id, question);
                }
                Effect::CopyToClipboard { text } => {
                    client_debug!("CopyToClipboard len={}", text.len());
                    self.engine.copy(text);
                }
            }
        }
    }
}

fn spawn_event_loop(event_rx: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            if msg_tx.send(map_event(event)).is_err() {
                break;
            }
        }
    });
}

pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SubmitCompleted { generation, result } => Msg::SubmitFinished {
            generation,
            result: result.map(map_output).map_err(map_request_error),
        },
        EngineEvent::AskCompleted { generation, result } => Msg::AskFinished {
            generation,
            result: result.map_err(map_request_error).and_then(map_history),
        },
        EngineEvent::ClipboardCompleted { result } => Msg::ClipboardFinished(result),
    }
}

fn map_output(output: JobOutput) -> ProcessingResult {
    ProcessingResult {
        transcript: output.transcript,
        analysis: output.analysis,
        job_id: output.job_id,
    }
}

fn map_history(history: Vec<HistoryEntry>) -> Result<Vec<ConversationTurn>, ClientError> {
    history
        .into_iter()
        .map(|entry| match Role::parse(&entry.role) {
            Some(role) => Ok(ConversationTurn {
                role,
                content: entry.content,
            }),
            None => {
                client_warn!("Service returned unknown role {:?}", entry.role);
                Err(ClientError::InvalidResponse(format!(
                    "unknown conversation role {:?}",
                    entry.role
                )))
            }
        })
        .collect()
}

fn map_request_error(err: RequestError) -> ClientError {
    match err.kind {
        FailureKind::HttpStatus(status) => ClientError::Service {
            status,
            message: err.server_message,
        },
        FailureKind::Timeout => ClientError::Transport {
            message: err.message,
            timed_out: true,
        },
        FailureKind::Network => ClientError::Transport {
            message: err.message,
            timed_out: false,
        },
        FailureKind::InvalidResponse => ClientError::InvalidResponse(err.message),
    }
}
