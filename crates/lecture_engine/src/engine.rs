use std::sync::{mpsc, Arc};
use std::thread;

use client_logging::{client_debug, client_warn};
use thiserror::Error;

use crate::clipboard::{ArboardClipboard, ClipboardWriter};
use crate::service::{LectureService, ReqwestLectureService};
use crate::{EngineEvent, Generation, ServiceSettings, UploadPayload};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

enum EngineCommand {
    Submit {
        generation: Generation,
        payload: UploadPayload,
    },
    Ask {
        generation: Generation,
        job_id: Option<String>,
        question: String,
    },
    Copy {
        text: String,
    },
}

/// Runs service calls and clipboard writes on a background runtime.
///
/// Every command produces exactly one `EngineEvent` on the event channel.
/// Commands run concurrently; ordering of completions is not guaranteed.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(
        settings: ServiceSettings,
        event_tx: mpsc::Sender<EngineEvent>,
    ) -> Result<Self, EngineError> {
        Self::with_services(
            Arc::new(ReqwestLectureService::new(settings)),
            Arc::new(ArboardClipboard),
            event_tx,
        )
    }

    pub fn with_services(
        service: Arc<dyn LectureService>,
        clipboard: Arc<dyn ClipboardWriter>,
        event_tx: mpsc::Sender<EngineEvent>,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let service = service.clone();
                let clipboard = clipboard.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(service, clipboard, command, event_tx).await;
                });
            }
            client_debug!("Engine command channel closed");
        });

        Ok(Self { cmd_tx })
    }

    pub fn submit(&self, generation: Generation, payload: UploadPayload) {
        self.send(EngineCommand::Submit {
            generation,
            payload,
        });
    }

    pub fn ask(&self, generation: Generation, job_id: Option<String>, question: impl Into<String>) {
        self.send(EngineCommand::Ask {
            generation,
            job_id,
            question: question.into(),
        });
    }

    pub fn copy(&self, text: impl Into<String>) {
        self.send(EngineCommand::Copy { text: text.into() });
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            client_warn!("Engine worker is gone; command dropped");
        }
    }
}

async fn handle_command(
    service: Arc<dyn LectureService>,
    clipboard: Arc<dyn ClipboardWriter>,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::Submit {
            generation,
            payload,
        } => {
            let result = service.submit(payload).await;
            EngineEvent::SubmitCompleted { generation, result }
        }
        EngineCommand::Ask {
            generation,
            job_id,
            question,
        } => {
            let result = service.ask(job_id.as_deref(), &question).await;
            EngineEvent::AskCompleted { generation, result }
        }
        EngineCommand::Copy { text } => {
            let result = tokio::task::spawn_blocking(move || clipboard.write_text(&text))
                .await
                .map_err(|err| err.to_string())
                .and_then(|written| written.map_err(|err| err.to_string()));
            EngineEvent::ClipboardCompleted { result }
        }
    };
    let _ = event_tx.send(event);
}
