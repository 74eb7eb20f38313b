//! Lecture client engine: HTTP service calls, clipboard access and effect execution.
mod clipboard;
mod engine;
mod service;
mod settings;
mod types;

pub use clipboard::{ArboardClipboard, ClipboardError, ClipboardWriter};
pub use engine::{EngineError, EngineHandle};
pub use service::{LectureService, ReqwestLectureService};
pub use settings::ServiceSettings;
pub use types::{
    EngineEvent, FailureKind, Generation, HistoryEntry, JobOutput, RequestError, UploadPayload,
};
