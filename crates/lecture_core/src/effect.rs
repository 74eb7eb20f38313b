use crate::{Artifact, Generation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SubmitJob {
        generation: Generation,
        artifact: Artifact,
    },
    AskQuestion {
        generation: Generation,
        job_id: Option<String>,
        question: String,
    },
    CopyToClipboard {
        text: String,
    },
}
