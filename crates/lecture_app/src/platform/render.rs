use lecture_core::{AppViewModel, Role, Severity, UploadPhase};

/// Short status line shown after every state change.
pub fn status_line(view: &AppViewModel) -> String {
    let phase = match view.phase {
        UploadPhase::Idle => "Idle",
        UploadPhase::Selected => "Selected",
        UploadPhase::Processing => "Processing",
        UploadPhase::Ready => "Ready",
        UploadPhase::Failed => "Failed",
    };
    let input = view.artifact_name.as_deref().unwrap_or("none");
    let mut line = format!(
        "[{}] input: {} | turns: {}",
        phase,
        input,
        view.conversation.len()
    );
    if view.asking {
        line.push_str(" | waiting for answer...");
    }
    line
}

pub fn notification(view: &AppViewModel) -> Option<String> {
    view.notification.as_ref().map(|n| {
        let tag = match n.severity {
            Severity::Info => "info",
            Severity::Success => "ok",
            Severity::Error => "error",
        };
        format!("({}) {}  [dismiss]", tag, n.text)
    })
}

/// Full dump of result and conversation.
pub fn full(view: &AppViewModel) -> String {
    let mut out = status_line(view);
    if view.phase == UploadPhase::Processing {
        out.push_str("\nProcessing audio... This may take a few minutes for longer lectures.");
    }
    if let Some(result) = &view.result {
        out.push_str("\n\n== Transcript ==\n");
        out.push_str(&result.transcript);
        out.push_str("\n\n== AI Summary ==\n");
        out.push_str(&result.analysis);
        out.push_str("\n\n== Q&A ==\n");
        if view.conversation.is_empty() {
            out.push_str("Start asking questions about the lecture...\n");
        }
        for turn in &view.conversation {
            let who = match turn.role {
                Role::User => "you",
                Role::Assistant => "assistant",
                Role::System => "system",
            };
            out.push_str(&format!("{}: {}\n", who, turn.content));
        }
    }
    if let Some(text) = notification(view) {
        out.push('\n');
        out.push_str(&text);
    }
    out
}
