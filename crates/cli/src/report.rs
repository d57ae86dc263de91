//! Plain-text rendering of a submit attempt.

use std::fmt::Write;
use std::process::ExitCode;

use formrelay_client::MemoryForm;
use formrelay_core::SubmitOutcome;

/// Error nodes first (`id: text`), then notices.
pub fn render(form: &MemoryForm, outcome: &SubmitOutcome) -> String {
    let mut out = String::new();

    if matches!(outcome, SubmitOutcome::Invalid(_)) {
        for (id, node) in form.errors() {
            let _ = writeln!(out, "{id}: {}", node.text);
        }
    }
    for notice in form.notices() {
        let _ = writeln!(out, "{}", notice.message());
    }
    out
}

/// `0` delivered, `1` not sent, `2` validation failed.
pub fn exit_status(outcome: &SubmitOutcome) -> u8 {
    match outcome {
        SubmitOutcome::Delivered => 0,
        SubmitOutcome::PreviewBlocked | SubmitOutcome::Failed(_) => 1,
        SubmitOutcome::Invalid(_) => 2,
    }
}

pub fn exit_code(outcome: &SubmitOutcome) -> ExitCode {
    ExitCode::from(exit_status(outcome))
}
