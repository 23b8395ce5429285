//! Applies backend events to form state on the UI thread.

use client_core::FormState;

use crate::controller::events::UiEvent;

/// `worker_status` describes the backend worker; form status (such as a saved
/// download) takes precedence over it in the status bar.
pub fn reduce(form: &mut FormState, worker_status: &mut String, event: UiEvent) {
    let strings = form.strings();
    match event {
        UiEvent::WorkerReady => *worker_status = strings.worker_ready.to_string(),
        UiEvent::SessionEstablished(session_id) => form.session_established(session_id),
        UiEvent::Generated(result) => form.show_result(result),
        UiEvent::Saved(path) => form.download_saved(&path),
        UiEvent::Failed(err) => form.fail(&err),
        UiEvent::WorkerUnavailable(detail) => {
            tracing::error!("backend worker startup failure: {detail}");
            let message = format!("{}: {detail}", strings.worker_unavailable);
            form.show_error(message.clone());
            *worker_status = message;
        }
    }
}

pub fn status_line<'a>(form: &'a FormState, worker_status: &'a str) -> &'a str {
    form.status().unwrap_or(worker_status)
}
