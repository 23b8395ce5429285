//! Command orchestration helpers from UI actions to backend command queue.

use std::path::PathBuf;

use client_core::{FileHandle, FormState};
use crossbeam_channel::{Sender, TrySendError};
use shared::domain::FileSlot;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::Action;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    form: &mut FormState,
) {
    let cmd_name = match &cmd {
        BackendCommand::Generate(_) => "generate",
        BackendCommand::Download(_) => "download",
    };

    let strings = form.strings();
    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui command queue full");
            form.show_error(strings.queue_full);
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "backend worker disconnected");
            form.show_error(strings.worker_disconnected);
        }
    }
}

/// Runs one bound action against the form. `pick` asks the user for a file;
/// `None` means the picker was dismissed and the slot is cleared.
pub fn perform_action(
    action: Action,
    form: &mut FormState,
    cmd_tx: &Sender<BackendCommand>,
    pick: impl FnOnce(FileSlot) -> Option<PathBuf>,
) {
    match action {
        Action::SelectFile(slot) => select_file(form, slot, pick(slot)),
        Action::Generate => {
            if let Ok(request) = form.begin_generation() {
                dispatch_backend_command(cmd_tx, BackendCommand::Generate(request), form);
            }
        }
        Action::Download(target) => {
            if let Ok(request) = form.begin_download(target) {
                dispatch_backend_command(cmd_tx, BackendCommand::Download(request), form);
            }
        }
        Action::Reset => form.reset_form(),
    }
}

fn select_file(form: &mut FormState, slot: FileSlot, path: Option<PathBuf>) {
    let Some(path) = path else {
        form.clear_slot(slot);
        return;
    };
    match FileHandle::from_path(path) {
        Ok(file) => {
            if let Err(err) = form.handle_file_select(slot, Some(file)) {
                tracing::debug!(?slot, %err, "picked file rejected");
            }
        }
        Err(err) => {
            form.clear_slot(slot);
            form.fail(&err);
        }
    }
}
