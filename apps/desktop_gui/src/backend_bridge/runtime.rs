//! Runtime bridge between UI command queue and backend event intake.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
    thread,
};

use client_core::{fetch_and_save, upload_request, ScriptService};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    service: Arc<dyn ScriptService>,
    download_dir: PathBuf,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                send(
                    &ui_tx,
                    UiEvent::WorkerUnavailable(format!("failed to build runtime: {err}")),
                );
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::WorkerReady);
            while let Ok(cmd) = cmd_rx.recv() {
                handle_command(service.as_ref(), &download_dir, cmd, &ui_tx).await;
            }
            tracing::debug!("ui command queue closed; backend worker exiting");
        });
    });
}

/// Upload and generate run back to back; generate is never issued unless the
/// upload produced a session.
pub async fn handle_command(
    service: &dyn ScriptService,
    download_dir: &Path,
    cmd: BackendCommand,
    ui_tx: &Sender<UiEvent>,
) {
    match cmd {
        BackendCommand::Generate(request) => {
            let session_id = match upload_request(service, request).await {
                Ok(session_id) => session_id,
                Err(err) => {
                    send(ui_tx, UiEvent::Failed(err));
                    return;
                }
            };
            send(ui_tx, UiEvent::SessionEstablished(session_id.clone()));
            match service.generate(&session_id).await {
                Ok(result) => send(ui_tx, UiEvent::Generated(result)),
                Err(err) => send(ui_tx, UiEvent::Failed(err)),
            }
        }
        BackendCommand::Download(request) => {
            match fetch_and_save(service, &request, download_dir).await {
                Ok(path) => send(ui_tx, UiEvent::Saved(path)),
                Err(err) => send(ui_tx, UiEvent::Failed(err)),
            }
        }
    }
}

fn send(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    if ui_tx.send(event).is_err() {
        tracing::warn!("ui event queue closed; dropping backend event");
    }
}
