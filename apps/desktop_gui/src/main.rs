mod backend_bridge;
mod controller;
mod ui;

use std::sync::Arc;

use client_core::{load_settings, FormState, HttpScriptService};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::ScriptGenApp;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings();
    tracing::info!(
        backend_url = %settings.backend_url,
        download_dir = %settings.download_dir.display(),
        "starting desktop gui"
    );
    let service = HttpScriptService::new(&settings.backend_url)?;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(
        cmd_rx,
        ui_tx,
        Arc::new(service),
        settings.download_dir.clone(),
    );

    let strings = settings.locale.strings();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(strings.title)
            .with_inner_size([640.0, 720.0])
            .with_min_inner_size([480.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        strings.title,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(ScriptGenApp::new(
                FormState::new(strings),
                cmd_tx,
                ui_rx,
                settings.backend_url,
            )))
        }),
    )
    .map_err(|err| anyhow::anyhow!("gui exited with error: {err}"))
}
