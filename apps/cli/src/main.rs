use std::{path::PathBuf, sync::Arc};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use client_core::{
    format::human_readable_bytes, load_settings, FormController, HttpScriptService, Locale,
};
use shared::domain::{DownloadTarget, FileSlot};
use tracing_subscriber::EnvFilter;

/// Upload a character profile and a story outline, generate a script, and
/// save the results.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    character: PathBuf,
    #[arg(long)]
    story: PathBuf,
    /// Overrides `backend_url` from scriptgen.toml and the environment.
    #[arg(long)]
    backend_url: Option<String>,
    /// `en` or `zh`.
    #[arg(long)]
    locale: Option<String>,
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Print the result without saving any artifact.
    #[arg(long)]
    no_download: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(url) = args.backend_url {
        settings.backend_url = url;
    }
    if let Some(raw) = args.locale.as_deref() {
        settings.locale =
            Locale::parse(raw).with_context(|| format!("unsupported locale '{raw}'"))?;
    }
    if let Some(dir) = args.out_dir {
        settings.download_dir = dir;
    }
    tracing::debug!(?settings, "resolved settings");

    let strings = settings.locale.strings();
    let service = HttpScriptService::new(&settings.backend_url)?;
    let mut controller = FormController::new(Arc::new(service), strings, &settings.download_dir);

    for (slot, path) in [
        (FileSlot::Character, &args.character),
        (FileSlot::Story, &args.story),
    ] {
        if controller.select_path(slot, path).is_err() {
            return Err(view_error(&controller));
        }
        println!(
            "{}: {}",
            strings.slot_label(slot),
            controller.form().file_info(slot).unwrap_or_default()
        );
    }

    println!("{}", strings.progress);
    if controller.generate_script().await.is_err() {
        return Err(view_error(&controller));
    }

    let summary = controller
        .form()
        .result_summary()
        .ok_or_else(|| anyhow!("generation finished without a result"))?;
    println!("{}", strings.result_heading);
    println!("  {}: {}", strings.session_id, summary.session_id);
    println!("  {}: {}", strings.script_length, summary.script_length);
    println!("  {}: {}", strings.input_tokens, summary.input_tokens);
    if let Some(reasoning_length) = &summary.reasoning_length {
        println!("  {}: {reasoning_length}", strings.reasoning_length);
    }

    if args.no_download {
        return Ok(());
    }

    let mut targets = vec![DownloadTarget::Script];
    if summary.shows_reasoning() {
        targets.push(DownloadTarget::Reasoning);
    }
    for target in targets {
        let Ok(path) = controller.download_file(target).await else {
            return Err(view_error(&controller));
        };
        let size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        println!(
            "{} {} ({})",
            strings.saved_to,
            path.display(),
            human_readable_bytes(size)
        );
    }

    Ok(())
}

fn view_error(controller: &FormController) -> anyhow::Error {
    anyhow!(controller
        .form()
        .error_message()
        .unwrap_or("unexpected failure")
        .to_string())
}
