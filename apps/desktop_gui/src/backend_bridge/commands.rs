//! Backend commands queued from UI to backend worker.

use client_core::{DownloadRequest, GenerationRequest};

pub enum BackendCommand {
    Generate(GenerationRequest),
    Download(DownloadRequest),
}
