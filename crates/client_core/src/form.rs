//! Form state: file slots, session, and the single visible view.

use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use shared::{
    domain::{DownloadTarget, FileSlot, SessionId},
    error::{validate_selection, SelectionError},
    protocol::GenerationResult,
};
use tracing::{debug, info, warn};

use crate::{
    error::ClientError,
    format::{group_thousands, kilobytes_label},
    service::UploadFile,
    strings::Strings,
};

#[derive(Debug, Clone)]
enum FileSource {
    Path(PathBuf),
    Memory(Arc<[u8]>),
}

/// A picked file. Content is read when the upload starts, not at pick time.
#[derive(Debug, Clone)]
pub struct FileHandle {
    name: String,
    size: u64,
    source: FileSource,
}

impl FileHandle {
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, ClientError> {
        let path = path.into();
        let metadata = std::fs::metadata(&path).map_err(|source| ClientError::ReadFile {
            path: path.clone(),
            source,
        })?;
        if !metadata.is_file() {
            return Err(ClientError::ReadFile {
                path,
                source: io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
            });
        }
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            name,
            size: metadata.len(),
            source: FileSource::Path(path),
        })
    }

    pub fn in_memory(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let bytes: Vec<u8> = bytes.into();
        Self {
            name: name.into(),
            size: bytes.len() as u64,
            source: FileSource::Memory(bytes.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            FileSource::Path(path) => Some(path),
            FileSource::Memory(_) => None,
        }
    }

    pub async fn read(&self) -> Result<Vec<u8>, ClientError> {
        match &self.source {
            FileSource::Path(path) => {
                tokio::fs::read(path)
                    .await
                    .map_err(|source| ClientError::ReadFile {
                        path: path.clone(),
                        source,
                    })
            }
            FileSource::Memory(bytes) => Ok(bytes.to_vec()),
        }
    }

    /// Reads the bytes and checks them again, since a file on disk may have
    /// changed after it was picked.
    async fn into_upload(self) -> Result<UploadFile, ClientError> {
        let bytes = self.read().await?;
        validate_selection(&self.name, bytes.len() as u64)?;
        Ok(UploadFile {
            file_name: self.name,
            bytes,
        })
    }
}

/// Which region is showing. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Idle,
    InProgress,
    Result(GenerationResult),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Result,
    Error,
}

/// Snapshot of both slots taken when a generation starts.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub character: FileHandle,
    pub story: FileHandle,
}

impl GenerationRequest {
    pub async fn into_uploads(self) -> Result<(UploadFile, UploadFile), ClientError> {
        let character = self.character.into_upload().await?;
        let story = self.story.into_upload().await?;
        Ok((character, story))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub session_id: SessionId,
    pub target: DownloadTarget,
}

/// Display-ready copy of a [`GenerationResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSummary {
    pub session_id: String,
    pub script_length: String,
    pub input_tokens: String,
    /// Present only when the service produced a reasoning trace.
    pub reasoning_length: Option<String>,
}

impl ResultSummary {
    pub fn from_result(result: &GenerationResult) -> Self {
        Self {
            session_id: result.session_id.to_string(),
            script_length: group_thousands(result.script_length),
            input_tokens: group_thousands(result.estimated_input_tokens),
            reasoning_length: result
                .has_reasoning
                .then(|| group_thousands(result.reasoning_length.unwrap_or(0))),
        }
    }

    pub fn shows_reasoning(&self) -> bool {
        self.reasoning_length.is_some()
    }
}

pub struct FormState {
    strings: &'static Strings,
    character: Option<FileHandle>,
    story: Option<FileHandle>,
    session: Option<SessionId>,
    view: View,
    scroll: Option<ScrollTarget>,
    status: Option<String>,
}

impl FormState {
    pub fn new(strings: &'static Strings) -> Self {
        Self {
            strings,
            character: None,
            story: None,
            session: None,
            view: View::Idle,
            scroll: None,
            status: None,
        }
    }

    pub fn strings(&self) -> &'static Strings {
        self.strings
    }

    fn slot_mut(&mut self, slot: FileSlot) -> &mut Option<FileHandle> {
        match slot {
            FileSlot::Character => &mut self.character,
            FileSlot::Story => &mut self.story,
        }
    }

    pub fn file(&self, slot: FileSlot) -> Option<&FileHandle> {
        match slot {
            FileSlot::Character => self.character.as_ref(),
            FileSlot::Story => self.story.as_ref(),
        }
    }

    /// `None` means the picker was cleared. A rejected file empties only its
    /// own slot.
    pub fn handle_file_select(
        &mut self,
        slot: FileSlot,
        file: Option<FileHandle>,
    ) -> Result<(), SelectionError> {
        let Some(file) = file else {
            self.clear_slot(slot);
            return Ok(());
        };

        if let Err(err) = validate_selection(file.name(), file.size()) {
            debug!(?slot, %err, "file selection rejected");
            *self.slot_mut(slot) = None;
            self.show_error(self.strings.selection_error(&err));
            return Err(err);
        }

        *self.slot_mut(slot) = Some(file);
        Ok(())
    }

    pub fn clear_slot(&mut self, slot: FileSlot) {
        *self.slot_mut(slot) = None;
    }

    /// Label shown under a slot, e.g. `✅ story.txt (12.3 KB)`.
    pub fn file_info(&self, slot: FileSlot) -> Option<String> {
        self.file(slot)
            .map(|file| format!("✅ {} ({} KB)", file.name(), kilobytes_label(file.size())))
    }

    pub fn can_generate(&self) -> bool {
        self.character.is_some() && self.story.is_some()
    }

    pub fn is_busy(&self) -> bool {
        self.view == View::InProgress
    }

    /// Clears every view and shows progress. Returns the files to send.
    pub fn begin_generation(&mut self) -> Result<GenerationRequest, ClientError> {
        if self.is_busy() {
            return Err(ClientError::Busy);
        }
        let Some(character) = self.character.clone() else {
            return Err(self.fail_with(ClientError::MissingFile(FileSlot::Character)));
        };
        let Some(story) = self.story.clone() else {
            return Err(self.fail_with(ClientError::MissingFile(FileSlot::Story)));
        };
        self.view = View::InProgress;
        self.status = None;
        Ok(GenerationRequest { character, story })
    }

    pub fn session_established(&mut self, session_id: SessionId) {
        info!(%session_id, "session established");
        self.session = Some(session_id);
    }

    pub fn show_result(&mut self, result: GenerationResult) {
        self.view = View::Result(result);
        self.scroll = Some(ScrollTarget::Result);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.view = View::Error(message.into());
        self.scroll = Some(ScrollTarget::Error);
    }

    /// Shows the localized message for `err`. A concurrent-generation refusal
    /// leaves the running view in place.
    pub fn fail(&mut self, err: &ClientError) {
        if matches!(err, ClientError::Busy) {
            return;
        }
        warn!(stage = ?err.stage(), %err, "attempt failed");
        self.show_error(self.strings.client_error(err));
    }

    fn fail_with(&mut self, err: ClientError) -> ClientError {
        self.fail(&err);
        err
    }

    pub fn begin_download(&mut self, target: DownloadTarget) -> Result<DownloadRequest, ClientError> {
        match &self.session {
            Some(session_id) => Ok(DownloadRequest {
                session_id: session_id.clone(),
                target,
            }),
            None => Err(self.fail_with(ClientError::NoSession)),
        }
    }

    pub fn download_saved(&mut self, path: &Path) {
        self.status = Some(format!("{} {}", self.strings.saved_to, path.display()));
    }

    pub fn reset_form(&mut self) {
        self.character = None;
        self.story = None;
        self.session = None;
        self.view = View::Idle;
        self.status = None;
        self.scroll = Some(ScrollTarget::Top);
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn session(&self) -> Option<&SessionId> {
        self.session.as_ref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn result_summary(&self) -> Option<ResultSummary> {
        match &self.view {
            View::Result(result) => Some(ResultSummary::from_result(result)),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.view {
            View::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn take_scroll_request(&mut self) -> Option<ScrollTarget> {
        self.scroll.take()
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
