//! Headless driver pairing a [`FormState`] with a [`ScriptService`].

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use shared::{
    domain::{DownloadTarget, FileSlot, SessionId},
    error::SelectionError,
    protocol::GenerationResult,
};

use crate::{
    download::fetch_and_save,
    error::ClientError,
    form::{FileHandle, FormState, GenerationRequest},
    service::ScriptService,
    strings::Strings,
};

/// Reads both files and performs the upload call.
pub async fn upload_request(
    service: &dyn ScriptService,
    request: GenerationRequest,
) -> Result<SessionId, ClientError> {
    let (character, story) = request.into_uploads().await?;
    service.upload(character, story).await
}

pub struct FormController {
    form: FormState,
    service: Arc<dyn ScriptService>,
    download_dir: PathBuf,
}

impl FormController {
    pub fn new(
        service: Arc<dyn ScriptService>,
        strings: &'static Strings,
        download_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            form: FormState::new(strings),
            service,
            download_dir: download_dir.into(),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    pub fn handle_file_select(
        &mut self,
        slot: FileSlot,
        file: Option<FileHandle>,
    ) -> Result<(), SelectionError> {
        self.form.handle_file_select(slot, file)
    }

    /// Picks a file from disk. An unreadable path empties the slot and shows
    /// an error, same as a rejected file.
    pub fn select_path(&mut self, slot: FileSlot, path: &Path) -> Result<(), ClientError> {
        match FileHandle::from_path(path) {
            Ok(file) => Ok(self.form.handle_file_select(slot, Some(file))?),
            Err(err) => {
                self.form.clear_slot(slot);
                self.form.fail(&err);
                Err(err)
            }
        }
    }

    pub fn check_can_generate(&self) -> bool {
        self.form.can_generate()
    }

    /// Upload then generate, strictly in order. A failure at either step ends
    /// the attempt; the next call starts again from the upload.
    pub async fn generate_script(&mut self) -> Result<GenerationResult, ClientError> {
        let request = self.form.begin_generation()?;
        match self.run_generation(request).await {
            Ok(result) => {
                self.form.show_result(result.clone());
                Ok(result)
            }
            Err(err) => {
                self.form.fail(&err);
                Err(err)
            }
        }
    }

    async fn run_generation(
        &mut self,
        request: GenerationRequest,
    ) -> Result<GenerationResult, ClientError> {
        let session_id = upload_request(self.service.as_ref(), request).await?;
        self.form.session_established(session_id.clone());
        self.service.generate(&session_id).await
    }

    pub async fn download_file(&mut self, target: DownloadTarget) -> Result<PathBuf, ClientError> {
        let request = self.form.begin_download(target)?;
        match fetch_and_save(self.service.as_ref(), &request, &self.download_dir).await {
            Ok(path) => {
                self.form.download_saved(&path);
                Ok(path)
            }
            Err(err) => {
                self.form.fail(&err);
                Err(err)
            }
        }
    }

    pub fn reset_form(&mut self) {
        self.form.reset_form();
    }
}
