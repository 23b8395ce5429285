use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Client, Response,
};
use shared::{
    domain::{DownloadTarget, FileSlot, SessionId},
    protocol::{ErrorBody, GenerateRequest, GenerationResult, UploadResponse},
};
use tracing::{info, warn};
use url::Url;

use crate::error::{ClientError, Stage};

#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// The remote generation service. Calls are independent; ordering is the
/// caller's job.
#[async_trait]
pub trait ScriptService: Send + Sync {
    async fn upload(&self, character: UploadFile, story: UploadFile)
        -> Result<SessionId, ClientError>;
    async fn generate(&self, session_id: &SessionId) -> Result<GenerationResult, ClientError>;
    async fn download(
        &self,
        session_id: &SessionId,
        target: DownloadTarget,
    ) -> Result<Vec<u8>, ClientError>;
}

pub struct HttpScriptService {
    http: Client,
    base_url: Url,
}

impl HttpScriptService {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url.trim())
            .map_err(|err| ClientError::InvalidUrl(format!("{base_url}: {err}")))?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(format!(
                "{base_url}: cannot be used as a base"
            )));
        }
        Ok(Self {
            http,
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn text_part(file: UploadFile) -> Result<Part, ClientError> {
    Part::bytes(file.bytes)
        .file_name(file.file_name)
        .mime_str("text/plain")
        .map_err(|err| ClientError::transport(Stage::Upload, err))
}

async fn rejection(stage: Stage, response: Response) -> ClientError {
    let status = response.status().as_u16();
    let detail = match stage {
        Stage::Download => None,
        _ => response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail_text().map(str::to_string)),
    };
    warn!(
        %stage,
        status,
        detail = detail.as_deref().unwrap_or(""),
        "script service rejected request"
    );
    ClientError::Rejected {
        stage,
        status,
        detail,
    }
}

#[async_trait]
impl ScriptService for HttpScriptService {
    async fn upload(
        &self,
        character: UploadFile,
        story: UploadFile,
    ) -> Result<SessionId, ClientError> {
        let sizes = (character.bytes.len(), story.bytes.len());
        let form = Form::new()
            .part(FileSlot::Character.form_field(), text_part(character)?)
            .part(FileSlot::Story.form_field(), text_part(story)?);

        let response = self
            .http
            .post(self.endpoint(&["upload"])?)
            .multipart(form)
            .send()
            .await
            .map_err(|err| ClientError::transport(Stage::Upload, err))?;
        if !response.status().is_success() {
            return Err(rejection(Stage::Upload, response).await);
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|err| ClientError::transport(Stage::Upload, err))?;
        info!(
            session_id = %body.session_id,
            character_bytes = sizes.0,
            story_bytes = sizes.1,
            "uploaded source files"
        );
        Ok(body.session_id)
    }

    async fn generate(&self, session_id: &SessionId) -> Result<GenerationResult, ClientError> {
        let response = self
            .http
            .post(self.endpoint(&["generate"])?)
            .json(&GenerateRequest {
                session_id: session_id.clone(),
            })
            .send()
            .await
            .map_err(|err| ClientError::transport(Stage::Generate, err))?;
        if !response.status().is_success() {
            return Err(rejection(Stage::Generate, response).await);
        }

        let result: GenerationResult = response
            .json()
            .await
            .map_err(|err| ClientError::transport(Stage::Generate, err))?;
        info!(
            session_id = %result.session_id,
            script_length = result.script_length,
            has_reasoning = result.has_reasoning,
            message = result.message.as_deref().unwrap_or(""),
            "script generated"
        );
        Ok(result)
    }

    async fn download(
        &self,
        session_id: &SessionId,
        target: DownloadTarget,
    ) -> Result<Vec<u8>, ClientError> {
        let url = self.endpoint(&["download", session_id.as_str(), target.file_name()])?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| ClientError::transport(Stage::Download, err))?;
        if !response.status().is_success() {
            return Err(rejection(Stage::Download, response).await);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| ClientError::transport(Stage::Download, err))?;
        info!(%session_id, file = target.file_name(), bytes = bytes.len(), "downloaded artifact");
        Ok(bytes.to_vec())
    }
}
