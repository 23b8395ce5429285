use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{error::ClientError, form::DownloadRequest, service::ScriptService};

/// Writes `bytes` to `dir/file_name` through a temp file in the same
/// directory. The temp file is removed if anything fails before the rename.
pub fn save_download(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, ClientError> {
    let target = dir.join(file_name);
    let save_err = |source: io::Error| ClientError::SaveFile {
        path: target.clone(),
        source,
    };

    std::fs::create_dir_all(dir).map_err(save_err)?;
    let mut temp = tempfile::Builder::new()
        .prefix(".download-")
        .tempfile_in(dir)
        .map_err(save_err)?;
    temp.write_all(bytes).map_err(save_err)?;
    temp.as_file().sync_all().map_err(save_err)?;
    temp.persist(&target).map_err(|err| save_err(err.error))?;
    Ok(target)
}

/// Fetches the artifact and saves it under its own name in `dir`. Nothing
/// touches the filesystem unless the fetch succeeds.
pub async fn fetch_and_save(
    service: &dyn ScriptService,
    request: &DownloadRequest,
    dir: &Path,
) -> Result<PathBuf, ClientError> {
    let bytes = service
        .download(&request.session_id, request.target)
        .await?;
    let dir = dir.to_path_buf();
    let file_name = request.target.file_name();
    let path = tokio::task::spawn_blocking(move || save_download(&dir, file_name, &bytes))
        .await
        .map_err(|err| ClientError::SaveFile {
            path: PathBuf::from(file_name),
            source: io::Error::from(err),
        })??;
    info!(path = %path.display(), "saved artifact");
    Ok(path)
}
