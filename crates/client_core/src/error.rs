use std::{fmt, path::PathBuf};

use shared::{domain::FileSlot, error::SelectionError};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Upload,
    Generate,
    Download,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Upload => "upload",
            Stage::Generate => "generate",
            Stage::Download => "download",
        })
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error("no {0:?} file selected")]
    MissingFile(FileSlot),
    #[error("a generation is already running")]
    Busy,
    #[error("no active session")]
    NoSession,
    #[error("{stage} rejected with status {status}")]
    Rejected {
        stage: Stage,
        status: u16,
        detail: Option<String>,
    },
    #[error("{stage} request failed: {message}")]
    Transport { stage: Stage, message: String },
    #[error("{stage} response could not be decoded: {message}")]
    Decode { stage: Stage, message: String },
    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to save {}: {source}", .path.display())]
    SaveFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid backend url: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    pub fn transport(stage: Stage, err: reqwest::Error) -> Self {
        if err.is_decode() {
            return ClientError::Decode {
                stage,
                message: err.to_string(),
            };
        }
        ClientError::Transport {
            stage,
            message: err.to_string(),
        }
    }

    pub fn stage(&self) -> Option<Stage> {
        match self {
            ClientError::Rejected { stage, .. }
            | ClientError::Transport { stage, .. }
            | ClientError::Decode { stage, .. } => Some(*stage),
            ClientError::SaveFile { .. } | ClientError::NoSession => Some(Stage::Download),
            ClientError::ReadFile { .. } => Some(Stage::Upload),
            _ => None,
        }
    }
}
