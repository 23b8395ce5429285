use std::fmt;

use serde::{Deserialize, Serialize};

/// Largest file the service accepts per slot.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;
pub const REQUIRED_EXTENSION: &str = ".txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileSlot {
    Character,
    Story,
}

impl FileSlot {
    pub const ALL: [FileSlot; 2] = [FileSlot::Character, FileSlot::Story];

    /// Multipart field name used by `/upload`.
    pub fn form_field(self) -> &'static str {
        match self {
            FileSlot::Character => "character_file",
            FileSlot::Story => "story_file",
        }
    }
}

/// Server-issued identifier tying an upload to later generate/download calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownloadTarget {
    Script,
    Reasoning,
}

impl DownloadTarget {
    pub fn file_name(self) -> &'static str {
        match self {
            DownloadTarget::Script => "generated.txt",
            DownloadTarget::Reasoning => "reasoning.txt",
        }
    }
}
