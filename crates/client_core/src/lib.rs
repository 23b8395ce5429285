//! Client core for the script generation service: the remote API, the form
//! state model, and a headless controller tying them together.

pub mod config;
pub mod controller;
pub mod download;
pub mod error;
pub mod form;
pub mod format;
pub mod service;
pub mod strings;

pub use config::{load_settings, Settings};
pub use controller::{upload_request, FormController};
pub use download::{fetch_and_save, save_download};
pub use error::{ClientError, Stage};
pub use form::{
    DownloadRequest, FileHandle, FormState, GenerationRequest, ResultSummary, ScrollTarget, View,
};
pub use service::{HttpScriptService, ScriptService, UploadFile};
pub use strings::{Locale, Strings};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
