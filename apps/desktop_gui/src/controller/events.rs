//! Backend->UI events and the control binding table.

use std::path::PathBuf;

use client_core::ClientError;
use shared::{
    domain::{DownloadTarget, FileSlot, SessionId},
    protocol::GenerationResult,
};

pub enum UiEvent {
    WorkerReady,
    SessionEstablished(SessionId),
    Generated(GenerationResult),
    Saved(PathBuf),
    Failed(ClientError),
    /// Carries the startup failure detail.
    WorkerUnavailable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    CharacterPicker,
    StoryPicker,
    Generate,
    Retry,
    NewGeneration,
    DownloadScript,
    DownloadReasoning,
}

impl Control {
    pub fn picker(slot: FileSlot) -> Self {
        match slot {
            FileSlot::Character => Control::CharacterPicker,
            FileSlot::Story => Control::StoryPicker,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectFile(FileSlot),
    Generate,
    Reset,
    Download(DownloadTarget),
}

pub const BINDINGS: &[(Control, Action)] = &[
    (Control::CharacterPicker, Action::SelectFile(FileSlot::Character)),
    (Control::StoryPicker, Action::SelectFile(FileSlot::Story)),
    (Control::Generate, Action::Generate),
    (Control::Retry, Action::Generate),
    (Control::NewGeneration, Action::Reset),
    (Control::DownloadScript, Action::Download(DownloadTarget::Script)),
    (
        Control::DownloadReasoning,
        Action::Download(DownloadTarget::Reasoning),
    ),
];

pub fn action_for(control: Control) -> Option<Action> {
    BINDINGS
        .iter()
        .find(|(bound, _)| *bound == control)
        .map(|(_, action)| *action)
}
