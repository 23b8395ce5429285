//! UI layer for the desktop GUI: the single form window.

pub mod app;

pub use app::ScriptGenApp;
