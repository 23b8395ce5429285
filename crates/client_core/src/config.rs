use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use tracing::warn;

use crate::strings::Locale;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const SETTINGS_FILE: &str = "scriptgen.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub backend_url: String,
    pub locale: Locale,
    pub download_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.into(),
            locale: Locale::default(),
            download_dir: dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

/// Defaults, then `scriptgen.toml` in the working directory, then the
/// environment.
pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<HashMap<String, String>>(&raw) {
            Ok(file_cfg) => apply_file(&mut settings, file_cfg),
            Err(err) => warn!(path = %path.display(), %err, "ignoring unparsable settings file"),
        }
    }

    if let Some(v) = non_empty(env("BACKEND_URL")) {
        settings.backend_url = v;
    }
    if let Some(v) = non_empty(env("APP__BACKEND_URL")) {
        settings.backend_url = v;
    }
    if let Some(v) = non_empty(env("APP__LOCALE")) {
        set_locale(&mut settings, &v);
    }
    if let Some(v) = non_empty(env("APP__DOWNLOAD_DIR")) {
        settings.download_dir = PathBuf::from(v);
    }

    settings
}

fn apply_file(settings: &mut Settings, file_cfg: HashMap<String, String>) {
    for (key, value) in file_cfg {
        let Some(value) = non_empty(Some(value)) else {
            continue;
        };
        match key.as_str() {
            "backend_url" => settings.backend_url = value,
            "locale" => set_locale(settings, &value),
            "download_dir" => settings.download_dir = PathBuf::from(value),
            other => warn!(key = other, "ignoring unknown settings key"),
        }
    }
}

fn set_locale(settings: &mut Settings, raw: &str) {
    match Locale::parse(raw) {
        Some(locale) => settings.locale = locale,
        None => warn!(locale = raw, "ignoring unsupported locale"),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
