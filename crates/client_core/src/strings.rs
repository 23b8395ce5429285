//! User-facing text. One catalog per locale; the form logic never embeds copy.

use shared::error::SelectionError;

use crate::error::{ClientError, Stage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Chinese,
}

impl Locale {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "english" => Some(Locale::English),
            "zh" | "zh-cn" | "chinese" => Some(Locale::Chinese),
            _ => None,
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::English => &ENGLISH,
            Locale::Chinese => &CHINESE,
        }
    }
}

#[derive(Debug)]
pub struct Strings {
    pub title: &'static str,
    pub character_label: &'static str,
    pub story_label: &'static str,
    pub choose_file: &'static str,
    pub generate: &'static str,
    pub progress: &'static str,
    pub result_heading: &'static str,
    pub session_id: &'static str,
    pub script_length: &'static str,
    pub input_tokens: &'static str,
    pub reasoning_length: &'static str,
    pub download_script: &'static str,
    pub download_reasoning: &'static str,
    pub new_generation: &'static str,
    pub error_heading: &'static str,
    pub retry: &'static str,
    pub saved_to: &'static str,
    pub not_text: &'static str,
    pub too_large: &'static str,
    pub empty_file: &'static str,
    pub missing_files: &'static str,
    pub busy: &'static str,
    pub upload_failed: &'static str,
    pub generate_failed: &'static str,
    pub no_session: &'static str,
    pub download_failed: &'static str,
    pub text_filter: &'static str,
    pub worker_starting: &'static str,
    pub worker_ready: &'static str,
    pub worker_unavailable: &'static str,
    pub queue_full: &'static str,
    pub worker_disconnected: &'static str,
}

pub static ENGLISH: Strings = Strings {
    title: "AI Script Generator",
    character_label: "Character profile",
    story_label: "Story outline",
    choose_file: "Choose .txt file",
    generate: "Generate script",
    progress: "Generating script, please wait...",
    result_heading: "Script generated",
    session_id: "Session ID",
    script_length: "Script length",
    input_tokens: "Estimated input tokens",
    reasoning_length: "Reasoning length",
    download_script: "Download script",
    download_reasoning: "Download reasoning",
    new_generation: "New generation",
    error_heading: "Something went wrong",
    retry: "Retry",
    saved_to: "Saved to",
    not_text: "Please select a .txt format file",
    too_large: "File size cannot exceed 10MB",
    empty_file: "The selected file is empty",
    missing_files: "Please select both a character profile and a story outline",
    busy: "Script generation is already in progress",
    upload_failed: "File upload failed",
    generate_failed: "Script generation failed",
    no_session: "No file available for download",
    download_failed: "Download failed",
    text_filter: "Text",
    worker_starting: "Backend worker starting...",
    worker_ready: "Backend worker ready",
    worker_unavailable: "Backend worker failed to start",
    queue_full: "Too many pending requests; please retry",
    worker_disconnected: "Backend worker disconnected; restart the app",
};

pub static CHINESE: Strings = Strings {
    title: "AI 剧本生成器",
    character_label: "人物设定",
    story_label: "故事大纲",
    choose_file: "选择 .txt 文件",
    generate: "生成剧本",
    progress: "正在生成剧本，请稍候...",
    result_heading: "剧本生成完成",
    session_id: "会话 ID",
    script_length: "剧本长度",
    input_tokens: "预估输入 Token",
    reasoning_length: "推理过程长度",
    download_script: "下载剧本",
    download_reasoning: "下载推理过程",
    new_generation: "重新生成",
    error_heading: "出错了",
    retry: "重试",
    saved_to: "已保存到",
    not_text: "请选择 .txt 格式的文件",
    too_large: "文件大小不能超过 10MB",
    empty_file: "所选文件为空",
    missing_files: "请同时选择人物设定和故事大纲文件",
    busy: "剧本正在生成中",
    upload_failed: "文件上传失败",
    generate_failed: "剧本生成失败",
    no_session: "没有可下载的文件",
    download_failed: "下载失败",
    text_filter: "文本文件",
    worker_starting: "后台服务启动中...",
    worker_ready: "后台服务已就绪",
    worker_unavailable: "后台服务启动失败",
    queue_full: "待处理请求过多，请重试",
    worker_disconnected: "后台服务已断开，请重启应用",
};

impl Strings {
    pub fn slot_label(&self, slot: shared::domain::FileSlot) -> &'static str {
        match slot {
            shared::domain::FileSlot::Character => self.character_label,
            shared::domain::FileSlot::Story => self.story_label,
        }
    }

    pub fn selection_error(&self, err: &SelectionError) -> String {
        match err {
            SelectionError::NotText { .. } => self.not_text.to_string(),
            SelectionError::TooLarge { .. } => self.too_large.to_string(),
            SelectionError::Empty { .. } => self.empty_file.to_string(),
        }
    }

    /// Message for the error view. Server-supplied `detail` wins over the
    /// generic per-stage fallback.
    pub fn client_error(&self, err: &ClientError) -> String {
        match err {
            ClientError::Selection(err) => self.selection_error(err),
            ClientError::MissingFile(_) => self.missing_files.to_string(),
            ClientError::Busy => self.busy.to_string(),
            ClientError::NoSession => self.no_session.to_string(),
            ClientError::Rejected {
                stage: Stage::Download,
                status,
                ..
            } => format!("{}: HTTP {status}", self.download_failed),
            ClientError::Rejected { stage, detail, .. } => detail
                .clone()
                .unwrap_or_else(|| self.stage_fallback(*stage).to_string()),
            ClientError::Transport { stage, message } => match stage {
                Stage::Download => format!("{}: {message}", self.download_failed),
                _ => format!("{}: {message}", self.stage_fallback(*stage)),
            },
            ClientError::Decode { stage, .. } => self.stage_fallback(*stage).to_string(),
            ClientError::ReadFile { source, .. } => format!("{}: {source}", self.upload_failed),
            ClientError::SaveFile { source, .. } => format!("{}: {source}", self.download_failed),
            ClientError::InvalidUrl(message) => message.clone(),
        }
    }

    fn stage_fallback(&self, stage: Stage) -> &'static str {
        match stage {
            Stage::Upload => self.upload_failed,
            Stage::Generate => self.generate_failed,
            Stage::Download => self.download_failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_locale_aliases() {
        assert_eq!(Locale::parse("EN"), Some(Locale::English));
        assert_eq!(Locale::parse(" zh-CN "), Some(Locale::Chinese));
        assert_eq!(Locale::parse("fr"), None);
    }

    #[test]
    fn rejected_upload_prefers_server_detail() {
        let with_detail = ClientError::Rejected {
            stage: Stage::Upload,
            status: 400,
            detail: Some("bad file".into()),
        };
        assert_eq!(ENGLISH.client_error(&with_detail), "bad file");

        let without = ClientError::Rejected {
            stage: Stage::Generate,
            status: 500,
            detail: None,
        };
        assert_eq!(ENGLISH.client_error(&without), "Script generation failed");
        assert_eq!(CHINESE.client_error(&without), "剧本生成失败");
    }

    #[test]
    fn download_failures_are_prefixed() {
        let err = ClientError::Rejected {
            stage: Stage::Download,
            status: 404,
            detail: Some("File does not exist".into()),
        };
        assert_eq!(ENGLISH.client_error(&err), "Download failed: HTTP 404");
    }
}
