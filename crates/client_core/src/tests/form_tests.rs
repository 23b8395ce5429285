use super::*;
use crate::strings::{CHINESE, ENGLISH};
use shared::domain::MAX_UPLOAD_BYTES;

fn text_file(name: &str) -> FileHandle {
    FileHandle::in_memory(name, b"some words".to_vec())
}

fn oversized(name: &str) -> FileHandle {
    FileHandle {
        name: name.to_string(),
        size: MAX_UPLOAD_BYTES + 1,
        source: FileSource::Memory(Arc::from(Vec::new())),
    }
}

fn sample_result(has_reasoning: bool, reasoning_length: Option<u64>) -> GenerationResult {
    GenerationResult {
        session_id: SessionId("abc".into()),
        script_length: 1000,
        estimated_input_tokens: 250,
        has_reasoning,
        reasoning_length,
        message: None,
        files_generated: Vec::new(),
    }
}

fn ready_form() -> FormState {
    let mut form = FormState::new(&ENGLISH);
    form.handle_file_select(FileSlot::Character, Some(text_file("character.txt")))
        .expect("character");
    form.handle_file_select(FileSlot::Story, Some(text_file("story.txt")))
        .expect("story");
    form
}

#[test]
fn non_text_file_is_rejected_and_slot_left_empty() {
    let mut form = FormState::new(&ENGLISH);
    form.handle_file_select(FileSlot::Story, Some(text_file("story.txt")))
        .expect("first pick");

    let err = form
        .handle_file_select(FileSlot::Story, Some(text_file("story.docx")))
        .expect_err("docx rejected");

    assert!(matches!(err, SelectionError::NotText { .. }));
    assert!(form.file(FileSlot::Story).is_none());
    assert_eq!(
        form.error_message(),
        Some("Please select a .txt format file")
    );
    assert_eq!(form.take_scroll_request(), Some(ScrollTarget::Error));
}

#[test]
fn oversized_file_is_rejected_regardless_of_extension() {
    let mut form = FormState::new(&ENGLISH);
    for name in ["huge.txt", "huge.bin"] {
        assert!(form
            .handle_file_select(FileSlot::Character, Some(oversized(name)))
            .is_err());
        assert!(form.file(FileSlot::Character).is_none());
    }
    assert_eq!(form.error_message(), Some("Please select a .txt format file"));

    form.handle_file_select(FileSlot::Character, Some(oversized("huge.txt")))
        .expect_err("too large");
    assert_eq!(form.error_message(), Some("File size cannot exceed 10MB"));
}

#[test]
fn rejecting_one_slot_keeps_the_other() {
    let mut form = ready_form();
    form.handle_file_select(FileSlot::Story, Some(text_file("story.pdf")))
        .expect_err("rejected");

    assert!(form.file(FileSlot::Character).is_some());
    assert!(form.file(FileSlot::Story).is_none());
    assert!(!form.can_generate());
}

#[test]
fn generate_enabled_only_with_both_files() {
    let mut form = FormState::new(&ENGLISH);
    assert!(!form.can_generate());

    form.handle_file_select(FileSlot::Character, Some(text_file("character.txt")))
        .expect("character");
    assert!(!form.can_generate());

    form.handle_file_select(FileSlot::Story, Some(text_file("story.txt")))
        .expect("story");
    assert!(form.can_generate());

    form.handle_file_select(FileSlot::Character, None)
        .expect("clear");
    assert!(!form.can_generate());
    assert!(form.file_info(FileSlot::Character).is_none());
}

#[test]
fn file_info_shows_name_and_kilobytes() {
    let mut form = FormState::new(&ENGLISH);
    form.handle_file_select(
        FileSlot::Story,
        Some(FileHandle::in_memory("story.txt", vec![b'a'; 12_595])),
    )
    .expect("story");

    assert_eq!(
        form.file_info(FileSlot::Story).as_deref(),
        Some("✅ story.txt (12.3 KB)")
    );
}

#[test]
fn begin_generation_without_files_shows_error() {
    let mut form = FormState::new(&ENGLISH);
    form.handle_file_select(FileSlot::Character, Some(text_file("character.txt")))
        .expect("character");

    let err = form.begin_generation().expect_err("story missing");

    assert!(matches!(err, ClientError::MissingFile(FileSlot::Story)));
    assert_eq!(
        form.error_message(),
        Some("Please select both a character profile and a story outline")
    );
}

#[test]
fn begin_generation_shows_progress_and_refuses_second_start() {
    let mut form = ready_form();
    form.show_error("previous failure");

    let request = form.begin_generation().expect("start");
    assert_eq!(request.character.name(), "character.txt");
    assert_eq!(request.story.name(), "story.txt");
    assert_eq!(form.view(), &View::InProgress);

    let err = form.begin_generation().expect_err("busy");
    assert!(matches!(err, ClientError::Busy));
    form.fail(&err);
    assert_eq!(form.view(), &View::InProgress);
}

#[test]
fn result_without_reasoning_hides_affordance() {
    let mut form = ready_form();
    form.begin_generation().expect("start");
    form.show_result(sample_result(false, Some(0)));

    let summary = form.result_summary().expect("summary");
    assert_eq!(summary.script_length, "1,000");
    assert_eq!(summary.input_tokens, "250");
    assert!(!summary.shows_reasoning());
    assert_eq!(form.take_scroll_request(), Some(ScrollTarget::Result));
    assert_eq!(form.take_scroll_request(), None);
}

#[test]
fn result_with_reasoning_shows_length() {
    let mut form = ready_form();
    form.show_result(sample_result(true, Some(42)));
    assert_eq!(
        form.result_summary().expect("summary").reasoning_length,
        Some("42".to_string())
    );

    form.show_result(sample_result(true, None));
    assert_eq!(
        form.result_summary().expect("summary").reasoning_length,
        Some("0".to_string())
    );
}

#[test]
fn download_requires_session() {
    let mut form = ready_form();
    let err = form
        .begin_download(DownloadTarget::Script)
        .expect_err("no session");
    assert!(matches!(err, ClientError::NoSession));
    assert_eq!(form.error_message(), Some("No file available for download"));

    form.session_established(SessionId("abc".into()));
    let request = form
        .begin_download(DownloadTarget::Reasoning)
        .expect("session present");
    assert_eq!(request.session_id, SessionId("abc".into()));
    assert_eq!(request.target.file_name(), "reasoning.txt");
}

#[test]
fn reset_clears_everything() {
    let mut form = ready_form();
    form.session_established(SessionId("abc".into()));
    form.show_result(sample_result(true, Some(42)));
    form.download_saved(Path::new("/tmp/generated.txt"));

    form.reset_form();

    assert!(form.file(FileSlot::Character).is_none());
    assert!(form.file(FileSlot::Story).is_none());
    assert!(!form.can_generate());
    assert_eq!(form.view(), &View::Idle);
    assert!(form.session().is_none());
    assert!(form.status().is_none());
    assert_eq!(form.take_scroll_request(), Some(ScrollTarget::Top));
}

#[test]
fn messages_follow_locale() {
    let mut form = FormState::new(&CHINESE);
    form.handle_file_select(FileSlot::Story, Some(text_file("story.md")))
        .expect_err("rejected");
    assert_eq!(form.error_message(), Some("请选择 .txt 格式的文件"));
}

#[test]
fn from_path_reads_metadata_and_rejects_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("story.txt");
    std::fs::write(&path, "outline").expect("write");

    let handle = FileHandle::from_path(&path).expect("handle");
    assert_eq!(handle.name(), "story.txt");
    assert_eq!(handle.size(), 7);
    assert_eq!(handle.path(), Some(path.as_path()));

    assert!(matches!(
        FileHandle::from_path(dir.path()),
        Err(ClientError::ReadFile { .. })
    ));
}

#[test]
fn clearing_a_slot_keeps_the_current_view() {
    let mut form = ready_form();
    form.show_error("previous failure");

    form.clear_slot(FileSlot::Story);

    assert!(form.file(FileSlot::Story).is_none());
    assert!(form.file(FileSlot::Character).is_some());
    assert!(!form.can_generate());
    assert_eq!(form.error_message(), Some("previous failure"));
}
