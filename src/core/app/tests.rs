use super::*;
use crate::utils::clipboard::RecordingClipboard;
use crate::utils::editor::ExternalEdit;
use std::time::Duration;

fn create_test_app(template: &str) -> App {
    App::new(
        TemplateComposer::with_template(template),
        Theme::dark_default(),
    )
}

fn type_link(app: &mut App, link: &str) {
    for c in link.chars() {
        app.edit_link(LineEditAction::Insert(c));
    }
}

#[test]
fn typing_in_link_field_updates_output_per_keystroke() {
    let mut app = create_test_app("Join: {{ZOOM_LINK}}");
    type_link(&mut app, "https://zoom.us/j/1");
    assert_eq!(app.composer.link_value(), "https://zoom.us/j/1");
    assert_eq!(app.composer.output(), "Join: https://zoom.us/j/1");
}

#[test]
fn cursor_movement_does_not_discard_manual_edit() {
    let mut app = create_test_app("Join: {{ZOOM_LINK}}");
    type_link(&mut app, "abc");
    app.composer.set_output("custom");

    assert_eq!(
        app.edit_link(LineEditAction::MoveLeft),
        LineEditOutcome::CursorMoved
    );
    assert!(app.composer.is_overridden());
    assert_eq!(app.composer.output(), "custom");

    app.edit_link(LineEditAction::Backspace);
    assert!(!app.composer.is_overridden());
    assert_eq!(app.composer.output(), "Join: ac");
}

#[test]
fn template_dialog_saves_into_composer() {
    let mut app = create_test_app("old {{ZOOM_LINK}}");
    type_link(&mut app, "L");
    app.open_editor(EditTarget::Template);
    let dialog = app.ui.dialog.as_mut().expect("dialog open");
    assert_eq!(dialog.text(), "old {{ZOOM_LINK}}");
    dialog.replace_text("new {{ZOOM_LINK}}");

    app.save_editor();
    assert!(app.ui.dialog.is_none());
    assert_eq!(app.composer.template(), "new {{ZOOM_LINK}}");
    assert_eq!(app.composer.output(), "new L");
}

#[test]
fn output_dialog_switches_to_override_and_template_save_keeps_it() {
    let mut app = create_test_app("T {{ZOOM_LINK}}");
    type_link(&mut app, "L");

    app.open_editor(EditTarget::Output);
    assert_eq!(
        app.ui.dialog.as_ref().map(|d| d.text()).as_deref(),
        Some("T L")
    );
    app.ui
        .dialog
        .as_mut()
        .expect("dialog")
        .replace_text("hand edited");
    app.save_editor();
    assert!(app.composer.is_overridden());

    app.open_editor(EditTarget::Template);
    app.ui
        .dialog
        .as_mut()
        .expect("dialog")
        .replace_text("other {{ZOOM_LINK}}");
    app.save_editor();
    assert_eq!(app.composer.output(), "hand edited");
    assert!(app
        .ui
        .status
        .as_ref()
        .is_some_and(|s| s.text.contains("manual edit")));
}

#[test]
fn cancelling_dialog_changes_nothing() {
    let mut app = create_test_app("T {{ZOOM_LINK}}");
    let before = app.composer.clone();
    app.open_editor(EditTarget::Output);
    app.ui.dialog.as_mut().expect("dialog").replace_text("zzz");
    app.cancel_editor();
    assert!(app.ui.dialog.is_none());
    assert_eq!(app.composer, before);
}

#[test]
fn copy_without_link_warns_and_exports_nothing() {
    let mut app = create_test_app("T {{ZOOM_LINK}}");
    type_link(&mut app, "   ");
    let mut sink = RecordingClipboard::default();

    assert!(!app.copy_output(&mut sink));
    assert!(sink.copied.is_empty());
    let status = app.ui.status.as_ref().expect("status");
    assert_eq!(status.kind, StatusKind::Warning);
    assert_eq!(status.text, MISSING_LINK_MESSAGE);
}

#[test]
fn copy_reports_success_and_failure() {
    let mut app = create_test_app("T {{ZOOM_LINK}}");
    type_link(&mut app, "https://zoom.us/j/123");

    let mut sink = RecordingClipboard::default();
    assert!(app.copy_output(&mut sink));
    assert_eq!(sink.copied, vec!["T https://zoom.us/j/123".to_string()]);
    assert_eq!(
        app.ui.status.as_ref().map(|s| s.text.as_str()),
        Some(COPY_SUCCESS_MESSAGE)
    );

    let before = app.composer.clone();
    let mut failing = RecordingClipboard {
        fail: true,
        ..Default::default()
    };
    assert!(!app.copy_output(&mut failing));
    let status = app.ui.status.as_ref().expect("status");
    assert_eq!(status.kind, StatusKind::Error);
    assert_eq!(status.text, COPY_FAILURE_MESSAGE);
    assert_eq!(app.composer, before);
}

#[test]
fn reset_only_acts_when_overridden() {
    let mut app = create_test_app("T {{ZOOM_LINK}}");
    type_link(&mut app, "L");
    app.reset_output();
    assert_eq!(app.composer.output(), "T L");

    app.composer.set_output("manual");
    app.reset_output();
    assert!(!app.composer.is_overridden());
    assert_eq!(app.composer.output(), "T L");
}

#[test]
fn paste_goes_to_link_field_when_focused() {
    let mut app = create_test_app("{{ZOOM_LINK}}");
    app.paste("\nhttps://zoom.us/j/5\r\nMeeting ID: 5");
    assert_eq!(app.composer.output(), "https://zoom.us/j/5");

    app.focus_next();
    app.paste("ignored");
    assert_eq!(app.composer.link_value(), "https://zoom.us/j/5");
}

#[test]
fn paste_goes_to_open_dialog() {
    let mut app = create_test_app("A");
    app.open_editor(EditTarget::Template);
    app.paste("\tB");
    assert_eq!(
        app.ui.dialog.as_ref().map(|d| d.text()).as_deref(),
        Some("A    B")
    );
    assert_eq!(app.composer.link_value(), "");
}

#[test]
fn initial_link_seeds_link_editor() {
    let mut composer = TemplateComposer::with_template("{{ZOOM_LINK}}");
    composer.set_link_value("https://zoom.us/j/8");
    let app = App::new(composer, Theme::light());
    assert_eq!(app.ui.link_editor.text, "https://zoom.us/j/8");
    assert_eq!(app.ui.link_editor.cursor, 19);
}

#[test]
fn status_expires() {
    let mut app = create_test_app("T");
    app.set_status("hello", StatusKind::Info);
    let created = app.ui.status.as_ref().expect("status").created_at;
    assert!(!app.expire_status(created));
    assert!(app.expire_status(created + Duration::from_secs(3)));
    assert!(app.ui.status.is_none());
}

#[test]
fn external_edit_replaces_dialog_text_without_saving() {
    let mut app = create_test_app("T {{ZOOM_LINK}}");
    app.open_editor(EditTarget::Template);
    app.apply_external_edit(ExternalEdit::Edited("from editor".to_string()));
    assert_eq!(
        app.ui.dialog.as_ref().map(|d| d.text()).as_deref(),
        Some("from editor")
    );
    assert_eq!(app.composer.template(), "T {{ZOOM_LINK}}");
}

#[test]
fn external_edit_failures_leave_dialog_and_warn() {
    let mut app = create_test_app("T");
    app.open_editor(EditTarget::Output);
    app.apply_external_edit(ExternalEdit::NoEditor);
    assert_eq!(
        app.ui.status.as_ref().map(|s| s.kind),
        Some(StatusKind::Warning)
    );
    app.apply_external_edit(ExternalEdit::Aborted);
    assert_eq!(app.ui.dialog.as_ref().map(|d| d.text()).as_deref(), Some("T"));
}

#[test]
fn crlf_paste_into_template_dialog_keeps_line_structure() {
    let mut app = create_test_app("");
    app.open_editor(EditTarget::Template);
    app.paste("Line one\r\nLine two\r\n🔗 {{ZOOM_LINK}}");
    app.save_editor();
    assert_eq!(app.composer.template(), "Line one\nLine two\n🔗 {{ZOOM_LINK}}");
}
