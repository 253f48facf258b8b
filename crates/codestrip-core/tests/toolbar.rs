mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use codestrip_core::{
    ClickEvent, Collaborator, ControlId, DefaultViewPolicy, FullscreenTarget, Marker, MimeType,
    ToolbarAction, ToolbarController, ToolbarError, ToolbarEvent, Trigger,
};
use common::{EditorCall, Stubs, decorated, full_layout, layout_with};

fn enabled(toolbar: &ToolbarController, id: ControlId) -> bool {
    toolbar.control(id).unwrap().is_enabled()
}

fn visible(toolbar: &ToolbarController, id: ControlId) -> bool {
    toolbar.control(id).unwrap().is_visible()
}

// ==================== History ====================

#[test]
fn test_undo_redo_reflect_history() {
    let (mut toolbar, stubs) = decorated(false);

    stubs.editor.set_history(2, 1);
    toolbar.undo();
    assert!(enabled(&toolbar, ControlId::Undo));
    assert!(enabled(&toolbar, ControlId::Redo));

    stubs.editor.set_history(0, 3);
    toolbar.undo();
    assert!(!enabled(&toolbar, ControlId::Undo));
    assert!(enabled(&toolbar, ControlId::Redo));

    stubs.editor.set_history(1, 0);
    toolbar.redo();
    assert!(enabled(&toolbar, ControlId::Undo));
    assert!(!enabled(&toolbar, ControlId::Redo));

    assert_eq!(
        stubs.editor.calls(),
        vec![EditorCall::Undo, EditorCall::Undo, EditorCall::Redo]
    );
}

#[test]
fn test_undo_without_editor_is_noop() {
    let mut toolbar = ToolbarController::new(Arc::new(false));
    toolbar.decorate(&full_layout(), None);

    toolbar.undo();
    toolbar.redo();
    assert!(!enabled(&toolbar, ControlId::Undo));
    assert!(!enabled(&toolbar, ControlId::Redo));
}

#[test]
fn test_disabled_undo_ignores_clicks() {
    let (mut toolbar, stubs) = decorated(false);
    toolbar
        .click(ControlId::Undo, &ClickEvent::default())
        .unwrap();
    assert!(stubs.editor.calls().is_empty());

    toolbar.enable_undo_button(true);
    toolbar
        .click(ControlId::Undo, &ClickEvent::default())
        .unwrap();
    assert_eq!(stubs.editor.calls(), vec![EditorCall::Undo]);
}

// ==================== Syntax check ====================

#[test]
fn test_syntax_check_toggles_marker() {
    let (mut toolbar, stubs) = decorated(false);
    let debug = |toolbar: &ToolbarController| {
        let control = toolbar.control(ControlId::Debug).unwrap();
        (control.has_marker(Marker::Active), control.has_marker(Marker::AlertColor))
    };

    assert_eq!(debug(&toolbar), (false, false));
    toolbar.set_syntax_check();
    assert_eq!(debug(&toolbar), (true, true));
    toolbar.set_syntax_check();
    assert_eq!(debug(&toolbar), (false, false));

    assert_eq!(
        stubs.editor.calls(),
        vec![EditorCall::SyntaxCheck(true), EditorCall::SyntaxCheck(false)]
    );
}

#[test]
fn test_syntax_check_ignores_editor_state() {
    let (mut toolbar, stubs) = decorated(false);
    // The editor was told "off" by a mode change; the marker still says off,
    // so the next toggle turns checking on.
    toolbar.update_toolbar("text/plain");
    toolbar.enable_debug_button(true);
    toolbar
        .click(ControlId::Debug, &ClickEvent::default())
        .unwrap();

    assert_eq!(
        stubs.editor.calls(),
        vec![EditorCall::SyntaxCheck(false), EditorCall::SyntaxCheck(true)]
    );
}

// ==================== Editor mode ====================

#[test]
fn test_update_toolbar_checkable_modes() {
    for mime in MimeType::SYNTAX_CHECKABLE {
        let (mut toolbar, stubs) = decorated(false);
        toolbar.enable_debug_button(false);
        toolbar.update_toolbar(mime.as_str());
        assert!(enabled(&toolbar, ControlId::Debug), "{mime}");
        assert!(stubs.editor.calls().is_empty());
    }
}

#[test]
fn test_update_toolbar_other_modes() {
    for mode in ["text/plain", "text/markdown", "text/x-python", "image/png", ""] {
        let (mut toolbar, stubs) = decorated(false);
        toolbar.update_toolbar(mode);
        assert!(!enabled(&toolbar, ControlId::Debug), "{mode}");
        assert_eq!(stubs.editor.calls(), vec![EditorCall::SyntaxCheck(false)]);
    }
}

#[test]
fn test_update_toolbar_closes_publish() {
    let (mut toolbar, _stubs) = decorated(true);
    toolbar.enable_publish_button(true);
    toolbar.update_toolbar("text/html");
    assert!(!enabled(&toolbar, ControlId::Publish));
}

// ==================== Views ====================

#[test]
fn test_first_view_is_selected() {
    let (mut toolbar, stubs) = decorated(false);

    toolbar.add_view("A");
    assert_eq!(toolbar.current_view(), "A");
    assert_eq!(stubs.editor.view_changes(), vec!["A".to_string()]);
    assert_eq!(toolbar.selector().value(), Some("A"));

    toolbar.add_view("B");
    assert_eq!(toolbar.current_view(), "A");
    assert_eq!(stubs.editor.view_changes(), vec!["A".to_string()]);
    assert_eq!(toolbar.selector().items(), ["A".to_string(), "B".to_string()]);
}

#[test]
fn test_select_view_fires_change() {
    let (mut toolbar, stubs) = decorated(false);
    toolbar.add_view("Blocks");
    toolbar.add_view("JavaScript");

    toolbar.select_view(1).unwrap();
    assert_eq!(toolbar.current_view(), "JavaScript");
    assert_eq!(
        stubs.editor.view_changes(),
        vec!["Blocks".to_string(), "JavaScript".to_string()]
    );
    assert!(matches!(
        toolbar.select_view(7),
        Err(ToolbarError::UnknownView(7))
    ));
}

#[test]
fn test_empty_view_name_is_ignored() {
    let (mut toolbar, stubs) = decorated(false);
    toolbar.editor_change_view("");
    assert_eq!(toolbar.current_view(), "");
    assert!(stubs.editor.calls().is_empty());
}

#[test]
fn test_deferred_view_policy() {
    let stubs = Stubs::default();
    let mut toolbar = ToolbarController::new(Arc::new(false))
        .with_collaborators(stubs.collaborators())
        .with_view_policy(DefaultViewPolicy::Deferred);
    toolbar.decorate(&full_layout(), None);

    assert!(!toolbar.select_default_view());
    toolbar.add_view("A");
    toolbar.add_view("B");
    assert_eq!(toolbar.current_view(), "");
    assert!(stubs.editor.calls().is_empty());

    assert!(toolbar.select_default_view());
    assert_eq!(toolbar.current_view(), "A");
    assert_eq!(toolbar.selector().selected_index(), Some(0));

    assert!(toolbar.select_default_view());
    assert_eq!(stubs.editor.view_changes(), vec!["A".to_string()]);
}

// ==================== Expand ====================

#[test]
fn test_set_expand_round_trip() {
    let (mut toolbar, stubs) = decorated(false);

    toolbar.set_expand(true, FullscreenTarget::Current).unwrap();
    assert!(toolbar.expand_state());
    assert!(!visible(&toolbar, ControlId::Expand));
    assert!(visible(&toolbar, ControlId::ExpandExit));

    toolbar.set_expand(false, FullscreenTarget::Current).unwrap();
    assert!(!toolbar.expand_state());
    assert!(visible(&toolbar, ControlId::Expand));
    assert!(!visible(&toolbar, ControlId::ExpandExit));

    assert_eq!(stubs.layout.calls(), vec![(true, None), (false, None)]);
}

#[test]
fn test_invert_selects_pane_zero() {
    let (mut toolbar, stubs) = decorated(false);
    toolbar
        .set_expand(true, FullscreenTarget::from_invert(true))
        .unwrap();
    assert_eq!(stubs.layout.calls(), vec![(true, Some(0))]);
}

#[test]
fn test_expand_and_collapse_clicks() {
    let (mut toolbar, stubs) = decorated(false);

    toolbar
        .click(ControlId::Expand, &ClickEvent::in_secondary_pane())
        .unwrap();
    toolbar
        .click(ControlId::ExpandExit, &ClickEvent::default())
        .unwrap();

    assert_eq!(stubs.layout.calls(), vec![(true, Some(0)), (false, None)]);
}

#[test]
fn test_toggle_expand() {
    let (mut toolbar, stubs) = decorated(false);
    toolbar.toggle_expand().unwrap();
    toolbar.toggle_expand().unwrap();
    toolbar.toggle_expand().unwrap();
    assert!(toolbar.expand_state());
    assert_eq!(
        stubs.layout.calls(),
        vec![(true, None), (false, None), (true, None)]
    );
}

#[test]
fn test_set_expand_without_layout() {
    let (mut toolbar, _stubs) = decorated(false);
    toolbar.collaborators_mut().layout = None;

    let result = toolbar.set_expand(true, FullscreenTarget::Current);
    assert!(matches!(
        result,
        Err(ToolbarError::MissingCollaborator(Collaborator::Layout))
    ));
    assert!(toolbar.expand_state());
    assert!(visible(&toolbar, ControlId::Expand));
    assert!(!visible(&toolbar, ControlId::ExpandExit));
}

#[test]
fn test_show_expand_button_is_independent() {
    let (mut toolbar, _stubs) = decorated(false);
    toolbar.show_expand_button(false);
    assert!(!visible(&toolbar, ControlId::Expand));
    assert!(!toolbar.expand_state());
}

// ==================== Overflow menu ====================

#[test]
fn test_add_option_without_list() {
    let mut toolbar = ToolbarController::new(Arc::new(false));
    toolbar.decorate(&layout_with(&[ControlId::MenuMore, ControlId::Save]), None);

    toolbar.add_option("Format", || {}, None);
    assert!(toolbar.options().is_empty());
    assert!(!visible(&toolbar, ControlId::MenuMore));
}

#[test]
fn test_add_option_shows_menu() {
    let (mut toolbar, _stubs) = decorated(false);
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();

    toolbar.add_option(
        "Format",
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
        },
        Some("Format the document"),
    );

    assert_eq!(toolbar.options().len(), 1);
    assert_eq!(toolbar.options()[0].tooltip.as_deref(), Some("Format the document"));
    assert!(visible(&toolbar, ControlId::MenuMore));

    toolbar.activate_option(0).unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_add_option_emits_refresh() {
    let (mut toolbar, _stubs) = decorated(false);
    let mut events = toolbar.subscribe();

    toolbar.add_option("Format", || {}, None);

    let drained = events.drain();
    assert!(drained.contains(&ToolbarEvent::OptionAdded("Format".to_string())));
    assert_eq!(drained.last(), Some(&ToolbarEvent::Refreshed));
}

// ==================== Other intents ====================

#[test]
fn test_save_forces_overwrite() {
    let (mut toolbar, stubs) = decorated(false);
    toolbar
        .click(ControlId::Save, &ClickEvent::default())
        .unwrap();
    assert_eq!(*stubs.saver.calls.lock().unwrap(), vec![true]);
}

#[test]
fn test_insert_media_needs_editor() {
    let (mut toolbar, stubs) = decorated(false);
    toolbar.insert_media();
    assert_eq!(stubs.library.shown.load(Ordering::SeqCst), 1);

    toolbar.collaborators_mut().editor = None;
    toolbar.insert_media();
    assert_eq!(stubs.library.shown.load(Ordering::SeqCst), 1);
}

#[test]
fn test_media_button_icon() {
    let (mut toolbar, _stubs) = decorated(false);
    toolbar.update_media_button(false);
    let media = toolbar.control(ControlId::Media).unwrap();
    assert!(media.has_marker(Marker::IconGrey));
    assert!(!media.has_marker(Marker::Icon));

    toolbar.update_media_button(true);
    let media = toolbar.control(ControlId::Media).unwrap();
    assert!(media.has_marker(Marker::Icon));
    assert!(!media.has_marker(Marker::IconGrey));

    toolbar.enable_media_button(false);
    assert!(!enabled(&toolbar, ControlId::Media));
}

#[test]
fn test_publish() {
    let (mut toolbar, stubs) = decorated(true);
    toolbar
        .click(ControlId::Publish, &ClickEvent::default())
        .unwrap();
    assert_eq!(stubs.exporter.exports.load(Ordering::SeqCst), 1);
}

#[test]
fn test_publish_without_exporter_fails() {
    let (mut toolbar, _stubs) = decorated(true);
    toolbar.collaborators_mut().file_exporter = None;

    let result = toolbar.click(ControlId::Publish, &ClickEvent::default());
    assert!(matches!(
        result,
        Err(ToolbarError::MissingCollaborator(Collaborator::FileExporter))
    ));
}

#[test]
fn test_collaborator_swapped_between_calls() {
    let (mut toolbar, stubs) = decorated(false);
    toolbar.collaborators_mut().file_saver = None;
    toolbar.save();
    assert!(stubs.saver.calls.lock().unwrap().is_empty());

    toolbar.collaborators_mut().file_saver = Some(stubs.saver.clone());
    toolbar.save();
    assert_eq!(stubs.saver.calls.lock().unwrap().len(), 1);
}

// ==================== Decoration ====================

#[test]
fn test_double_decoration_double_binds() {
    let (mut toolbar, stubs) = decorated(false);
    toolbar.decorate(&full_layout(), None);

    assert_eq!(toolbar.binding_count(Trigger::Control(ControlId::Save)), 2);
    assert_eq!(toolbar.binding_count(Trigger::ViewSelector), 2);

    toolbar
        .click(ControlId::Save, &ClickEvent::default())
        .unwrap();
    assert_eq!(*stubs.saver.calls.lock().unwrap(), vec![true, true]);
}

#[test]
fn test_dispatch_runs_single_action() {
    let (mut toolbar, stubs) = decorated(false);
    toolbar
        .dispatch(ToolbarAction::Save, &ClickEvent::default())
        .unwrap();
    assert_eq!(stubs.saver.calls.lock().unwrap().len(), 1);
}
