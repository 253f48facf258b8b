//! Recording collaborators shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use codestrip_core::{
    Collaborators, ControlId, ControlPrefix, EditorHandle, FileExporter, FileSaver,
    HistoryCounts, LayoutManager, MediaLibrary, ToolbarController, ToolbarLayout,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCall {
    Undo,
    Redo,
    SyntaxCheck(bool),
    ChangeView(String),
}

/// Editor that replies with a preset history and records every call.
#[derive(Default)]
pub struct StubEditor {
    history: Mutex<HistoryCounts>,
    calls: Mutex<Vec<EditorCall>>,
}

impl StubEditor {
    pub fn set_history(&self, undo: usize, redo: usize) {
        *self.history.lock().unwrap() = HistoryCounts::new(undo, redo);
    }

    pub fn calls(&self) -> Vec<EditorCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn view_changes(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                EditorCall::ChangeView(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: EditorCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl EditorHandle for StubEditor {
    fn undo_change(&self) -> HistoryCounts {
        self.record(EditorCall::Undo);
        *self.history.lock().unwrap()
    }

    fn redo_change(&self) -> HistoryCounts {
        self.record(EditorCall::Redo);
        *self.history.lock().unwrap()
    }

    fn set_syntax_check(&self, enabled: bool) {
        self.record(EditorCall::SyntaxCheck(enabled));
    }

    fn change_view(&self, name: &str) {
        self.record(EditorCall::ChangeView(name.to_string()));
    }
}

#[derive(Default)]
pub struct RecordingSaver {
    pub calls: Mutex<Vec<bool>>,
}

impl FileSaver for RecordingSaver {
    fn save_file(&self, force: bool) {
        self.calls.lock().unwrap().push(force);
    }
}

#[derive(Default)]
pub struct CountingExporter {
    pub exports: AtomicUsize,
}

impl FileExporter for CountingExporter {
    fn export_html_to_cloud(&self) {
        self.exports.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct CountingLibrary {
    pub shown: AtomicUsize,
}

impl MediaLibrary for CountingLibrary {
    fn show_library(&self) {
        self.shown.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct RecordingLayout {
    pub calls: Mutex<Vec<(bool, Option<usize>)>>,
}

impl RecordingLayout {
    pub fn calls(&self) -> Vec<(bool, Option<usize>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl LayoutManager for RecordingLayout {
    fn set_fullscreen(&self, expand: bool, secondary_index: Option<usize>) {
        self.calls.lock().unwrap().push((expand, secondary_index));
    }
}

/// One of each collaborator, kept so tests can inspect them.
#[derive(Default)]
pub struct Stubs {
    pub editor: Arc<StubEditor>,
    pub saver: Arc<RecordingSaver>,
    pub exporter: Arc<CountingExporter>,
    pub library: Arc<CountingLibrary>,
    pub layout: Arc<RecordingLayout>,
}

impl Stubs {
    pub fn collaborators(&self) -> Collaborators {
        Collaborators::new()
            .with_editor(self.editor.clone())
            .with_file_saver(self.saver.clone())
            .with_file_exporter(self.exporter.clone())
            .with_library(self.library.clone())
            .with_layout(self.layout.clone())
    }
}

/// Layout containing every control under the default prefix.
pub fn full_layout() -> ToolbarLayout {
    layout_with(&ControlId::ALL)
}

pub fn layout_with(ids: &[ControlId]) -> ToolbarLayout {
    ToolbarLayout::new("toolbar", "editor", "select-view")
        .with_controls(&ControlPrefix::default(), ids)
}

/// A toolbar decorated onto the full layout with every collaborator present.
pub fn decorated(experimental: bool) -> (ToolbarController, Stubs) {
    let stubs = Stubs::default();
    let mut toolbar =
        ToolbarController::new(Arc::new(experimental)).with_collaborators(stubs.collaborators());
    toolbar.decorate(&full_layout(), None);
    (toolbar, stubs)
}
