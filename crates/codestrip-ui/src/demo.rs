//! In-memory collaborators for the demo window.
//!
//! The editor history keeps whole-text snapshots, the same approach the
//! tab undo stacks use: cheap to write, fine for small documents.

use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use codestrip_core::{
    EditorHandle, FileExporter, FileSaver, HistoryCounts, LayoutManager, MediaLibrary, MimeType,
};

/// Maximum number of undo snapshots kept.
const UNDO_LIMIT: usize = 100;

#[derive(Debug, Default)]
struct History {
    current: String,
    undo_stack: Vec<String>,
    redo_stack: Vec<String>,
}

impl History {
    fn counts(&self) -> HistoryCounts {
        HistoryCounts::new(self.undo_stack.len(), self.redo_stack.len())
    }
}

/// Editor collaborator backed by text snapshots.
#[derive(Debug, Default)]
pub struct DemoEditor {
    history: Mutex<History>,
    syntax_check: AtomicBool,
    view: Mutex<String>,
}

impl DemoEditor {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            history: Mutex::new(History {
                current: text.into(),
                ..History::default()
            }),
            ..Self::default()
        }
    }

    /// Records an edit that replaced `before` with `after`.
    pub fn record_change(&self, before: String, after: String) -> HistoryCounts {
        let mut history = self.history.lock();
        if before != after {
            history.undo_stack.push(before);
            if history.undo_stack.len() > UNDO_LIMIT {
                history.undo_stack.remove(0);
            }
            history.redo_stack.clear();
        }
        history.current = after;
        history.counts()
    }

    /// Drops all undo and redo snapshots.
    pub fn clear_history(&self) {
        let mut history = self.history.lock();
        history.undo_stack.clear();
        history.redo_stack.clear();
        tracing::info!("Editor history cleared");
    }

    pub fn text(&self) -> String {
        self.history.lock().current.clone()
    }

    pub fn history(&self) -> HistoryCounts {
        self.history.lock().counts()
    }

    pub fn syntax_check_enabled(&self) -> bool {
        self.syntax_check.load(Ordering::Relaxed)
    }

    pub fn view(&self) -> String {
        self.view.lock().clone()
    }
}

impl EditorHandle for DemoEditor {
    fn undo_change(&self) -> HistoryCounts {
        let mut history = self.history.lock();
        if let Some(previous) = history.undo_stack.pop() {
            let current = std::mem::replace(&mut history.current, previous);
            history.redo_stack.push(current);
        }
        history.counts()
    }

    fn redo_change(&self) -> HistoryCounts {
        let mut history = self.history.lock();
        if let Some(next) = history.redo_stack.pop() {
            let current = std::mem::replace(&mut history.current, next);
            history.undo_stack.push(current);
        }
        history.counts()
    }

    fn set_syntax_check(&self, enabled: bool) {
        tracing::debug!("Syntax check {}", if enabled { "enabled" } else { "disabled" });
        self.syntax_check.store(enabled, Ordering::Relaxed);
    }

    fn change_view(&self, name: &str) {
        tracing::debug!("Editor view is now '{}'", name);
        *self.view.lock() = name.to_string();
    }
}

/// Writes the editor text to a file, if one is set.
pub struct DemoSaver {
    editor: Arc<DemoEditor>,
    path: Mutex<Option<PathBuf>>,
    saves: AtomicUsize,
}

impl DemoSaver {
    pub fn new(editor: Arc<DemoEditor>, path: Option<PathBuf>) -> Self {
        Self {
            editor,
            path: Mutex::new(path),
            saves: AtomicUsize::new(0),
        }
    }

    pub fn path(&self) -> Option<PathBuf> {
        self.path.lock().clone()
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::Relaxed)
    }
}

impl FileSaver for DemoSaver {
    fn save_file(&self, force: bool) {
        let Some(path) = self.path() else {
            tracing::warn!("No file to save to");
            return;
        };
        if path.exists() && !force {
            tracing::warn!("Refusing to overwrite {}", path.display());
            return;
        }
        match std::fs::write(&path, self.editor.text()) {
            Ok(()) => {
                self.saves.fetch_add(1, Ordering::Relaxed);
                tracing::info!("Saved {}", path.display());
            }
            Err(e) => tracing::error!("Failed to save {}: {}", path.display(), e),
        }
    }
}

/// Counts export requests.
#[derive(Debug, Default)]
pub struct DemoExporter {
    exports: AtomicUsize,
}

impl DemoExporter {
    pub fn exports(&self) -> usize {
        self.exports.load(Ordering::Relaxed)
    }
}

impl FileExporter for DemoExporter {
    fn export_html_to_cloud(&self) {
        let n = self.exports.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!("Export #{} queued", n);
    }
}

/// Tracks whether the media library is open.
#[derive(Debug, Default)]
pub struct DemoLibrary {
    open: AtomicBool,
}

impl DemoLibrary {
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Relaxed)
    }

    pub fn close(&self) {
        self.open.store(false, Ordering::Relaxed);
    }
}

impl MediaLibrary for DemoLibrary {
    fn show_library(&self) {
        tracing::debug!("Media library opened");
        self.open.store(true, Ordering::Relaxed);
    }
}

/// Remembers the last fullscreen request.
#[derive(Debug, Default)]
pub struct DemoLayout {
    fullscreen: Mutex<Option<(bool, Option<usize>)>>,
}

impl DemoLayout {
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.lock().is_some_and(|(expand, _)| expand)
    }

    pub fn last_request(&self) -> Option<(bool, Option<usize>)> {
        *self.fullscreen.lock()
    }
}

impl LayoutManager for DemoLayout {
    fn set_fullscreen(&self, expand: bool, secondary_index: Option<usize>) {
        tracing::debug!("Fullscreen {} (pane {:?})", expand, secondary_index);
        *self.fullscreen.lock() = Some((expand, secondary_index));
    }
}

/// Guesses the editor mode from a file extension.
pub fn mime_for_path(path: &Path) -> MimeType {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("coffee") => MimeType::CoffeeScript,
        Some("css") => MimeType::Css,
        Some("html" | "htm") => MimeType::Html,
        Some("js" | "mjs") => MimeType::JavaScript,
        Some("json") => MimeType::Json,
        Some("md" | "markdown") => MimeType::Markdown,
        Some("py") => MimeType::Python,
        Some("xml") => MimeType::Xml,
        _ => MimeType::PlainText,
    }
}
