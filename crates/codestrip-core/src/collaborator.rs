//! Contracts for the subsystems the toolbar drives.
//!
//! ## Learning: Trait Objects as Capabilities
//!
//! Each collaborator is a small trait describing exactly the calls the
//! toolbar makes. The controller stores `Option<Arc<dyn Trait>>`, so:
//! - absence is visible in the type
//! - any implementation (real editor, test stub) can be plugged in
//! - swapping an instance at runtime is a plain assignment
//!
//! Methods take `&self`; implementations that track state use interior
//! mutability (`Mutex`, atomics).

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Remaining history steps after an undo or redo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct HistoryCounts {
    pub undo: usize,
    pub redo: usize,
}

impl HistoryCounts {
    pub fn new(undo: usize, redo: usize) -> Self {
        Self { undo, redo }
    }

    pub fn can_undo(&self) -> bool {
        self.undo > 0
    }

    pub fn can_redo(&self) -> bool {
        self.redo > 0
    }
}

/// The code editor surface.
pub trait EditorHandle: Send + Sync {
    /// Reverts one change and reports the remaining history.
    fn undo_change(&self) -> HistoryCounts;

    /// Re-applies one change and reports the remaining history.
    fn redo_change(&self) -> HistoryCounts;

    /// Turns syntax checking on or off.
    fn set_syntax_check(&self, enabled: bool);

    /// Switches the editor to the named view.
    fn change_view(&self, name: &str);
}

/// Persists the current file.
pub trait FileSaver: Send + Sync {
    fn save_file(&self, force: bool);
}

/// Exports the current document.
pub trait FileExporter: Send + Sync {
    fn export_html_to_cloud(&self);
}

/// Media library browser.
pub trait MediaLibrary: Send + Sync {
    fn show_library(&self);
}

/// Window layout manager.
pub trait LayoutManager: Send + Sync {
    /// Enters or leaves fullscreen, optionally for a specific pane index.
    fn set_fullscreen(&self, expand: bool, secondary_index: Option<usize>);
}

/// Source of feature flags.
pub trait FeatureFlags: Send + Sync {
    fn experimental_enabled(&self) -> bool;
}

impl FeatureFlags for bool {
    fn experimental_enabled(&self) -> bool {
        *self
    }
}

/// Which pane a fullscreen request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FullscreenTarget {
    /// Let the layout manager pick
    #[default]
    Current,
    /// An explicit pane index
    Secondary(usize),
}

impl FullscreenTarget {
    /// Maps the legacy "invert" flag onto a target: `true` is pane `0`.
    pub fn from_invert(invert: bool) -> Self {
        if invert {
            FullscreenTarget::Secondary(0)
        } else {
            FullscreenTarget::Current
        }
    }

    /// The index passed to [`LayoutManager::set_fullscreen`].
    pub fn secondary_index(&self) -> Option<usize> {
        match self {
            FullscreenTarget::Current => None,
            FullscreenTarget::Secondary(index) => Some(*index),
        }
    }
}

/// Names of the collaborator slots, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    Editor,
    FileSaver,
    FileExporter,
    Library,
    Layout,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Collaborator::Editor => "editor",
            Collaborator::FileSaver => "fileSaver",
            Collaborator::FileExporter => "fileExporter",
            Collaborator::Library => "library",
            Collaborator::Layout => "layout",
        };
        f.write_str(name)
    }
}

/// The collaborator instances currently available to the toolbar.
///
/// Every slot is optional and can be replaced at any time; the controller
/// reads a slot each time it needs it.
#[derive(Clone, Default)]
pub struct Collaborators {
    pub editor: Option<Arc<dyn EditorHandle>>,
    pub file_saver: Option<Arc<dyn FileSaver>>,
    pub file_exporter: Option<Arc<dyn FileExporter>>,
    pub library: Option<Arc<dyn MediaLibrary>>,
    pub layout: Option<Arc<dyn LayoutManager>>,
}

impl Collaborators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_editor(mut self, editor: Arc<dyn EditorHandle>) -> Self {
        self.editor = Some(editor);
        self
    }

    pub fn with_file_saver(mut self, saver: Arc<dyn FileSaver>) -> Self {
        self.file_saver = Some(saver);
        self
    }

    pub fn with_file_exporter(mut self, exporter: Arc<dyn FileExporter>) -> Self {
        self.file_exporter = Some(exporter);
        self
    }

    pub fn with_library(mut self, library: Arc<dyn MediaLibrary>) -> Self {
        self.library = Some(library);
        self
    }

    pub fn with_layout(mut self, layout: Arc<dyn LayoutManager>) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Whether the named slot is filled.
    pub fn is_present(&self, which: Collaborator) -> bool {
        match which {
            Collaborator::Editor => self.editor.is_some(),
            Collaborator::FileSaver => self.file_saver.is_some(),
            Collaborator::FileExporter => self.file_exporter.is_some(),
            Collaborator::Library => self.library.is_some(),
            Collaborator::Layout => self.layout.is_some(),
        }
    }
}

impl fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collaborators")
            .field("editor", &self.editor.is_some())
            .field("file_saver", &self.file_saver.is_some())
            .field("file_exporter", &self.file_exporter.is_some())
            .field("library", &self.library.is_some())
            .field("layout", &self.layout.is_some())
            .finish()
    }
}
