//! # Codestrip Core
//!
//! Toolbar controller logic and the contracts it expects from the rest of
//! the editor.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    ToolbarController                      │
//! │  ┌──────────────┐ ┌──────────────┐ ┌───────────────────┐ │
//! │  │ ControlStrip │ │ ViewSelector │ │   OverflowMenu    │ │
//! │  └──────────────┘ └──────────────┘ └───────────────────┘ │
//! │         │ bindings (ToolbarAction)                        │
//! │  ┌──────┴─────────────────────────────────────────────┐  │
//! │  │                  Collaborators                      │  │
//! │  │ editor │ file_saver │ file_exporter │ library │ layout│ │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The controller owns no rendering code. A host adapter forwards clicks
//! through [`ToolbarController::click`] and reads control state back when it
//! draws.

pub mod collaborator;
pub mod config;
pub mod control;
pub mod event;
pub mod mime;
pub mod toolbar;
pub mod view;

pub use collaborator::{
    Collaborator, Collaborators, EditorHandle, FeatureFlags, FileExporter, FileSaver,
    FullscreenTarget, HistoryCounts, LayoutManager, MediaLibrary,
};
pub use config::{ConfigError, DefaultViewPolicy, ToolbarConfig};
pub use control::{Control, ControlId, ControlPrefix, ControlStrip, Marker, ToolbarLayout};
pub use event::{EventBus, EventHandler, ToolbarEvent};
pub use mime::MimeType;
pub use toolbar::{
    ClickEvent, MenuEntry, OptionAction, OptionSnapshot, ToolbarAction, ToolbarController,
    ToolbarSnapshot, Trigger,
};
pub use view::ViewSelector;

/// Result type for toolbar operations
pub type ToolbarResult<T> = Result<T, ToolbarError>;

/// Errors that can occur in toolbar operations
#[derive(Debug, thiserror::Error)]
pub enum ToolbarError {
    #[error("Required collaborator is not available: {0}")]
    MissingCollaborator(Collaborator),

    #[error("No overflow option at index {0}")]
    UnknownOption(usize),

    #[error("No view at index {0}")]
    UnknownView(usize),

    #[error("No view named '{0}'")]
    ViewNotFound(String),
}
