use iced::Task;
use iced::widget::text_editor;
use std::path::PathBuf;
use std::sync::Arc;

use codestrip_core::{Collaborators, MimeType, ToolbarConfig, ToolbarController, ToolbarLayout};

use crate::demo::{DemoEditor, DemoExporter, DemoLayout, DemoLibrary, DemoSaver, mime_for_path};
use crate::toolbar::ToolbarAdapter;

pub mod messages;
pub mod update;
pub mod view;

pub use messages::*;

/// Views offered when the config names none.
const DEFAULT_VIEWS: [&str; 2] = ["Editor", "Preview"];

const WELCOME_TEXT: &str = r#"<!-- Welcome to Codestrip! -->
<!-- Edit this document, then try the toolbar: -->
<!--   Undo / Redo follow the edit history -->
<!--   Debug toggles the syntax check -->
<!--   Expand hides the side panel -->
<!--   Switch the mode in the status bar to see Debug follow it -->
<p>Hello</p>
"#;

#[derive(Debug, Default)]
pub struct Flags {
    pub file: Option<PathBuf>,
    pub config: ToolbarConfig,
    /// Host the toolbar in the split pane's second container
    pub secondary_pane: bool,
}

pub struct App {
    pub toolbar: ToolbarController,
    pub adapter: ToolbarAdapter,
    pub content: text_editor::Content,
    pub mode: MimeType,
    pub file_name: String,
    pub status_message: String,
    pub editor: Arc<DemoEditor>,
    pub saver: Arc<DemoSaver>,
    pub exporter: Arc<DemoExporter>,
    pub library: Arc<DemoLibrary>,
    pub layout: Arc<DemoLayout>,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let text = match &flags.file {
            Some(path) => match std::fs::read_to_string(path) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", path.display(), e);
                    String::new()
                }
            },
            None => WELCOME_TEXT.to_string(),
        };
        let mode = flags
            .file
            .as_deref()
            .map(mime_for_path)
            .unwrap_or(MimeType::Html);
        let file_name = flags
            .file
            .as_deref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "untitled.html".to_string());

        let editor = Arc::new(DemoEditor::new(text.clone()));
        let saver = Arc::new(DemoSaver::new(editor.clone(), flags.file.clone()));
        let exporter = Arc::new(DemoExporter::default());
        let library = Arc::new(DemoLibrary::default());
        let layout = Arc::new(DemoLayout::default());

        let collaborators = Collaborators::new()
            .with_editor(editor.clone())
            .with_file_saver(saver.clone())
            .with_file_exporter(exporter.clone())
            .with_library(library.clone())
            .with_layout(layout.clone());

        let toolbar = build_toolbar(&flags.config, collaborators, editor.clone(), mode);

        let app = Self {
            toolbar,
            adapter: ToolbarAdapter::new(flags.secondary_pane),
            content: text_editor::Content::with_text(&text),
            mode,
            file_name,
            status_message: "Ready".to_string(),
            editor,
            saver,
            exporter,
            library,
            layout,
        };

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        let view = self.toolbar.current_view();
        if view.is_empty() {
            format!("{} - Codestrip", self.file_name)
        } else {
            format!("{} [{}] - Codestrip", self.file_name, view)
        }
    }
}

/// Decorates a toolbar for the demo window and registers its views.
pub fn build_toolbar(
    config: &ToolbarConfig,
    collaborators: Collaborators,
    editor: Arc<DemoEditor>,
    mode: MimeType,
) -> ToolbarController {
    let mut toolbar = ToolbarController::from_config(config).with_collaborators(collaborators);

    let layout = ToolbarLayout::new("toolbar", "editor", "select-view")
        .with_controls(&config.control_prefix(), &config.controls);
    toolbar.decorate(&layout, config.prefix.as_deref());

    if config.views.is_empty() {
        for view in DEFAULT_VIEWS {
            toolbar.add_view(view);
        }
    } else {
        for view in &config.views {
            toolbar.add_view(view);
        }
    }
    toolbar.select_default_view();

    toolbar.update_toolbar(mode.as_str());
    toolbar.update_media_button(false);
    toolbar.add_option(
        "Clear history",
        move || editor.clear_history(),
        Some("Forget every undo and redo step"),
    );

    toolbar
}

pub fn run(flags: Flags) -> iced::Result {
    iced::application(App::title, App::update, App::view)
        .window_size(iced::Size::new(1024.0, 720.0))
        .theme(|_| iced::Theme::Dark)
        .antialiasing(true)
        .run_with(move || App::new(flags))
}
