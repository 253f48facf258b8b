use iced::Task;
use iced::widget::text_editor;

use super::{App, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toolbar(message) => {
                if let Err(e) = self.adapter.update(&mut self.toolbar, message) {
                    tracing::warn!("Toolbar action failed: {}", e);
                    self.status_message = e.to_string();
                }
                self.sync_from_editor();
            }

            Message::EditorAction(action) => {
                let before = action.is_edit().then(|| self.content.text());
                self.content.perform(action);
                if let Some(before) = before {
                    let counts = self.editor.record_change(before, self.content.text());
                    self.toolbar.enable_undo_button(counts.can_undo());
                    self.toolbar.enable_redo_button(counts.can_redo());
                }
            }

            Message::ModeSelected(mode) => {
                self.mode = mode;
                self.toolbar.update_toolbar(mode.as_str());
                self.status_message = format!("Mode: {}", mode);
            }

            Message::CloseLibrary => self.library.close(),
        }

        Task::none()
    }

    /// Mirrors the editor's text and history after a toolbar action.
    fn sync_from_editor(&mut self) {
        let text = self.editor.text();
        if text != self.content.text() {
            self.content = text_editor::Content::with_text(&text);
        }
        let counts = self.editor.history();
        self.toolbar.enable_undo_button(counts.can_undo());
        self.toolbar.enable_redo_button(counts.can_redo());
    }
}
