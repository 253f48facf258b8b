use iced::widget::text_editor;

use codestrip_core::MimeType;

use crate::toolbar::ToolbarMessage;

#[derive(Debug, Clone)]
pub enum Message {
    // Toolbar
    Toolbar(ToolbarMessage),

    // Editor
    EditorAction(text_editor::Action),
    ModeSelected(MimeType),

    // Media library
    CloseLibrary,
}
