//! The toolbar controller.
//!
//! ## Learning: Commands Instead of Bound Closures
//!
//! Decorating the toolbar does not store closures per control. It records
//! `(Trigger, ToolbarAction)` pairs, and a click looks its actions up and
//! runs them through [`ToolbarController::dispatch`]. Actions are plain
//! values, so the controller stays the single owner of its state and no
//! closure needs a `&mut` back into it.
//!
//! Bindings are appended, never deduplicated: decorating twice makes every
//! click run its action twice.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::collaborator::{Collaborator, Collaborators, FeatureFlags, FullscreenTarget};
use crate::config::{DefaultViewPolicy, ToolbarConfig};
use crate::control::{Control, ControlId, ControlPrefix, ControlStrip, Marker, ToolbarLayout};
use crate::event::{EventBus, EventHandler, ToolbarEvent};
use crate::mime::MimeType;
use crate::view::{VIEW_SELECTOR_TOOLTIP, ViewSelector};
use crate::{ToolbarError, ToolbarResult};

/// Controls bound during decoration, with the action each one triggers.
const CONTROL_BINDINGS: [(ControlId, ToolbarAction); 7] = [
    (ControlId::Debug, ToolbarAction::SyntaxCheck),
    (ControlId::Expand, ToolbarAction::Expand),
    (ControlId::ExpandExit, ToolbarAction::Collapse),
    (ControlId::Media, ToolbarAction::InsertMedia),
    (ControlId::Redo, ToolbarAction::Redo),
    (ControlId::Save, ToolbarAction::Save),
    (ControlId::Undo, ToolbarAction::Undo),
];

/// User intents the toolbar can carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarAction {
    Save,
    Undo,
    Redo,
    SyntaxCheck,
    Expand,
    Collapse,
    InsertMedia,
    Publish,
    /// Switch to the view currently picked in the selector
    ChangeView,
}

/// What an installed binding listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// A click on a control
    Control(ControlId),
    /// A selection change on the view selector
    ViewSelector,
}

#[derive(Debug, Clone, Copy)]
struct Binding {
    trigger: Trigger,
    action: ToolbarAction,
}

/// Context of a click, as reported by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickEvent {
    /// The clicked control sits inside the split pane's second container
    pub in_secondary_pane: bool,
}

impl ClickEvent {
    pub fn in_secondary_pane() -> Self {
        Self {
            in_secondary_pane: true,
        }
    }
}

/// Callback run when an overflow entry is activated.
pub type OptionAction = Box<dyn Fn() + Send + Sync>;

/// One entry in the overflow ("more") menu.
pub struct MenuEntry {
    pub name: String,
    pub tooltip: Option<String>,
    action: OptionAction,
}

impl MenuEntry {
    /// Runs the entry's callback.
    pub fn activate(&self) {
        (self.action)();
    }
}

impl fmt::Debug for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuEntry")
            .field("name", &self.name)
            .field("tooltip", &self.tooltip)
            .finish_non_exhaustive()
    }
}

/// Serializable view of the toolbar's current state.
#[derive(Debug, Clone, Serialize)]
pub struct ToolbarSnapshot {
    pub prefix: String,
    pub current_view: String,
    pub expand_state: bool,
    pub views: Vec<String>,
    pub selected_view: Option<String>,
    pub options: Vec<OptionSnapshot>,
    pub controls: Vec<Control>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionSnapshot {
    pub name: String,
    pub tooltip: Option<String>,
}

impl ToolbarSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Keeps toolbar controls consistent with editor state.
///
/// ## Lifecycle
///
/// Construct once, fill in collaborators, then [`decorate`](Self::decorate)
/// once. Before decoration no control is resolved and every control
/// mutator is a no-op.
pub struct ToolbarController {
    prefix: ControlPrefix,
    controls: ControlStrip,
    bindings: Vec<Binding>,
    selector: ViewSelector,
    options: Vec<MenuEntry>,
    collaborators: Collaborators,
    flags: Arc<dyn FeatureFlags>,
    view_policy: DefaultViewPolicy,
    current_view: String,
    expand_state: bool,
    decorations: usize,
    events: EventBus,
}

impl ToolbarController {
    /// Creates an undecorated controller with no collaborators.
    pub fn new(flags: Arc<dyn FeatureFlags>) -> Self {
        Self {
            prefix: ControlPrefix::default(),
            controls: ControlStrip::new(),
            bindings: Vec::new(),
            selector: ViewSelector::new(),
            options: Vec::new(),
            collaborators: Collaborators::new(),
            flags,
            view_policy: DefaultViewPolicy::default(),
            current_view: String::new(),
            expand_state: false,
            decorations: 0,
            events: EventBus::new(),
        }
    }

    /// Creates a controller whose flags and view policy come from config.
    pub fn from_config(config: &ToolbarConfig) -> Self {
        let mut toolbar = Self::new(Arc::new(config.clone()));
        toolbar.view_policy = config.default_view_policy;
        toolbar
    }

    pub fn with_collaborators(mut self, collaborators: Collaborators) -> Self {
        self.collaborators = collaborators;
        self
    }

    pub fn with_view_policy(mut self, policy: DefaultViewPolicy) -> Self {
        self.view_policy = policy;
        self
    }

    pub fn collaborators(&self) -> &Collaborators {
        &self.collaborators
    }

    /// Collaborator slots may be filled or cleared at any time.
    pub fn collaborators_mut(&mut self) -> &mut Collaborators {
        &mut self.collaborators
    }

    // ==================== Decoration ====================

    /// Resolves controls against `layout` and installs bindings.
    pub fn decorate(&mut self, layout: &ToolbarLayout, prefix: Option<&str>) {
        if self.decorations > 0 {
            tracing::warn!(
                "Toolbar decorated {} times, handlers are bound again",
                self.decorations + 1
            );
        }
        self.decorations += 1;
        self.prefix = ControlPrefix::new(prefix);

        self.selector.set_tooltip(VIEW_SELECTOR_TOOLTIP);
        self.selector.render(layout.selector_host.clone());

        for (id, _) in CONTROL_BINDINGS {
            self.controls.resolve(id, &self.prefix, layout);
        }
        self.controls.resolve(ControlId::MenuMore, &self.prefix, layout);
        self.controls.resolve(ControlId::MenuMoreList, &self.prefix, layout);

        self.enable_undo_button(false);
        self.enable_redo_button(false);
        self.set_visible(ControlId::ExpandExit, false);
        self.set_visible(ControlId::MenuMore, false);

        if self.flags.experimental_enabled() {
            self.controls.resolve(ControlId::Publish, &self.prefix, layout);
            self.bind(Trigger::Control(ControlId::Publish), ToolbarAction::Publish);
        }

        for (id, action) in CONTROL_BINDINGS {
            self.bind(Trigger::Control(id), action);
        }
        self.bind(Trigger::ViewSelector, ToolbarAction::ChangeView);

        tracing::info!(
            "Toolbar decorated on '{}' with prefix '{}'",
            layout.root,
            self.prefix.as_str()
        );
        self.events.emit(ToolbarEvent::Decorated);
    }

    fn bind(&mut self, trigger: Trigger, action: ToolbarAction) {
        if let Trigger::Control(id) = trigger {
            if !self.controls.contains(id) {
                return;
            }
        }
        self.bindings.push(Binding { trigger, action });
    }

    /// Number of bindings installed for a trigger.
    pub fn binding_count(&self, trigger: Trigger) -> usize {
        self.bindings.iter().filter(|b| b.trigger == trigger).count()
    }

    // ==================== Event entry points ====================

    /// Handles a click on a control.
    ///
    /// Disabled or hidden controls do not receive clicks.
    pub fn click(&mut self, id: ControlId, event: &ClickEvent) -> ToolbarResult<()> {
        match self.controls.get(id) {
            Some(control) if control.is_enabled() && control.is_visible() => {}
            _ => return Ok(()),
        }
        for action in self.actions_for(Trigger::Control(id)) {
            self.dispatch(action, event)?;
        }
        Ok(())
    }

    /// Picks a view in the selector and fires the selection-change handler.
    pub fn select_view(&mut self, index: usize) -> ToolbarResult<()> {
        if !self.selector.set_selected_index(index) {
            return Err(ToolbarError::UnknownView(index));
        }
        for action in self.actions_for(Trigger::ViewSelector) {
            self.dispatch(action, &ClickEvent::default())?;
        }
        Ok(())
    }

    fn actions_for(&self, trigger: Trigger) -> Vec<ToolbarAction> {
        self.bindings
            .iter()
            .filter(|b| b.trigger == trigger)
            .map(|b| b.action)
            .collect()
    }

    /// Runs a single action.
    pub fn dispatch(&mut self, action: ToolbarAction, event: &ClickEvent) -> ToolbarResult<()> {
        tracing::trace!("Toolbar action {:?}", action);
        match action {
            ToolbarAction::Save => self.save(),
            ToolbarAction::Undo => self.undo(),
            ToolbarAction::Redo => self.redo(),
            ToolbarAction::SyntaxCheck => self.set_syntax_check(),
            ToolbarAction::Expand => return self.expand(event),
            ToolbarAction::Collapse => return self.collapse(event),
            ToolbarAction::InsertMedia => self.insert_media(),
            ToolbarAction::Publish => return self.publish(),
            ToolbarAction::ChangeView => {
                let name = self.selector.value().unwrap_or_default().to_string();
                self.editor_change_view(&name);
            }
        }
        Ok(())
    }

    // ==================== Intents ====================

    /// Saves the currently open file, overwriting.
    pub fn save(&self) {
        if let Some(saver) = &self.collaborators.file_saver {
            tracing::debug!("Saving current file");
            saver.save_file(true);
        }
    }

    /// Undoes one editor change.
    pub fn undo(&mut self) {
        if let Some(editor) = self.collaborators.editor.clone() {
            let history = editor.undo_change();
            tracing::debug!("Undo, history now {:?}", history);
            self.enable_undo_button(history.can_undo());
            self.enable_redo_button(history.can_redo());
        }
    }

    /// Redoes one editor change.
    pub fn redo(&mut self) {
        if let Some(editor) = self.collaborators.editor.clone() {
            let history = editor.redo_change();
            tracing::debug!("Redo, history now {:?}", history);
            self.enable_undo_button(history.can_undo());
            self.enable_redo_button(history.can_redo());
        }
    }

    /// Flips syntax checking, using the debug control's marker as the truth.
    pub fn set_syntax_check(&mut self) {
        let Some(editor) = self.collaborators.editor.clone() else {
            return;
        };
        let active = self
            .controls
            .get(ControlId::Debug)
            .is_some_and(|control| control.has_marker(Marker::Active));
        if let Some(debug) = self.controls.get_mut(ControlId::Debug) {
            debug.set_marker(Marker::Active, !active);
            debug.set_marker(Marker::AlertColor, !active);
            self.events.emit(ToolbarEvent::ControlChanged(ControlId::Debug));
        }
        tracing::debug!("Syntax check {}", if active { "off" } else { "on" });
        editor.set_syntax_check(!active);
    }

    /// Switches the editor to a view. Empty names are ignored.
    pub fn editor_change_view(&mut self, name: &str) {
        let Some(editor) = self.collaborators.editor.clone() else {
            return;
        };
        if name.is_empty() {
            return;
        }
        self.current_view = name.to_string();
        tracing::debug!("Changing editor view to '{}'", name);
        editor.change_view(name);
        self.events.emit(ToolbarEvent::ViewChanged(name.to_string()));
    }

    /// Opens the media library. Needs an editor to insert into.
    pub fn insert_media(&self) {
        if let (Some(_), Some(library)) = (&self.collaborators.editor, &self.collaborators.library)
        {
            tracing::debug!("Showing media library");
            library.show_library();
        }
    }

    /// Exports the document to cloud storage.
    ///
    /// Unlike every other intent this does not skip silently when its
    /// collaborator is missing: the publish control is only bound under the
    /// experimental flag, where an exporter is expected to exist.
    pub fn publish(&self) -> ToolbarResult<()> {
        let Some(exporter) = &self.collaborators.file_exporter else {
            tracing::error!("Publish requested without a file exporter");
            return Err(ToolbarError::MissingCollaborator(Collaborator::FileExporter));
        };
        tracing::debug!("Publishing current document");
        exporter.export_html_to_cloud();
        Ok(())
    }

    /// Expands the editor, targeting the secondary pane when clicked there.
    pub fn expand(&mut self, event: &ClickEvent) -> ToolbarResult<()> {
        self.set_expand(true, FullscreenTarget::from_invert(event.in_secondary_pane))
    }

    /// Collapses the editor, targeting the secondary pane when clicked there.
    pub fn collapse(&mut self, event: &ClickEvent) -> ToolbarResult<()> {
        self.set_expand(false, FullscreenTarget::from_invert(event.in_secondary_pane))
    }

    pub fn toggle_expand(&mut self) -> ToolbarResult<()> {
        self.set_expand(!self.expand_state, FullscreenTarget::Current)
    }

    /// Enters or leaves fullscreen.
    ///
    /// The expand state is recorded even when no layout manager is
    /// available; control visibility is only updated once the layout
    /// manager has been told.
    pub fn set_expand(&mut self, expand: bool, target: FullscreenTarget) -> ToolbarResult<()> {
        self.expand_state = expand;
        self.events.emit(ToolbarEvent::ExpandChanged(expand));

        let Some(layout) = self.collaborators.layout.clone() else {
            tracing::error!("Cannot change fullscreen state without a layout manager");
            return Err(ToolbarError::MissingCollaborator(Collaborator::Layout));
        };
        tracing::info!(
            "{} editor ({:?})",
            if expand { "Expanding" } else { "Collapsing" },
            target
        );
        layout.set_fullscreen(expand, target.secondary_index());
        self.set_visible(ControlId::Expand, !expand);
        self.set_visible(ControlId::ExpandExit, expand);
        Ok(())
    }

    // ==================== State sync ====================

    /// Appends an overflow menu entry, if the toolbar has an overflow list.
    pub fn add_option(
        &mut self,
        name: impl Into<String>,
        action: impl Fn() + Send + Sync + 'static,
        tooltip: Option<&str>,
    ) {
        if !self.controls.contains(ControlId::MenuMoreList) {
            return;
        }
        let name = name.into();
        self.options.push(MenuEntry {
            name: name.clone(),
            tooltip: tooltip.map(str::to_string),
            action: Box::new(action),
        });
        self.set_visible(ControlId::MenuMore, true);
        self.events.emit(ToolbarEvent::OptionAdded(name));
        self.events.emit(ToolbarEvent::Refreshed);
    }

    /// Runs the overflow entry at `index`.
    pub fn activate_option(&self, index: usize) -> ToolbarResult<()> {
        let entry = self
            .options
            .get(index)
            .ok_or(ToolbarError::UnknownOption(index))?;
        tracing::debug!("Activating option '{}'", entry.name);
        entry.activate();
        Ok(())
    }

    pub fn enable_publish_button(&mut self, enable: bool) {
        self.set_enabled(ControlId::Publish, enable);
    }

    pub fn enable_debug_button(&mut self, enable: bool) {
        self.set_enabled(ControlId::Debug, enable);
    }

    pub fn enable_undo_button(&mut self, enable: bool) {
        self.set_enabled(ControlId::Undo, enable);
    }

    pub fn enable_redo_button(&mut self, enable: bool) {
        self.set_enabled(ControlId::Redo, enable);
    }

    pub fn enable_media_button(&mut self, enable: bool) {
        self.set_enabled(ControlId::Media, enable);
    }

    /// Greys the media icon out when there are no files to insert.
    pub fn update_media_button(&mut self, has_files: bool) {
        if let Some(media) = self.controls.get_mut(ControlId::Media) {
            media.set_marker(Marker::Icon, has_files);
            media.set_marker(Marker::IconGrey, !has_files);
            self.events.emit(ToolbarEvent::ControlChanged(ControlId::Media));
        }
    }

    /// Adjusts controls to the editor mode (a MIME type string).
    pub fn update_toolbar(&mut self, editor_mode: &str) {
        if MimeType::mode_is_syntax_checkable(editor_mode) {
            self.enable_debug_button(true);
        } else {
            if let Some(editor) = &self.collaborators.editor {
                editor.set_syntax_check(false);
            }
            self.enable_debug_button(false);
        }
        if self.flags.experimental_enabled() {
            self.enable_publish_button(false);
        }
    }

    /// Adds a view to the selector.
    ///
    /// Under [`DefaultViewPolicy::FirstAdded`] the view is also selected
    /// while no view has been chosen yet.
    pub fn add_view(&mut self, name: &str) {
        let index = self.selector.add_item(name);
        if self.view_policy == DefaultViewPolicy::FirstAdded && self.current_view.is_empty() {
            self.editor_change_view(name);
            self.selector.set_selected_index(index);
        }
    }

    /// Selects the first registered view if none has been chosen.
    ///
    /// Returns whether a view is active afterwards.
    pub fn select_default_view(&mut self) -> bool {
        if !self.current_view.is_empty() {
            return true;
        }
        let Some(first) = self.selector.items().first().cloned() else {
            return false;
        };
        self.editor_change_view(&first);
        self.selector.set_selected_index(0);
        !self.current_view.is_empty()
    }

    pub fn show_expand_button(&mut self, visible: bool) {
        self.set_visible(ControlId::Expand, visible);
    }

    fn set_enabled(&mut self, id: ControlId, enabled: bool) {
        if let Some(control) = self.controls.get_mut(id) {
            control.set_enabled(enabled);
            self.events.emit(ToolbarEvent::ControlChanged(id));
        }
    }

    fn set_visible(&mut self, id: ControlId, visible: bool) {
        if let Some(control) = self.controls.get_mut(id) {
            control.set_visible(visible);
            self.events.emit(ToolbarEvent::ControlChanged(id));
        }
    }

    // ==================== Accessors ====================

    pub fn current_view(&self) -> &str {
        &self.current_view
    }

    pub fn expand_state(&self) -> bool {
        self.expand_state
    }

    pub fn prefix(&self) -> &ControlPrefix {
        &self.prefix
    }

    pub fn control(&self, id: ControlId) -> Option<&Control> {
        self.controls.get(id)
    }

    pub fn controls(&self) -> &ControlStrip {
        &self.controls
    }

    pub fn selector(&self) -> &ViewSelector {
        &self.selector
    }

    pub fn options(&self) -> &[MenuEntry] {
        &self.options
    }

    pub fn is_decorated(&self) -> bool {
        self.decorations > 0
    }

    /// Subscribes to toolbar events.
    pub fn subscribe(&self) -> EventHandler {
        EventHandler::new(self.events.subscribe())
    }

    /// Captures the current state.
    pub fn snapshot(&self) -> ToolbarSnapshot {
        ToolbarSnapshot {
            prefix: self.prefix.as_str().to_string(),
            current_view: self.current_view.clone(),
            expand_state: self.expand_state,
            views: self.selector.items().to_vec(),
            selected_view: self.selector.value().map(str::to_string),
            options: self
                .options
                .iter()
                .map(|entry| OptionSnapshot {
                    name: entry.name.clone(),
                    tooltip: entry.tooltip.clone(),
                })
                .collect(),
            controls: self.controls.iter().cloned().collect(),
        }
    }
}

impl fmt::Debug for ToolbarController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolbarController")
            .field("prefix", &self.prefix)
            .field("current_view", &self.current_view)
            .field("expand_state", &self.expand_state)
            .field("collaborators", &self.collaborators)
            .finish_non_exhaustive()
    }
}
