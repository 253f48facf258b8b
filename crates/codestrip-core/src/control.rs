//! Control handles and the layout they are resolved from.
//!
//! ## Learning: Option as a Nullable Handle
//!
//! A toolbar layout may omit any control. Instead of a null reference we
//! store `Option<&Control>` lookups: every mutator goes through
//! `if let Some(control) = ...`, so an absent control is a no-op by
//! construction rather than by convention.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

/// Suffix appended to the caller-supplied prefix for every control id.
pub const TOOLBAR_PREFIX: &str = "toolbar-";

/// Every control the toolbar knows how to manage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlId {
    Save,
    Undo,
    Redo,
    Debug,
    Expand,
    ExpandExit,
    Media,
    MenuMore,
    MenuMoreList,
    Publish,
}

impl ControlId {
    /// All controls, in toolbar order.
    pub const ALL: [ControlId; 10] = [
        ControlId::Save,
        ControlId::Undo,
        ControlId::Redo,
        ControlId::Debug,
        ControlId::Expand,
        ControlId::ExpandExit,
        ControlId::Media,
        ControlId::MenuMore,
        ControlId::MenuMoreList,
        ControlId::Publish,
    ];

    /// Returns the fixed id suffix for this control.
    pub fn suffix(&self) -> &'static str {
        match self {
            ControlId::Save => "save",
            ControlId::Undo => "undo",
            ControlId::Redo => "redo",
            ControlId::Debug => "debug",
            ControlId::Expand => "expand",
            ControlId::ExpandExit => "expand-exit",
            ControlId::Media => "media",
            ControlId::MenuMore => "menu-more",
            ControlId::MenuMoreList => "menu-more-list",
            ControlId::Publish => "publish",
        }
    }

    /// Returns a human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ControlId::Save => "Save",
            ControlId::Undo => "Undo",
            ControlId::Redo => "Redo",
            ControlId::Debug => "Debug",
            ControlId::Expand => "Expand",
            ControlId::ExpandExit => "Exit expand",
            ControlId::Media => "Media",
            ControlId::MenuMore => "More",
            ControlId::MenuMoreList => "More options",
            ControlId::Publish => "Publish",
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Element id prefix, fixed once the toolbar is decorated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlPrefix(String);

impl ControlPrefix {
    /// Composes `prefix + "toolbar-"`.
    pub fn new(prefix: Option<&str>) -> Self {
        Self(format!("{}{}", prefix.unwrap_or(""), TOOLBAR_PREFIX))
    }

    /// Returns the full element id of a control.
    pub fn element_id(&self, id: ControlId) -> String {
        format!("{}{}", self.0, id.suffix())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ControlPrefix {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Visual markers a control can carry.
///
/// These are the class names the stylesheet keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Marker {
    /// Toggle is switched on
    Active,
    /// Red alert colouring
    AlertColor,
    /// Regular icon colouring
    Icon,
    /// Greyed-out icon colouring
    IconGrey,
}

impl Marker {
    pub fn class_name(&self) -> &'static str {
        match self {
            Marker::Active => "active",
            Marker::AlertColor => "icon_24px_red",
            Marker::Icon => "icon_24px",
            Marker::IconGrey => "icon_24px_grey",
        }
    }
}

/// One resolved toolbar control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Control {
    id: ControlId,
    element_id: String,
    enabled: bool,
    visible: bool,
    markers: BTreeSet<Marker>,
}

impl Control {
    /// Creates an enabled, visible control without markers.
    pub fn new(id: ControlId, element_id: impl Into<String>) -> Self {
        Self {
            id,
            element_id: element_id.into(),
            enabled: true,
            visible: true,
            markers: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> ControlId {
        self.id
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn has_marker(&self, marker: Marker) -> bool {
        self.markers.contains(&marker)
    }

    /// Adds or removes a marker.
    pub fn set_marker(&mut self, marker: Marker, on: bool) {
        if on {
            self.markers.insert(marker);
        } else {
            self.markers.remove(&marker);
        }
    }

    pub fn markers(&self) -> impl Iterator<Item = Marker> + '_ {
        self.markers.iter().copied()
    }
}

/// The set of controls resolved from a layout.
#[derive(Debug, Clone, Default)]
pub struct ControlStrip {
    controls: HashMap<ControlId, Control>,
}

impl ControlStrip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a control against the layout.
    ///
    /// A control that is already resolved keeps its current state, the same
    /// way looking up an element twice yields the same element. Returns
    /// whether the control is present.
    pub fn resolve(&mut self, id: ControlId, prefix: &ControlPrefix, layout: &ToolbarLayout) -> bool {
        let element_id = prefix.element_id(id);
        if !layout.contains(&element_id) {
            self.controls.remove(&id);
            return false;
        }
        self.controls
            .entry(id)
            .or_insert_with(|| Control::new(id, element_id));
        true
    }

    pub fn get(&self, id: ControlId) -> Option<&Control> {
        self.controls.get(&id)
    }

    pub fn get_mut(&mut self, id: ControlId) -> Option<&mut Control> {
        self.controls.get_mut(&id)
    }

    pub fn contains(&self, id: ControlId) -> bool {
        self.controls.contains_key(&id)
    }

    /// Iterates resolved controls in toolbar order.
    pub fn iter(&self) -> impl Iterator<Item = &Control> {
        ControlId::ALL.iter().filter_map(|id| self.controls.get(id))
    }
}

/// Describes the host surface a toolbar is decorated onto.
///
/// `elements` holds the ids of every element present; a control whose id is
/// missing resolves to nothing.
#[derive(Debug, Clone, Default)]
pub struct ToolbarLayout {
    /// Root node of the toolbar
    pub root: String,
    /// Node hosting the editor surface
    pub editor_host: String,
    /// Node the view selector is rendered into
    pub selector_host: String,
    elements: HashSet<String>,
}

impl ToolbarLayout {
    pub fn new(
        root: impl Into<String>,
        editor_host: impl Into<String>,
        selector_host: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            editor_host: editor_host.into(),
            selector_host: selector_host.into(),
            elements: HashSet::new(),
        }
    }

    /// Adds an element id to the layout.
    pub fn with_element(mut self, element_id: impl Into<String>) -> Self {
        self.elements.insert(element_id.into());
        self
    }

    /// Adds the element for each given control under `prefix`.
    pub fn with_controls(mut self, prefix: &ControlPrefix, ids: &[ControlId]) -> Self {
        for id in ids {
            self.elements.insert(prefix.element_id(*id));
        }
        self
    }

    pub fn contains(&self, element_id: &str) -> bool {
        self.elements.contains(element_id)
    }
}
