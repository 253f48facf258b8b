//! Selectable list of editor views.

/// Tooltip shown on the view selector.
pub const VIEW_SELECTOR_TOOLTIP: &str = "Change view";

/// Drop-down of editor views.
#[derive(Debug, Clone, Default)]
pub struct ViewSelector {
    items: Vec<String>,
    selected: Option<usize>,
    tooltip: Option<String>,
    host: Option<String>,
}

impl ViewSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_tooltip(&mut self, tooltip: impl Into<String>) {
        self.tooltip = Some(tooltip.into());
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// Attaches the selector to a host node.
    pub fn render(&mut self, host: impl Into<String>) {
        self.host = Some(host.into());
    }

    /// The host node, if rendered.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Appends an entry and returns its index.
    pub fn add_item(&mut self, name: impl Into<String>) -> usize {
        self.items.push(name.into());
        self.items.len() - 1
    }

    /// Marks an entry selected. Out of range indices are ignored.
    pub fn set_selected_index(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The label of the selected entry.
    pub fn value(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.items.get(index))
            .map(String::as_str)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
