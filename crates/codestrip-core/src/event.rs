//! Notifications emitted by the toolbar.
//!
//! ## Learning: Broadcast Instead of Callbacks
//!
//! Hosts that need to redraw when the toolbar changes subscribe to a
//! `tokio::sync::broadcast` channel. Events are plain values, so the
//! controller never holds a reference back into its host.

use crate::control::ControlId;
use tokio::sync::broadcast;

/// Events emitted as toolbar state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarEvent {
    /// Controls were resolved and bound
    Decorated,
    /// A control's enabled, visible or marker state changed
    ControlChanged(ControlId),
    /// The editor was switched to a view
    ViewChanged(String),
    /// Expand state changed
    ExpandChanged(bool),
    /// An overflow menu entry was added
    OptionAdded(String),
    /// Host should redraw dynamic widgets
    Refreshed,
}

/// Event bus for broadcasting toolbar events.
pub struct EventBus {
    sender: broadcast::Sender<ToolbarEvent>,
}

impl EventBus {
    /// Creates a new event bus.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(64);
        Self { sender }
    }

    /// Emits an event to all subscribers.
    pub fn emit(&self, event: ToolbarEvent) {
        // No subscribers is fine
        let _ = self.sender.send(event);
    }

    /// Subscribes to future events.
    pub fn subscribe(&self) -> broadcast::Receiver<ToolbarEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

/// Receives toolbar events, skipping over lag.
pub struct EventHandler {
    receiver: broadcast::Receiver<ToolbarEvent>,
}

impl EventHandler {
    pub fn new(receiver: broadcast::Receiver<ToolbarEvent>) -> Self {
        Self { receiver }
    }

    /// Waits for the next event.
    pub async fn next(&mut self) -> Option<ToolbarEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!("Toolbar event handler lagged, missed {} events", n);
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Drains every event already queued, without waiting.
    pub fn drain(&mut self) -> Vec<ToolbarEvent> {
        let mut events = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(event) => events.push(event),
                Err(broadcast::error::TryRecvError::Lagged(n)) => {
                    tracing::warn!("Toolbar event handler lagged, missed {} events", n);
                }
                Err(_) => return events,
            }
        }
    }
}
