//! Display state change notifications.
//!
//! The dashboard publishes every change to its [`DisplayState`](crate::DisplayState)
//! as a [`DisplayEvent`], so a display surface can bind to it without
//! depending on any UI framework.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::state::{DisplayField, Phase};

/// A single change to the display state.
///
/// All events are serializable for logging and IPC.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new event types
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum DisplayEvent {
    /// The loading flag changed.
    LoadingChanged { loading: bool },
    /// The run moved to a new phase.
    PhaseChanged { phase: Phase },
    /// A display field received its value.
    FieldChanged { field: DisplayField, value: String },
    /// The shared error message was overwritten.
    ErrorChanged { message: String },
}

/// Sender for display events.
pub type EventSender = broadcast::Sender<DisplayEvent>;

/// Receiver for display events.
pub type EventReceiver = broadcast::Receiver<DisplayEvent>;

/// Event dispatcher for sending events to multiple receivers.
#[derive(Debug, Clone)]
pub struct EventDispatcher {
    sender: EventSender,
}

impl EventDispatcher {
    /// Create a new event dispatcher.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events.
    pub fn subscribe(&self) -> EventReceiver {
        self.sender.subscribe()
    }

    /// Send an event.
    pub fn send(&self, event: DisplayEvent) {
        // No receivers is fine
        let _ = self.sender.send(event);
    }

    /// Get the number of active receivers.
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new(64)
    }
}
