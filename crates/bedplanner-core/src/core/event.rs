//! Event system for planner state changes
//!
//! Provides:
//! - Event types published after each planner mutation
//! - Event dispatcher for publishing events to subscribers
//!
//! Observers never receive state in the event itself beyond a summary; they
//! re-read the planner snapshot so every view renders the same state.

use tokio::sync::broadcast;

/// Planner event types
#[derive(Debug, Clone, PartialEq)]
pub enum PlannerEvent {
    /// The catalog finished loading
    CatalogLoaded {
        /// Number of plant types in the catalog.
        types: usize,
    },
    /// The catalog could not be loaded; placement stays disabled
    CatalogFailed(String),
    /// The selected plant type changed
    SelectionChanged(Option<String>),
    /// The configured diameter changed
    DiameterChanged(u32),
    /// The working set changed (add, delete, clear or replace)
    MarkersChanged {
        /// Number of markers after the change.
        count: usize,
    },
    /// Delete or inspect mode toggled
    ModeChanged {
        /// Delete modifier held.
        delete: bool,
        /// Inspect modifier held.
        inspect: bool,
    },
    /// A non-empty recovery slot was found at startup
    RecoveryAvailable {
        /// Number of markers in the slot.
        markers: usize,
    },
}

impl std::fmt::Display for PlannerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlannerEvent::CatalogLoaded { types } => write!(f, "Catalog loaded: {} types", types),
            PlannerEvent::CatalogFailed(reason) => write!(f, "Catalog failed: {}", reason),
            PlannerEvent::SelectionChanged(Some(name)) => write!(f, "Selected: {}", name),
            PlannerEvent::SelectionChanged(None) => write!(f, "Selection cleared"),
            PlannerEvent::DiameterChanged(d) => write!(f, "Diameter: {}", d),
            PlannerEvent::MarkersChanged { count } => write!(f, "Markers: {}", count),
            PlannerEvent::ModeChanged { delete, inspect } => {
                write!(f, "Mode - delete: {}, inspect: {}", delete, inspect)
            }
            PlannerEvent::RecoveryAvailable { markers } => {
                write!(f, "Recovery available: {} markers", markers)
            }
        }
    }
}

/// Event dispatcher for publishing events to subscribers
#[derive(Clone)]
pub struct EventDispatcher {
    /// Broadcast sender channel for planner events.
    tx: broadcast::Sender<PlannerEvent>,
}

impl EventDispatcher {
    /// Create a new event dispatcher
    ///
    /// # Arguments
    /// * `buffer_size` - Size of the broadcast buffer (default 100)
    pub fn new(buffer_size: usize) -> Self {
        let (tx, _) = broadcast::channel(buffer_size);
        Self { tx }
    }

    /// Create a new event dispatcher with default buffer size
    pub fn default_with_buffer() -> Self {
        Self::new(100)
    }

    /// Subscribe to events
    pub fn subscribe(&self) -> broadcast::Receiver<PlannerEvent> {
        self.tx.subscribe()
    }

    /// Publish an event to all subscribers
    ///
    /// Returns the number of subscribers that received it; having none is
    /// not an error for the planner.
    pub fn publish(&self, event: PlannerEvent) -> usize {
        tracing::trace!("event: {}", event);
        self.tx.send(event).unwrap_or(0)
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::default_with_buffer()
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
