//! Listener port for authorization and exception notifications.

use std::sync::Arc;
use tracing::warn;

use crate::interaction::domain::InteractionNotification;

/// Receives notifications about blocked and failed interactions.
pub trait InteractionListener: Send + Sync {
    /// Called once per notification, on the worker that processed the
    /// interaction.
    fn on_notification(&self, notification: &InteractionNotification);
}

/// The registered listener instances.
///
/// Notifications are delivered to these exact instances, in registration
/// order.
#[derive(Clone, Default)]
pub struct ListenerSet {
    listeners: Vec<Arc<dyn InteractionListener>>,
}

impl ListenerSet {
    /// Creates a set from registered listeners.
    #[must_use]
    pub fn new(listeners: impl IntoIterator<Item = Arc<dyn InteractionListener>>) -> Self {
        Self {
            listeners: listeners.into_iter().collect(),
        }
    }

    /// Registers another listener.
    pub fn register(&mut self, listener: Arc<dyn InteractionListener>) {
        self.listeners.push(listener);
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns whether no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Fans a notification out to every listener.
    pub fn notify(&self, notification: &InteractionNotification) {
        if self.listeners.is_empty() {
            warn!(
                target: "switchyard::listener",
                notification = notification.name(),
                "notification fired, but no listener is registered"
            );
            return;
        }
        for listener in &self.listeners {
            listener.on_notification(notification);
        }
    }
}

impl std::fmt::Debug for ListenerSet {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ListenerSet")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
