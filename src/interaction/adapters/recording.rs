//! Listener that keeps every notification for later inspection.

use std::sync::{Arc, Mutex, PoisonError};

use crate::interaction::{domain::InteractionNotification, ports::InteractionListener};

/// Thread-safe listener recording notifications in arrival order.
#[derive(Debug, Clone, Default)]
pub struct RecordingListener {
    received: Arc<Mutex<Vec<InteractionNotification>>>,
}

impl RecordingListener {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything received so far.
    #[must_use]
    pub fn received(&self) -> Vec<InteractionNotification> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the names of received notifications.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(InteractionNotification::name)
            .collect()
    }
}

impl InteractionListener for RecordingListener {
    fn on_notification(&self, notification: &InteractionNotification) {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification.clone());
    }
}
