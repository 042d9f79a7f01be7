//! Listener that reports notifications through `tracing`.

use tracing::{info, warn};

use crate::interaction::{domain::InteractionNotification, ports::InteractionListener};

/// Logs every notification on the `switchyard::listener` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingListener;

impl InteractionListener for TracingListener {
    fn on_notification(&self, notification: &InteractionNotification) {
        let user = notification.context().user();
        match notification {
            InteractionNotification::Exception { kind, error, .. } => warn!(
                target: "switchyard::listener",
                %user,
                ?kind,
                %error,
                "interaction failed"
            ),
            InteractionNotification::InsufficientPermissions { .. }
            | InteractionNotification::InvalidUser { .. }
            | InteractionNotification::InvalidRole { .. } => info!(
                target: "switchyard::listener",
                %user,
                notification = notification.name(),
                "interaction blocked"
            ),
        }
    }
}
