//! Error types raised while routing and running interactions.

use std::sync::Arc;
use thiserror::Error;

use crate::command::domain::{CommandKind, CommandPath};

/// Error returned by a handler body.
#[derive(Debug, Clone, Error)]
pub enum HandlerError {
    /// The handler rejected the interaction with a message.
    #[error("{0}")]
    Message(String),

    /// The handler failed with an underlying error.
    #[error(transparent)]
    Source(Arc<dyn std::error::Error + Send + Sync>),
}

impl HandlerError {
    /// Creates a handler error from a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Wraps an underlying error.
    pub fn other(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Source(Arc::new(err))
    }
}

/// Result type returned by interaction handlers.
pub type HandlerResult = Result<(), HandlerError>;

/// Routing failures for command interactions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoutingError {
    /// No slash command is registered under the path.
    #[error("slash command \"{0}\" is not registered")]
    SlashCommandNotRegistered(CommandPath),

    /// No context command of the kind is registered under the name.
    #[error("{kind} context command \"{name}\" is not registered")]
    ContextCommandNotRegistered {
        /// Context command name.
        name: String,
        /// Requested target kind.
        kind: CommandKind,
    },
}

/// Failure reported to listeners through an exception notification.
#[derive(Debug, Clone, Error)]
pub enum InteractionError {
    /// Routing found no handler for a command.
    #[error(transparent)]
    CommandNotRegistered(#[from] RoutingError),

    /// The handler body returned an error.
    #[error("handler invocation failed: {0}")]
    HandlerInvocationFailure(#[from] HandlerError),

    /// The handler panicked; the panic was contained in its task.
    #[error("handler panicked: {0}")]
    HandlerPanicked(String),
}
