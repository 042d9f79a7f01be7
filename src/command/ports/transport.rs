//! Transport port for reading and writing platform command registrations.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::command::domain::{
    CommandData, CommandId, CommandScope, GuildId, RemoteCommandSnapshot,
};

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Platform command registration contract.
///
/// Every call targets exactly one scope. Implementations must be safe to
/// share between the registrar and any background tasks.
#[async_trait]
pub trait CommandTransport: Send + Sync {
    /// Lists the guilds the application currently belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the guild list cannot be read.
    async fn known_guilds(&self) -> TransportResult<Vec<GuildId>>;

    /// Fetches the commands currently registered in `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the platform rejects the request.
    async fn fetch_commands(
        &self,
        scope: CommandScope,
    ) -> TransportResult<Vec<RemoteCommandSnapshot>>;

    /// Creates or overwrites `commands` in `scope` as a single batch.
    ///
    /// A command whose name and kind match an existing registration replaces
    /// it in place.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the batch is rejected.
    async fn upsert_commands(
        &self,
        scope: CommandScope,
        commands: &[CommandData],
    ) -> TransportResult<Vec<RemoteCommandSnapshot>>;

    /// Deletes one registered command from `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the deletion is rejected.
    async fn delete_command(&self, scope: CommandScope, id: CommandId) -> TransportResult<()>;
}

/// Errors returned by transport implementations.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The platform refused the operation for the scope.
    #[error("platform rejected request for {scope}: {reason}")]
    Rejected {
        /// Scope the request targeted.
        scope: CommandScope,
        /// Reason reported by the platform.
        reason: String,
    },

    /// The request failed before the platform answered.
    #[error("transport request failed: {0}")]
    Request(Arc<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Creates a rejection for `scope`.
    #[must_use]
    pub fn rejected(scope: CommandScope, reason: impl Into<String>) -> Self {
        Self::Rejected {
            scope,
            reason: reason.into(),
        }
    }

    /// Wraps a request-level error.
    #[must_use]
    pub fn request(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Request(Arc::new(err))
    }
}
