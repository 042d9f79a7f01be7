//! Remote command snapshots.

use serde::{Deserialize, Serialize};

use super::{CommandData, CommandId, CommandKind, CommandPayload};

/// The platform's current record of a registered command.
///
/// Snapshots are only ever compared against desired [`CommandData`]; they
/// are never mutated locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteCommandSnapshot {
    id: CommandId,
    name: String,
    kind: CommandKind,
    payload: CommandPayload,
}

impl RemoteCommandSnapshot {
    /// Creates a snapshot.
    #[must_use]
    pub fn new(
        id: CommandId,
        name: impl Into<String>,
        kind: CommandKind,
        payload: CommandPayload,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            payload,
        }
    }

    /// Returns the remote identity.
    #[must_use]
    pub const fn id(&self) -> CommandId {
        self.id
    }

    /// Returns the command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the command kind.
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        self.kind
    }

    /// Returns the registered payload.
    #[must_use]
    pub const fn payload(&self) -> &CommandPayload {
        &self.payload
    }

    /// Returns whether the snapshot and `desired` share name and kind.
    #[must_use]
    pub fn same_identity(&self, desired: &CommandData) -> bool {
        self.name == desired.name() && self.kind == desired.kind()
    }

    /// Returns whether the remote command already equals `desired`.
    #[must_use]
    pub fn matches(&self, desired: &CommandData) -> bool {
        self.same_identity(desired) && self.payload.semantically_eq(desired.payload())
    }
}
