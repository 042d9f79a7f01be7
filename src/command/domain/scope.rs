//! Registration scopes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::GuildId;

/// Where a definition wants to be registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationScope {
    /// One registration shared platform-wide.
    #[default]
    Global,
    /// One registration per guild, optionally narrowed by a guild filter.
    GuildScoped,
}

/// A concrete registration boundary processed by the registrar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandScope {
    /// The global command set.
    Global,
    /// The command set of a single guild.
    Guild(GuildId),
}

impl CommandScope {
    /// Returns whether a definition registered under `registration` belongs
    /// to this scope.
    #[must_use]
    pub const fn accepts(self, registration: RegistrationScope) -> bool {
        matches!(
            (self, registration),
            (Self::Global, RegistrationScope::Global)
                | (Self::Guild(_), RegistrationScope::GuildScoped)
        )
    }

    /// Returns the guild for guild scopes.
    #[must_use]
    pub const fn guild(self) -> Option<GuildId> {
        match self {
            Self::Global => None,
            Self::Guild(guild) => Some(guild),
        }
    }
}

impl fmt::Display for CommandScope {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => formatter.write_str("global"),
            Self::Guild(guild) => write!(formatter, "guild:{guild}"),
        }
    }
}
