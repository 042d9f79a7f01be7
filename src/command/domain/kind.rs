//! Platform command kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a registered application command, as encoded by the platform.
///
/// Names are unique per kind within a scope, so the kind is part of every
/// identity comparison between desired and remote commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum CommandKind {
    /// Slash (chat input) command.
    ChatInput,
    /// Context-menu command targeting a user.
    User,
    /// Context-menu command targeting a message.
    Message,
    /// A kind this crate does not recognise.
    Unknown(u8),
}

impl CommandKind {
    /// Returns the platform wire value.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::ChatInput => 1,
            Self::User => 2,
            Self::Message => 3,
            Self::Unknown(code) => code,
        }
    }

    /// Returns whether this kind is a context-menu target.
    #[must_use]
    pub const fn is_context(self) -> bool {
        matches!(self, Self::User | Self::Message)
    }
}

impl From<u8> for CommandKind {
    fn from(code: u8) -> Self {
        match code {
            1 => Self::ChatInput,
            2 => Self::User,
            3 => Self::Message,
            other => Self::Unknown(other),
        }
    }
}

impl From<CommandKind> for u8 {
    fn from(kind: CommandKind) -> Self {
        kind.code()
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChatInput => formatter.write_str("chat_input"),
            Self::User => formatter.write_str("user"),
            Self::Message => formatter.write_str("message"),
            Self::Unknown(code) => write!(formatter, "unknown({code})"),
        }
    }
}
