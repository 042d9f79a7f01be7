//! Error types for command definition validation and indexing.

use thiserror::Error;

use super::CommandKind;

/// Errors returned while constructing or indexing command definitions.
///
/// None of these errors abort a registration cycle: the offending
/// definition is dropped and the error is logged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionError {
    /// A command, group, subcommand, or component prefix name is empty.
    #[error("definition name must not be empty")]
    EmptyName,

    /// A name contains a separator reserved for paths or component ids.
    #[error("name '{name}' must not contain the reserved separator '{separator}'")]
    ReservedSeparator {
        /// The rejected name.
        name: String,
        /// The reserved separator character.
        separator: char,
    },

    /// The definition lacks the payload sent to the platform.
    #[error("command '{0}' is missing its command payload")]
    MissingPayload(String),

    /// A subcommand group holds no subcommands.
    #[error("subcommand group '{command}/{group}' has no subcommands")]
    EmptySubcommandGroup {
        /// Parent command name.
        command: String,
        /// Group name.
        group: String,
    },

    /// A leaf command declares no executable handler.
    #[error("command '{0}' has no subcommands and no handler")]
    MissingHandler(String),

    /// A context command declares a kind other than `message` or `user`.
    #[error("invalid target kind '{kind}' for context command '{name}'")]
    InvalidTargetKind {
        /// Context command name.
        name: String,
        /// The rejected kind.
        kind: CommandKind,
    },
}
