//! Command paths and component identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::DefinitionError;

/// Separator joining the segments of a [`CommandPath`].
pub const PATH_SEPARATOR: char = '/';

/// Separator joining the segments of a [`ComponentId`].
pub const COMPONENT_ID_SEPARATOR: char = ':';

/// Validates a definition name and returns its trimmed form.
///
/// # Errors
///
/// Returns [`DefinitionError::EmptyName`] for blank input and
/// [`DefinitionError::ReservedSeparator`] when the name contains `separator`.
pub fn validate_name(value: impl Into<String>, separator: char) -> Result<String, DefinitionError> {
    let trimmed = value.into().trim().to_owned();
    if trimmed.is_empty() {
        return Err(DefinitionError::EmptyName);
    }
    if trimmed.contains(separator) {
        return Err(DefinitionError::ReservedSeparator {
            name: trimmed,
            separator,
        });
    }
    Ok(trimmed)
}

/// Full path of an executable slash command: `command[/group]/subcommand`.
///
/// A path holds one to three segments. Two definitions resolving to the same
/// path collide in the index; the later one wins.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandPath(String);

impl CommandPath {
    /// Path of a top-level leaf command.
    #[must_use]
    pub fn command(command: &str) -> Self {
        Self(command.to_owned())
    }

    /// Path of a subcommand directly under `command`.
    #[must_use]
    pub fn subcommand(command: &str, subcommand: &str) -> Self {
        Self(format!("{command}{PATH_SEPARATOR}{subcommand}"))
    }

    /// Path of a subcommand nested in a group.
    #[must_use]
    pub fn grouped(command: &str, group: &str, subcommand: &str) -> Self {
        Self(format!(
            "{command}{PATH_SEPARATOR}{group}{PATH_SEPARATOR}{subcommand}"
        ))
    }

    /// Builds a path from the segments carried by an inbound event.
    #[must_use]
    pub fn from_parts(command: &str, group: Option<&str>, subcommand: Option<&str>) -> Self {
        match (group, subcommand) {
            (Some(group_name), Some(sub)) => Self::grouped(command, group_name, sub),
            (None, Some(sub)) => Self::subcommand(command, sub),
            (Some(group_name), None) => Self::subcommand(command, group_name),
            (None, None) => Self::command(command),
        }
    }

    /// Returns the joined path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the path segments in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(PATH_SEPARATOR)
    }
}

impl fmt::Display for CommandPath {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "/{}", self.0)
    }
}

/// Custom id of a UI component, encoding a routable prefix.
///
/// `page:next:42` routes to the handler registered for prefix `page`; the
/// remaining segments are arguments for that handler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    /// Builds a custom id from a prefix and arguments.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError`] when the prefix is empty or contains the
    /// component id separator.
    pub fn build<I, A>(prefix: &str, args: I) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item = A>,
        A: fmt::Display,
    {
        let mut id = validate_name(prefix, COMPONENT_ID_SEPARATOR)?;
        for arg in args {
            id.push(COMPONENT_ID_SEPARATOR);
            id.push_str(&arg.to_string());
        }
        Ok(Self(id))
    }

    /// Wraps a custom id received from the platform.
    #[must_use]
    pub fn parse(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the routing prefix (the first segment).
    #[must_use]
    pub fn prefix(&self) -> &str {
        self.0
            .split(COMPONENT_ID_SEPARATOR)
            .next()
            .unwrap_or_default()
    }

    /// Returns the arguments following the prefix.
    pub fn args(&self) -> impl Iterator<Item = &str> {
        self.0.split(COMPONENT_ID_SEPARATOR).skip(1)
    }

    /// Returns the raw custom id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
