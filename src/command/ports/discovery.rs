//! Discovery port yielding the locally declared definitions.

use crate::command::domain::Definition;

/// Supplies the definitions for a registration cycle.
///
/// Discovery runs once per cycle, before any registration request is sent.
/// The returned definitions are not modified afterwards.
pub trait DefinitionSource: Send + Sync {
    /// Returns every declared definition.
    fn discover(&self) -> Vec<Definition>;
}
