//! Domain model for declared commands and their platform registrations.
//!
//! Definitions describe what the application wants registered, command data
//! is what gets sent for a given scope, and remote snapshots are what the
//! platform reports back. None of these types perform I/O.

mod definition;
mod error;
mod ids;
mod kind;
mod path;
mod payload;
mod requirements;
mod scope;
mod snapshot;

pub use definition::{
    CommandDefinition, ComponentBinding, ContextCommandDefinition, Definition, GuildFilter,
    HandlerCapabilities, SubcommandDefinition, SubcommandGroupDefinition,
};
pub use error::DefinitionError;
pub use ids::{CommandId, GuildId, RoleId, UserId};
pub use kind::CommandKind;
pub use path::{COMPONENT_ID_SEPARATOR, CommandPath, ComponentId, PATH_SEPARATOR, validate_name};
pub use payload::{CommandData, CommandPayload};
pub use requirements::{AuthorizationRequirements, Permission};
pub use scope::{CommandScope, RegistrationScope};
pub use snapshot::RemoteCommandSnapshot;
