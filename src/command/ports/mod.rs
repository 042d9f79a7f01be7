//! Port contracts for command registration.
//!
//! Ports define the platform and discovery seams the registrar depends on.

pub mod discovery;
pub mod transport;

pub use discovery::DefinitionSource;
pub use transport::{CommandTransport, TransportError, TransportResult};
