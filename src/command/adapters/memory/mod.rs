//! In-memory adapter implementations for testing.
//!
//! These adapters stand in for the platform and for definition discovery so
//! the registrar can be exercised without network access.

mod source;
mod transport;

pub use source::StaticDefinitionSource;
pub use transport::{InMemoryCommandTransport, TransportCalls};
