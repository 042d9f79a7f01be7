//! Declared commands and their registration on the platform.
//!
//! Discovered definitions are indexed into an [`services::IndexedRegistry`],
//! then reconciled against what each scope already has registered so that
//! only changed commands cost a remote call. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Indexing and registration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
