//! Inbound interaction handling.
//!
//! Every event delivered by the platform is submitted to the dispatcher,
//! resolved against the published registry, checked by the authorization
//! gate, and handed to its handler on a task of its own. Blocked and failed
//! interactions are reported to the registered listeners.
//!
//! - Event and notification types in [`domain`]
//! - Handler and listener contracts in [`ports`]
//! - Listener implementations in [`adapters`]
//! - Router, gate, and dispatcher in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
