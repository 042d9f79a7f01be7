//! Switchyard: command registration and interaction routing for a
//! Discord-like platform.
//!
//! Commands are declared as [`command::domain::Definition`] values, indexed
//! into an immutable registry, and reconciled against what the platform
//! already has registered so that each cycle only writes real changes.
//! Inbound interactions are resolved against the published registry,
//! authorized, and handled on their own task.
//!
//! # Architecture
//!
//! Each bounded context is split hexagonally:
//!
//! - **Domain**: value types and validation
//! - **Ports**: traits for the platform and for handler code
//! - **Adapters**: in-memory and logging implementations of the ports
//! - **Services**: indexing, reconciliation, registration, routing, dispatch
//!
//! # Modules
//!
//! - [`command`]: definitions, registry index, reconciliation, registration
//! - [`interaction`]: inbound events, authorization gate, dispatch
//! - [`hub`]: facade running registration cycles and dispatching events
//! - [`config`]: TOML configuration
//! - [`telemetry`]: tracing subscriber bootstrap

pub mod command;
pub mod config;
pub mod hub;
pub mod interaction;
pub mod telemetry;
