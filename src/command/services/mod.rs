//! Application services for command indexing and registration.

mod index;
mod reconcile;
mod registrar;

pub use index::{IndexedCommand, IndexedContextCommand, IndexedRegistry, ScopedCommand};
pub use reconcile::{DesiredSet, ReconcilePlan, desired_for_scope, reconcile};
pub use registrar::{
    CommandRegistrar, RegistrarError, RegistrationConfig, RegistrationReport, ScopeOutcome,
    ScopeSummary,
};
