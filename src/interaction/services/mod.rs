//! Routing, authorization, and dispatch of inbound interactions.

mod dispatch;
mod gate;
mod router;

pub use dispatch::{DEFAULT_ACK_BUDGET, DispatchOutcome, InteractionDispatcher};
pub use gate::{AuthorizationDenial, GatePolicy, authorize};
pub use router::{InteractionRouter, Route};
