//! Domain model for inbound interactions.
//!
//! Events carry the invocation context the authorization gate evaluates;
//! notifications describe what listeners are told when an interaction is
//! blocked or fails.

mod context;
mod error;
mod event;
mod notification;

pub use context::{GuildContext, InteractionContext, MemberContext};
pub use error::{HandlerError, HandlerResult, InteractionError, RoutingError};
pub use event::{
    AutocompleteEvent, ComponentEvent, ComponentKind, ContextCommandEvent, ExceptionKind,
    InteractionEvent, SlashCommandEvent,
};
pub use notification::InteractionNotification;
