//! Port contracts for interaction handling.

mod handler;
mod listener;

pub use handler::{
    AutocompleteHandler, ComponentHandler, ContextCommandHandler, SlashCommandHandler,
};
pub use listener::{InteractionListener, ListenerSet};
