//! Stub handlers and definition builders shared by command tests.

use async_trait::async_trait;
use std::sync::Arc;

use crate::command::domain::{
    CommandDefinition, CommandKind, CommandPayload, ContextCommandDefinition, Definition,
    SubcommandDefinition,
};
use crate::interaction::domain::{
    AutocompleteEvent, ContextCommandEvent, HandlerResult, SlashCommandEvent,
};
use crate::interaction::ports::{
    AutocompleteHandler, ComponentHandler, ContextCommandHandler, SlashCommandHandler,
};

pub(super) struct NoopSlash;

#[async_trait]
impl SlashCommandHandler for NoopSlash {
    async fn execute(&self, _event: &SlashCommandEvent) -> HandlerResult {
        Ok(())
    }
}

pub(super) struct NoopContext;

#[async_trait]
impl ContextCommandHandler for NoopContext {
    async fn execute(&self, _event: &ContextCommandEvent) -> HandlerResult {
        Ok(())
    }
}

pub(super) struct NoopAutocomplete;

#[async_trait]
impl AutocompleteHandler for NoopAutocomplete {
    async fn complete(&self, _event: &AutocompleteEvent) -> HandlerResult {
        Ok(())
    }
}

pub(super) struct NoopComponents;

impl ComponentHandler for NoopComponents {}

pub(super) fn slash_handler() -> Arc<dyn SlashCommandHandler> {
    Arc::new(NoopSlash)
}

pub(super) fn leaf(name: &str, description: &str) -> CommandDefinition {
    CommandDefinition::new(name)
        .expect("valid command name")
        .with_payload(CommandPayload::new(description))
        .with_handler(slash_handler())
}

pub(super) fn subcommand(name: &str, description: &str) -> SubcommandDefinition {
    SubcommandDefinition::new(name, CommandPayload::new(description), slash_handler())
        .expect("valid subcommand name")
}

pub(super) fn context(name: &str, kind: CommandKind) -> Definition {
    ContextCommandDefinition::new(name, kind, Arc::new(NoopContext))
        .expect("valid context command name")
        .into()
}
