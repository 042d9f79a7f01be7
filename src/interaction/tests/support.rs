//! Handlers and events shared by interaction tests.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::command::domain::{
    CommandDefinition, CommandPath, CommandPayload, ComponentId, GuildId, Permission, RoleId,
    UserId,
};
use crate::interaction::domain::{
    ComponentEvent, ComponentKind, GuildContext, HandlerError, HandlerResult, InteractionContext,
    InteractionEvent, MemberContext, SlashCommandEvent,
};
use crate::interaction::ports::{ComponentHandler, SlashCommandHandler};

pub(super) const INVOKER: UserId = UserId::new(1);
pub(super) const GUILD: GuildId = GuildId::new(10);
pub(super) const MODERATOR: RoleId = RoleId::new(100);

/// What a test handler does when invoked.
#[derive(Clone, Copy)]
pub(super) enum Behaviour {
    Succeed,
    Fail,
    Panic,
    Sleep(Duration),
}

/// Slash and component handler counting its invocations.
pub(super) struct CountingHandler {
    behaviour: Behaviour,
    calls: AtomicUsize,
    running: AtomicUsize,
    peak: AtomicUsize,
}

impl CountingHandler {
    pub(super) fn new(behaviour: Behaviour) -> Arc<Self> {
        Arc::new(Self {
            behaviour,
            calls: AtomicUsize::new(0),
            running: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        })
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(super) fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    async fn run(&self) -> HandlerResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behaviour {
            Behaviour::Succeed => Ok(()),
            Behaviour::Fail => Err(HandlerError::message("database unavailable")),
            Behaviour::Panic => panic!("handler exploded"),
            Behaviour::Sleep(duration) => {
                let now = self.running.fetch_add(1, Ordering::SeqCst) + 1;
                self.peak.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(duration).await;
                self.running.fetch_sub(1, Ordering::SeqCst);
                Ok(())
            }
        }
    }
}

#[async_trait]
impl SlashCommandHandler for CountingHandler {
    async fn execute(&self, _event: &SlashCommandEvent) -> HandlerResult {
        self.run().await
    }
}

#[async_trait]
impl ComponentHandler for CountingHandler {
    async fn handle_button(&self, _event: &ComponentEvent) -> HandlerResult {
        self.run().await
    }

    async fn handle_modal(&self, _event: &ComponentEvent) -> HandlerResult {
        self.run().await
    }
}

pub(super) fn command(name: &str, handler: &Arc<CountingHandler>) -> CommandDefinition {
    let executable = Arc::clone(handler);
    CommandDefinition::new(name)
        .expect("valid command name")
        .with_payload(CommandPayload::new("Test command"))
        .with_handler(executable)
}

pub(super) fn member() -> MemberContext {
    MemberContext::new()
        .with_roles([RoleId::new(200)])
        .with_permissions([Permission::new("send_messages")])
}

pub(super) fn in_guild(member: MemberContext) -> InteractionContext {
    InteractionContext::in_guild(INVOKER, GuildContext::new(GUILD).with_member(member))
}

pub(super) fn slash_event(name: &str, context: InteractionContext) -> InteractionEvent {
    SlashCommandEvent::new(context, CommandPath::command(name), json!({})).into()
}

pub(super) fn component_event(kind: ComponentKind, custom_id: &str) -> InteractionEvent {
    ComponentEvent::new(
        InteractionContext::direct(INVOKER),
        kind,
        ComponentId::parse(custom_id),
    )
    .into()
}
