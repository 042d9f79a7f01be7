//! Shared fixtures for in-memory hub integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::fixture;
use switchyard::{
    command::{
        adapters::memory::{InMemoryCommandTransport, StaticDefinitionSource},
        domain::{
            AuthorizationRequirements, CommandDefinition, CommandPayload, ComponentBinding,
            Definition, GuildId, Permission, SubcommandDefinition, SubcommandGroupDefinition,
            UserId,
        },
    },
    config::InteractionConfig,
    hub::InteractionHub,
    interaction::{
        adapters::RecordingListener,
        domain::{
            ComponentEvent, GuildContext, HandlerResult, InteractionContext, MemberContext,
            SlashCommandEvent,
        },
        ports::{ComponentHandler, InteractionListener, ListenerSet, SlashCommandHandler},
    },
};

/// Guild known to the in-memory transport.
pub const GUILD: GuildId = GuildId::new(42);

/// User invoking every test interaction.
pub const INVOKER: UserId = UserId::new(7);

/// Hub type used by the integration tests.
pub type TestHub = InteractionHub<InMemoryCommandTransport, DefaultClock>;

/// Slash and component handler counting its invocations.
#[derive(Debug, Default)]
pub struct CountingHandler {
    calls: AtomicUsize,
}

impl CountingHandler {
    /// Returns how often the handler ran.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SlashCommandHandler for CountingHandler {
    async fn execute(&self, _event: &SlashCommandEvent) -> HandlerResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl ComponentHandler for CountingHandler {
    async fn handle_button(&self, _event: &ComponentEvent) -> HandlerResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Provides a transport that knows one guild.
#[fixture]
pub fn transport() -> Arc<InMemoryCommandTransport> {
    Arc::new(InMemoryCommandTransport::with_guilds([GUILD]))
}

/// Provides a handler shared by every definition.
#[fixture]
pub fn handler() -> Arc<CountingHandler> {
    Arc::new(CountingHandler::default())
}

/// Builds a global `ping`, a guild-scoped `mod warn add` requiring
/// `KICK_MEMBERS`, and a standalone `page` button handler.
#[must_use]
pub fn definitions(handler: &Arc<CountingHandler>) -> Vec<Definition> {
    let ping_handler = Arc::clone(handler);
    let warn_handler = Arc::clone(handler);
    let page_handler = Arc::clone(handler);

    let add = SubcommandDefinition::new("add", CommandPayload::new("Add a warning"), warn_handler)
        .expect("valid subcommand")
        .with_requirements(
            AuthorizationRequirements::none()
                .require_permissions([Permission::new("kick_members")]),
        );
    let warn = SubcommandGroupDefinition::new("warn", "Warnings")
        .expect("valid group")
        .with_subcommand(add);

    vec![
        CommandDefinition::new("ping")
            .expect("valid command")
            .with_payload(CommandPayload::new("Replies with pong"))
            .with_handler(ping_handler)
            .into(),
        CommandDefinition::new("mod")
            .expect("valid command")
            .with_payload(CommandPayload::new("Moderation tools"))
            .with_group(warn)
            .guild_scoped()
            .into(),
        ComponentBinding::new(page_handler)
            .handles_buttons(["page"])
            .expect("valid prefix")
            .into(),
    ]
}

/// Builds a hub over `source` whose only listener is `recorder`.
#[must_use]
pub fn hub(
    source: &Arc<StaticDefinitionSource>,
    transport: &Arc<InMemoryCommandTransport>,
    recorder: &RecordingListener,
    config: InteractionConfig,
) -> TestHub {
    let discovered = Arc::clone(source);
    let listener: Arc<dyn InteractionListener> = Arc::new(recorder.clone());
    InteractionHub::new(
        discovered,
        Arc::clone(transport),
        Arc::new(DefaultClock),
        ListenerSet::new([listener]),
        config,
    )
    .expect("valid configuration")
}

/// Context of a guild member holding `permissions`.
#[must_use]
pub fn member_context(permissions: &[&str]) -> InteractionContext {
    let member = MemberContext::new()
        .with_permissions(permissions.iter().map(|name| Permission::new(*name)));
    InteractionContext::in_guild(INVOKER, GuildContext::new(GUILD).with_member(member))
}
