//! Inbound interactions routed through a started hub.

use std::sync::Arc;

use crate::in_memory::helpers::{
    CountingHandler, INVOKER, TestHub, definitions, handler, hub, member_context, transport,
};
use rstest::rstest;
use serde_json::json;
use switchyard::{
    command::{
        adapters::memory::{InMemoryCommandTransport, StaticDefinitionSource},
        domain::{CommandPath, ComponentId},
    },
    config::InteractionConfig,
    interaction::{
        adapters::RecordingListener,
        domain::{
            ComponentEvent, ComponentKind, InteractionContext, InteractionEvent, SlashCommandEvent,
        },
        services::DispatchOutcome,
    },
};

async fn started_hub(
    transport: &Arc<InMemoryCommandTransport>,
    handler: &Arc<CountingHandler>,
    recorder: &RecordingListener,
) -> TestHub {
    let source = Arc::new(StaticDefinitionSource::new(definitions(handler)));
    let started = hub(&source, transport, recorder, InteractionConfig::default());
    started.start().await.expect("registration cycle runs");
    started
}

fn slash(path: CommandPath, context: InteractionContext) -> InteractionEvent {
    SlashCommandEvent::new(context, path, json!({})).into()
}

async fn run(hub: &TestHub, event: InteractionEvent) -> DispatchOutcome {
    hub.dispatch(event).await.expect("dispatch task joins")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn registered_command_runs_its_handler(
    transport: Arc<InMemoryCommandTransport>,
    handler: Arc<CountingHandler>,
) {
    let recorder = RecordingListener::new();
    let hub = started_hub(&transport, &handler, &recorder).await;

    let outcome = run(
        &hub,
        slash(CommandPath::command("ping"), InteractionContext::direct(INVOKER)),
    )
    .await;

    assert_eq!(outcome, DispatchOutcome::Completed);
    assert_eq!(handler.calls(), 1);
    assert!(recorder.received().is_empty());
}

#[rstest]
#[case(&["send_messages"], DispatchOutcome::Denied, 0)]
#[case(&["kick_members"], DispatchOutcome::Completed, 1)]
#[case(&["administrator"], DispatchOutcome::Completed, 1)]
#[tokio::test(flavor = "multi_thread")]
async fn grouped_subcommand_is_gated_by_permissions(
    transport: Arc<InMemoryCommandTransport>,
    handler: Arc<CountingHandler>,
    #[case] permissions: &[&str],
    #[case] expected: DispatchOutcome,
    #[case] expected_calls: usize,
) {
    let recorder = RecordingListener::new();
    let hub = started_hub(&transport, &handler, &recorder).await;

    let outcome = run(
        &hub,
        slash(
            CommandPath::grouped("mod", "warn", "add"),
            member_context(permissions),
        ),
    )
    .await;

    assert_eq!(outcome, expected);
    assert_eq!(handler.calls(), expected_calls);
    let expected_names: &[&str] = if expected == DispatchOutcome::Denied {
        &["insufficient_permissions"]
    } else {
        &[]
    };
    assert_eq!(recorder.names(), expected_names);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn standalone_button_handler_receives_prefixed_ids(
    transport: Arc<InMemoryCommandTransport>,
    handler: Arc<CountingHandler>,
) {
    let recorder = RecordingListener::new();
    let hub = started_hub(&transport, &handler, &recorder).await;
    let custom_id = ComponentId::build("page", ["next", "2"]).expect("valid prefix");

    let outcome = run(
        &hub,
        ComponentEvent::new(
            InteractionContext::direct(INVOKER),
            ComponentKind::Button,
            custom_id,
        )
        .into(),
    )
    .await;

    assert_eq!(outcome, DispatchOutcome::Completed);
    assert_eq!(handler.calls(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_command_is_reported_as_exception(
    transport: Arc<InMemoryCommandTransport>,
    handler: Arc<CountingHandler>,
) {
    let recorder = RecordingListener::new();
    let hub = started_hub(&transport, &handler, &recorder).await;

    let outcome = run(
        &hub,
        slash(CommandPath::command("ban"), InteractionContext::direct(INVOKER)),
    )
    .await;

    assert_eq!(outcome, DispatchOutcome::NotRegistered);
    assert_eq!(recorder.names(), ["command_exception"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn hub_routes_nothing_before_the_first_cycle(
    transport: Arc<InMemoryCommandTransport>,
    handler: Arc<CountingHandler>,
) {
    let recorder = RecordingListener::new();
    let source = Arc::new(StaticDefinitionSource::new(definitions(&handler)));
    let idle = hub(&source, &transport, &recorder, InteractionConfig::default());

    let outcome = run(
        &idle,
        slash(CommandPath::command("ping"), InteractionContext::direct(INVOKER)),
    )
    .await;

    assert_eq!(outcome, DispatchOutcome::NotRegistered);
    assert_eq!(handler.calls(), 0);
}
