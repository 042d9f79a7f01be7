//! Registration cycles driven through the hub.

use std::sync::Arc;

use crate::in_memory::helpers::{CountingHandler, GUILD, definitions, handler, hub, transport};
use mockable::DefaultClock;
use rstest::rstest;
use switchyard::{
    command::{
        adapters::memory::{InMemoryCommandTransport, StaticDefinitionSource, TransportCalls},
        domain::{CommandPath, CommandScope, RemoteCommandSnapshot},
    },
    config::{ConfigError, InteractionConfig},
    hub::{HubError, InteractionHub},
    interaction::{adapters::RecordingListener, ports::ListenerSet},
};

fn names(snapshots: &[RemoteCommandSnapshot]) -> Vec<&str> {
    snapshots.iter().map(RemoteCommandSnapshot::name).collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn start_registers_every_scope(
    transport: Arc<InMemoryCommandTransport>,
    handler: Arc<CountingHandler>,
) {
    let source = Arc::new(StaticDefinitionSource::new(definitions(&handler)));
    let hub = hub(&source, &transport, &RecordingListener::new(), InteractionConfig::default());

    let report = hub
        .start()
        .await
        .expect("registration cycle runs")
        .expect("startup registration enabled");

    assert!(report.is_complete());
    let global = transport
        .registered(CommandScope::Global)
        .expect("global registrations");
    let guild = transport
        .registered(CommandScope::Guild(GUILD))
        .expect("guild registrations");
    assert_eq!(names(&global), ["ping"]);
    assert_eq!(names(&guild), ["mod"]);

    let group = guild
        .first()
        .and_then(|command| command.payload().options().first())
        .expect("composed group option");
    assert_eq!(group["name"], "warn");
    assert_eq!(group["type"], 2);
    assert!(
        hub.registry()
            .slash_command(&CommandPath::grouped("mod", "warn", "add"))
            .is_some()
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repeated_cycle_issues_no_writes(
    transport: Arc<InMemoryCommandTransport>,
    handler: Arc<CountingHandler>,
) {
    let source = Arc::new(StaticDefinitionSource::new(definitions(&handler)));
    let hub = hub(&source, &transport, &RecordingListener::new(), InteractionConfig::default());
    hub.register_interactions().await.expect("first cycle");
    let after_first = transport.calls().expect("call counters");

    let report = hub.register_interactions().await.expect("second cycle");

    let after_second = transport.calls().expect("call counters");
    assert_eq!(after_second.upserts, after_first.upserts);
    assert_eq!(after_second.deletes, after_first.deletes);
    let global = report
        .summary(CommandScope::Global)
        .expect("global summary");
    assert!(global.upserted.is_empty());
    assert_eq!(global.unchanged, ["ping"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dropped_definition_is_deleted_and_unrouted(
    transport: Arc<InMemoryCommandTransport>,
    handler: Arc<CountingHandler>,
) {
    let source = Arc::new(StaticDefinitionSource::new(definitions(&handler)));
    let hub = hub(&source, &transport, &RecordingListener::new(), InteractionConfig::default());
    hub.register_interactions().await.expect("first cycle");

    let remaining = definitions(&handler).into_iter().skip(1);
    source.replace(remaining);
    let report = hub.register_interactions().await.expect("second cycle");

    let global = report
        .summary(CommandScope::Global)
        .expect("global summary");
    assert_eq!(global.deleted, ["ping"]);
    assert!(
        transport
            .registered(CommandScope::Global)
            .expect("global registrations")
            .is_empty()
    );
    assert!(
        hub.registry()
            .slash_command(&CommandPath::command("ping"))
            .is_none()
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn disabled_startup_registration_only_publishes(
    transport: Arc<InMemoryCommandTransport>,
    handler: Arc<CountingHandler>,
) {
    let source = Arc::new(StaticDefinitionSource::new(definitions(&handler)));
    let mut config = InteractionConfig::default();
    config.registration.register_on_startup = false;
    let hub = hub(&source, &transport, &RecordingListener::new(), config);

    let report = hub.start().await.expect("start succeeds");

    assert!(report.is_none());
    assert_eq!(
        transport.calls().expect("call counters"),
        TransportCalls::default()
    );
    assert!(
        hub.registry()
            .slash_command(&CommandPath::command("ping"))
            .is_some()
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failing_guild_does_not_block_global_scope(
    transport: Arc<InMemoryCommandTransport>,
    handler: Arc<CountingHandler>,
) {
    transport
        .fail_scope(CommandScope::Guild(GUILD))
        .expect("mark guild unavailable");
    let source = Arc::new(StaticDefinitionSource::new(definitions(&handler)));
    let hub = hub(&source, &transport, &RecordingListener::new(), InteractionConfig::default());

    let report = hub.register_interactions().await.expect("cycle runs");

    assert!(!report.is_complete());
    assert_eq!(report.failed_scopes(), [CommandScope::Guild(GUILD)]);
    assert_eq!(
        names(
            &transport
                .registered(CommandScope::Global)
                .expect("global registrations")
        ),
        ["ping"]
    );
}

#[rstest]
fn zero_concurrency_is_rejected(transport: Arc<InMemoryCommandTransport>) {
    let mut config = InteractionConfig::default();
    config.dispatch.max_concurrent_interactions = 0;

    let result = InteractionHub::new(
        Arc::new(StaticDefinitionSource::default()),
        transport,
        Arc::new(DefaultClock),
        ListenerSet::default(),
        config,
    );

    assert!(matches!(
        result,
        Err(HubError::Config(ConfigError::Invalid(_)))
    ));
}
