//! Given steps for command reconciliation BDD scenarios.

use std::sync::Arc;

use super::world::{ReconciliationWorld, Reply};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use switchyard::command::domain::{
    CommandData, CommandDefinition, CommandKind, CommandPayload, CommandScope,
};

#[given(r#"a global command "{name}" described as "{description}""#)]
fn global_command(
    world: &mut ReconciliationWorld,
    name: String,
    description: String,
) -> Result<(), eyre::Report> {
    let definition = CommandDefinition::new(name)
        .wrap_err("build scenario command")?
        .with_payload(CommandPayload::new(description))
        .with_handler(Arc::new(Reply));
    world.definitions.push(definition.into());
    Ok(())
}

#[given(r#"the platform already registered "{name}" described as "{description}""#)]
fn platform_registered(
    world: &mut ReconciliationWorld,
    name: String,
    description: String,
) -> Result<(), eyre::Report> {
    let command = CommandData::new(name, CommandKind::ChatInput, CommandPayload::new(description));
    world
        .transport
        .seed(CommandScope::Global, &[command])
        .wrap_err("seed remote registration")?;
    Ok(())
}

#[given("cleanup of unknown commands is disabled")]
fn cleanup_disabled(world: &mut ReconciliationWorld) {
    world.config.delete_unknown = false;
}
