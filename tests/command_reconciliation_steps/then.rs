//! Then steps for command reconciliation BDD scenarios.

use super::world::ReconciliationWorld;
use eyre::{WrapErr, eyre};
use rstest_bdd_macros::then;
use switchyard::command::{
    domain::{CommandScope, RemoteCommandSnapshot},
    services::ScopeSummary,
};

fn global_summary(world: &ReconciliationWorld) -> Result<&ScopeSummary, eyre::Report> {
    world
        .report
        .as_ref()
        .ok_or_else(|| eyre!("missing registration report"))?
        .summary(CommandScope::Global)
        .ok_or_else(|| eyre!("global scope did not complete"))
}

fn global_registrations(
    world: &ReconciliationWorld,
) -> Result<Vec<RemoteCommandSnapshot>, eyre::Report> {
    world
        .transport
        .registered(CommandScope::Global)
        .wrap_err("read global registrations")
}

fn expect_count(label: &str, actual: &[String], expected: usize) -> Result<(), eyre::Report> {
    if actual.len() != expected {
        return Err(eyre!("expected {expected} {label} commands, found {actual:?}"));
    }
    Ok(())
}

#[then("{count} command was upserted")]
fn one_upserted(world: &ReconciliationWorld, count: usize) -> Result<(), eyre::Report> {
    expect_count("upserted", &global_summary(world)?.upserted, count)
}

#[then("{count} commands were upserted")]
fn many_upserted(world: &ReconciliationWorld, count: usize) -> Result<(), eyre::Report> {
    expect_count("upserted", &global_summary(world)?.upserted, count)
}

#[then("{count} command was deleted")]
fn one_deleted(world: &ReconciliationWorld, count: usize) -> Result<(), eyre::Report> {
    expect_count("deleted", &global_summary(world)?.deleted, count)
}

#[then("{count} commands were deleted")]
fn many_deleted(world: &ReconciliationWorld, count: usize) -> Result<(), eyre::Report> {
    expect_count("deleted", &global_summary(world)?.deleted, count)
}

#[then(r#"the global scope holds "{name}" described as "{description}""#)]
fn global_scope_holds(
    world: &ReconciliationWorld,
    name: String,
    description: String,
) -> Result<(), eyre::Report> {
    let registrations = global_registrations(world)?;
    let command = registrations
        .iter()
        .find(|snapshot| snapshot.name() == name)
        .ok_or_else(|| eyre!("'{name}' is not registered globally"))?;
    if command.payload().description() != description {
        return Err(eyre!(
            "expected description '{description}', found '{}'",
            command.payload().description()
        ));
    }
    Ok(())
}

#[then(r#"the global scope holds only "{name}""#)]
fn global_scope_holds_only(world: &ReconciliationWorld, name: String) -> Result<(), eyre::Report> {
    let registrations = global_registrations(world)?;
    let names: Vec<&str> = registrations.iter().map(RemoteCommandSnapshot::name).collect();
    if names != [name.as_str()] {
        return Err(eyre!("expected only '{name}', found {names:?}"));
    }
    Ok(())
}
