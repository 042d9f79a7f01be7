//! When steps for command reconciliation BDD scenarios.

use super::world::{ReconciliationWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use switchyard::command::services::IndexedRegistry;

#[when("a registration cycle runs")]
fn registration_cycle_runs(world: &mut ReconciliationWorld) -> Result<(), eyre::Report> {
    let registry = IndexedRegistry::build(&world.definitions);
    let report = run_async(world.registrar().register_all(&registry))
        .wrap_err("run registration cycle")?;
    world.report = Some(report);
    Ok(())
}
