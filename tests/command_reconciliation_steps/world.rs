//! Shared world state for command reconciliation BDD scenarios.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::fixture;
use switchyard::{
    command::{
        adapters::memory::InMemoryCommandTransport,
        domain::Definition,
        services::{CommandRegistrar, RegistrationConfig, RegistrationReport},
    },
    interaction::{
        domain::{HandlerResult, SlashCommandEvent},
        ports::SlashCommandHandler,
    },
};

/// Registrar type used by the BDD world.
pub type TestRegistrar = CommandRegistrar<InMemoryCommandTransport, DefaultClock>;

/// Handler attached to every scenario command.
pub struct Reply;

#[async_trait]
impl SlashCommandHandler for Reply {
    async fn execute(&self, _event: &SlashCommandEvent) -> HandlerResult {
        Ok(())
    }
}

/// Scenario world for reconciliation behaviour tests.
pub struct ReconciliationWorld {
    pub transport: Arc<InMemoryCommandTransport>,
    pub definitions: Vec<Definition>,
    pub config: RegistrationConfig,
    pub report: Option<RegistrationReport>,
}

impl ReconciliationWorld {
    /// Creates a world with an empty platform and no definitions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transport: Arc::new(InMemoryCommandTransport::new()),
            definitions: Vec::new(),
            config: RegistrationConfig::default(),
            report: None,
        }
    }

    /// Builds a registrar over the world's transport and configuration.
    #[must_use]
    pub fn registrar(&self) -> TestRegistrar {
        CommandRegistrar::new(Arc::clone(&self.transport), Arc::new(DefaultClock))
            .with_config(self.config)
    }
}

impl Default for ReconciliationWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ReconciliationWorld {
    ReconciliationWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
