//! Facade tying discovery, registration cycles, and dispatch together.

use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::info;

use crate::command::ports::{CommandTransport, DefinitionSource};
use crate::command::services::{
    CommandRegistrar, IndexedRegistry, RegistrarError, RegistrationReport,
};
use crate::config::{ConfigError, InteractionConfig};
use crate::interaction::domain::InteractionEvent;
use crate::interaction::ports::ListenerSet;
use crate::interaction::services::{
    DispatchOutcome, GatePolicy, InteractionDispatcher, InteractionRouter,
};

const TARGET: &str = "switchyard::sync";

/// Errors raised by [`InteractionHub`].
#[derive(Debug, Error)]
pub enum HubError {
    /// The configuration is out of range.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The registration cycle could not start.
    #[error(transparent)]
    Registration(#[from] RegistrarError),
}

/// Owns the published registry and routes every inbound interaction.
pub struct InteractionHub<T, C>
where
    T: CommandTransport,
    C: Clock + Send + Sync,
{
    source: Arc<dyn DefinitionSource>,
    registrar: CommandRegistrar<T, C>,
    router: Arc<InteractionRouter>,
    dispatcher: InteractionDispatcher,
    config: InteractionConfig,
}

impl<T, C> InteractionHub<T, C>
where
    T: CommandTransport,
    C: Clock + Send + Sync,
{
    /// Creates a hub serving an empty registry until the first cycle.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Config`] when `config` fails validation.
    pub fn new(
        source: Arc<dyn DefinitionSource>,
        transport: Arc<T>,
        clock: Arc<C>,
        listeners: ListenerSet,
        config: InteractionConfig,
    ) -> Result<Self, HubError> {
        config.validate()?;
        let router = Arc::new(InteractionRouter::default());
        let dispatcher = InteractionDispatcher::new(
            Arc::clone(&router),
            listeners,
            config.dispatch.max_concurrent()?,
        )
        .with_policy(GatePolicy {
            deny_roleless_members: config.dispatch.deny_roleless_members,
        })
        .with_ack_budget(config.dispatch.ack_budget());
        let registrar =
            CommandRegistrar::new(transport, clock).with_config(config.registration.into());

        Ok(Self {
            source,
            registrar,
            router,
            dispatcher,
            config,
        })
    }

    /// Rediscovers definitions and publishes a freshly built registry.
    #[must_use]
    pub fn rebuild_registry(&self) -> Arc<IndexedRegistry> {
        let definitions = self.source.discover();
        let registry = IndexedRegistry::build(&definitions);
        info!(
            target: TARGET,
            definitions = definitions.len(),
            commands = registry.commands().len(),
            rejected = registry.rejected().len(),
            "registry rebuilt"
        );
        self.router.publish(registry);
        self.router.snapshot()
    }

    /// Rebuilds the registry and registers its commands in every scope.
    ///
    /// The new registry serves interactions even when some scopes fail.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Registration`] when the known guilds cannot be
    /// listed.
    pub async fn register_interactions(&self) -> Result<RegistrationReport, HubError> {
        let registry = self.rebuild_registry();
        let report = self.registrar.register_all(&registry).await?;
        info!(
            target: TARGET,
            scopes = report.outcomes().len(),
            failed = report.failed_scopes().len(),
            "registration cycle finished"
        );
        Ok(report)
    }

    /// Brings the hub online.
    ///
    /// Runs a registration cycle when `registration.register_on_startup` is
    /// set; otherwise only publishes the registry and returns `None`.
    ///
    /// # Errors
    ///
    /// As [`InteractionHub::register_interactions`].
    pub async fn start(&self) -> Result<Option<RegistrationReport>, HubError> {
        if self.config.registration.register_on_startup {
            return self.register_interactions().await.map(Some);
        }
        let published = self.rebuild_registry();
        info!(
            target: TARGET,
            commands = published.commands().len(),
            "registration on startup disabled; registry published only"
        );
        Ok(None)
    }

    /// Submits `event` for asynchronous handling.
    #[must_use = "drop the handle explicitly to detach the task"]
    pub fn dispatch(&self, event: InteractionEvent) -> JoinHandle<DispatchOutcome> {
        self.dispatcher.dispatch(event)
    }

    /// Returns the registry currently served.
    #[must_use]
    pub fn registry(&self) -> Arc<IndexedRegistry> {
        self.router.snapshot()
    }

    /// Returns the dispatcher.
    #[must_use]
    pub const fn dispatcher(&self) -> &InteractionDispatcher {
        &self.dispatcher
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &InteractionConfig {
        &self.config
    }
}

impl<T, C> std::fmt::Debug for InteractionHub<T, C>
where
    T: CommandTransport,
    C: Clock + Send + Sync,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("InteractionHub")
            .field("router", &self.router)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
