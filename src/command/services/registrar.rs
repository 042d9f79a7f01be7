//! Applies reconciliation results per registration scope.

use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

use super::{IndexedRegistry, ReconcilePlan, desired_for_scope, reconcile};
use crate::command::{
    domain::{CommandScope, RemoteCommandSnapshot},
    ports::{CommandTransport, TransportError, TransportResult},
};

const TARGET: &str = "switchyard::sync";

/// Registrar behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationConfig {
    /// Fetch and diff the global scope instead of upserting everything.
    pub reconcile_global: bool,
    /// Fetch and diff guild scopes instead of upserting everything.
    pub reconcile_guilds: bool,
    /// Delete registered commands that no definition declares.
    pub delete_unknown: bool,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            reconcile_global: true,
            reconcile_guilds: true,
            delete_unknown: true,
        }
    }
}

impl RegistrationConfig {
    const fn reconciles(self, scope: CommandScope) -> bool {
        match scope {
            CommandScope::Global => self.reconcile_global,
            CommandScope::Guild(_) => self.reconcile_guilds,
        }
    }
}

/// What one scope's registration did, by command name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeSummary {
    /// The processed scope.
    pub scope: CommandScope,
    /// Commands sent in the upsert batch.
    pub upserted: Vec<String>,
    /// Registered commands deleted.
    pub deleted: Vec<String>,
    /// Registered commands left untouched.
    pub unchanged: Vec<String>,
    /// Commands excluded from the scope by a guild filter.
    pub skipped: Vec<String>,
    /// When the scope finished processing.
    pub completed_at: DateTime<Utc>,
}

/// Result of registering one scope.
#[derive(Debug, Clone)]
pub enum ScopeOutcome {
    /// Every operation for the scope succeeded.
    Completed(ScopeSummary),
    /// A transport call failed; the scope is incomplete for this cycle.
    Failed {
        /// The scope that failed.
        scope: CommandScope,
        /// The transport failure.
        error: TransportError,
    },
}

impl ScopeOutcome {
    /// Returns the scope this outcome belongs to.
    #[must_use]
    pub const fn scope(&self) -> CommandScope {
        match self {
            Self::Completed(summary) => summary.scope,
            Self::Failed { scope, .. } => *scope,
        }
    }
}

/// One outcome per processed scope, global first.
#[derive(Debug, Clone, Default)]
pub struct RegistrationReport {
    outcomes: Vec<ScopeOutcome>,
}

impl RegistrationReport {
    /// Returns every outcome in processing order.
    #[must_use]
    pub fn outcomes(&self) -> &[ScopeOutcome] {
        &self.outcomes
    }

    /// Returns the summary of a completed scope.
    #[must_use]
    pub fn summary(&self, scope: CommandScope) -> Option<&ScopeSummary> {
        self.outcomes.iter().find_map(|outcome| match outcome {
            ScopeOutcome::Completed(summary) if summary.scope == scope => Some(summary),
            ScopeOutcome::Completed(_) | ScopeOutcome::Failed { .. } => None,
        })
    }

    /// Returns the scopes whose registration failed.
    #[must_use]
    pub fn failed_scopes(&self) -> Vec<CommandScope> {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, ScopeOutcome::Failed { .. }))
            .map(ScopeOutcome::scope)
            .collect()
    }

    /// Returns whether every scope completed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.outcomes
            .iter()
            .all(|outcome| matches!(outcome, ScopeOutcome::Completed(_)))
    }
}

/// Errors that stop a registration cycle before any scope is processed.
#[derive(Debug, Clone, Error)]
pub enum RegistrarError {
    /// The guilds to register in could not be listed.
    #[error("failed to list known guilds: {0}")]
    GuildListing(#[source] TransportError),
}

/// Registers the indexed commands in every scope through a transport.
#[derive(Clone)]
pub struct CommandRegistrar<T, C>
where
    T: CommandTransport,
    C: Clock + Send + Sync,
{
    transport: Arc<T>,
    clock: Arc<C>,
    config: RegistrationConfig,
}

impl<T, C> CommandRegistrar<T, C>
where
    T: CommandTransport,
    C: Clock + Send + Sync,
{
    /// Creates a registrar with the default configuration.
    #[must_use]
    pub fn new(transport: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            transport,
            clock,
            config: RegistrationConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub const fn with_config(mut self, config: RegistrationConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> RegistrationConfig {
        self.config
    }

    /// Registers the global scope, then every known guild.
    ///
    /// A failing scope is recorded in the report and does not stop the
    /// remaining scopes.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarError::GuildListing`] when the known guilds cannot
    /// be listed; no scope has been touched at that point.
    pub async fn register_all(
        &self,
        registry: &IndexedRegistry,
    ) -> Result<RegistrationReport, RegistrarError> {
        let guilds = self
            .transport
            .known_guilds()
            .await
            .map_err(RegistrarError::GuildListing)?;
        let scopes = std::iter::once(CommandScope::Global)
            .chain(guilds.into_iter().map(CommandScope::Guild));

        let mut report = RegistrationReport::default();
        for scope in scopes {
            let outcome = match self.register_scope(registry, scope).await {
                Ok(summary) => ScopeOutcome::Completed(summary),
                Err(err) => {
                    error!(target: TARGET, %scope, error = %err, "scope registration failed");
                    ScopeOutcome::Failed { scope, error: err }
                }
            };
            report.outcomes.push(outcome);
        }
        Ok(report)
    }

    /// Registers the indexed commands in one scope.
    ///
    /// # Errors
    ///
    /// Returns the first [`TransportError`] raised for the scope. Operations
    /// issued before the failure are not rolled back.
    pub async fn register_scope(
        &self,
        registry: &IndexedRegistry,
        scope: CommandScope,
    ) -> TransportResult<ScopeSummary> {
        let desired = desired_for_scope(registry.commands(), scope);
        let plan = if self.config.reconciles(scope) {
            let remote = self.transport.fetch_commands(scope).await?;
            reconcile(&desired.commands, &remote, self.config.delete_unknown)
        } else {
            ReconcilePlan {
                to_upsert: desired.commands,
                ..ReconcilePlan::default()
            }
        };

        if !plan.to_upsert.is_empty() {
            for command in &plan.to_upsert {
                info!(
                    target: TARGET,
                    command = command.name(),
                    %scope,
                    "queued command for upsert"
                );
            }
            self.transport
                .upsert_commands(scope, &plan.to_upsert)
                .await?;
        }
        for snapshot in &plan.to_delete {
            info!(
                target: TARGET,
                command = snapshot.name(),
                id = %snapshot.id(),
                %scope,
                "deleting unknown command"
            );
            self.transport.delete_command(scope, snapshot.id()).await?;
        }

        let summary = ScopeSummary {
            scope,
            upserted: plan
                .to_upsert
                .iter()
                .map(|command| command.name().to_owned())
                .collect(),
            deleted: names(&plan.to_delete),
            unchanged: names(&plan.unchanged),
            skipped: desired.skipped,
            completed_at: self.clock.utc(),
        };
        info!(
            target: TARGET,
            %scope,
            upserted = ?summary.upserted,
            deleted = ?summary.deleted,
            unchanged = summary.unchanged.len(),
            skipped = ?summary.skipped,
            "scope registration complete"
        );
        Ok(summary)
    }
}

fn names(snapshots: &[RemoteCommandSnapshot]) -> Vec<String> {
    snapshots
        .iter()
        .map(|snapshot| snapshot.name().to_owned())
        .collect()
}
