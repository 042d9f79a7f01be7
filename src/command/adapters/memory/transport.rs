//! In-memory platform transport for registrar tests.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::command::{
    domain::{CommandData, CommandId, CommandScope, GuildId, RemoteCommandSnapshot},
    ports::{CommandTransport, TransportError, TransportResult},
};

/// Number of calls the transport received, by operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransportCalls {
    /// `fetch_commands` calls.
    pub fetches: usize,
    /// `upsert_commands` calls.
    pub upserts: usize,
    /// `delete_command` calls.
    pub deletes: usize,
}

/// Thread-safe in-memory stand-in for the platform's command registry.
///
/// Upserting a command whose name and kind are already registered keeps the
/// existing identifier and replaces the payload.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCommandTransport {
    state: Arc<RwLock<TransportState>>,
}

#[derive(Debug, Default)]
struct TransportState {
    registrations: BTreeMap<CommandScope, Vec<RemoteCommandSnapshot>>,
    guilds: Vec<GuildId>,
    failing: BTreeSet<CommandScope>,
    next_id: u64,
    calls: TransportCalls,
}

impl TransportState {
    fn ensure_available(&self, scope: CommandScope) -> TransportResult<()> {
        if self.failing.contains(&scope) {
            return Err(TransportError::rejected(scope, "scope is unavailable"));
        }
        Ok(())
    }

    fn upsert(
        &mut self,
        scope: CommandScope,
        commands: &[CommandData],
    ) -> Vec<RemoteCommandSnapshot> {
        let mut written = Vec::with_capacity(commands.len());
        for command in commands {
            let existing = self
                .registrations
                .get(&scope)
                .and_then(|registered| {
                    registered
                        .iter()
                        .find(|snapshot| snapshot.same_identity(command))
                })
                .map(RemoteCommandSnapshot::id);
            let id = existing.unwrap_or_else(|| {
                self.next_id += 1;
                CommandId::new(self.next_id)
            });
            let snapshot = RemoteCommandSnapshot::new(
                id,
                command.name(),
                command.kind(),
                command.payload().clone(),
            );
            let registered = self.registrations.entry(scope).or_default();
            registered.retain(|current| current.id() != id);
            registered.push(snapshot.clone());
            written.push(snapshot);
        }
        written
    }
}

fn lock_error(err: &impl ToString) -> TransportError {
    TransportError::request(std::io::Error::other(err.to_string()))
}

impl InMemoryCommandTransport {
    /// Creates an empty transport with no guilds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport that reports `guilds` as known.
    #[must_use]
    pub fn with_guilds(guilds: impl IntoIterator<Item = GuildId>) -> Self {
        Self {
            state: Arc::new(RwLock::new(TransportState {
                guilds: guilds.into_iter().collect(),
                ..TransportState::default()
            })),
        }
    }

    fn read(&self) -> TransportResult<RwLockReadGuard<'_, TransportState>> {
        self.state.read().map_err(|err| lock_error(&err))
    }

    fn write(&self) -> TransportResult<RwLockWriteGuard<'_, TransportState>> {
        self.state.write().map_err(|err| lock_error(&err))
    }

    /// Registers `commands` in `scope` without counting a call.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Request`] when the state lock is poisoned.
    pub fn seed(
        &self,
        scope: CommandScope,
        commands: &[CommandData],
    ) -> TransportResult<Vec<RemoteCommandSnapshot>> {
        Ok(self.write()?.upsert(scope, commands))
    }

    /// Makes every request targeting `scope` fail.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Request`] when the state lock is poisoned.
    pub fn fail_scope(&self, scope: CommandScope) -> TransportResult<()> {
        self.write()?.failing.insert(scope);
        Ok(())
    }

    /// Returns the commands currently registered in `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Request`] when the state lock is poisoned.
    pub fn registered(&self, scope: CommandScope) -> TransportResult<Vec<RemoteCommandSnapshot>> {
        Ok(self
            .read()?
            .registrations
            .get(&scope)
            .cloned()
            .unwrap_or_default())
    }

    /// Returns the calls received so far.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Request`] when the state lock is poisoned.
    pub fn calls(&self) -> TransportResult<TransportCalls> {
        Ok(self.read()?.calls)
    }
}

#[async_trait]
impl CommandTransport for InMemoryCommandTransport {
    async fn known_guilds(&self) -> TransportResult<Vec<GuildId>> {
        Ok(self.read()?.guilds.clone())
    }

    async fn fetch_commands(
        &self,
        scope: CommandScope,
    ) -> TransportResult<Vec<RemoteCommandSnapshot>> {
        let mut state = self.write()?;
        state.calls.fetches += 1;
        state.ensure_available(scope)?;
        Ok(state.registrations.get(&scope).cloned().unwrap_or_default())
    }

    async fn upsert_commands(
        &self,
        scope: CommandScope,
        commands: &[CommandData],
    ) -> TransportResult<Vec<RemoteCommandSnapshot>> {
        let mut state = self.write()?;
        state.calls.upserts += 1;
        state.ensure_available(scope)?;
        Ok(state.upsert(scope, commands))
    }

    async fn delete_command(&self, scope: CommandScope, id: CommandId) -> TransportResult<()> {
        let mut state = self.write()?;
        state.calls.deletes += 1;
        state.ensure_available(scope)?;
        let registered = state.registrations.entry(scope).or_default();
        let before = registered.len();
        registered.retain(|snapshot| snapshot.id() != id);
        if registered.len() == before {
            return Err(TransportError::rejected(scope, format!("unknown command {id}")));
        }
        Ok(())
    }
}
