//! Desired-versus-remote diffing for a single registration scope.

use tracing::info;

use super::ScopedCommand;
use crate::command::domain::{CommandData, CommandScope, RemoteCommandSnapshot};

/// Remote operations needed to bring one scope up to date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcilePlan {
    /// Commands to create or overwrite in one batch.
    pub to_upsert: Vec<CommandData>,
    /// Registered commands to delete individually.
    pub to_delete: Vec<RemoteCommandSnapshot>,
    /// Registered commands already equal to a desired command.
    pub unchanged: Vec<RemoteCommandSnapshot>,
}

impl ReconcilePlan {
    /// Returns whether the plan requires no remote call.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.to_upsert.is_empty() && self.to_delete.is_empty()
    }
}

/// Computes the operations that make `remote` match `desired`.
///
/// Each desired command is paired with at most one equal remote command and
/// vice versa. Paired commands are left alone. Unpaired desired commands are
/// upserted. Unpaired remote commands are deleted only when
/// `cleanup_unknown` is set, and never when an upsert with the same name and
/// kind will overwrite them in place.
#[must_use]
pub fn reconcile(
    desired: &[CommandData],
    remote: &[RemoteCommandSnapshot],
    cleanup_unknown: bool,
) -> ReconcilePlan {
    let mut unpaired: Vec<Option<&RemoteCommandSnapshot>> = remote.iter().map(Some).collect();
    let mut plan = ReconcilePlan::default();

    for command in desired {
        let paired = unpaired
            .iter_mut()
            .find(|slot| slot.is_some_and(|snapshot| snapshot.matches(command)))
            .and_then(Option::take);
        match paired {
            Some(snapshot) => plan.unchanged.push(snapshot.clone()),
            None => plan.to_upsert.push(command.clone()),
        }
    }

    if cleanup_unknown {
        plan.to_delete = unpaired
            .into_iter()
            .flatten()
            .filter(|snapshot| {
                !plan
                    .to_upsert
                    .iter()
                    .any(|command| snapshot.same_identity(command))
            })
            .cloned()
            .collect();
    }
    plan
}

/// Commands wanted in one scope, plus the names excluded by guild filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesiredSet {
    /// Commands to reconcile against the scope.
    pub commands: Vec<CommandData>,
    /// Guild-scoped commands whose filter rejected the scope's guild.
    pub skipped: Vec<String>,
}

/// Selects the commands registered in `scope`.
///
/// Commands declared for the other scope kind are ignored. Guild-scoped
/// commands whose filter rejects the guild are recorded as skipped.
#[must_use]
pub fn desired_for_scope(commands: &[ScopedCommand], scope: CommandScope) -> DesiredSet {
    let mut desired = DesiredSet::default();
    for command in commands {
        if !scope.accepts(command.scope()) {
            continue;
        }
        let rejected = scope
            .guild()
            .zip(command.guild_filter())
            .is_some_and(|(guild, filter)| !filter(guild));
        if rejected {
            info!(
                target: "switchyard::sync",
                command = command.data().name(),
                %scope,
                "skipping command excluded by guild filter"
            );
            desired.skipped.push(command.data().name().to_owned());
            continue;
        }
        desired.commands.push(command.data().clone());
    }
    desired
}
