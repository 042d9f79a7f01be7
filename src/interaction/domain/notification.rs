//! Notifications delivered to registered listeners.

use std::collections::BTreeSet;

use super::{ExceptionKind, InteractionContext, InteractionError};
use crate::command::domain::{Permission, RoleId, UserId};

/// Event fanned out to every registered [`InteractionListener`].
///
/// [`InteractionListener`]: crate::interaction::ports::InteractionListener
#[derive(Debug, Clone)]
pub enum InteractionNotification {
    /// The invoking member lacks a required permission.
    InsufficientPermissions {
        /// Invocation context.
        context: InteractionContext,
        /// Permissions the command requires.
        required: BTreeSet<Permission>,
    },

    /// The invoking user is not on the command's user allow-list.
    InvalidUser {
        /// Invocation context.
        context: InteractionContext,
        /// Users allowed to run the command.
        allowed: BTreeSet<UserId>,
    },

    /// The invoking member holds none of the allowed roles.
    InvalidRole {
        /// Invocation context.
        context: InteractionContext,
        /// Roles allowed to run the command.
        allowed: BTreeSet<RoleId>,
    },

    /// Routing or the handler failed.
    Exception {
        /// Which kind of interaction failed.
        kind: ExceptionKind,
        /// Invocation context.
        context: InteractionContext,
        /// The failure.
        error: InteractionError,
    },
}

impl InteractionNotification {
    /// Returns the invocation context of the notified interaction.
    #[must_use]
    pub const fn context(&self) -> &InteractionContext {
        match self {
            Self::InsufficientPermissions { context, .. }
            | Self::InvalidUser { context, .. }
            | Self::InvalidRole { context, .. }
            | Self::Exception { context, .. } => context,
        }
    }

    /// Returns a stable name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InsufficientPermissions { .. } => "insufficient_permissions",
            Self::InvalidUser { .. } => "invalid_user",
            Self::InvalidRole { .. } => "invalid_role",
            Self::Exception {
                kind: ExceptionKind::Command,
                ..
            } => "command_exception",
            Self::Exception {
                kind: ExceptionKind::Autocomplete,
                ..
            } => "autocomplete_exception",
            Self::Exception {
                kind: ExceptionKind::Component,
                ..
            } => "component_exception",
            Self::Exception {
                kind: ExceptionKind::Modal,
                ..
            } => "modal_exception",
        }
    }
}
