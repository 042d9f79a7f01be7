//! Authorization checks run before a command handler.

use std::collections::BTreeSet;

use crate::command::domain::{AuthorizationRequirements, Permission, RoleId, UserId};
use crate::interaction::domain::{InteractionContext, InteractionNotification};

/// How the gate treats edge cases the platform leaves open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GatePolicy {
    /// Block members holding no roles when a role allow-list is set.
    ///
    /// Off by default: a roleless member is not evaluated against the role
    /// allow-list and passes the role check.
    pub deny_roleless_members: bool,
}

/// The first failed requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationDenial {
    /// The member lacks a required permission.
    InsufficientPermissions(BTreeSet<Permission>),
    /// The user is not on the allow-list.
    InvalidUser(BTreeSet<UserId>),
    /// The member holds none of the allowed roles.
    InvalidRole(BTreeSet<RoleId>),
}

impl AuthorizationDenial {
    /// Builds the notification listeners receive for this denial.
    #[must_use]
    pub fn into_notification(self, context: InteractionContext) -> InteractionNotification {
        match self {
            Self::InsufficientPermissions(required) => {
                InteractionNotification::InsufficientPermissions { context, required }
            }
            Self::InvalidUser(allowed) => InteractionNotification::InvalidUser { context, allowed },
            Self::InvalidRole(allowed) => InteractionNotification::InvalidRole { context, allowed },
        }
    }
}

/// Evaluates `requirements` against the invoker.
///
/// Checks run in order (permissions, then users, then roles) and stop at
/// the first failure. Permission and role checks only apply inside a guild
/// with known member state.
///
/// # Errors
///
/// Returns the first [`AuthorizationDenial`] encountered.
pub fn authorize(
    requirements: &AuthorizationRequirements,
    context: &InteractionContext,
    policy: GatePolicy,
) -> Result<(), AuthorizationDenial> {
    let member = context.member();

    let permissions = requirements.permissions();
    if !permissions.is_empty()
        && member.and_then(|invoker| invoker.has_permissions(permissions)) == Some(false)
    {
        return Err(AuthorizationDenial::InsufficientPermissions(
            permissions.clone(),
        ));
    }

    let users = requirements.users();
    if !users.is_empty() && !users.contains(&context.user()) {
        return Err(AuthorizationDenial::InvalidUser(users.clone()));
    }

    let roles = requirements.roles();
    if let Some(invoker) = member {
        let evaluated = !invoker.roles().is_empty() || policy.deny_roleless_members;
        if !roles.is_empty() && evaluated && invoker.roles().is_disjoint(roles) {
            return Err(AuthorizationDenial::InvalidRole(roles.clone()));
        }
    }
    Ok(())
}
