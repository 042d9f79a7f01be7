//! Authorization requirements attached to executable commands.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::{RoleId, UserId};

/// A named guild permission such as `MANAGE_MESSAGES`.
///
/// Names are normalised to upper snake case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(String);

impl Permission {
    /// Permission granting every other permission.
    pub const ADMINISTRATOR: &'static str = "ADMINISTRATOR";

    /// Creates a permission from its name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into().trim().to_ascii_uppercase().replace([' ', '-'], "_"))
    }

    /// Returns the administrator permission.
    #[must_use]
    pub fn administrator() -> Self {
        Self::new(Self::ADMINISTRATOR)
    }

    /// Returns the permission name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Permission, user, and role predicates evaluated before a command runs.
///
/// An empty set places no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationRequirements {
    #[serde(default)]
    permissions: BTreeSet<Permission>,
    #[serde(default)]
    users: BTreeSet<UserId>,
    #[serde(default)]
    roles: BTreeSet<RoleId>,
}

impl AuthorizationRequirements {
    /// Creates requirements with no restrictions.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Requires the invoking member to hold all of `permissions`.
    #[must_use]
    pub fn require_permissions(
        mut self,
        permissions: impl IntoIterator<Item = Permission>,
    ) -> Self {
        self.permissions.extend(permissions);
        self
    }

    /// Restricts invocation to the listed users.
    #[must_use]
    pub fn require_users(mut self, users: impl IntoIterator<Item = UserId>) -> Self {
        self.users.extend(users);
        self
    }

    /// Restricts invocation to members holding at least one listed role.
    #[must_use]
    pub fn require_roles(mut self, roles: impl IntoIterator<Item = RoleId>) -> Self {
        self.roles.extend(roles);
        self
    }

    /// Returns the required permissions.
    #[must_use]
    pub const fn permissions(&self) -> &BTreeSet<Permission> {
        &self.permissions
    }

    /// Returns the user allow-list.
    #[must_use]
    pub const fn users(&self) -> &BTreeSet<UserId> {
        &self.users
    }

    /// Returns the role allow-list.
    #[must_use]
    pub const fn roles(&self) -> &BTreeSet<RoleId> {
        &self.roles
    }

    /// Returns whether no predicate is configured.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.permissions.is_empty() && self.users.is_empty() && self.roles.is_empty()
    }
}
