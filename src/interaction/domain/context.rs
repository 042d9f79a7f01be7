//! Who invoked an interaction, and where.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::command::domain::{GuildId, Permission, RoleId, UserId};

/// Guild member state delivered with an interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberContext {
    roles: BTreeSet<RoleId>,
    permissions: Option<BTreeSet<Permission>>,
}

impl MemberContext {
    /// Creates a member with no roles and an unknown permission set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the member's roles.
    #[must_use]
    pub fn with_roles(mut self, roles: impl IntoIterator<Item = RoleId>) -> Self {
        self.roles = roles.into_iter().collect();
        self
    }

    /// Sets the member's resolved permissions.
    #[must_use]
    pub fn with_permissions(mut self, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.permissions = Some(permissions.into_iter().collect());
        self
    }

    /// Returns the member's roles.
    #[must_use]
    pub const fn roles(&self) -> &BTreeSet<RoleId> {
        &self.roles
    }

    /// Returns the resolved permissions, when the platform supplied them.
    #[must_use]
    pub const fn permissions(&self) -> Option<&BTreeSet<Permission>> {
        self.permissions.as_ref()
    }

    /// Returns whether the member holds every permission in `required`.
    ///
    /// Returns `None` when the permission set is unknown. Administrators
    /// satisfy every requirement.
    #[must_use]
    pub fn has_permissions(&self, required: &BTreeSet<Permission>) -> Option<bool> {
        let held = self.permissions.as_ref()?;
        if held.iter().any(|permission| permission.as_str() == Permission::ADMINISTRATOR) {
            return Some(true);
        }
        Some(required.is_subset(held))
    }
}

/// Guild in which an interaction originated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildContext {
    guild: GuildId,
    member: Option<MemberContext>,
}

impl GuildContext {
    /// Creates a guild context without member state.
    #[must_use]
    pub const fn new(guild: GuildId) -> Self {
        Self {
            guild,
            member: None,
        }
    }

    /// Attaches the invoking member.
    #[must_use]
    pub fn with_member(mut self, member: MemberContext) -> Self {
        self.member = Some(member);
        self
    }

    /// Returns the guild identifier.
    #[must_use]
    pub const fn guild(&self) -> GuildId {
        self.guild
    }

    /// Returns the invoking member, when known.
    #[must_use]
    pub const fn member(&self) -> Option<&MemberContext> {
        self.member.as_ref()
    }
}

/// Invocation context shared by every interaction event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionContext {
    user: UserId,
    guild: Option<GuildContext>,
}

impl InteractionContext {
    /// Context for an interaction from a direct message.
    #[must_use]
    pub const fn direct(user: UserId) -> Self {
        Self { user, guild: None }
    }

    /// Context for an interaction from a guild.
    #[must_use]
    pub const fn in_guild(user: UserId, guild: GuildContext) -> Self {
        Self {
            user,
            guild: Some(guild),
        }
    }

    /// Returns the invoking user.
    #[must_use]
    pub const fn user(&self) -> UserId {
        self.user
    }

    /// Returns the guild context, if the interaction came from a guild.
    #[must_use]
    pub const fn guild(&self) -> Option<&GuildContext> {
        self.guild.as_ref()
    }

    /// Returns the invoking member, if the interaction came from a guild and
    /// the member is known.
    #[must_use]
    pub fn member(&self) -> Option<&MemberContext> {
        self.guild.as_ref().and_then(GuildContext::member)
    }
}
