//! Snowflake identifier types used by the interaction platform.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! snowflake_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a raw platform identifier.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the raw platform identifier.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(formatter, "{}", self.0)
            }
        }
    };
}

snowflake_id!(
    /// Identifier of a guild (workspace) on the platform.
    GuildId
);

snowflake_id!(
    /// Identifier of a platform user.
    UserId
);

snowflake_id!(
    /// Identifier of a guild role.
    RoleId
);

snowflake_id!(
    /// Remote identity assigned to a registered command.
    ///
    /// A fresh identity is assigned on every upsert, so cross-references keyed
    /// by it break when a command is needlessly re-registered.
    CommandId
);
