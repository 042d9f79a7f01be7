//! Typed configuration for registration, dispatch, and logging.
//!
//! ```toml
//! [registration]
//! register_on_startup = true
//! reconcile_global = true
//! reconcile_guilds = false
//! delete_unknown_commands = true
//!
//! [dispatch]
//! max_concurrent_interactions = 32
//! ack_budget_ms = 2000
//!
//! [telemetry]
//! filter = "info,switchyard::sync=debug"
//! json = false
//! ```
//!
//! Every key is optional.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::command::services::RegistrationConfig;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read configuration from {path}: {source}")]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The document is not valid TOML or has mistyped keys.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Registration cycle settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationSettings {
    /// Run a registration cycle when the hub starts.
    pub register_on_startup: bool,
    /// Diff the global scope against its remote state before writing.
    pub reconcile_global: bool,
    /// Diff guild scopes against their remote state before writing.
    pub reconcile_guilds: bool,
    /// Delete registered commands no definition declares.
    pub delete_unknown_commands: bool,
}

impl Default for RegistrationSettings {
    fn default() -> Self {
        Self {
            register_on_startup: true,
            reconcile_global: true,
            reconcile_guilds: true,
            delete_unknown_commands: true,
        }
    }
}

impl From<RegistrationSettings> for RegistrationConfig {
    fn from(settings: RegistrationSettings) -> Self {
        Self {
            reconcile_global: settings.reconcile_global,
            reconcile_guilds: settings.reconcile_guilds,
            delete_unknown: settings.delete_unknown_commands,
        }
    }
}

/// Interaction dispatch settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchSettings {
    /// Upper bound on interaction handlers running at once.
    pub max_concurrent_interactions: usize,
    /// Milliseconds allowed between submission and handler start before a
    /// warning is logged.
    pub ack_budget_ms: u64,
    /// Block members without roles when a command has a role allow-list.
    pub deny_roleless_members: bool,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            max_concurrent_interactions: 64,
            ack_budget_ms: 2500,
            deny_roleless_members: false,
        }
    }
}

impl DispatchSettings {
    /// Returns the concurrency bound.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the bound is zero.
    pub fn max_concurrent(&self) -> Result<NonZeroUsize, ConfigError> {
        NonZeroUsize::new(self.max_concurrent_interactions).ok_or_else(|| {
            ConfigError::Invalid("dispatch.max_concurrent_interactions must be > 0".to_owned())
        })
    }

    /// Returns the acknowledgement budget.
    #[must_use]
    pub const fn ack_budget(&self) -> Duration {
        Duration::from_millis(self.ack_budget_ms)
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
            json: false,
        }
    }
}

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Registration cycle settings.
    pub registration: RegistrationSettings,
    /// Dispatch settings.
    pub dispatch: DispatchSettings,
    /// Logging settings.
    pub telemetry: TelemetryConfig,
}

impl InteractionConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed input and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, otherwise
    /// as [`InteractionConfig::from_toml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = path.as_ref();
        let content = std::fs::read_to_string(file).map_err(|source| ConfigError::Read {
            path: file.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dispatch.max_concurrent()?;
        if self.dispatch.ack_budget_ms == 0 {
            return Err(ConfigError::Invalid(
                "dispatch.ack_budget_ms must be > 0".to_owned(),
            ));
        }
        if self.telemetry.filter.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "telemetry.filter must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
