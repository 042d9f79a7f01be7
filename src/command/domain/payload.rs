//! Platform-facing command payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::CommandKind;

/// Option type code the platform uses for a subcommand entry.
const SUBCOMMAND_OPTION_TYPE: u8 = 1;

/// Option type code the platform uses for a subcommand group entry.
const SUBCOMMAND_GROUP_OPTION_TYPE: u8 = 2;

/// Description, options, and default permission state of a command.
///
/// The options are opaque to this crate: they are forwarded to the platform
/// unchanged and only ever compared for equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandPayload {
    description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<Value>,
    #[serde(default = "default_enabled")]
    default_enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

impl CommandPayload {
    /// Creates a payload with a description and no options.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            options: Vec::new(),
            default_enabled: true,
        }
    }

    /// Creates the payload of a context-menu command, which has no
    /// description or options.
    #[must_use]
    pub fn context() -> Self {
        Self::new("")
    }

    /// Appends an option.
    #[must_use]
    pub fn with_option(mut self, option: Value) -> Self {
        self.options.push(option);
        self
    }

    /// Sets whether the command is usable by everyone by default.
    #[must_use]
    pub const fn with_default_enabled(mut self, default_enabled: bool) -> Self {
        self.default_enabled = default_enabled;
        self
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the options in declaration order.
    #[must_use]
    pub fn options(&self) -> &[Value] {
        &self.options
    }

    /// Returns the default permission state.
    #[must_use]
    pub const fn default_enabled(&self) -> bool {
        self.default_enabled
    }

    /// Compares two payloads the way the platform does.
    ///
    /// Object keys holding `null` and empty `options` arrays are ignored, so
    /// a remote echo that spells out absent fields still matches.
    #[must_use]
    pub fn semantically_eq(&self, other: &Self) -> bool {
        self.description == other.description
            && self.default_enabled == other.default_enabled
            && self.options.len() == other.options.len()
            && self
                .options
                .iter()
                .zip(&other.options)
                .all(|(left, right)| normalize(left) == normalize(right))
    }

    pub(crate) fn as_option_entry(&self, option_type: u8, name: &str) -> Value {
        let mut entry = json!({
            "type": option_type,
            "name": name,
            "description": self.description,
        });
        if !self.options.is_empty()
            && let Some(object) = entry.as_object_mut()
        {
            object.insert("options".to_owned(), Value::Array(self.options.clone()));
        }
        entry
    }

    pub(crate) fn subcommand_entry(&self, name: &str) -> Value {
        self.as_option_entry(SUBCOMMAND_OPTION_TYPE, name)
    }

    pub(crate) fn group_entry(description: &str, name: &str, subcommands: Vec<Value>) -> Value {
        Self::new(description)
            .with_options(subcommands)
            .as_option_entry(SUBCOMMAND_GROUP_OPTION_TYPE, name)
    }

    pub(crate) fn with_options(mut self, options: impl IntoIterator<Item = Value>) -> Self {
        self.options.extend(options);
        self
    }
}

fn normalize(value: &Value) -> Value {
    match value {
        Value::Object(object) => {
            let normalized: Map<String, Value> = object
                .iter()
                .filter(|(key, entry)| {
                    !entry.is_null()
                        && !(key.as_str() == "options"
                            && entry.as_array().is_some_and(Vec::is_empty))
                })
                .map(|(key, entry)| (key.clone(), normalize(entry)))
                .collect();
            Value::Object(normalized)
        }
        Value::Array(items) => Value::Array(items.iter().map(normalize).collect()),
        other => other.clone(),
    }
}

/// A complete command as sent to the platform for one scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandData {
    name: String,
    kind: CommandKind,
    payload: CommandPayload,
}

impl CommandData {
    /// Creates command data.
    #[must_use]
    pub const fn new(name: String, kind: CommandKind, payload: CommandPayload) -> Self {
        Self {
            name,
            kind,
            payload,
        }
    }

    /// Returns the command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the command kind.
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        self.kind
    }

    /// Returns the composed payload.
    #[must_use]
    pub const fn payload(&self) -> &CommandPayload {
        &self.payload
    }
}
