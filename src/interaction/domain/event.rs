//! Inbound interaction events.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::InteractionContext;
use crate::command::domain::{CommandKind, CommandPath, ComponentId};

/// A slash command invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlashCommandEvent {
    context: InteractionContext,
    path: CommandPath,
    options: Value,
}

impl SlashCommandEvent {
    /// Creates a slash command event.
    #[must_use]
    pub const fn new(context: InteractionContext, path: CommandPath, options: Value) -> Self {
        Self {
            context,
            path,
            options,
        }
    }

    /// Returns the invocation context.
    #[must_use]
    pub const fn context(&self) -> &InteractionContext {
        &self.context
    }

    /// Returns the invoked command path.
    #[must_use]
    pub const fn path(&self) -> &CommandPath {
        &self.path
    }

    /// Returns the option values supplied by the user.
    #[must_use]
    pub const fn options(&self) -> &Value {
        &self.options
    }
}

/// A context-menu command invocation on a user or message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextCommandEvent {
    context: InteractionContext,
    name: String,
    kind: CommandKind,
    target: u64,
}

impl ContextCommandEvent {
    /// Creates a context command event.
    #[must_use]
    pub fn new(
        context: InteractionContext,
        name: impl Into<String>,
        kind: CommandKind,
        target: u64,
    ) -> Self {
        Self {
            context,
            name: name.into(),
            kind,
            target,
        }
    }

    /// Returns the invocation context.
    #[must_use]
    pub const fn context(&self) -> &InteractionContext {
        &self.context
    }

    /// Returns the command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the target kind.
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        self.kind
    }

    /// Returns the identifier of the targeted user or message.
    #[must_use]
    pub const fn target(&self) -> u64 {
        self.target
    }
}

/// A request for option suggestions while the user types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocompleteEvent {
    context: InteractionContext,
    path: CommandPath,
    focused_option: String,
    partial_value: String,
}

impl AutocompleteEvent {
    /// Creates an autocomplete event.
    #[must_use]
    pub fn new(
        context: InteractionContext,
        path: CommandPath,
        focused_option: impl Into<String>,
        partial_value: impl Into<String>,
    ) -> Self {
        Self {
            context,
            path,
            focused_option: focused_option.into(),
            partial_value: partial_value.into(),
        }
    }

    /// Returns the invocation context.
    #[must_use]
    pub const fn context(&self) -> &InteractionContext {
        &self.context
    }

    /// Returns the command path being completed.
    #[must_use]
    pub const fn path(&self) -> &CommandPath {
        &self.path
    }

    /// Returns the name of the focused option.
    #[must_use]
    pub fn focused_option(&self) -> &str {
        &self.focused_option
    }

    /// Returns what the user has typed so far.
    #[must_use]
    pub fn partial_value(&self) -> &str {
        &self.partial_value
    }
}

/// Kind of interactive UI component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// A button press.
    Button,
    /// A select menu choice.
    SelectMenu,
    /// A modal submission.
    Modal,
}

/// An interaction with a button, select menu, or modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentEvent {
    context: InteractionContext,
    kind: ComponentKind,
    custom_id: ComponentId,
    values: Vec<String>,
}

impl ComponentEvent {
    /// Creates a component event.
    #[must_use]
    pub const fn new(
        context: InteractionContext,
        kind: ComponentKind,
        custom_id: ComponentId,
    ) -> Self {
        Self {
            context,
            kind,
            custom_id,
            values: Vec::new(),
        }
    }

    /// Attaches selected values or submitted modal fields.
    #[must_use]
    pub fn with_values(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the invocation context.
    #[must_use]
    pub const fn context(&self) -> &InteractionContext {
        &self.context
    }

    /// Returns the component kind.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Returns the component custom id.
    #[must_use]
    pub const fn custom_id(&self) -> &ComponentId {
        &self.custom_id
    }

    /// Returns selected values or submitted fields.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

/// Any inbound interaction delivered by the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InteractionEvent {
    /// A slash command invocation.
    SlashCommand(SlashCommandEvent),
    /// A context-menu command invocation.
    ContextCommand(ContextCommandEvent),
    /// An autocomplete request.
    Autocomplete(AutocompleteEvent),
    /// A button, select menu, or modal interaction.
    Component(ComponentEvent),
}

impl InteractionEvent {
    /// Returns the invocation context.
    #[must_use]
    pub const fn context(&self) -> &InteractionContext {
        match self {
            Self::SlashCommand(event) => event.context(),
            Self::ContextCommand(event) => event.context(),
            Self::Autocomplete(event) => event.context(),
            Self::Component(event) => event.context(),
        }
    }

    /// Returns the category under which failures of this event are
    /// reported.
    #[must_use]
    pub const fn exception_kind(&self) -> ExceptionKind {
        match self {
            Self::SlashCommand(_) | Self::ContextCommand(_) => ExceptionKind::Command,
            Self::Autocomplete(_) => ExceptionKind::Autocomplete,
            Self::Component(event) => match event.kind() {
                ComponentKind::Button | ComponentKind::SelectMenu => ExceptionKind::Component,
                ComponentKind::Modal => ExceptionKind::Modal,
            },
        }
    }
}

impl From<SlashCommandEvent> for InteractionEvent {
    fn from(event: SlashCommandEvent) -> Self {
        Self::SlashCommand(event)
    }
}

impl From<ContextCommandEvent> for InteractionEvent {
    fn from(event: ContextCommandEvent) -> Self {
        Self::ContextCommand(event)
    }
}

impl From<AutocompleteEvent> for InteractionEvent {
    fn from(event: AutocompleteEvent) -> Self {
        Self::Autocomplete(event)
    }
}

impl From<ComponentEvent> for InteractionEvent {
    fn from(event: ComponentEvent) -> Self {
        Self::Component(event)
    }
}

/// Category of an exception notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExceptionKind {
    /// A slash or context command failed.
    Command,
    /// An autocomplete handler failed.
    Autocomplete,
    /// A button or select menu handler failed.
    Component,
    /// A modal handler failed.
    Modal,
}
