//! Locally declared command definitions.
//!
//! Definitions are produced by a discovery source once per registration
//! cycle and are immutable for the cycle's duration. Handler instances are
//! attached to the definition that declares them instead of being inferred
//! from the handler's type.

use std::fmt;
use std::sync::Arc;

use super::path::{COMPONENT_ID_SEPARATOR, PATH_SEPARATOR, validate_name};
use super::{
    AuthorizationRequirements, CommandKind, CommandPayload, DefinitionError, GuildId,
    RegistrationScope,
};
use crate::interaction::domain::ComponentKind;
use crate::interaction::ports::{
    AutocompleteHandler, ComponentHandler, ContextCommandHandler, SlashCommandHandler,
};

/// Predicate deciding whether a guild-scoped definition is registered in a
/// given guild.
pub type GuildFilter = Arc<dyn Fn(GuildId) -> bool + Send + Sync>;

/// A component handler and the custom-id prefixes it handles.
#[derive(Clone)]
pub struct ComponentBinding {
    handler: Arc<dyn ComponentHandler>,
    prefixes: Vec<(ComponentKind, String)>,
}

impl ComponentBinding {
    /// Creates a binding with no prefixes.
    #[must_use]
    pub fn new(handler: Arc<dyn ComponentHandler>) -> Self {
        Self {
            handler,
            prefixes: Vec::new(),
        }
    }

    /// Declares button prefixes.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError`] when a prefix is empty or contains the
    /// component id separator.
    pub fn handles_buttons<I, S>(self, prefixes: I) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.handles(ComponentKind::Button, prefixes)
    }

    /// Declares select menu prefixes.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError`] when a prefix is empty or contains the
    /// component id separator.
    pub fn handles_select_menus<I, S>(self, prefixes: I) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.handles(ComponentKind::SelectMenu, prefixes)
    }

    /// Declares modal prefixes.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError`] when a prefix is empty or contains the
    /// component id separator.
    pub fn handles_modals<I, S>(self, prefixes: I) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.handles(ComponentKind::Modal, prefixes)
    }

    fn handles<I, S>(mut self, kind: ComponentKind, prefixes: I) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for prefix in prefixes {
            let validated = validate_name(prefix, COMPONENT_ID_SEPARATOR)?;
            self.prefixes.push((kind, validated));
        }
        Ok(self)
    }

    /// Returns the handler.
    #[must_use]
    pub fn handler(&self) -> &Arc<dyn ComponentHandler> {
        &self.handler
    }

    /// Returns the declared prefixes with their component kinds.
    #[must_use]
    pub fn prefixes(&self) -> &[(ComponentKind, String)] {
        &self.prefixes
    }
}

impl fmt::Debug for ComponentBinding {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ComponentBinding")
            .field("prefixes", &self.prefixes)
            .finish_non_exhaustive()
    }
}

/// Optional capabilities of an executable definition.
#[derive(Clone, Default)]
pub struct HandlerCapabilities {
    autocomplete: Option<Arc<dyn AutocompleteHandler>>,
    components: Option<ComponentBinding>,
}

impl HandlerCapabilities {
    /// Returns the autocomplete handler, if the definition opted in.
    #[must_use]
    pub const fn autocomplete(&self) -> Option<&Arc<dyn AutocompleteHandler>> {
        self.autocomplete.as_ref()
    }

    /// Returns the component binding, if any.
    #[must_use]
    pub const fn components(&self) -> Option<&ComponentBinding> {
        self.components.as_ref()
    }

    /// Returns whether autocomplete requests are routed to this definition.
    #[must_use]
    pub const fn is_autocomplete_capable(&self) -> bool {
        self.autocomplete.is_some()
    }
}

impl fmt::Debug for HandlerCapabilities {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("HandlerCapabilities")
            .field("autocomplete", &self.autocomplete.is_some())
            .field("components", &self.components)
            .finish()
    }
}

/// A subcommand, either directly under a command or inside a group.
#[derive(Clone)]
pub struct SubcommandDefinition {
    name: String,
    payload: CommandPayload,
    handler: Arc<dyn SlashCommandHandler>,
    requirements: AuthorizationRequirements,
    capabilities: HandlerCapabilities,
}

impl SubcommandDefinition {
    /// Creates a subcommand definition.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError`] when the name is empty or contains the
    /// path separator.
    pub fn new(
        name: impl Into<String>,
        payload: CommandPayload,
        handler: Arc<dyn SlashCommandHandler>,
    ) -> Result<Self, DefinitionError> {
        Ok(Self {
            name: validate_name(name, PATH_SEPARATOR)?,
            payload,
            handler,
            requirements: AuthorizationRequirements::none(),
            capabilities: HandlerCapabilities::default(),
        })
    }

    /// Sets authorization requirements.
    #[must_use]
    pub fn with_requirements(mut self, requirements: AuthorizationRequirements) -> Self {
        self.requirements = requirements;
        self
    }

    /// Opts in to autocomplete with the given handler.
    #[must_use]
    pub fn with_autocomplete(mut self, handler: Arc<dyn AutocompleteHandler>) -> Self {
        self.capabilities.autocomplete = Some(handler);
        self
    }

    /// Attaches a component handler binding.
    #[must_use]
    pub fn with_components(mut self, binding: ComponentBinding) -> Self {
        self.capabilities.components = Some(binding);
        self
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the payload.
    #[must_use]
    pub const fn payload(&self) -> &CommandPayload {
        &self.payload
    }

    /// Returns the handler.
    #[must_use]
    pub fn handler(&self) -> &Arc<dyn SlashCommandHandler> {
        &self.handler
    }

    /// Returns the authorization requirements.
    #[must_use]
    pub const fn requirements(&self) -> &AuthorizationRequirements {
        &self.requirements
    }

    /// Returns the optional capabilities.
    #[must_use]
    pub const fn capabilities(&self) -> &HandlerCapabilities {
        &self.capabilities
    }
}

impl fmt::Debug for SubcommandDefinition {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SubcommandDefinition")
            .field("name", &self.name)
            .field("payload", &self.payload)
            .field("requirements", &self.requirements)
            .field("capabilities", &self.capabilities)
            .finish_non_exhaustive()
    }
}

/// A named group of subcommands.
#[derive(Debug, Clone)]
pub struct SubcommandGroupDefinition {
    name: String,
    description: String,
    subcommands: Vec<SubcommandDefinition>,
}

impl SubcommandGroupDefinition {
    /// Creates an empty group.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError`] when the name is empty or contains the
    /// path separator.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, DefinitionError> {
        Ok(Self {
            name: validate_name(name, PATH_SEPARATOR)?,
            description: description.into(),
            subcommands: Vec::new(),
        })
    }

    /// Adds a subcommand.
    #[must_use]
    pub fn with_subcommand(mut self, subcommand: SubcommandDefinition) -> Self {
        self.subcommands.push(subcommand);
        self
    }

    /// Returns the group name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the group description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the subcommands in declaration order.
    #[must_use]
    pub fn subcommands(&self) -> &[SubcommandDefinition] {
        &self.subcommands
    }
}

/// A slash command, optionally carrying subcommands and groups.
#[derive(Clone)]
pub struct CommandDefinition {
    name: String,
    payload: Option<CommandPayload>,
    groups: Vec<SubcommandGroupDefinition>,
    subcommands: Vec<SubcommandDefinition>,
    scope: RegistrationScope,
    guild_filter: Option<GuildFilter>,
    requirements: AuthorizationRequirements,
    handler: Option<Arc<dyn SlashCommandHandler>>,
    capabilities: HandlerCapabilities,
}

impl CommandDefinition {
    /// Creates a global command with no payload yet.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError`] when the name is empty or contains the
    /// path separator.
    pub fn new(name: impl Into<String>) -> Result<Self, DefinitionError> {
        Ok(Self {
            name: validate_name(name, PATH_SEPARATOR)?,
            payload: None,
            groups: Vec::new(),
            subcommands: Vec::new(),
            scope: RegistrationScope::Global,
            guild_filter: None,
            requirements: AuthorizationRequirements::none(),
            handler: None,
            capabilities: HandlerCapabilities::default(),
        })
    }

    /// Sets the payload sent to the platform.
    #[must_use]
    pub fn with_payload(mut self, payload: CommandPayload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Sets the handler executed when the command has no subcommands.
    #[must_use]
    pub fn with_handler(mut self, handler: Arc<dyn SlashCommandHandler>) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Adds a subcommand group.
    #[must_use]
    pub fn with_group(mut self, group: SubcommandGroupDefinition) -> Self {
        self.groups.push(group);
        self
    }

    /// Adds a subcommand directly under the command.
    #[must_use]
    pub fn with_subcommand(mut self, subcommand: SubcommandDefinition) -> Self {
        self.subcommands.push(subcommand);
        self
    }

    /// Registers the command per guild instead of globally.
    #[must_use]
    pub const fn guild_scoped(mut self) -> Self {
        self.scope = RegistrationScope::GuildScoped;
        self
    }

    /// Registers the command only in guilds accepted by `filter`.
    #[must_use]
    pub fn with_guild_filter(
        mut self,
        filter: impl Fn(GuildId) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.scope = RegistrationScope::GuildScoped;
        self.guild_filter = Some(Arc::new(filter));
        self
    }

    /// Sets authorization requirements for the leaf command.
    #[must_use]
    pub fn with_requirements(mut self, requirements: AuthorizationRequirements) -> Self {
        self.requirements = requirements;
        self
    }

    /// Opts the leaf command in to autocomplete.
    #[must_use]
    pub fn with_autocomplete(mut self, handler: Arc<dyn AutocompleteHandler>) -> Self {
        self.capabilities.autocomplete = Some(handler);
        self
    }

    /// Attaches a component handler binding.
    #[must_use]
    pub fn with_components(mut self, binding: ComponentBinding) -> Self {
        self.capabilities.components = Some(binding);
        self
    }

    /// Returns the command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the payload, if present.
    #[must_use]
    pub const fn payload(&self) -> Option<&CommandPayload> {
        self.payload.as_ref()
    }

    /// Returns the subcommand groups.
    #[must_use]
    pub fn groups(&self) -> &[SubcommandGroupDefinition] {
        &self.groups
    }

    /// Returns the direct subcommands.
    #[must_use]
    pub fn subcommands(&self) -> &[SubcommandDefinition] {
        &self.subcommands
    }

    /// Returns the registration scope.
    #[must_use]
    pub const fn scope(&self) -> RegistrationScope {
        self.scope
    }

    /// Returns the guild filter, if any.
    #[must_use]
    pub const fn guild_filter(&self) -> Option<&GuildFilter> {
        self.guild_filter.as_ref()
    }

    /// Returns the leaf authorization requirements.
    #[must_use]
    pub const fn requirements(&self) -> &AuthorizationRequirements {
        &self.requirements
    }

    /// Returns the leaf handler, if any.
    #[must_use]
    pub const fn handler(&self) -> Option<&Arc<dyn SlashCommandHandler>> {
        self.handler.as_ref()
    }

    /// Returns the optional capabilities.
    #[must_use]
    pub const fn capabilities(&self) -> &HandlerCapabilities {
        &self.capabilities
    }
}

impl fmt::Debug for CommandDefinition {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CommandDefinition")
            .field("name", &self.name)
            .field("payload", &self.payload)
            .field("groups", &self.groups)
            .field("subcommands", &self.subcommands)
            .field("scope", &self.scope)
            .field("guild_filter", &self.guild_filter.is_some())
            .field("requirements", &self.requirements)
            .field("capabilities", &self.capabilities)
            .finish_non_exhaustive()
    }
}

/// A user or message context-menu command.
#[derive(Clone)]
pub struct ContextCommandDefinition {
    name: String,
    kind: CommandKind,
    payload: CommandPayload,
    scope: RegistrationScope,
    guild_filter: Option<GuildFilter>,
    requirements: AuthorizationRequirements,
    handler: Arc<dyn ContextCommandHandler>,
    components: Option<ComponentBinding>,
}

impl ContextCommandDefinition {
    /// Creates a global context command.
    ///
    /// The kind is validated when the registry is built; definitions with a
    /// kind other than [`CommandKind::User`] or [`CommandKind::Message`] are
    /// rejected there.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::EmptyName`] when the name is blank.
    pub fn new(
        name: impl Into<String>,
        kind: CommandKind,
        handler: Arc<dyn ContextCommandHandler>,
    ) -> Result<Self, DefinitionError> {
        let trimmed = name.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(DefinitionError::EmptyName);
        }
        Ok(Self {
            name: trimmed,
            kind,
            payload: CommandPayload::context(),
            scope: RegistrationScope::Global,
            guild_filter: None,
            requirements: AuthorizationRequirements::none(),
            handler,
            components: None,
        })
    }

    /// Sets whether the command is usable by everyone by default.
    #[must_use]
    pub fn with_default_enabled(mut self, default_enabled: bool) -> Self {
        self.payload = self.payload.with_default_enabled(default_enabled);
        self
    }

    /// Registers the command per guild instead of globally.
    #[must_use]
    pub const fn guild_scoped(mut self) -> Self {
        self.scope = RegistrationScope::GuildScoped;
        self
    }

    /// Registers the command only in guilds accepted by `filter`.
    #[must_use]
    pub fn with_guild_filter(
        mut self,
        filter: impl Fn(GuildId) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.scope = RegistrationScope::GuildScoped;
        self.guild_filter = Some(Arc::new(filter));
        self
    }

    /// Sets authorization requirements.
    #[must_use]
    pub fn with_requirements(mut self, requirements: AuthorizationRequirements) -> Self {
        self.requirements = requirements;
        self
    }

    /// Attaches a component handler binding.
    #[must_use]
    pub fn with_components(mut self, binding: ComponentBinding) -> Self {
        self.components = Some(binding);
        self
    }

    /// Returns the command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared target kind.
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        self.kind
    }

    /// Returns the payload.
    #[must_use]
    pub const fn payload(&self) -> &CommandPayload {
        &self.payload
    }

    /// Returns the registration scope.
    #[must_use]
    pub const fn scope(&self) -> RegistrationScope {
        self.scope
    }

    /// Returns the guild filter, if any.
    #[must_use]
    pub const fn guild_filter(&self) -> Option<&GuildFilter> {
        self.guild_filter.as_ref()
    }

    /// Returns the authorization requirements.
    #[must_use]
    pub const fn requirements(&self) -> &AuthorizationRequirements {
        &self.requirements
    }

    /// Returns the handler.
    #[must_use]
    pub fn handler(&self) -> &Arc<dyn ContextCommandHandler> {
        &self.handler
    }

    /// Returns the component binding, if any.
    #[must_use]
    pub const fn components(&self) -> Option<&ComponentBinding> {
        self.components.as_ref()
    }
}

impl fmt::Debug for ContextCommandDefinition {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ContextCommandDefinition")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("scope", &self.scope)
            .field("guild_filter", &self.guild_filter.is_some())
            .field("requirements", &self.requirements)
            .field("components", &self.components)
            .finish_non_exhaustive()
    }
}

/// Anything a discovery source can yield.
#[derive(Debug, Clone)]
pub enum Definition {
    /// A slash command tree.
    Slash(CommandDefinition),
    /// A context-menu command.
    Context(ContextCommandDefinition),
    /// A component handler not attached to any command.
    Components(ComponentBinding),
}

impl From<CommandDefinition> for Definition {
    fn from(definition: CommandDefinition) -> Self {
        Self::Slash(definition)
    }
}

impl From<ContextCommandDefinition> for Definition {
    fn from(definition: ContextCommandDefinition) -> Self {
        Self::Context(definition)
    }
}

impl From<ComponentBinding> for Definition {
    fn from(binding: ComponentBinding) -> Self {
        Self::Components(binding)
    }
}
