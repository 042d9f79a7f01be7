//! Builds the flat lookup tables the router resolves interactions against.
//!
//! A registry is built once per registration cycle from the discovered
//! definitions and is never mutated afterwards. Invalid definitions are
//! logged and left out; building never fails.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::command::domain::{
    AuthorizationRequirements, CommandData, CommandDefinition, CommandKind, CommandPath,
    CommandPayload, ComponentBinding, ContextCommandDefinition, Definition, DefinitionError,
    GuildFilter, HandlerCapabilities, RegistrationScope, SubcommandDefinition,
};
use crate::interaction::ports::{
    AutocompleteHandler, ComponentHandler, ContextCommandHandler, SlashCommandHandler,
};

const TARGET: &str = "switchyard::registry";

/// An executable slash command leaf.
#[derive(Clone)]
pub struct IndexedCommand {
    handler: Arc<dyn SlashCommandHandler>,
    requirements: Arc<AuthorizationRequirements>,
}

impl IndexedCommand {
    /// Returns the handler.
    #[must_use]
    pub fn handler(&self) -> &Arc<dyn SlashCommandHandler> {
        &self.handler
    }

    /// Returns the requirements checked before the handler runs.
    #[must_use]
    pub fn requirements(&self) -> &AuthorizationRequirements {
        &self.requirements
    }
}

impl fmt::Debug for IndexedCommand {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("IndexedCommand")
            .field("requirements", &self.requirements)
            .finish_non_exhaustive()
    }
}

/// An executable context-menu command.
#[derive(Clone)]
pub struct IndexedContextCommand {
    handler: Arc<dyn ContextCommandHandler>,
    requirements: Arc<AuthorizationRequirements>,
}

impl IndexedContextCommand {
    /// Returns the handler.
    #[must_use]
    pub fn handler(&self) -> &Arc<dyn ContextCommandHandler> {
        &self.handler
    }

    /// Returns the requirements checked before the handler runs.
    #[must_use]
    pub fn requirements(&self) -> &AuthorizationRequirements {
        &self.requirements
    }
}

impl fmt::Debug for IndexedContextCommand {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("IndexedContextCommand")
            .field("requirements", &self.requirements)
            .finish_non_exhaustive()
    }
}

/// A composed platform command together with where it is registered.
#[derive(Clone)]
pub struct ScopedCommand {
    data: CommandData,
    scope: RegistrationScope,
    guild_filter: Option<GuildFilter>,
}

impl ScopedCommand {
    /// Returns the data sent to the platform.
    #[must_use]
    pub const fn data(&self) -> &CommandData {
        &self.data
    }

    /// Returns the registration scope.
    #[must_use]
    pub const fn scope(&self) -> RegistrationScope {
        self.scope
    }

    /// Returns the per-guild inclusion predicate, if any.
    #[must_use]
    pub const fn guild_filter(&self) -> Option<&GuildFilter> {
        self.guild_filter.as_ref()
    }

    fn same_registration(&self, other: &Self) -> bool {
        self.scope == other.scope
            && self.data.name() == other.data.name()
            && self.data.kind() == other.data.kind()
    }
}

impl fmt::Debug for ScopedCommand {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ScopedCommand")
            .field("data", &self.data)
            .field("scope", &self.scope)
            .field("guild_filter", &self.guild_filter.is_some())
            .finish()
    }
}

/// Immutable lookup tables built from one discovery.
///
/// Colliding paths, names, and prefixes keep the entry built last.
#[derive(Default)]
pub struct IndexedRegistry {
    slash: HashMap<CommandPath, IndexedCommand>,
    message: HashMap<String, IndexedContextCommand>,
    user: HashMap<String, IndexedContextCommand>,
    autocomplete: HashMap<CommandPath, Arc<dyn AutocompleteHandler>>,
    components: HashMap<String, Arc<dyn ComponentHandler>>,
    commands: Vec<ScopedCommand>,
    rejected: Vec<DefinitionError>,
}

impl IndexedRegistry {
    /// Creates a registry with no entries.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Indexes `definitions` in order.
    #[must_use]
    pub fn build(definitions: &[Definition]) -> Self {
        let mut registry = Self::default();
        for definition in definitions {
            match definition {
                Definition::Slash(command) => registry.index_command(command),
                Definition::Context(command) => registry.index_context(command),
                Definition::Components(binding) => registry.index_components(binding),
            }
        }
        debug!(
            target: TARGET,
            slash = registry.slash.len(),
            message = registry.message.len(),
            user = registry.user.len(),
            autocomplete = registry.autocomplete.len(),
            components = registry.components.len(),
            rejected = registry.rejected.len(),
            "built interaction registry"
        );
        registry
    }

    fn index_command(&mut self, command: &CommandDefinition) {
        let Some(payload) = command.payload() else {
            self.reject(
                DefinitionError::MissingPayload(command.name().to_owned()),
                LogLevel::Warn,
            );
            return;
        };

        if let Some(binding) = command.capabilities().components() {
            self.index_components(binding);
        }

        let mut entries = Vec::new();
        for group in command.groups() {
            if group.subcommands().is_empty() {
                self.reject(
                    DefinitionError::EmptySubcommandGroup {
                        command: command.name().to_owned(),
                        group: group.name().to_owned(),
                    },
                    LogLevel::Warn,
                );
                continue;
            }
            let mut nested = Vec::with_capacity(group.subcommands().len());
            for subcommand in group.subcommands() {
                let path = CommandPath::grouped(command.name(), group.name(), subcommand.name());
                self.index_subcommand(path, subcommand);
                nested.push(subcommand.payload().subcommand_entry(subcommand.name()));
            }
            entries.push(CommandPayload::group_entry(
                group.description(),
                group.name(),
                nested,
            ));
        }
        for subcommand in command.subcommands() {
            let path = CommandPath::subcommand(command.name(), subcommand.name());
            self.index_subcommand(path, subcommand);
            entries.push(subcommand.payload().subcommand_entry(subcommand.name()));
        }

        let declares_nested = !command.groups().is_empty() || !command.subcommands().is_empty();
        if declares_nested && entries.is_empty() {
            warn!(
                target: TARGET,
                command = command.name(),
                "dropping command whose declared groups are all empty"
            );
            return;
        }
        if !declares_nested {
            let Some(handler) = command.handler() else {
                self.reject(
                    DefinitionError::MissingHandler(command.name().to_owned()),
                    LogLevel::Warn,
                );
                return;
            };
            let path = CommandPath::command(command.name());
            self.index_leaf(path, handler, command.requirements(), command.capabilities());
        }

        self.push_command(ScopedCommand {
            data: CommandData::new(
                command.name().to_owned(),
                CommandKind::ChatInput,
                payload.clone().with_options(entries),
            ),
            scope: command.scope(),
            guild_filter: command.guild_filter().cloned(),
        });
    }

    fn index_subcommand(&mut self, path: CommandPath, subcommand: &SubcommandDefinition) {
        if let Some(binding) = subcommand.capabilities().components() {
            self.index_components(binding);
        }
        self.index_leaf(
            path,
            subcommand.handler(),
            subcommand.requirements(),
            subcommand.capabilities(),
        );
    }

    fn index_leaf(
        &mut self,
        path: CommandPath,
        handler: &Arc<dyn SlashCommandHandler>,
        requirements: &AuthorizationRequirements,
        capabilities: &HandlerCapabilities,
    ) {
        if let Some(autocomplete) = capabilities.autocomplete() {
            self.autocomplete
                .insert(path.clone(), Arc::clone(autocomplete));
        }
        debug!(target: TARGET, path = %path, "indexed slash command");
        self.slash.insert(
            path,
            IndexedCommand {
                handler: Arc::clone(handler),
                requirements: Arc::new(requirements.clone()),
            },
        );
    }

    fn index_context(&mut self, command: &ContextCommandDefinition) {
        let index = match command.kind() {
            CommandKind::Message => &mut self.message,
            CommandKind::User => &mut self.user,
            kind @ (CommandKind::ChatInput | CommandKind::Unknown(_)) => {
                self.reject(
                    DefinitionError::InvalidTargetKind {
                        name: command.name().to_owned(),
                        kind,
                    },
                    LogLevel::Error,
                );
                return;
            }
        };
        index.insert(
            command.name().to_owned(),
            IndexedContextCommand {
                handler: Arc::clone(command.handler()),
                requirements: Arc::new(command.requirements().clone()),
            },
        );
        debug!(
            target: TARGET,
            command = command.name(),
            kind = %command.kind(),
            "indexed context command"
        );
        if let Some(binding) = command.components() {
            self.index_components(binding);
        }
        self.push_command(ScopedCommand {
            data: CommandData::new(
                command.name().to_owned(),
                command.kind(),
                command.payload().clone(),
            ),
            scope: command.scope(),
            guild_filter: command.guild_filter().cloned(),
        });
    }

    fn index_components(&mut self, binding: &ComponentBinding) {
        for (kind, prefix) in binding.prefixes() {
            debug!(
                target: TARGET,
                prefix = prefix.as_str(),
                ?kind,
                "indexed component prefix"
            );
            self.components
                .insert(prefix.clone(), Arc::clone(binding.handler()));
        }
    }

    fn push_command(&mut self, command: ScopedCommand) {
        self.commands
            .retain(|existing| !existing.same_registration(&command));
        self.commands.push(command);
    }

    fn reject(&mut self, reason: DefinitionError, level: LogLevel) {
        match level {
            LogLevel::Warn => warn!(target: TARGET, %reason, "dropping command definition"),
            LogLevel::Error => error!(target: TARGET, %reason, "rejecting command definition"),
        }
        self.rejected.push(reason);
    }

    /// Looks up the slash command registered under `path`.
    #[must_use]
    pub fn slash_command(&self, path: &CommandPath) -> Option<&IndexedCommand> {
        self.slash.get(path)
    }

    /// Looks up a context command by name and target kind.
    #[must_use]
    pub fn context_command(
        &self,
        name: &str,
        kind: CommandKind,
    ) -> Option<&IndexedContextCommand> {
        match kind {
            CommandKind::Message => self.message.get(name),
            CommandKind::User => self.user.get(name),
            CommandKind::ChatInput | CommandKind::Unknown(_) => None,
        }
    }

    /// Looks up the autocomplete handler for `path`.
    #[must_use]
    pub fn autocomplete(&self, path: &CommandPath) -> Option<&Arc<dyn AutocompleteHandler>> {
        self.autocomplete.get(path)
    }

    /// Looks up the component handler declared for `prefix`.
    #[must_use]
    pub fn component(&self, prefix: &str) -> Option<&Arc<dyn ComponentHandler>> {
        self.components.get(prefix)
    }

    /// Returns the commands to register, in discovery order.
    #[must_use]
    pub fn commands(&self) -> &[ScopedCommand] {
        &self.commands
    }

    /// Returns the reasons definitions were dropped while building.
    #[must_use]
    pub fn rejected(&self) -> &[DefinitionError] {
        &self.rejected
    }

    /// Returns the number of executable slash command paths.
    #[must_use]
    pub fn slash_len(&self) -> usize {
        self.slash.len()
    }
}

impl fmt::Debug for IndexedRegistry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut paths: Vec<_> = self.slash.keys().map(CommandPath::as_str).collect();
        paths.sort_unstable();
        formatter
            .debug_struct("IndexedRegistry")
            .field("slash", &paths)
            .field("message", &self.message.len())
            .field("user", &self.user.len())
            .field("autocomplete", &self.autocomplete.len())
            .field("components", &self.components.len())
            .field("commands", &self.commands)
            .field("rejected", &self.rejected)
            .finish()
    }
}

#[derive(Clone, Copy)]
enum LogLevel {
    Warn,
    Error,
}
