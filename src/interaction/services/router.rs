//! Resolves inbound events to handlers against the published registry.

use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, error, warn};

use crate::command::domain::AuthorizationRequirements;
use crate::command::services::{IndexedCommand, IndexedContextCommand, IndexedRegistry};
use crate::interaction::domain::{
    ComponentKind, HandlerError, HandlerResult, InteractionEvent, RoutingError,
};
use crate::interaction::ports::{AutocompleteHandler, ComponentHandler};

const TARGET: &str = "switchyard::dispatch";

/// The handler an event resolved to.
#[derive(Clone)]
pub enum Route {
    /// A slash command leaf.
    SlashCommand(IndexedCommand),
    /// A context-menu command.
    ContextCommand(IndexedContextCommand),
    /// An autocomplete handler.
    Autocomplete(Arc<dyn AutocompleteHandler>),
    /// A component handler.
    Component(Arc<dyn ComponentHandler>),
    /// Nothing handles the event and that is not an error.
    Unhandled,
}

impl Route {
    /// Returns the requirements the gate checks, for command routes.
    #[must_use]
    pub fn requirements(&self) -> Option<&AuthorizationRequirements> {
        match self {
            Self::SlashCommand(command) => Some(command.requirements()),
            Self::ContextCommand(command) => Some(command.requirements()),
            Self::Autocomplete(_) | Self::Component(_) | Self::Unhandled => None,
        }
    }

    /// Runs the resolved handler for `event`.
    ///
    /// # Errors
    ///
    /// Returns whatever the handler returns, or a [`HandlerError`] when the
    /// route was resolved for a different kind of interaction.
    pub async fn invoke(&self, event: &InteractionEvent) -> HandlerResult {
        match (self, event) {
            (Self::SlashCommand(command), InteractionEvent::SlashCommand(slash)) => {
                command.handler().execute(slash).await
            }
            (Self::ContextCommand(command), InteractionEvent::ContextCommand(target)) => {
                command.handler().execute(target).await
            }
            (Self::Autocomplete(handler), InteractionEvent::Autocomplete(request)) => {
                handler.complete(request).await
            }
            (Self::Component(handler), InteractionEvent::Component(component)) => {
                match component.kind() {
                    ComponentKind::Button => handler.handle_button(component).await,
                    ComponentKind::SelectMenu => handler.handle_select_menu(component).await,
                    ComponentKind::Modal => handler.handle_modal(component).await,
                }
            }
            (Self::Unhandled, _) => Ok(()),
            (route, _) => {
                error!(
                    target: TARGET,
                    ?route,
                    kind = ?event.exception_kind(),
                    "route does not match the interaction"
                );
                Err(HandlerError::message("route does not match the interaction kind"))
            }
        }
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::SlashCommand(_) => "SlashCommand",
            Self::ContextCommand(_) => "ContextCommand",
            Self::Autocomplete(_) => "Autocomplete",
            Self::Component(_) => "Component",
            Self::Unhandled => "Unhandled",
        };
        formatter.write_str(name)
    }
}

/// Holds the currently published registry.
///
/// Publishing replaces the whole registry at once; in-flight routing keeps
/// the snapshot it started with.
#[derive(Debug, Default)]
pub struct InteractionRouter {
    registry: RwLock<Arc<IndexedRegistry>>,
}

impl InteractionRouter {
    /// Creates a router serving `registry`.
    #[must_use]
    pub fn new(registry: IndexedRegistry) -> Self {
        Self {
            registry: RwLock::new(Arc::new(registry)),
        }
    }

    /// Replaces the served registry.
    pub fn publish(&self, registry: IndexedRegistry) {
        let next = Arc::new(registry);
        *self
            .registry
            .write()
            .unwrap_or_else(PoisonError::into_inner) = next;
    }

    /// Returns the registry currently served.
    #[must_use]
    pub fn snapshot(&self) -> Arc<IndexedRegistry> {
        Arc::clone(&self.registry.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Resolves `event` against the currently served registry.
    ///
    /// # Errors
    ///
    /// See [`InteractionRouter::route`].
    pub fn resolve(&self, event: &InteractionEvent) -> Result<Route, RoutingError> {
        Self::route(&self.snapshot(), event)
    }

    /// Resolves `event` against `registry`.
    ///
    /// Autocomplete requests without a handler and components with an
    /// unknown prefix resolve to [`Route::Unhandled`].
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError`] when a slash or context command is not
    /// registered.
    pub fn route(
        registry: &IndexedRegistry,
        event: &InteractionEvent,
    ) -> Result<Route, RoutingError> {
        match event {
            InteractionEvent::SlashCommand(slash) => registry
                .slash_command(slash.path())
                .cloned()
                .map(Route::SlashCommand)
                .ok_or_else(|| RoutingError::SlashCommandNotRegistered(slash.path().clone())),
            InteractionEvent::ContextCommand(target) => registry
                .context_command(target.name(), target.kind())
                .cloned()
                .map(Route::ContextCommand)
                .ok_or_else(|| RoutingError::ContextCommandNotRegistered {
                    name: target.name().to_owned(),
                    kind: target.kind(),
                }),
            InteractionEvent::Autocomplete(request) => {
                let Some(handler) = registry.autocomplete(request.path()) else {
                    debug!(
                        target: TARGET,
                        path = %request.path(),
                        "no autocomplete handler registered"
                    );
                    return Ok(Route::Unhandled);
                };
                Ok(Route::Autocomplete(Arc::clone(handler)))
            }
            InteractionEvent::Component(component) => {
                let id = component.custom_id();
                let Some(handler) = registry.component(id.prefix()) else {
                    warn!(
                        target: TARGET,
                        custom_id = id.as_str(),
                        kind = ?component.kind(),
                        "component id could not be found"
                    );
                    return Ok(Route::Unhandled);
                };
                Ok(Route::Component(Arc::clone(handler)))
            }
        }
    }
}
