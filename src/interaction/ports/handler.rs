//! Handler ports implemented by application command code.

use async_trait::async_trait;

use crate::interaction::domain::{
    AutocompleteEvent, ComponentEvent, ContextCommandEvent, HandlerResult, SlashCommandEvent,
};

/// Executes a slash command or subcommand.
#[async_trait]
pub trait SlashCommandHandler: Send + Sync {
    /// Runs the command.
    ///
    /// # Errors
    ///
    /// Returned errors are reported to listeners as command exceptions.
    async fn execute(&self, event: &SlashCommandEvent) -> HandlerResult;
}

/// Executes a user or message context-menu command.
#[async_trait]
pub trait ContextCommandHandler: Send + Sync {
    /// Runs the command.
    ///
    /// # Errors
    ///
    /// Returned errors are reported to listeners as command exceptions.
    async fn execute(&self, event: &ContextCommandEvent) -> HandlerResult;
}

/// Supplies option suggestions for a command.
#[async_trait]
pub trait AutocompleteHandler: Send + Sync {
    /// Responds to an autocomplete request.
    ///
    /// # Errors
    ///
    /// Returned errors are reported to listeners as autocomplete exceptions.
    async fn complete(&self, event: &AutocompleteEvent) -> HandlerResult;
}

/// Handles buttons, select menus, and modals whose custom id prefix the
/// handler declared.
///
/// Every method defaults to a no-op so implementors only override the
/// component kinds they registered for.
#[async_trait]
pub trait ComponentHandler: Send + Sync {
    /// Handles a button press.
    ///
    /// # Errors
    ///
    /// Returned errors are reported to listeners as component exceptions.
    async fn handle_button(&self, event: &ComponentEvent) -> HandlerResult {
        let _ = event;
        Ok(())
    }

    /// Handles a select menu choice.
    ///
    /// # Errors
    ///
    /// Returned errors are reported to listeners as component exceptions.
    async fn handle_select_menu(&self, event: &ComponentEvent) -> HandlerResult {
        let _ = event;
        Ok(())
    }

    /// Handles a modal submission.
    ///
    /// # Errors
    ///
    /// Returned errors are reported to listeners as modal exceptions.
    async fn handle_modal(&self, event: &ComponentEvent) -> HandlerResult {
        let _ = event;
        Ok(())
    }
}
