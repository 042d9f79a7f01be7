//! Runs each inbound interaction as an independent task.

use std::any::Any;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, error, warn};

use super::{GatePolicy, InteractionRouter, Route, authorize};
use crate::interaction::domain::{
    ExceptionKind, InteractionContext, InteractionError, InteractionEvent,
    InteractionNotification,
};
use crate::interaction::ports::ListenerSet;

const TARGET: &str = "switchyard::dispatch";

/// Default time allowed between submission and handler start.
pub const DEFAULT_ACK_BUDGET: Duration = Duration::from_millis(2500);

/// How a dispatched interaction ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The handler ran and returned successfully.
    Completed,
    /// Nothing handles the event; nothing ran.
    Unhandled,
    /// The command is not registered; listeners were notified.
    NotRegistered,
    /// The gate blocked the command; listeners were notified.
    Denied,
    /// The handler returned an error; listeners were notified.
    Failed,
    /// The handler panicked; listeners were notified.
    Panicked,
}

/// Submits interactions to the runtime, gating and isolating each one.
#[derive(Debug, Clone)]
pub struct InteractionDispatcher {
    router: Arc<InteractionRouter>,
    listeners: Arc<ListenerSet>,
    permits: Arc<Semaphore>,
    policy: GatePolicy,
    ack_budget: Duration,
}

impl InteractionDispatcher {
    /// Creates a dispatcher running at most `max_concurrent` handlers at
    /// once.
    #[must_use]
    pub fn new(
        router: Arc<InteractionRouter>,
        listeners: ListenerSet,
        max_concurrent: NonZeroUsize,
    ) -> Self {
        Self {
            router,
            listeners: Arc::new(listeners),
            permits: Arc::new(Semaphore::new(max_concurrent.get())),
            policy: GatePolicy::default(),
            ack_budget: DEFAULT_ACK_BUDGET,
        }
    }

    /// Sets the gate policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: GatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets how long routing may take before a late-start warning.
    #[must_use]
    pub const fn with_ack_budget(mut self, ack_budget: Duration) -> Self {
        self.ack_budget = ack_budget;
        self
    }

    /// Returns the registered listeners.
    #[must_use]
    pub fn listeners(&self) -> &ListenerSet {
        &self.listeners
    }

    /// Spawns a task processing `event` and returns immediately.
    ///
    /// Must be called from within a Tokio runtime. Dropping the returned
    /// handle does not cancel the task.
    #[must_use = "drop the handle explicitly to detach the task"]
    pub fn dispatch(&self, event: InteractionEvent) -> JoinHandle<DispatchOutcome> {
        let worker = self.clone();
        let submitted = Instant::now();
        tokio::spawn(async move { worker.run(event, submitted).await })
    }

    /// Processes `event` on the current task.
    ///
    /// Handler errors and panics are reported to listeners and never
    /// propagate to the caller.
    pub async fn process(&self, event: InteractionEvent) -> DispatchOutcome {
        self.run(event, Instant::now()).await
    }

    async fn run(&self, event: InteractionEvent, submitted: Instant) -> DispatchOutcome {
        let Ok(_permit) = self.permits.acquire().await else {
            error!(target: TARGET, "dispatch permits closed; dropping interaction");
            return DispatchOutcome::Unhandled;
        };

        let context = event.context().clone();
        let kind = event.exception_kind();
        let route = match self.router.resolve(&event) {
            Ok(Route::Unhandled) => return DispatchOutcome::Unhandled,
            Ok(route) => route,
            Err(err) => {
                debug!(target: TARGET, error = %err, "interaction did not resolve");
                self.notify_exception(kind, context, err.into());
                return DispatchOutcome::NotRegistered;
            }
        };

        if let Some(requirements) = route.requirements()
            && let Err(denial) = authorize(requirements, &context, self.policy)
        {
            debug!(target: TARGET, user = %context.user(), ?denial, "interaction blocked");
            self.listeners.notify(&denial.into_notification(context));
            return DispatchOutcome::Denied;
        }

        let waited = submitted.elapsed();
        if waited > self.ack_budget {
            warn!(
                target: TARGET,
                waited_ms = waited.as_millis(),
                budget_ms = self.ack_budget.as_millis(),
                "handler started after the acknowledgement budget"
            );
        }

        let invocation = tokio::spawn(async move { route.invoke(&event).await });
        match invocation.await {
            Ok(Ok(())) => DispatchOutcome::Completed,
            Ok(Err(err)) => {
                self.notify_exception(kind, context, err.into());
                DispatchOutcome::Failed
            }
            Err(join_error) => {
                let message = describe_join_error(join_error);
                error!(target: TARGET, %message, "interaction handler panicked");
                self.notify_exception(kind, context, InteractionError::HandlerPanicked(message));
                DispatchOutcome::Panicked
            }
        }
    }

    fn notify_exception(
        &self,
        kind: ExceptionKind,
        context: InteractionContext,
        error: InteractionError,
    ) {
        self.listeners.notify(&InteractionNotification::Exception {
            kind,
            context,
            error,
        });
    }
}

fn describe_join_error(join_error: JoinError) -> String {
    if !join_error.is_panic() {
        return join_error.to_string();
    }
    let payload: Box<dyn Any + Send> = join_error.into_panic();
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "handler panicked with a non-string payload".to_owned())
}
