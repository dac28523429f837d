//! Concurrent fan-out of one check result to every registered notifier.
//!
//! The dispatcher owns a registry of [`Notifier`] trait objects assembled by
//! the caller from the scan-based plugin discovery and the in-process adapter
//! table. Each notifier runs in its own task; one notifier's crash or hang
//! never prevents the others from being attempted, and the dispatcher waits
//! for all of them before reporting.

mod discovery;
pub mod error;

pub use discovery::discover_scripts;
pub use error::DispatchError;

use std::sync::Arc;

use tokio::task::JoinSet;

use crate::{
    models::{CheckEvent, Delivery, NotifierInvocation, NotifierOutcome},
    notifiers::{Notifier, NotifierError},
};

/// Exit code the `notify` entry point reports when at least one notifier
/// failed. Deliberately distinct from any per-plugin exit code: the aggregate
/// only says that something failed, the per-notifier diagnostics say what.
pub const FAILURE_SENTINEL: i32 = 8;

/// Result of fanning one check event out to every notifier.
#[derive(Debug)]
pub struct DispatchSummary {
    /// One record per notifier, in completion order.
    pub invocations: Vec<NotifierInvocation>,
}

impl DispatchSummary {
    /// Whether every notifier succeeded (vacuously true for zero notifiers).
    pub fn all_succeeded(&self) -> bool {
        self.invocations.iter().all(NotifierInvocation::succeeded)
    }

    /// The aggregate process exit code: 0, or the failure sentinel.
    pub fn exit_code(&self) -> i32 {
        if self.all_succeeded() { 0 } else { FAILURE_SENTINEL }
    }
}

/// Fans a check event out to a set of notifiers, one concurrent task each.
pub struct NotifierDispatcher {
    notifiers: Vec<Arc<dyn Notifier>>,
}

impl NotifierDispatcher {
    /// Creates a dispatcher over the given registry of notifiers.
    pub fn new(notifiers: Vec<Arc<dyn Notifier>>) -> Self {
        Self { notifiers }
    }

    /// Number of registered notifiers.
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }

    /// Invokes every notifier concurrently and waits for all of them.
    ///
    /// `on_complete` is called with each invocation as it finishes so callers
    /// can surface diagnostics immediately; completion order carries no
    /// contract.
    pub async fn dispatch<F>(&self, event: CheckEvent, mut on_complete: F) -> DispatchSummary
    where
        F: FnMut(&NotifierInvocation),
    {
        let event = Arc::new(event);
        let mut tasks = JoinSet::new();

        for notifier in &self.notifiers {
            let notifier = Arc::clone(notifier);
            let event = Arc::clone(&event);
            tasks.spawn(async move {
                tracing::info!(notifier = %notifier.id(), "Notifying");
                let result = notifier.notify(&event).await;
                into_invocation(notifier.id(), result)
            });
        }

        let mut invocations = Vec::with_capacity(self.notifiers.len());
        while let Some(joined) = tasks.join_next().await {
            let invocation = match joined {
                Ok(invocation) => invocation,
                Err(e) => NotifierInvocation::failed_early("<notifier task>", e.to_string()),
            };
            on_complete(&invocation);
            invocations.push(invocation);
        }

        DispatchSummary { invocations }
    }
}

/// Folds an adapter result into the invocation record the summary keeps.
fn into_invocation(
    notifier_id: String,
    result: Result<Delivery, NotifierError>,
) -> NotifierInvocation {
    match result {
        Ok(delivery) => {
            let outcome = if delivery.exit_code == 0 {
                NotifierOutcome::Success
            } else {
                NotifierOutcome::Failure(delivery.exit_code)
            };
            NotifierInvocation {
                notifier_id,
                outcome,
                stdout: delivery.stdout,
                stderr: delivery.stderr,
            }
        }
        Err(e) => NotifierInvocation::failed_early(notifier_id, e.to_string()),
    }
}
