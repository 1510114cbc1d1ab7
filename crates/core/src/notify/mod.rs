//! Change notification for project records.
//!
//! Writers publish a [`ProjectChange`] after mutating any record of a project;
//! listeners re-run the engine for that project. The engine itself never
//! subscribes.

use feeburn_shared::types::ProjectId;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{trace, warn};

/// Default number of changes buffered per listener before it lags.
pub const DEFAULT_CAPACITY: usize = 256;

/// Kind of record that changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeKind {
    /// The project record itself.
    Project,
    /// A staff record.
    Staff,
    /// A planned labor line.
    BudgetLabor,
    /// A planned expense line.
    BudgetExpense,
    /// A time log.
    TimeLog,
    /// An actual expense.
    Expense,
    /// A payment or variation order.
    Payment,
}

/// A change to one of a project's records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectChange {
    /// Project whose metrics are now stale.
    pub project_id: ProjectId,
    /// What changed.
    pub kind: ChangeKind,
}

/// Fan-out channel for [`ProjectChange`] events.
#[derive(Debug, Clone)]
pub struct ChangeNotifier {
    sender: broadcast::Sender<ProjectChange>,
}

impl ChangeNotifier {
    /// Creates a notifier buffering up to `capacity` changes per listener (at least 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Registers a listener. It only sees changes published after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ProjectChange> {
        self.sender.subscribe()
    }

    /// Publishes a change and returns how many listeners received it.
    ///
    /// Publishing with no listeners is not an error and returns 0.
    pub fn publish(&self, change: ProjectChange) -> usize {
        let reached = self.sender.send(change).unwrap_or(0);
        trace!(project_id = %change.project_id, kind = ?change.kind, reached, "published project change");
        reached
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Feeds every change received on `rx` to `on_change` until all notifiers are dropped.
///
/// A listener that falls behind skips the changes it missed and carries on.
/// Returns the number of changes handled.
pub async fn run_listener<F>(mut rx: broadcast::Receiver<ProjectChange>, mut on_change: F) -> usize
where
    F: FnMut(ProjectChange),
{
    let mut handled = 0;
    loop {
        match rx.recv().await {
            Ok(change) => {
                on_change(change);
                handled += 1;
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                warn!(skipped, "Change listener lagged");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
    handled
}
