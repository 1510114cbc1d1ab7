//! Financial derivation engine.

use feeburn_shared::EngineConfig;
use rust_decimal::Decimal;
use tracing::debug;

use super::directory::StaffDirectory;
use super::types::ProjectMetrics;
use super::{collection, cost, evm, revenue, schedule, variance};
use crate::project::ProjectSnapshot;

/// Stateless engine turning a project snapshot into a metrics snapshot.
///
/// Runs are pure and deterministic: nothing is cached and inputs are never
/// modified, so concurrent runs need no coordination.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinanceEngine {
    config: EngineConfig,
}

impl FinanceEngine {
    /// Creates an engine with the given policy.
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the policy the engine runs with.
    #[must_use]
    pub const fn config(&self) -> EngineConfig {
        self.config
    }

    /// Computes metrics using the completion percentage stored on the project.
    #[must_use]
    pub fn compute_persisted(&self, snapshot: &ProjectSnapshot) -> ProjectMetrics {
        self.compute(snapshot, snapshot.project.percent_complete)
    }

    /// Computes metrics for `snapshot` at `percent_complete`.
    ///
    /// `percent_complete` may be a live value that has not been saved to the
    /// project yet. It is assumed to be validated (0-100).
    #[must_use]
    pub fn compute(&self, snapshot: &ProjectSnapshot, percent_complete: Decimal) -> ProjectMetrics {
        let project = &snapshot.project;
        let staff = StaffDirectory::new(&snapshot.staff);

        let revenue = revenue::derive(project, &snapshot.payments);
        let collection = collection::derive(&snapshot.payments, &revenue);
        let schedule = schedule::derive(project, &revenue, self.config.stoppage_loss_factor);
        let actual = cost::actual(
            &snapshot.time_logs,
            &snapshot.expenses,
            &staff,
            project.overhead_multiplier,
            &schedule,
        );
        let planned = cost::planned(
            &snapshot.budget_labor,
            &snapshot.budget_expenses,
            &staff,
            project.overhead_multiplier,
        );
        let earned_value = evm::derive(percent_complete, &revenue, &actual, &planned);
        let variance = variance::derive(
            project,
            &snapshot.staff,
            &revenue,
            &actual,
            &planned,
            &earned_value,
        );

        debug!(
            project_id = %project.id,
            net_revenue = %revenue.net_revenue,
            total_burn = %actual.total_burn,
            bac = %planned.bac,
            cpi = %earned_value.cpi,
            "derived project metrics"
        );

        ProjectMetrics {
            project_id: project.id,
            currency: project.currency,
            revenue,
            collection,
            schedule,
            actual,
            planned,
            earned_value,
            variance,
        }
    }
}
