//! Derived metric types, one struct per engine stage.

use feeburn_shared::types::{BudgetLaborId, Currency, ProjectId, StaffId, TimeLogId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::project::StaffLocation;

/// Revenue stage output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueBreakdown {
    /// Sum of variation order amounts.
    pub vo_total: Decimal,
    /// Contract value plus variation orders.
    pub net_revenue: Decimal,
    /// Profit the project is expected to retain.
    pub profit_target_amount: Decimal,
    /// Revenue left to spend on production after the profit target.
    pub production_budget: Decimal,
}

/// Payment collection stage output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSummary {
    /// Amount invoiced (invoiced, partially paid or fully paid).
    pub total_invoiced: Decimal,
    /// Amount received.
    pub total_collected: Decimal,
    /// Invoiced share of net revenue (0-100).
    pub financial_completion_rate: Decimal,
    /// Net revenue not invoiced yet.
    pub pending_invoicing: Decimal,
    /// Invoiced but not collected.
    pub outstanding_receivables: Decimal,
}

/// Schedule and stoppage stage output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleImpact {
    /// Contract duration in days, never below 1.
    pub duration_days: i64,
    /// Profit target spread evenly over the duration.
    pub daily_profit_target: Decimal,
    /// Days the project was paused.
    pub stoppage_days: u32,
    /// Profit written off for the stoppage.
    pub stoppage_loss: Decimal,
}

/// Costing of a single labor line (a time log or a planned labor line).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborLineCost<Id> {
    /// Line ID.
    pub line_id: Id,
    /// Referenced staff member.
    pub staff_id: StaffId,
    /// Staff name, if the reference resolved.
    pub staff_name: Option<String>,
    /// Hours counted for this line (zero when unresolved).
    pub hours: Decimal,
    /// Loaded cost of the line (zero when unresolved).
    pub loaded_cost: Decimal,
    /// Whether the staff reference resolved.
    pub resolved: bool,
}

/// Actual cost (burn) stage output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActualCost {
    /// Loaded labor cost of all logged hours.
    pub total_labor_loaded: Decimal,
    /// Hours logged against resolved staff.
    pub total_actual_hours: Decimal,
    /// Loaded labor cost of Riyadh staff.
    pub riyadh_cost: Decimal,
    /// Loaded labor cost of Cairo staff.
    pub cairo_cost: Decimal,
    /// Non-reimbursable expenses.
    pub total_expenses: Decimal,
    /// Reimbursable expenses, reported but never burned.
    pub reimbursable_expenses: Decimal,
    /// Labor plus expenses plus stoppage loss.
    pub total_burn: Decimal,
    /// Per time log costing.
    pub labor_lines: Vec<LaborLineCost<TimeLogId>>,
}

/// Planned cost (budget at completion) stage output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedCost {
    /// Loaded cost of all planned hours.
    pub total_est_labor_cost: Decimal,
    /// Planned hours against resolved staff.
    pub total_est_hours: Decimal,
    /// Planned non-labor spend.
    pub total_est_expenses: Decimal,
    /// Budget at completion.
    pub bac: Decimal,
    /// Per planned labor line costing.
    pub labor_lines: Vec<LaborLineCost<BudgetLaborId>>,
}

/// Earned value stage output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarnedValue {
    /// Completion percentage the metrics were computed with.
    pub percent_complete: Decimal,
    /// Earned value.
    pub ev: Decimal,
    /// Cost performance index, zero when nothing has been burned.
    pub cpi: Decimal,
    /// True when CPI is at least 1.
    pub is_under_budget: bool,
    /// Margin left after burn, as a percentage of net revenue.
    pub current_margin: Decimal,
    /// Burn as a percentage of the production budget.
    pub budget_utilized: Decimal,
}

/// Loaded hourly rate of a staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadedRate {
    /// Staff ID.
    pub staff_id: StaffId,
    /// Staff name.
    pub name: String,
    /// Office location.
    pub location: StaffLocation,
    /// Hourly base rate.
    pub base_rate: Decimal,
    /// Base rate times the overhead multiplier.
    pub loaded_rate: Decimal,
}

/// Variance stage output: dashboard figures derived from the earlier stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarianceSummary {
    /// Production budget minus burn.
    pub remaining_budget: Decimal,
    /// Profit at the current margin.
    pub current_profit: Decimal,
    /// True when the current margin is below the target margin.
    pub margin_below_target: bool,
    /// Contract value minus budget at completion.
    pub planned_profit: Decimal,
    /// Planned profit as a percentage of contract value.
    pub margin_potential: Decimal,
    /// Burn as a percentage of budget at completion.
    pub cost_vs_bac_percent: Decimal,
    /// True when burn exceeds budget at completion.
    pub is_over_bac: bool,
    /// Actual hours as a percentage of planned hours.
    pub hours_utilization_percent: Decimal,
    /// True when actual hours exceed planned hours.
    pub is_over_hours: bool,
    /// Loaded rate per staff member, in input order.
    pub loaded_rates: Vec<LoadedRate>,
}

/// Complete metrics snapshot for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetrics {
    /// Project ID.
    pub project_id: ProjectId,
    /// Currency of every amount below.
    pub currency: Currency,
    /// Revenue stage.
    pub revenue: RevenueBreakdown,
    /// Payment collection stage.
    pub collection: CollectionSummary,
    /// Schedule and stoppage stage.
    pub schedule: ScheduleImpact,
    /// Actual cost stage.
    pub actual: ActualCost,
    /// Planned cost stage.
    pub planned: PlannedCost,
    /// Earned value stage.
    pub earned_value: EarnedValue,
    /// Variance stage.
    pub variance: VarianceSummary,
}
