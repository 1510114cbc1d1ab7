//! Project metrics endpoint.

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
};
use feeburn_core::finance::{LaborLineCost, LoadedRate, ProjectMetrics};
use feeburn_core::input::{InputError, RawProjectSnapshot, parse_percent_complete};
use feeburn_core::project::{ProjectSnapshot, StaffLocation};
use feeburn_shared::AppError;
use feeburn_shared::types::{BudgetLaborId, Currency, ProjectId, StaffId, TimeLogId};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error_response;
use crate::AppState;

/// Creates the metrics routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/metrics", post(compute_metrics))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for computing project metrics.
#[derive(Debug, Deserialize)]
pub struct MetricsRequest {
    /// The project's full record set.
    pub snapshot: RawProjectSnapshot,
    /// Live completion percentage (0-100); the persisted value is used when absent.
    #[serde(default)]
    pub percent_complete: Option<String>,
}

/// Metrics response. Money has 2 decimal places, ratios 4, percentages 2.
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    /// Project ID.
    pub project_id: ProjectId,
    /// Currency of all money amounts.
    pub currency: Currency,
    /// Revenue figures.
    pub revenue: RevenueResponse,
    /// Invoicing and collection figures.
    pub collection: CollectionResponse,
    /// Schedule and stoppage figures.
    pub schedule: ScheduleResponse,
    /// Actual cost figures.
    pub actual: ActualCostResponse,
    /// Planned cost figures.
    pub planned: PlannedCostResponse,
    /// Earned value figures.
    pub earned_value: EarnedValueResponse,
    /// Variance figures.
    pub variance: VarianceResponse,
}

/// Revenue response.
#[derive(Debug, Serialize)]
pub struct RevenueResponse {
    /// Sum of variation orders.
    pub vo_total: String,
    /// Contract value plus variation orders.
    pub net_revenue: String,
    /// Profit the project is expected to make.
    pub profit_target_amount: String,
    /// Revenue left for production after the profit target.
    pub production_budget: String,
}

/// Collection response.
#[derive(Debug, Serialize)]
pub struct CollectionResponse {
    /// Sum of invoiced payments.
    pub total_invoiced: String,
    /// Sum actually received.
    pub total_collected: String,
    /// Invoiced share of net revenue.
    pub financial_completion_rate: String,
    /// Net revenue not yet invoiced.
    pub pending_invoicing: String,
    /// Invoiced but not yet collected.
    pub outstanding_receivables: String,
}

/// Schedule response.
#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    /// Contract duration in days.
    pub duration_days: i64,
    /// Profit target per contract day.
    pub daily_profit_target: String,
    /// Days the project was paused.
    pub stoppage_days: u32,
    /// Loss attributed to stoppage.
    pub stoppage_loss: String,
}

/// One labor line.
#[derive(Debug, Serialize)]
pub struct LaborLineResponse<Id> {
    /// Time log or budget line ID.
    pub line_id: Id,
    /// Referenced staff member.
    pub staff_id: StaffId,
    /// Staff name, absent when the reference dangles.
    pub staff_name: Option<String>,
    /// Hours counted.
    pub hours: String,
    /// Loaded cost.
    pub loaded_cost: String,
    /// Whether the staff reference resolved.
    pub resolved: bool,
}

/// Actual cost response.
#[derive(Debug, Serialize)]
pub struct ActualCostResponse {
    /// Loaded labor cost.
    pub total_labor_loaded: String,
    /// Hours logged against known staff.
    pub total_actual_hours: String,
    /// Loaded labor cost of Riyadh staff.
    pub riyadh_cost: String,
    /// Loaded labor cost of Cairo staff.
    pub cairo_cost: String,
    /// Non-reimbursable expenses.
    pub total_expenses: String,
    /// Reimbursable expenses, excluded from burn.
    pub reimbursable_expenses: String,
    /// Labor plus expenses plus stoppage loss.
    pub total_burn: String,
    /// Per time log breakdown.
    pub labor_lines: Vec<LaborLineResponse<TimeLogId>>,
}

/// Planned cost response.
#[derive(Debug, Serialize)]
pub struct PlannedCostResponse {
    /// Planned loaded labor cost.
    pub total_est_labor_cost: String,
    /// Planned hours against known staff.
    pub total_est_hours: String,
    /// Planned expenses.
    pub total_est_expenses: String,
    /// Budget at completion.
    pub bac: String,
    /// Per budget line breakdown.
    pub labor_lines: Vec<LaborLineResponse<BudgetLaborId>>,
}

/// Earned value response.
#[derive(Debug, Serialize)]
pub struct EarnedValueResponse {
    /// Completion percentage used.
    pub percent_complete: String,
    /// Earned value.
    pub ev: String,
    /// Cost performance index.
    pub cpi: String,
    /// CPI at or above 1.
    pub is_under_budget: bool,
    /// Current margin on net revenue.
    pub current_margin: String,
    /// Burn as a share of the production budget.
    pub budget_utilized: String,
}

/// Loaded rate of one staff member.
#[derive(Debug, Serialize)]
pub struct LoadedRateResponse {
    /// Staff ID.
    pub staff_id: StaffId,
    /// Staff name.
    pub name: String,
    /// Office location.
    pub location: StaffLocation,
    /// Hourly base rate.
    pub base_rate: String,
    /// Hourly rate with overhead.
    pub loaded_rate: String,
}

/// Variance response.
#[derive(Debug, Serialize)]
pub struct VarianceResponse {
    /// Production budget minus burn.
    pub remaining_budget: String,
    /// Current profit in money.
    pub current_profit: String,
    /// Current margin is under the target margin.
    pub margin_below_target: bool,
    /// Contract value minus BAC.
    pub planned_profit: String,
    /// Planned profit as a share of contract value.
    pub margin_potential: String,
    /// Burn as a share of BAC.
    pub cost_vs_bac_percent: String,
    /// Burn exceeds BAC.
    pub is_over_bac: bool,
    /// Logged hours as a share of planned hours.
    pub hours_utilization_percent: String,
    /// Logged hours exceed planned hours.
    pub is_over_hours: bool,
    /// Loaded rate per staff member.
    pub loaded_rates: Vec<LoadedRateResponse>,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Rounds half away from zero to `dp` places and pads to exactly `dp` places.
fn format_rounded(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.prec$}", prec = dp as usize)
}

/// Formats a Decimal as a string with 2 decimal places.
fn format_money(amount: Decimal) -> String {
    format_rounded(amount, 2)
}

/// Formats a Decimal as a string with 4 decimal places.
fn format_ratio(ratio: Decimal) -> String {
    format_rounded(ratio, 4)
}

/// Formats a Decimal as a string with 2 decimal places.
fn format_percent(percent: Decimal) -> String {
    format_rounded(percent, 2)
}

fn labor_lines<Id: Copy>(lines: &[LaborLineCost<Id>]) -> Vec<LaborLineResponse<Id>> {
    lines
        .iter()
        .map(|l| LaborLineResponse {
            line_id: l.line_id,
            staff_id: l.staff_id,
            staff_name: l.staff_name.clone(),
            hours: l.hours.to_string(),
            loaded_cost: format_money(l.loaded_cost),
            resolved: l.resolved,
        })
        .collect()
}

fn loaded_rate(rate: &LoadedRate) -> LoadedRateResponse {
    LoadedRateResponse {
        staff_id: rate.staff_id,
        name: rate.name.clone(),
        location: rate.location,
        base_rate: format_money(rate.base_rate),
        loaded_rate: format_money(rate.loaded_rate),
    }
}

impl From<&ProjectMetrics> for MetricsResponse {
    fn from(m: &ProjectMetrics) -> Self {
        Self {
            project_id: m.project_id,
            currency: m.currency,
            revenue: RevenueResponse {
                vo_total: format_money(m.revenue.vo_total),
                net_revenue: format_money(m.revenue.net_revenue),
                profit_target_amount: format_money(m.revenue.profit_target_amount),
                production_budget: format_money(m.revenue.production_budget),
            },
            collection: CollectionResponse {
                total_invoiced: format_money(m.collection.total_invoiced),
                total_collected: format_money(m.collection.total_collected),
                financial_completion_rate: format_percent(m.collection.financial_completion_rate),
                pending_invoicing: format_money(m.collection.pending_invoicing),
                outstanding_receivables: format_money(m.collection.outstanding_receivables),
            },
            schedule: ScheduleResponse {
                duration_days: m.schedule.duration_days,
                daily_profit_target: format_money(m.schedule.daily_profit_target),
                stoppage_days: m.schedule.stoppage_days,
                stoppage_loss: format_money(m.schedule.stoppage_loss),
            },
            actual: ActualCostResponse {
                total_labor_loaded: format_money(m.actual.total_labor_loaded),
                total_actual_hours: m.actual.total_actual_hours.to_string(),
                riyadh_cost: format_money(m.actual.riyadh_cost),
                cairo_cost: format_money(m.actual.cairo_cost),
                total_expenses: format_money(m.actual.total_expenses),
                reimbursable_expenses: format_money(m.actual.reimbursable_expenses),
                total_burn: format_money(m.actual.total_burn),
                labor_lines: labor_lines(&m.actual.labor_lines),
            },
            planned: PlannedCostResponse {
                total_est_labor_cost: format_money(m.planned.total_est_labor_cost),
                total_est_hours: m.planned.total_est_hours.to_string(),
                total_est_expenses: format_money(m.planned.total_est_expenses),
                bac: format_money(m.planned.bac),
                labor_lines: labor_lines(&m.planned.labor_lines),
            },
            earned_value: EarnedValueResponse {
                percent_complete: format_percent(m.earned_value.percent_complete),
                ev: format_money(m.earned_value.ev),
                cpi: format_ratio(m.earned_value.cpi),
                is_under_budget: m.earned_value.is_under_budget,
                current_margin: format_percent(m.earned_value.current_margin),
                budget_utilized: format_percent(m.earned_value.budget_utilized),
            },
            variance: VarianceResponse {
                remaining_budget: format_money(m.variance.remaining_budget),
                current_profit: format_money(m.variance.current_profit),
                margin_below_target: m.variance.margin_below_target,
                planned_profit: format_money(m.variance.planned_profit),
                margin_potential: format_percent(m.variance.margin_potential),
                cost_vs_bac_percent: format_percent(m.variance.cost_vs_bac_percent),
                is_over_bac: m.variance.is_over_bac,
                hours_utilization_percent: format_percent(m.variance.hours_utilization_percent),
                is_over_hours: m.variance.is_over_hours,
                loaded_rates: m.variance.loaded_rates.iter().map(loaded_rate).collect(),
            },
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /metrics
async fn compute_metrics(
    State(state): State<AppState>,
    Json(request): Json<MetricsRequest>,
) -> Response {
    match derive(&state, request) {
        Ok(metrics) => Json(MetricsResponse::from(&metrics)).into_response(),
        Err(err) => error_response(&AppError::from(err)),
    }
}

fn derive(state: &AppState, request: MetricsRequest) -> Result<ProjectMetrics, InputError> {
    let snapshot = ProjectSnapshot::try_from(request.snapshot)?;
    let percent_complete = match request.percent_complete.as_deref() {
        Some(raw) => parse_percent_complete(raw)?,
        None => snapshot.project.percent_complete,
    };

    let metrics = state.engine.compute(&snapshot, percent_complete);
    info!(
        project_id = %metrics.project_id,
        cpi = %metrics.earned_value.cpi,
        "Computed project metrics"
    );
    Ok(metrics)
}
