//! Variance stage: remaining budget, planned profit and utilization figures.

use rust_decimal::Decimal;

use super::directory::loaded_cost;
use super::percent_of;
use super::types::{
    ActualCost, EarnedValue, LoadedRate, PlannedCost, RevenueBreakdown, VarianceSummary,
};
use crate::project::{Project, Staff};

/// Derives the dashboard variance figures.
#[must_use]
pub fn derive(
    project: &Project,
    staff: &[Staff],
    revenue: &RevenueBreakdown,
    actual: &ActualCost,
    planned: &PlannedCost,
    earned_value: &EarnedValue,
) -> VarianceSummary {
    let planned_profit = project.total_contract_value - planned.bac;

    let loaded_rates = staff
        .iter()
        .map(|s| LoadedRate {
            staff_id: s.id,
            name: s.name.clone(),
            location: s.location,
            base_rate: s.base_rate,
            loaded_rate: loaded_cost(Decimal::ONE, s.base_rate, project.overhead_multiplier),
        })
        .collect();

    VarianceSummary {
        remaining_budget: revenue.production_budget - actual.total_burn,
        current_profit: earned_value.current_margin.saturating_mul(revenue.net_revenue)
            / Decimal::ONE_HUNDRED,
        margin_below_target: earned_value.current_margin < project.target_margin,
        planned_profit,
        margin_potential: percent_of(planned_profit, project.total_contract_value),
        cost_vs_bac_percent: percent_of(actual.total_burn, planned.bac),
        is_over_bac: actual.total_burn > planned.bac,
        hours_utilization_percent: percent_of(
            actual.total_actual_hours,
            planned.total_est_hours,
        ),
        is_over_hours: actual.total_actual_hours > planned.total_est_hours,
        loaded_rates,
    }
}
