//! Earned value stage.

use rust_decimal::Decimal;

use super::{percent_of, ratio};
use super::types::{ActualCost, EarnedValue, PlannedCost, RevenueBreakdown};

/// Derives earned value, CPI and margin figures.
///
/// CPI is zero rather than undefined while nothing has been burned.
#[must_use]
pub fn derive(
    percent_complete: Decimal,
    revenue: &RevenueBreakdown,
    actual: &ActualCost,
    planned: &PlannedCost,
) -> EarnedValue {
    let ev = planned.bac * (percent_complete / Decimal::ONE_HUNDRED);
    let cpi = if actual.total_burn > Decimal::ZERO {
        ratio(ev, actual.total_burn)
    } else {
        Decimal::ZERO
    };

    EarnedValue {
        percent_complete,
        ev,
        cpi,
        is_under_budget: cpi >= Decimal::ONE,
        current_margin: percent_of(revenue.net_revenue - actual.total_burn, revenue.net_revenue),
        budget_utilized: percent_of(actual.total_burn, revenue.production_budget),
    }
}
