//! Revenue stage.

use rust_decimal::Decimal;

use super::types::RevenueBreakdown;
use crate::project::{Payment, PaymentType, Project};

/// Derives net revenue and the production budget.
///
/// Contract payments are already part of the contract value; only variation
/// orders add to it.
#[must_use]
pub fn derive(project: &Project, payments: &[Payment]) -> RevenueBreakdown {
    let vo_total: Decimal = payments
        .iter()
        .filter(|p| p.payment_type == PaymentType::Vo)
        .map(|p| p.amount)
        .sum();

    let net_revenue = project.total_contract_value + vo_total;
    let profit_target_amount = net_revenue * (project.target_margin / Decimal::ONE_HUNDRED);
    let production_budget = net_revenue - profit_target_amount;

    RevenueBreakdown {
        vo_total,
        net_revenue,
        profit_target_amount,
        production_budget,
    }
}
