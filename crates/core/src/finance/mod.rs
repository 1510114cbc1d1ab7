//! Financial derivation engine.
//!
//! Converts one project's record set into earned-value, cost-distribution and
//! variance metrics. Stages run in a fixed order and each stage function only
//! receives the outputs of the stages before it:
//!
//! revenue → collection → schedule → actual cost → planned cost → earned value → variance

pub mod collection;
pub mod cost;
pub mod directory;
pub mod engine;
pub mod evm;
pub mod revenue;
pub mod schedule;
pub mod types;
pub mod variance;


use rust_decimal::Decimal;

pub use directory::StaffDirectory;
pub use engine::FinanceEngine;
pub use types::{
    ActualCost, CollectionSummary, EarnedValue, LaborLineCost, LoadedRate, PlannedCost,
    ProjectMetrics, RevenueBreakdown, ScheduleImpact, VarianceSummary,
};

/// `part / whole`, saturating at `Decimal::MAX`/`Decimal::MIN` instead of overflowing.
///
/// Callers guard against a zero `whole`.
pub(crate) fn ratio(part: Decimal, whole: Decimal) -> Decimal {
    part.checked_div(whole).unwrap_or_else(|| {
        if part.is_sign_negative() == whole.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    })
}

/// Expresses `part` as a percentage of `whole`, or zero when `whole` is not positive.
pub(crate) fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole > Decimal::ZERO {
        ratio(part, whole).saturating_mul(Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    }
}
