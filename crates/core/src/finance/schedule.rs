//! Schedule and stoppage stage.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::{RevenueBreakdown, ScheduleImpact};
use crate::project::Project;

/// Whole days from `start` to `end`, floored at 1.
///
/// Zero-length and inverted ranges are accepted and yield 1.
#[must_use]
pub fn duration_days(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days().max(1)
}

/// Derives the daily profit target and the loss attributed to stoppage days.
#[must_use]
pub fn derive(
    project: &Project,
    revenue: &RevenueBreakdown,
    stoppage_loss_factor: Decimal,
) -> ScheduleImpact {
    let duration_days = duration_days(project.start_date, project.end_date);
    let daily_profit_target = revenue.profit_target_amount / Decimal::from(duration_days);
    let stoppage_loss =
        daily_profit_target * Decimal::from(project.stoppage_days) * stoppage_loss_factor;

    ScheduleImpact {
        duration_days,
        daily_profit_target,
        stoppage_days: project.stoppage_days,
        stoppage_loss,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::tests::project;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(date(2024, 1, 1), date(2024, 12, 31), 365)]
    #[case(date(2024, 1, 1), date(2024, 1, 2), 1)]
    #[case(date(2024, 1, 1), date(2024, 1, 1), 1)]
    #[case(date(2024, 12, 31), date(2024, 1, 1), 1)]
    #[case(date(2023, 2, 1), date(2023, 3, 1), 28)]
    fn test_duration_days(#[case] start: NaiveDate, #[case] end: NaiveDate, #[case] expected: i64) {
        assert_eq!(duration_days(start, end), expected);
    }

    #[test]
    fn test_stoppage_loss() {
        let mut project = project(dec!(182500), dec!(20));
        project.start_date = date(2024, 1, 1);
        project.end_date = date(2024, 12, 31);
        project.stoppage_days = 10;
        let revenue = RevenueBreakdown {
            vo_total: dec!(0),
            net_revenue: dec!(182500),
            profit_target_amount: dec!(36500),
            production_budget: dec!(146000),
        };

        let schedule = derive(&project, &revenue, dec!(0.40));

        assert_eq!(schedule.duration_days, 365);
        assert_eq!(schedule.daily_profit_target, dec!(100));
        assert_eq!(schedule.stoppage_days, 10);
        assert_eq!(schedule.stoppage_loss, dec!(400));
    }

    #[test]
    fn test_no_stoppage_no_loss() {
        let project = project(dec!(100000), dec!(20));
        let revenue = RevenueBreakdown {
            vo_total: dec!(0),
            net_revenue: dec!(100000),
            profit_target_amount: dec!(20000),
            production_budget: dec!(80000),
        };

        let schedule = derive(&project, &revenue, dec!(0.40));

        assert_eq!(schedule.stoppage_loss, dec!(0));
    }

    #[test]
    fn test_factor_is_applied() {
        let mut project = project(dec!(100000), dec!(20));
        project.start_date = date(2024, 1, 1);
        project.end_date = date(2024, 1, 11);
        project.stoppage_days = 2;
        let revenue = RevenueBreakdown {
            vo_total: dec!(0),
            net_revenue: dec!(100000),
            profit_target_amount: dec!(1000),
            production_budget: dec!(99000),
        };

        let schedule = derive(&project, &revenue, dec!(0.25));

        assert_eq!(schedule.daily_profit_target, dec!(100));
        assert_eq!(schedule.stoppage_loss, dec!(50));
    }
}
