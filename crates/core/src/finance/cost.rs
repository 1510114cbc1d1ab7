//! Actual cost (burn) and planned cost (budget at completion) stages.

use feeburn_shared::types::StaffId;
use rust_decimal::Decimal;
use tracing::warn;

use super::directory::{StaffDirectory, loaded_cost};
use super::types::{ActualCost, LaborLineCost, PlannedCost, ScheduleImpact};
use crate::project::{BudgetExpense, BudgetLabor, Expense, StaffLocation, TimeLog};

/// Derives actual burn from logged hours, expenses and the stoppage loss.
#[must_use]
pub fn actual(
    time_logs: &[TimeLog],
    expenses: &[Expense],
    staff: &StaffDirectory<'_>,
    overhead_multiplier: Decimal,
    schedule: &ScheduleImpact,
) -> ActualCost {
    let mut total_labor_loaded = Decimal::ZERO;
    let mut total_actual_hours = Decimal::ZERO;
    let mut riyadh_cost = Decimal::ZERO;
    let mut cairo_cost = Decimal::ZERO;
    let mut labor_lines = Vec::with_capacity(time_logs.len());

    for log in time_logs {
        let Some(person) = staff.resolve(log.staff_id) else {
            warn!(time_log_id = %log.id, staff_id = %log.staff_id, "time log references unknown staff");
            labor_lines.push(unresolved_line(log.id, log.staff_id));
            continue;
        };

        let loaded = loaded_cost(log.hours, person.base_rate, overhead_multiplier);
        total_labor_loaded += loaded;
        total_actual_hours += log.hours;
        match person.location {
            StaffLocation::Riyadh => riyadh_cost += loaded,
            StaffLocation::Cairo => cairo_cost += loaded,
        }

        labor_lines.push(LaborLineCost {
            line_id: log.id,
            staff_id: log.staff_id,
            staff_name: Some(person.name.clone()),
            hours: log.hours,
            loaded_cost: loaded,
            resolved: true,
        });
    }

    let (reimbursable, burned): (Vec<&Expense>, Vec<&Expense>) =
        expenses.iter().partition(|e| e.reimbursable);
    let total_expenses: Decimal = burned.iter().map(|e| e.amount).sum();
    let reimbursable_expenses: Decimal = reimbursable.iter().map(|e| e.amount).sum();

    let total_burn = total_labor_loaded + total_expenses + schedule.stoppage_loss;

    ActualCost {
        total_labor_loaded,
        total_actual_hours,
        riyadh_cost,
        cairo_cost,
        total_expenses,
        reimbursable_expenses,
        total_burn,
        labor_lines,
    }
}

/// Derives budget at completion from planned labor and expense lines.
#[must_use]
pub fn planned(
    budget_labor: &[BudgetLabor],
    budget_expenses: &[BudgetExpense],
    staff: &StaffDirectory<'_>,
    overhead_multiplier: Decimal,
) -> PlannedCost {
    let mut total_est_labor_cost = Decimal::ZERO;
    let mut total_est_hours = Decimal::ZERO;
    let mut labor_lines = Vec::with_capacity(budget_labor.len());

    for line in budget_labor {
        let Some(person) = staff.resolve(line.staff_id) else {
            warn!(budget_labor_id = %line.id, staff_id = %line.staff_id, "budget line references unknown staff");
            labor_lines.push(unresolved_line(line.id, line.staff_id));
            continue;
        };

        let cost = loaded_cost(line.hours, person.base_rate, overhead_multiplier);
        total_est_labor_cost += cost;
        total_est_hours += line.hours;

        labor_lines.push(LaborLineCost {
            line_id: line.id,
            staff_id: line.staff_id,
            staff_name: Some(person.name.clone()),
            hours: line.hours,
            loaded_cost: cost,
            resolved: true,
        });
    }

    let total_est_expenses: Decimal = budget_expenses.iter().map(|e| e.amount).sum();

    PlannedCost {
        total_est_labor_cost,
        total_est_hours,
        total_est_expenses,
        bac: total_est_labor_cost + total_est_expenses,
        labor_lines,
    }
}

fn unresolved_line<Id>(line_id: Id, staff_id: StaffId) -> LaborLineCost<Id> {
    LaborLineCost {
        line_id,
        staff_id,
        staff_name: None,
        hours: Decimal::ZERO,
        loaded_cost: Decimal::ZERO,
        resolved: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::tests::{budget_expense, budget_labor, expense, staff, time_log};
    use rust_decimal_macros::dec;

    fn no_stoppage() -> ScheduleImpact {
        ScheduleImpact {
            duration_days: 365,
            daily_profit_target: dec!(100),
            stoppage_days: 0,
            stoppage_loss: dec!(0),
        }
    }

    #[test]
    fn test_loaded_labor_bucketed_by_location() {
        let records = vec![
            staff(dec!(100), StaffLocation::Cairo),
            staff(dec!(250), StaffLocation::Riyadh),
        ];
        let directory = StaffDirectory::new(&records);
        let logs = vec![
            time_log(records[0].id, dec!(10)),
            time_log(records[1].id, dec!(4)),
        ];

        let cost = actual(&logs, &[], &directory, dec!(2.0), &no_stoppage());

        assert_eq!(cost.cairo_cost, dec!(2000));
        assert_eq!(cost.riyadh_cost, dec!(2000));
        assert_eq!(cost.total_labor_loaded, dec!(4000));
        assert_eq!(cost.total_actual_hours, dec!(14));
        assert_eq!(cost.total_burn, dec!(4000));
        assert!(cost.labor_lines.iter().all(|l| l.resolved));
    }

    #[test]
    fn test_dangling_time_log_contributes_nothing() {
        let records = vec![staff(dec!(100), StaffLocation::Cairo)];
        let directory = StaffDirectory::new(&records);
        let logs = vec![time_log(StaffId::new(), dec!(40))];

        let cost = actual(&logs, &[], &directory, dec!(2.5), &no_stoppage());

        assert_eq!(cost.total_labor_loaded, dec!(0));
        assert_eq!(cost.total_actual_hours, dec!(0));
        assert_eq!(cost.labor_lines.len(), 1);
        assert!(!cost.labor_lines[0].resolved);
        assert_eq!(cost.labor_lines[0].loaded_cost, dec!(0));
        assert_eq!(cost.labor_lines[0].staff_name, None);
    }

    #[test]
    fn test_reimbursable_expenses_excluded_from_burn() {
        let directory = StaffDirectory::new(&[]);
        let expenses = vec![expense(dec!(500), true), expense(dec!(300), false)];

        let cost = actual(&[], &expenses, &directory, dec!(2.5), &no_stoppage());

        assert_eq!(cost.total_expenses, dec!(300));
        assert_eq!(cost.reimbursable_expenses, dec!(500));
        assert_eq!(cost.total_burn, dec!(300));
    }

    #[test]
    fn test_stoppage_loss_added_to_burn() {
        let directory = StaffDirectory::new(&[]);
        let schedule = ScheduleImpact {
            stoppage_days: 10,
            stoppage_loss: dec!(400),
            ..no_stoppage()
        };

        let cost = actual(&[], &[expense(dec!(100), false)], &directory, dec!(1), &schedule);

        assert_eq!(cost.total_burn, dec!(500));
    }

    #[test]
    fn test_planned_cost() {
        let records = vec![
            staff(dec!(100), StaffLocation::Cairo),
            staff(dec!(200), StaffLocation::Riyadh),
        ];
        let directory = StaffDirectory::new(&records);
        let labor = vec![
            budget_labor(records[0].id, dec!(100)),
            budget_labor(records[1].id, dec!(20)),
            budget_labor(StaffId::new(), dec!(1000)),
        ];
        let expenses = vec![budget_expense(dec!(5000)), budget_expense(dec!(2500))];

        let plan = planned(&labor, &expenses, &directory, dec!(2.5));

        assert_eq!(plan.total_est_labor_cost, dec!(35000));
        assert_eq!(plan.total_est_hours, dec!(120));
        assert_eq!(plan.total_est_expenses, dec!(7500));
        assert_eq!(plan.bac, dec!(42500));
        assert_eq!(plan.labor_lines.len(), 3);
        assert!(!plan.labor_lines[2].resolved);
        assert_eq!(plan.labor_lines[2].hours, dec!(0));
    }

    #[test]
    fn test_empty_plan() {
        let plan = planned(&[], &[], &StaffDirectory::new(&[]), dec!(2.5));

        assert_eq!(plan.bac, dec!(0));
        assert!(plan.labor_lines.is_empty());
    }
}
