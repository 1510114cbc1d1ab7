//! Project record types.

use chrono::NaiveDate;
use feeburn_shared::types::{
    BudgetExpenseId, BudgetLaborId, Currency, ExpenseId, PaymentId, ProjectId, StaffId, TimeLogId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A design project and its contract terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project ID.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
    /// Short project code.
    pub code: String,
    /// Project manager.
    pub manager: Option<String>,
    /// Project coordinator.
    pub coordinator: Option<String>,
    /// Contracted fee, excluding variation orders.
    pub total_contract_value: Decimal,
    /// Multiplier applied to direct labor cost to get loaded cost.
    pub overhead_multiplier: Decimal,
    /// Target profit margin (0-100).
    pub target_margin: Decimal,
    /// Currency all amounts are expressed in.
    pub currency: Currency,
    /// Contract start date.
    pub start_date: NaiveDate,
    /// Contract end date.
    pub end_date: NaiveDate,
    /// Days the project was paused.
    pub stoppage_days: u32,
    /// Persisted completion percentage (0-100).
    pub percent_complete: Decimal,
}

/// Office a staff member works from.
///
/// Only used to bucket cost distribution; it has no effect on rates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffLocation {
    /// Riyadh office (management).
    Riyadh,
    /// Cairo office (production).
    #[default]
    Cairo,
}

/// A team member assigned to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    /// Staff ID.
    pub id: StaffId,
    /// Owning project ID.
    pub project_id: ProjectId,
    /// Display name.
    pub name: String,
    /// Role on the project.
    pub role: String,
    /// Hourly base rate.
    pub base_rate: Decimal,
    /// Office location.
    pub location: StaffLocation,
}

/// A planned labor line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLabor {
    /// Line ID.
    pub id: BudgetLaborId,
    /// Owning project ID.
    pub project_id: ProjectId,
    /// Referenced staff member. May dangle if the staff member was deleted.
    pub staff_id: StaffId,
    /// Planned hours.
    pub hours: Decimal,
}

/// A planned non-labor line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetExpense {
    /// Line ID.
    pub id: BudgetExpenseId,
    /// Owning project ID.
    pub project_id: ProjectId,
    /// Expense category.
    pub category: String,
    /// Planned amount.
    pub amount: Decimal,
}

/// Hours actually worked by a staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLog {
    /// Time log ID.
    pub id: TimeLogId,
    /// Owning project ID.
    pub project_id: ProjectId,
    /// Referenced staff member. May dangle if the staff member was deleted.
    pub staff_id: StaffId,
    /// Hours worked.
    pub hours: Decimal,
    /// Design phase the hours were spent on.
    pub phase: String,
    /// Free-text description.
    pub description: Option<String>,
    /// First day of the logged period.
    pub start_date: NaiveDate,
    /// Last day of the logged period.
    pub end_date: NaiveDate,
}

/// An actual non-labor cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense ID.
    pub id: ExpenseId,
    /// Owning project ID.
    pub project_id: ProjectId,
    /// Expense category.
    pub category: String,
    /// Amount spent.
    pub amount: Decimal,
    /// Free-text description.
    pub description: Option<String>,
    /// Recovered from the client, so excluded from burn.
    pub reimbursable: bool,
}

/// Whether a payment belongs to the base contract or amends it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentType {
    /// Milestone of the base contract, already part of the contract value.
    #[default]
    Contract,
    /// Variation order adding value beyond the contract.
    #[serde(rename = "VO")]
    Vo,
}

/// Billing status of a payment.
///
/// Listed in the usual order of progress, but any value may be set directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Not yet due.
    #[default]
    Pending,
    /// Due for claiming.
    Due,
    /// Claimed from the client.
    Claimed,
    /// Invoiced to the client.
    Invoiced,
    /// Partially paid; see `Payment::paid_amount`.
    PaidPartial,
    /// Paid in full.
    PaidFull,
}

impl PaymentStatus {
    /// Returns true once the payment has been invoiced, paid or not.
    #[must_use]
    pub const fn is_invoiced(self) -> bool {
        matches!(self, Self::Invoiced | Self::PaidPartial | Self::PaidFull)
    }
}

/// A contract payment milestone or variation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Payment ID.
    pub id: PaymentId,
    /// Owning project ID.
    pub project_id: ProjectId,
    /// Payment title.
    pub title: String,
    /// Contract milestone or variation order.
    pub payment_type: PaymentType,
    /// Billed amount.
    pub amount: Decimal,
    /// Scheduled date.
    pub date: NaiveDate,
    /// Conditions to be met before claiming.
    pub requirements: Option<String>,
    /// Billing status.
    pub status: PaymentStatus,
    /// Amount received so far; only meaningful for `PaidPartial`.
    pub paid_amount: Option<Decimal>,
}

impl Payment {
    /// Amount actually collected for this payment.
    #[must_use]
    pub fn collected(&self) -> Decimal {
        match self.status {
            PaymentStatus::PaidFull => self.amount,
            PaymentStatus::PaidPartial => self.paid_amount.unwrap_or(Decimal::ZERO),
            _ => Decimal::ZERO,
        }
    }
}

/// The full record set of one project, read at a single point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    /// Project record.
    pub project: Project,
    /// Staff assigned to the project.
    pub staff: Vec<Staff>,
    /// Planned labor lines.
    pub budget_labor: Vec<BudgetLabor>,
    /// Planned non-labor lines.
    pub budget_expenses: Vec<BudgetExpense>,
    /// Actual hours.
    pub time_logs: Vec<TimeLog>,
    /// Actual non-labor costs.
    pub expenses: Vec<Expense>,
    /// Payments and variation orders.
    pub payments: Vec<Payment>,
}

impl ProjectSnapshot {
    /// Creates a snapshot holding only the project record.
    #[must_use]
    pub fn new(project: Project) -> Self {
        Self {
            project,
            staff: Vec::new(),
            budget_labor: Vec::new(),
            budget_expenses: Vec::new(),
            time_logs: Vec::new(),
            expenses: Vec::new(),
            payments: Vec::new(),
        }
    }
}
