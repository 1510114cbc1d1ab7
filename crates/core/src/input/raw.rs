//! Wire records and their conversion into typed project records.

use feeburn_shared::types::{
    BudgetExpenseId, BudgetLaborId, Currency, ExpenseId, PaymentId, ProjectId, StaffId, TimeLogId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    InputError, MAX_STOPPAGE_DAYS, parse_date, parse_factor, parse_money, parse_percent_complete,
    parse_quantity,
};
use crate::project::{
    BudgetExpense, BudgetLabor, Expense, Payment, PaymentStatus, PaymentType, Project,
    ProjectSnapshot, Staff, StaffLocation, TimeLog,
};

fn default_overhead_multiplier() -> String {
    "2.5".to_string()
}

fn default_target_margin() -> String {
    "20".to_string()
}

fn default_zero() -> String {
    "0".to_string()
}

/// Project record as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProject {
    /// Project ID.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
    /// Short project code.
    pub code: String,
    /// Project manager.
    #[serde(default)]
    pub manager: Option<String>,
    /// Project coordinator.
    #[serde(default)]
    pub coordinator: Option<String>,
    /// Contracted fee.
    pub total_contract_value: String,
    /// Overhead multiplier, "2.5" when absent.
    #[serde(default = "default_overhead_multiplier")]
    pub overhead_multiplier: String,
    /// Target margin, "20" when absent.
    #[serde(default = "default_target_margin")]
    pub target_margin: String,
    /// Currency, SAR when absent.
    #[serde(default)]
    pub currency: Currency,
    /// Contract start date.
    pub start_date: String,
    /// Contract end date.
    pub end_date: String,
    /// Stoppage days.
    #[serde(default)]
    pub stoppage_days: u32,
    /// Persisted completion percentage.
    #[serde(default = "default_zero")]
    pub percent_complete: String,
}

impl TryFrom<RawProject> for Project {
    type Error = InputError;

    fn try_from(raw: RawProject) -> Result<Self, Self::Error> {
        if raw.stoppage_days > MAX_STOPPAGE_DAYS {
            return Err(InputError::OutOfRange {
                field: "stoppage_days",
                value: Decimal::from(raw.stoppage_days),
                min: Decimal::ZERO,
                max: Decimal::from(MAX_STOPPAGE_DAYS),
            });
        }

        Ok(Self {
            id: raw.id,
            name: raw.name,
            code: raw.code,
            manager: raw.manager,
            coordinator: raw.coordinator,
            total_contract_value: parse_money("total_contract_value", &raw.total_contract_value)?,
            overhead_multiplier: parse_factor("overhead_multiplier", &raw.overhead_multiplier)?,
            target_margin: parse_factor("target_margin", &raw.target_margin)?,
            currency: raw.currency,
            start_date: parse_date("start_date", &raw.start_date)?,
            end_date: parse_date("end_date", &raw.end_date)?,
            stoppage_days: raw.stoppage_days,
            percent_complete: parse_percent_complete(&raw.percent_complete)?,
        })
    }
}

/// Staff record as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStaff {
    /// Staff ID.
    pub id: StaffId,
    /// Owning project ID.
    pub project_id: ProjectId,
    /// Display name.
    pub name: String,
    /// Role on the project.
    pub role: String,
    /// Hourly base rate.
    pub base_rate: String,
    /// Office location, Cairo when absent.
    #[serde(default)]
    pub location: StaffLocation,
}

impl TryFrom<RawStaff> for Staff {
    type Error = InputError;

    fn try_from(raw: RawStaff) -> Result<Self, Self::Error> {
        Ok(Self {
            id: raw.id,
            project_id: raw.project_id,
            name: raw.name,
            role: raw.role,
            base_rate: parse_quantity("base_rate", &raw.base_rate)?,
            location: raw.location,
        })
    }
}

/// Planned labor line as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBudgetLabor {
    /// Line ID.
    pub id: BudgetLaborId,
    /// Owning project ID.
    pub project_id: ProjectId,
    /// Referenced staff member.
    pub staff_id: StaffId,
    /// Planned hours.
    pub hours: String,
}

impl TryFrom<RawBudgetLabor> for BudgetLabor {
    type Error = InputError;

    fn try_from(raw: RawBudgetLabor) -> Result<Self, Self::Error> {
        Ok(Self {
            id: raw.id,
            project_id: raw.project_id,
            staff_id: raw.staff_id,
            hours: parse_quantity("hours", &raw.hours)?,
        })
    }
}

/// Planned non-labor line as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBudgetExpense {
    /// Line ID.
    pub id: BudgetExpenseId,
    /// Owning project ID.
    pub project_id: ProjectId,
    /// Expense category.
    pub category: String,
    /// Planned amount.
    pub amount: String,
}

impl TryFrom<RawBudgetExpense> for BudgetExpense {
    type Error = InputError;

    fn try_from(raw: RawBudgetExpense) -> Result<Self, Self::Error> {
        Ok(Self {
            id: raw.id,
            project_id: raw.project_id,
            category: raw.category,
            amount: parse_money("amount", &raw.amount)?,
        })
    }
}

/// Time log as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTimeLog {
    /// Time log ID.
    pub id: TimeLogId,
    /// Owning project ID.
    pub project_id: ProjectId,
    /// Referenced staff member.
    pub staff_id: StaffId,
    /// Hours worked.
    pub hours: String,
    /// Design phase.
    pub phase: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// First day of the logged period.
    pub start_date: String,
    /// Last day of the logged period.
    pub end_date: String,
}

impl TryFrom<RawTimeLog> for TimeLog {
    type Error = InputError;

    fn try_from(raw: RawTimeLog) -> Result<Self, Self::Error> {
        Ok(Self {
            id: raw.id,
            project_id: raw.project_id,
            staff_id: raw.staff_id,
            hours: parse_quantity("hours", &raw.hours)?,
            phase: raw.phase,
            description: raw.description,
            start_date: parse_date("start_date", &raw.start_date)?,
            end_date: parse_date("end_date", &raw.end_date)?,
        })
    }
}

/// Expense as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawExpense {
    /// Expense ID.
    pub id: ExpenseId,
    /// Owning project ID.
    pub project_id: ProjectId,
    /// Expense category.
    pub category: String,
    /// Amount spent.
    pub amount: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Recovered from the client.
    #[serde(default)]
    pub reimbursable: bool,
}

impl TryFrom<RawExpense> for Expense {
    type Error = InputError;

    fn try_from(raw: RawExpense) -> Result<Self, Self::Error> {
        Ok(Self {
            id: raw.id,
            project_id: raw.project_id,
            category: raw.category,
            amount: parse_money("amount", &raw.amount)?,
            description: raw.description,
            reimbursable: raw.reimbursable,
        })
    }
}

/// Payment as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPayment {
    /// Payment ID.
    pub id: PaymentId,
    /// Owning project ID.
    pub project_id: ProjectId,
    /// Payment title.
    pub title: String,
    /// Contract milestone or variation order, Contract when absent.
    #[serde(default)]
    pub payment_type: PaymentType,
    /// Billed amount.
    pub amount: String,
    /// Scheduled date.
    pub date: String,
    /// Conditions to be met before claiming.
    #[serde(default)]
    pub requirements: Option<String>,
    /// Billing status, Pending when absent.
    #[serde(default)]
    pub status: PaymentStatus,
    /// Amount received so far, "0" when absent.
    #[serde(default = "default_zero")]
    pub paid_amount: String,
}

impl TryFrom<RawPayment> for Payment {
    type Error = InputError;

    fn try_from(raw: RawPayment) -> Result<Self, Self::Error> {
        Ok(Self {
            id: raw.id,
            project_id: raw.project_id,
            title: raw.title,
            payment_type: raw.payment_type,
            amount: parse_money("amount", &raw.amount)?,
            date: parse_date("date", &raw.date)?,
            requirements: raw.requirements,
            status: raw.status,
            paid_amount: Some(parse_money("paid_amount", &raw.paid_amount)?),
        })
    }
}

/// A project's full record set as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProjectSnapshot {
    /// Project record.
    pub project: RawProject,
    /// Staff records.
    #[serde(default)]
    pub staff: Vec<RawStaff>,
    /// Planned labor lines.
    #[serde(default)]
    pub budget_labor: Vec<RawBudgetLabor>,
    /// Planned non-labor lines.
    #[serde(default)]
    pub budget_expenses: Vec<RawBudgetExpense>,
    /// Time logs.
    #[serde(default)]
    pub time_logs: Vec<RawTimeLog>,
    /// Expenses.
    #[serde(default)]
    pub expenses: Vec<RawExpense>,
    /// Payments and variation orders.
    #[serde(default)]
    pub payments: Vec<RawPayment>,
}

fn convert<R, T>(rows: Vec<R>) -> Result<Vec<T>, InputError>
where
    T: TryFrom<R, Error = InputError>,
{
    rows.into_iter().map(T::try_from).collect()
}

impl TryFrom<RawProjectSnapshot> for ProjectSnapshot {
    type Error = InputError;

    fn try_from(raw: RawProjectSnapshot) -> Result<Self, Self::Error> {
        Ok(Self {
            project: raw.project.try_into()?,
            staff: convert(raw.staff)?,
            budget_labor: convert(raw.budget_labor)?,
            budget_expenses: convert(raw.budget_expenses)?,
            time_logs: convert(raw.time_logs)?,
            expenses: convert(raw.expenses)?,
            payments: convert(raw.payments)?,
        })
    }
}
