//! Project finance records.
//!
//! Owned and persisted by the surrounding CRUD layer; the engine only reads them.

pub mod types;

pub use types::{
    BudgetExpense, BudgetLabor, Expense, Payment, PaymentStatus, PaymentType, Project,
    ProjectSnapshot, Staff, StaffLocation, TimeLog,
};
