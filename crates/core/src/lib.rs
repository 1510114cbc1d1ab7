//! Core business logic for Feeburn.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All project records, boundary parsing and financial calculations live here.
//!
//! # Modules
//!
//! - `project` - Project records and snapshots
//! - `input` - Parsing string-encoded records into typed ones
//! - `finance` - Financial derivation engine (EVM, cost distribution, variance)
//! - `category` - Expense categories and keyword categorization
//! - `notify` - Change notification for project records

pub mod category;
pub mod finance;
pub mod input;
pub mod notify;
pub mod project;
