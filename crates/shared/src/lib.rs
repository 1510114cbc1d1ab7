//! Shared types, errors, and configuration for Feeburn.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Project currency codes
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, EngineConfig, ServerConfig};
pub use error::{AppError, AppResult};
