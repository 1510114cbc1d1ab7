//! Expense categorization endpoint.

use axum::{Json, Router, routing::post};
use feeburn_core::category::{ExpenseCategory, categorize};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Request body for categorizing an expense.
#[derive(Debug, Deserialize)]
pub struct CategorizeRequest {
    /// Free-text expense description.
    pub description: String,
}

/// Suggested category.
#[derive(Debug, Serialize)]
pub struct CategorizeResponse {
    /// Category label.
    pub category: ExpenseCategory,
}

/// POST /expenses/categorize
async fn categorize_expense(Json(request): Json<CategorizeRequest>) -> Json<CategorizeResponse> {
    Json(CategorizeResponse {
        category: categorize(&request.description),
    })
}

/// Creates the categorization routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/expenses/categorize", post(categorize_expense))
}
