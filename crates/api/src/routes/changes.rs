//! Project change notification endpoint.
//!
//! Record writers call this after mutating a project so listeners can
//! recompute its metrics.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::post,
};
use feeburn_core::notify::{ChangeKind, ProjectChange};
use feeburn_shared::types::ProjectId;
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Creates the change notification routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/projects/{project_id}/changes", post(publish_change))
}

/// Request body for announcing a change.
#[derive(Debug, Deserialize)]
pub struct ChangeRequest {
    /// Kind of record that changed.
    pub kind: ChangeKind,
}

/// Publish result.
#[derive(Debug, Serialize)]
pub struct ChangeResponse {
    /// Listeners the change reached.
    pub listeners: usize,
}

/// POST /projects/{project_id}/changes
async fn publish_change(
    State(state): State<AppState>,
    Path(project_id): Path<ProjectId>,
    Json(request): Json<ChangeRequest>,
) -> (StatusCode, Json<ChangeResponse>) {
    let listeners = state.notifier.publish(ProjectChange {
        project_id,
        kind: request.kind,
    });
    (StatusCode::ACCEPTED, Json(ChangeResponse { listeners }))
}
