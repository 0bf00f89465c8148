//! Structured category endpoints. Each returns a fixed-key JSON payload; empty data yields
//! empty lists, never an HTTP error.

use axum::extract::{Json, State};

use crate::AppState;

/// Body of the query-taking endpoints.
#[derive(serde::Deserialize)]
pub(crate) struct QueryRequest {
    query: String,
}

/// GET / – liveness message.
pub(crate) async fn root(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(state.helpdesk.root())
}

/// POST /pyqs – past papers, optionally filtered by `20xx` years in the query.
pub(crate) async fn pyqs(
    State(state): State<AppState>,
    Json(req): Json<QueryRequest>,
) -> Json<serde_json::Value> {
    let payload = state.helpdesk.pyqs(&req.query);
    if payload.get("error").is_some() {
        tracing::info!(target: "helpdesk::api", query = %req.query, "No PYQs for requested years");
    } else {
        tracing::info!(target: "helpdesk::api", "PYQ lookup served");
    }
    Json(payload)
}

/// POST /timetables – the general routine link. The query is accepted but not filtered on.
pub(crate) async fn timetables(
    State(state): State<AppState>,
    Json(_req): Json<QueryRequest>,
) -> Json<serde_json::Value> {
    Json(state.helpdesk.timetables())
}

/// GET /faculty – every department page, unfiltered.
pub(crate) async fn faculty(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(state.helpdesk.faculty())
}

/// GET /holidays – yearly holiday list.
pub(crate) async fn holidays(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(state.helpdesk.holidays())
}

/// GET /api/v1/health – liveness plus dataset load outcome.
pub(crate) async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let store = state.helpdesk.store();
    Json(serde_json::json!({
        "status": "ok",
        "app_name": state.config.app_name,
        "dataset": store.status().as_str(),
        "dataset_error": store.load_error(),
    }))
}
