//! API Handlers
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use jury_authoring::{resolve_case, PromptParameters};
use jury_core::{JuryError, VerdictDraft, JURY_VERSION};
use jury_court::VoteDirection;

use crate::metrics;
use crate::state::AppState;

pub async fn today_case(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.court.today_case().await {
        Ok(Some(case)) => ok_json(&case),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "status": "adjourned",
                "message": "No case currently in session."
            })),
        ),
        Err(e) => error_response(e),
    }
}

/// Generate a candidate via the authoring collaborator (fallback always
/// applies) and file it as today's case
pub async fn generate_case(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let draft = resolve_case(state.author.as_ref(), &PromptParameters::default()).await;
    match state.court.create_case(draft).await {
        Ok(case) => created_json(&case),
        Err(e) => error_response(e),
    }
}

pub async fn list_verdicts(
    State(state): State<AppState>,
    Path(case_id): Path<String>,
) -> (StatusCode, Json<Value>) {
    match state.court.verdicts_for_case(&case_id).await {
        Ok(verdicts) => ok_json(&verdicts),
        Err(e) => error_response(e),
    }
}

pub async fn submit_verdict(
    State(state): State<AppState>,
    Json(draft): Json<VerdictDraft>,
) -> (StatusCode, Json<Value>) {
    match state.court.submit_verdict(draft).await {
        Ok(verdict) => created_json(&verdict),
        Err(e) => error_response(e),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub voter_id: String,
    pub direction: VoteDirection,
}

pub async fn vote(
    State(state): State<AppState>,
    Path(verdict_id): Path<String>,
    Json(req): Json<VoteRequest>,
) -> (StatusCode, Json<Value>) {
    match state
        .court
        .vote(&verdict_id, &req.voter_id, req.direction)
        .await
    {
        Ok(votes) => (StatusCode::OK, Json(json!({ "votes": votes }))),
        Err(e) => error_response(e),
    }
}

pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "version": JURY_VERSION })),
    )
}

pub async fn metrics() -> (StatusCode, String) {
    match metrics::encode(metrics::registry()) {
        Ok(body) => (StatusCode::OK, body),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

fn ok_json<T: serde::Serialize>(value: &T) -> (StatusCode, Json<Value>) {
    json_with_status(StatusCode::OK, value)
}

fn created_json<T: serde::Serialize>(value: &T) -> (StatusCode, Json<Value>) {
    json_with_status(StatusCode::CREATED, value)
}

fn json_with_status<T: serde::Serialize>(status: StatusCode, value: &T) -> (StatusCode, Json<Value>) {
    match serde_json::to_value(value) {
        Ok(v) => (status, Json(v)),
        Err(e) => error_response(JuryError::from(e)),
    }
}

fn error_response(err: JuryError) -> (StatusCode, Json<Value>) {
    let status = match &err {
        JuryError::DuplicateCase(_) | JuryError::DuplicateSubmission(_) => StatusCode::CONFLICT,
        JuryError::InvalidVerdict(_) => StatusCode::UNPROCESSABLE_ENTITY,
        JuryError::NotFound(_) => StatusCode::NOT_FOUND,
        JuryError::AuthoringUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        JuryError::TransientIo(_) | JuryError::Serialization(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(json!({ "error": err.to_string() })))
}
