pub mod routes;

use crate::common::ensure_can_save;
use crate::tactics::saver::SaveOutcome;
use crate::{ApiError, ApiResult, AppData};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pitchside_core::{TacticDocument, TacticUpdate};
use serde_json::json;
use std::sync::Arc;

/// Validation runs before the document gets anywhere near the store: a
/// missing name or an undecodable drawing payload never triggers a write.
fn validate_for_save(document: &TacticDocument) -> Result<(), ApiError> {
    document.validate()?;
    document.decode_paths()?;

    Ok(())
}

fn outcome_response(outcome: SaveOutcome, created: bool) -> Response {
    match outcome {
        SaveOutcome::Stored(stored) => {
            let status = if created {
                StatusCode::CREATED
            } else {
                StatusCode::OK
            };

            (status, Json(stored)).into_response()
        }
        SaveOutcome::Superseded => (
            StatusCode::ACCEPTED,
            Json(json!({ "status": "superseded" })),
        )
            .into_response(),
    }
}

pub async fn tactic_create_action(
    State(state): State<AppData>,
    Json(document): Json<TacticDocument>,
) -> ApiResult<Response> {
    ensure_can_save(&state)?;

    let mut document = document;
    document.id = None;

    validate_for_save(&document)?;

    let outcome = state.saver.save(document).await?;

    Ok(outcome_response(outcome, true))
}

pub async fn tactic_update_action(
    State(state): State<AppData>,
    Path(id): Path<u32>,
    Json(update): Json<TacticUpdate>,
) -> ApiResult<Response> {
    ensure_can_save(&state)?;

    let store = Arc::clone(&state.tactics);

    let mut document = tokio::task::spawn_blocking(move || store.get(id))
        .await
        .map_err(|err| ApiError::InternalError(err.to_string()))??
        .ok_or_else(|| ApiError::NotFound(format!("tactic {} not found", id)))?;

    update.apply_to(&mut document);
    document.id = Some(id);

    validate_for_save(&document)?;

    let outcome = state.saver.save(document).await?;

    Ok(outcome_response(outcome, false))
}
