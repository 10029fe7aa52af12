pub mod routes;

use crate::common::ensure_can_save;
use crate::{ApiError, ApiResult, AppData};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

pub async fn tactic_delete_action(
    State(state): State<AppData>,
    Path(id): Path<u32>,
) -> ApiResult<impl IntoResponse> {
    ensure_can_save(&state)?;

    let store = Arc::clone(&state.tactics);

    let deleted = tokio::task::spawn_blocking(move || store.delete(id))
        .await
        .map_err(|err| ApiError::InternalError(err.to_string()))??;

    if !deleted {
        return Err(ApiError::NotFound(format!("tactic {} not found", id)));
    }

    Ok(Json(json!({ "deleted": id })))
}
