pub mod routes;

use crate::common::ensure_can_edit;
use crate::{ApiResult, AppData};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pitchside_core::MessageForm;
use serde_json::json;

pub async fn message_post_action(
    State(state): State<AppData>,
    Json(form): Json<MessageForm>,
) -> ApiResult<impl IntoResponse> {
    ensure_can_edit(&state)?;

    let now = chrono::Utc::now().naive_utc();

    let mut guard = state.club.write().await;
    let message = guard.post_message(form, now)?.clone();

    Ok((StatusCode::CREATED, Json(message)))
}

pub async fn message_delete_action(
    State(state): State<AppData>,
    Path(id): Path<u32>,
) -> ApiResult<impl IntoResponse> {
    ensure_can_edit(&state)?;

    let mut guard = state.club.write().await;
    guard.remove_message(id)?;

    Ok(Json(json!({ "deleted": id })))
}
