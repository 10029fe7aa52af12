pub mod routes;

use crate::common::ensure_can_edit;
use crate::{ApiResult, AppData};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pitchside_core::PlayerForm;
use serde_json::json;

pub async fn player_create_action(
    State(state): State<AppData>,
    Json(form): Json<PlayerForm>,
) -> ApiResult<impl IntoResponse> {
    ensure_can_edit(&state)?;

    let mut guard = state.club.write().await;
    let player = guard.add_player(form)?.clone();

    Ok((StatusCode::CREATED, Json(player)))
}

pub async fn player_update_action(
    State(state): State<AppData>,
    Path(id): Path<u32>,
    Json(form): Json<PlayerForm>,
) -> ApiResult<impl IntoResponse> {
    ensure_can_edit(&state)?;

    let mut guard = state.club.write().await;
    let player = guard.update_player(id, form)?.clone();

    Ok(Json(player))
}

pub async fn player_delete_action(
    State(state): State<AppData>,
    Path(id): Path<u32>,
) -> ApiResult<impl IntoResponse> {
    ensure_can_edit(&state)?;

    let mut guard = state.club.write().await;
    guard.remove_player(id)?;

    Ok(Json(json!({ "deleted": id })))
}
