pub mod routes;

use crate::common::ensure_can_edit;
use crate::{ApiResult, AppData};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pitchside_core::EventForm;
use serde_json::json;

pub async fn event_create_action(
    State(state): State<AppData>,
    Json(form): Json<EventForm>,
) -> ApiResult<impl IntoResponse> {
    ensure_can_edit(&state)?;

    let mut guard = state.club.write().await;
    let event = guard.add_event(form)?.clone();

    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn event_update_action(
    State(state): State<AppData>,
    Path(id): Path<u32>,
    Json(form): Json<EventForm>,
) -> ApiResult<impl IntoResponse> {
    ensure_can_edit(&state)?;

    let mut guard = state.club.write().await;
    let event = guard.update_event(id, form)?.clone();

    Ok(Json(event))
}

pub async fn event_delete_action(
    State(state): State<AppData>,
    Path(id): Path<u32>,
) -> ApiResult<impl IntoResponse> {
    ensure_can_edit(&state)?;

    let mut guard = state.club.write().await;
    guard.remove_event(id)?;

    Ok(Json(json!({ "deleted": id })))
}
