pub mod routes;

use crate::{ApiError, ApiResult, AppData};
use axum::extract::{Path, State};
use axum::Json;
use chrono::NaiveDateTime;
use pitchside_core::{PitchMode, TacticDocument};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct TacticSummary {
    pub id: Option<u32>,
    pub name: String,
    pub mode: PitchMode,
    pub formation_label: String,
    pub token_count: usize,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<&TacticDocument> for TacticSummary {
    fn from(document: &TacticDocument) -> Self {
        TacticSummary {
            id: document.id,
            name: document.name.clone(),
            mode: document.mode,
            formation_label: document.formation_label.clone(),
            token_count: document.players.len(),
            updated_at: document.updated_at,
        }
    }
}

pub async fn tactics_list_action(
    State(state): State<AppData>,
) -> ApiResult<Json<Vec<TacticSummary>>> {
    let store = Arc::clone(&state.tactics);

    let documents = tokio::task::spawn_blocking(move || store.list())
        .await
        .map_err(|err| ApiError::InternalError(err.to_string()))??;

    Ok(Json(documents.iter().map(TacticSummary::from).collect()))
}

pub async fn tactic_get_action(
    State(state): State<AppData>,
    Path(id): Path<u32>,
) -> ApiResult<Json<TacticDocument>> {
    let store = Arc::clone(&state.tactics);

    let document = tokio::task::spawn_blocking(move || store.get(id))
        .await
        .map_err(|err| ApiError::InternalError(err.to_string()))??
        .ok_or_else(|| ApiError::NotFound(format!("tactic {} not found", id)))?;

    Ok(Json(document))
}
