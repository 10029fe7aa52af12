pub mod routes;

use crate::views::{self, MenuSection};
use crate::{ApiResult, AppData};
use askama::Template;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use pitchside_core::RosterPlayer;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct PlayerListQuery {
    pub team: Option<String>,
}

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "players/index.html")]
pub struct PlayersTemplate {
    pub css_version: &'static str,
    pub menu_sections: Vec<MenuSection>,
    pub teams: Vec<String>,
    pub selected_team: String,
    pub rows: Vec<PlayerRow>,
}

pub struct PlayerRow {
    pub id: u32,
    pub number: u8,
    pub name: String,
    pub position: String,
    pub position_short: String,
    pub team: String,
}

pub async fn players_page_action(
    State(state): State<AppData>,
    Query(query): Query<PlayerListQuery>,
) -> ApiResult<impl IntoResponse> {
    let guard = state.club.read().await;

    let rows = guard
        .players(query.team.as_deref())
        .into_iter()
        .map(|player| PlayerRow {
            id: player.id,
            number: player.number,
            name: player.full_name.to_string(),
            position: player.position.display_name().to_string(),
            position_short: player.position.short_name().to_string(),
            team: player.team_slug.clone(),
        })
        .collect();

    Ok(PlayersTemplate {
        css_version: crate::common::default_handler::CSS_VERSION,
        menu_sections: views::main_menu("/players"),
        teams: guard.team_slugs(),
        selected_team: query.team.unwrap_or_default(),
        rows,
    })
}

pub async fn players_api_action(
    State(state): State<AppData>,
    Query(query): Query<PlayerListQuery>,
) -> ApiResult<Json<Vec<RosterPlayer>>> {
    let guard = state.club.read().await;

    let players = guard
        .players(query.team.as_deref())
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(players))
}
