pub mod routes;

use crate::views::{self, MenuSection};
use crate::{ApiError, ApiResult, AppData};
use askama::Template;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use pitchside_core::utils::DateUtils;
use pitchside_core::{DrawPath, Formation, PitchGeometry, PitchMode, TacticsEditor};
use serde::Deserialize;
use std::fmt::Write;
use std::sync::Arc;

// Rendered board width in pixels; height follows the pitch mode's aspect
// ratio.
const BOARD_WIDTH: f32 = 420.0;

#[derive(Deserialize)]
pub struct BoardQuery {
    pub tactic: Option<u32>,
    pub mode: Option<PitchMode>,
    pub team: Option<String>,
}

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "tactics/board.html")]
pub struct TacticsBoardTemplate {
    pub css_version: &'static str,
    pub menu_sections: Vec<MenuSection>,
    pub tactic_name: String,
    pub mode_label: String,
    pub formation_label: String,
    pub can_edit: bool,
    pub board_width: String,
    pub board_height: String,
    pub half_y: String,
    pub center_x: String,
    pub center_radius: String,
    pub tokens: Vec<TokenView>,
    pub strokes: Vec<StrokeView>,
    pub dots: Vec<DotView>,
    pub roster: Vec<RosterEntry>,
    pub saved: Vec<SavedTactic>,
    pub formations: Vec<String>,
    pub team: String,
    pub teams: Vec<String>,
}

pub struct TokenView {
    pub cx: String,
    pub cy: String,
    pub radius: String,
    pub color_class: String,
    pub number: u8,
    pub label: String,
    pub label_y: String,
}

pub struct StrokeView {
    pub data: String,
    pub width: String,
    pub color_class: String,
}

pub struct DotView {
    pub cx: String,
    pub cy: String,
    pub radius: String,
    pub color_class: String,
}

pub struct RosterEntry {
    pub number: u8,
    pub name: String,
    pub position_short: String,
    pub on_board: bool,
}

pub struct SavedTactic {
    pub id: u32,
    pub name: String,
    pub mode: String,
    pub formation: String,
    pub updated: String,
}

pub async fn tactics_board_action(
    State(state): State<AppData>,
    Query(query): Query<BoardQuery>,
) -> ApiResult<impl IntoResponse> {
    let mode = query.mode.unwrap_or(PitchMode::Football);
    let mut editor = TacticsEditor::new(mode, state.capabilities);

    if let Some(id) = query.tactic {
        let store = Arc::clone(&state.tactics);

        let document = tokio::task::spawn_blocking(move || store.get(id))
            .await
            .map_err(|err| ApiError::InternalError(err.to_string()))??
            .ok_or_else(|| ApiError::NotFound(format!("tactic {} not found", id)))?;

        editor.load(&document)?;
    }

    let guard = state.club.read().await;

    let teams = guard.team_slugs();
    let team = query
        .team
        .or_else(|| teams.first().cloned())
        .unwrap_or_default();

    // A fresh board starts with the team lineup snapped onto the default
    // formation; a loaded tactic keeps its own placement.
    if query.tactic.is_none() {
        let lineup_size = editor.pitch_mode().squad_size();

        for player in guard.players(Some(team.as_str())).into_iter().take(lineup_size) {
            editor.add_token(player);
        }

        editor.apply_formation(Formation::default_for(editor.pitch_mode()));
    }

    let geometry = PitchGeometry::for_mode(editor.pitch_mode(), BOARD_WIDTH);
    let token_radius = BOARD_WIDTH * 0.035;

    let tokens = editor
        .tokens()
        .tokens()
        .iter()
        .map(|token| TokenView {
            cx: px(geometry.denormalize_x(token.x)),
            cy: px(geometry.denormalize_y(token.y)),
            radius: px(token_radius),
            color_class: format!("token-{}", token.color_tag),
            number: token.number,
            label: token.display_name.clone(),
            label_y: px(geometry.denormalize_y(token.y) + token_radius * 2.0),
        })
        .collect();

    let mut strokes = Vec::new();
    let mut dots = Vec::new();

    for path in editor.drawing().paths() {
        let stroke_width = path.stroke_width / pitchside_core::COORD_MAX * BOARD_WIDTH;

        if path.is_dot() {
            if let Some(center) = path.dot_center() {
                let center = geometry.denormalize(center);

                dots.push(DotView {
                    cx: px(center.x),
                    cy: px(center.y),
                    radius: px(stroke_width * 1.6),
                    color_class: format!("stroke-{}", path.color_tag),
                });
            }
        } else {
            strokes.push(StrokeView {
                data: pixel_path_data(path, &geometry),
                width: px(stroke_width),
                color_class: format!("stroke-{}", path.color_tag),
            });
        }
    }

    let roster = guard
        .players(Some(team.as_str()))
        .into_iter()
        .map(|player| RosterEntry {
            number: player.number,
            name: player.full_name.to_string(),
            position_short: player.position.short_name().to_string(),
            on_board: editor.tokens().get(player.id).is_some(),
        })
        .collect();

    let store = Arc::clone(&state.tactics);

    let saved = tokio::task::spawn_blocking(move || store.list())
        .await
        .map_err(|err| ApiError::InternalError(err.to_string()))??
        .iter()
        .filter_map(|document| {
            Some(SavedTactic {
                id: document.id?,
                name: document.name.clone(),
                mode: document.mode.display_name().to_string(),
                formation: document.formation_label.clone(),
                updated: document
                    .updated_at
                    .map(DateUtils::format_timestamp)
                    .unwrap_or_default(),
            })
        })
        .collect();

    let formations = Formation::for_mode(editor.pitch_mode())
        .iter()
        .map(|formation| formation.label().to_string())
        .collect();

    let tactic_name = if editor.name().is_empty() {
        "Unsaved tactic".to_string()
    } else {
        editor.name().to_string()
    };

    Ok(TacticsBoardTemplate {
        css_version: crate::common::default_handler::CSS_VERSION,
        menu_sections: views::main_menu("/tactics"),
        tactic_name,
        mode_label: editor.pitch_mode().display_name().to_string(),
        formation_label: editor.formation().label().to_string(),
        can_edit: state.capabilities.can_edit,
        board_width: px(geometry.width),
        board_height: px(geometry.height),
        half_y: px(geometry.height / 2.0),
        center_x: px(geometry.width / 2.0),
        center_radius: px(geometry.width * 0.13),
        tokens,
        strokes,
        dots,
        roster,
        saved,
        formations,
        team,
        teams,
    })
}

/// Converts a committed path into pixel-space SVG path data. The drawing
/// layer stores normalized coordinates; pixels exist only here, at the
/// rendering boundary.
fn pixel_path_data(path: &DrawPath, geometry: &PitchGeometry) -> String {
    let mut data = String::new();

    for (index, point) in path.points.iter().enumerate() {
        let point = geometry.denormalize(*point);
        let command = if index == 0 { 'M' } else { 'L' };

        write!(data, "{}{:.1} {:.1} ", command, point.x, point.y).unwrap();
    }

    data.trim_end().to_string()
}

fn px(value: f32) -> String {
    format!("{:.1}", value)
}
