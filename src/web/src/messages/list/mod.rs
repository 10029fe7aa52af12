pub mod routes;

use crate::views::{self, MenuSection};
use crate::{ApiResult, AppData};
use askama::Template;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use pitchside_core::utils::DateUtils;
use pitchside_core::ClubMessage;

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "messages/index.html")]
pub struct MessagesTemplate {
    pub css_version: &'static str,
    pub menu_sections: Vec<MenuSection>,
    pub rows: Vec<MessageRow>,
}

pub struct MessageRow {
    pub id: u32,
    pub author: String,
    pub body: String,
    pub posted: String,
    pub team: String,
}

pub async fn messages_page_action(State(state): State<AppData>) -> ApiResult<impl IntoResponse> {
    let guard = state.club.read().await;

    let rows = guard
        .messages()
        .into_iter()
        .map(|message| MessageRow {
            id: message.id,
            author: message.author.clone(),
            body: message.body.clone(),
            posted: DateUtils::format_timestamp(message.posted_at),
            team: message.team_slug.clone(),
        })
        .collect();

    Ok(MessagesTemplate {
        css_version: crate::common::default_handler::CSS_VERSION,
        menu_sections: views::main_menu("/messages"),
        rows,
    })
}

pub async fn messages_api_action(
    State(state): State<AppData>,
) -> ApiResult<Json<Vec<ClubMessage>>> {
    let guard = state.club.read().await;

    Ok(Json(guard.messages().into_iter().cloned().collect()))
}
