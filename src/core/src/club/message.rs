use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubMessage {
    pub id: u32,
    pub author: String,
    pub body: String,
    pub posted_at: NaiveDateTime,
    pub team_slug: String,
}

/// Explicit form for posting a message to the club board.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageForm {
    pub author: String,
    pub body: String,
    #[serde(default)]
    pub team_slug: String,
}
