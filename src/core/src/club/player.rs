use crate::shared::FullName;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerPosition {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerPosition {
    pub fn display_name(&self) -> &'static str {
        match self {
            PlayerPosition::Goalkeeper => "Goalkeeper",
            PlayerPosition::Defender => "Defender",
            PlayerPosition::Midfielder => "Midfielder",
            PlayerPosition::Forward => "Forward",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            PlayerPosition::Goalkeeper => "GK",
            PlayerPosition::Defender => "DF",
            PlayerPosition::Midfielder => "MF",
            PlayerPosition::Forward => "FW",
        }
    }

    /// Token color for the tactics board, keyed by position group.
    pub fn color_tag(&self) -> &'static str {
        match self {
            PlayerPosition::Goalkeeper => "amber",
            PlayerPosition::Defender => "blue",
            PlayerPosition::Midfielder => "green",
            PlayerPosition::Forward => "red",
        }
    }

    pub fn from_short_name(value: &str) -> Option<Self> {
        match value {
            "GK" => Some(PlayerPosition::Goalkeeper),
            "DF" => Some(PlayerPosition::Defender),
            "MF" => Some(PlayerPosition::Midfielder),
            "FW" => Some(PlayerPosition::Forward),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterPlayer {
    pub id: u32,
    pub full_name: FullName,
    pub number: u8,
    pub position: PlayerPosition,
    pub team_slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl RosterPlayer {
    pub fn display_name(&self) -> String {
        self.full_name.short()
    }
}

/// Explicit form for creating or fully replacing a roster player.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerForm {
    pub first_name: String,
    pub last_name: String,
    pub number: u8,
    pub position: PlayerPosition,
    pub team_slug: String,
    #[serde(default)]
    pub photo_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_short_names_round_trip() {
        for position in [
            PlayerPosition::Goalkeeper,
            PlayerPosition::Defender,
            PlayerPosition::Midfielder,
            PlayerPosition::Forward,
        ] {
            assert_eq!(
                PlayerPosition::from_short_name(position.short_name()),
                Some(position)
            );
        }

        assert_eq!(PlayerPosition::from_short_name("XX"), None);
    }

    #[test]
    fn display_name_is_token_sized() {
        let player = RosterPlayer {
            id: 1,
            full_name: FullName::new("Maya".to_string(), "Okafor".to_string()),
            number: 9,
            position: PlayerPosition::Forward,
            team_slug: "u15".to_string(),
            photo_url: None,
        };

        assert_eq!(player.display_name(), "M. Okafor");
    }
}
