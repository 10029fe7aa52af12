use crate::club::RosterPlayer;
use crate::tactics::pitch::clamp_coord;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOKEN_X: f32 = 50.0;
pub const DEFAULT_TOKEN_Y: f32 = 50.0;

/// One roster player placed on the canvas. Coordinates live in the
/// normalized 0-100 space on both axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedToken {
    pub player_id: u32,
    pub display_name: String,
    pub number: u8,
    pub x: f32,
    pub y: f32,
    pub color_tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_ref: Option<String>,
}

impl PlacedToken {
    pub fn for_player(player: &RosterPlayer) -> Self {
        PlacedToken {
            player_id: player.id,
            display_name: player.display_name(),
            number: player.number,
            x: DEFAULT_TOKEN_X,
            y: DEFAULT_TOKEN_Y,
            color_tag: player.position.color_tag().to_string(),
            photo_ref: player.photo_url.clone(),
        }
    }
}

/// Token layer of the board. Holds at most one token per roster player id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenLayer {
    tokens: Vec<PlacedToken>,
}

impl TokenLayer {
    pub fn new() -> Self {
        TokenLayer { tokens: Vec::new() }
    }

    /// Rebuilds the layer from a persisted token list. Duplicate player ids
    /// keep the first occurrence so the uniqueness invariant survives a
    /// document written by older builds.
    pub fn from_tokens(tokens: Vec<PlacedToken>) -> Self {
        let mut layer = TokenLayer::new();

        for mut token in tokens {
            if layer.get(token.player_id).is_none() {
                token.x = clamp_coord(token.x);
                token.y = clamp_coord(token.y);
                layer.tokens.push(token);
            }
        }

        layer
    }

    /// Places a token for the player at the canvas center. Returns `false`
    /// without touching anything when the player already has a token.
    pub fn add(&mut self, player: &RosterPlayer) -> bool {
        if self.get(player.id).is_some() {
            return false;
        }

        self.tokens.push(PlacedToken::for_player(player));
        true
    }

    /// Overwrites the token position, clamped into the canvas. Returns
    /// `false` when no token exists for the id.
    pub fn move_to(&mut self, player_id: u32, x: f32, y: f32) -> bool {
        match self.tokens.iter_mut().find(|t| t.player_id == player_id) {
            Some(token) => {
                token.x = clamp_coord(x);
                token.y = clamp_coord(y);
                true
            }
            None => false,
        }
    }

    /// Removes the token. Absent ids are a no-op.
    pub fn remove(&mut self, player_id: u32) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|token| token.player_id != player_id);
        self.tokens.len() != before
    }

    pub fn get(&self, player_id: u32) -> Option<&PlacedToken> {
        self.tokens.iter().find(|token| token.player_id == player_id)
    }

    pub fn tokens(&self) -> &[PlacedToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::PlayerPosition;
    use crate::shared::FullName;

    fn player(id: u32, number: u8) -> RosterPlayer {
        RosterPlayer {
            id,
            full_name: FullName::new("Alex".to_string(), "Novak".to_string()),
            number,
            position: PlayerPosition::Midfielder,
            team_slug: "u12".to_string(),
            photo_url: None,
        }
    }

    #[test]
    fn add_places_token_at_center() {
        let mut layer = TokenLayer::new();

        assert!(layer.add(&player(1, 9)));

        let token = layer.get(1).unwrap();
        assert_eq!((token.x, token.y), (DEFAULT_TOKEN_X, DEFAULT_TOKEN_Y));
        assert_eq!(token.number, 9);
        assert_eq!(token.display_name, "A. Novak");
    }

    #[test]
    fn second_add_for_same_player_is_a_noop() {
        let mut layer = TokenLayer::new();
        layer.add(&player(1, 9));
        layer.move_to(1, 30.0, 70.0);

        assert!(!layer.add(&player(1, 9)));
        assert_eq!(layer.len(), 1);

        // position of the existing token is untouched
        let token = layer.get(1).unwrap();
        assert_eq!((token.x, token.y), (30.0, 70.0));
    }

    #[test]
    fn no_duplicate_ids_under_any_mutation_sequence() {
        let mut layer = TokenLayer::new();

        layer.add(&player(1, 9));
        layer.add(&player(2, 10));
        layer.remove(1);
        layer.add(&player(1, 9));
        layer.add(&player(2, 10));
        layer.move_to(2, 10.0, 10.0);
        layer.add(&player(3, 11));

        let mut ids: Vec<u32> = layer.tokens().iter().map(|t| t.player_id).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), total);
        assert_eq!(layer.len(), 3);
    }

    #[test]
    fn move_clamps_into_canvas() {
        let mut layer = TokenLayer::new();
        layer.add(&player(1, 9));

        layer.move_to(1, -5.0, 140.0);

        let token = layer.get(1).unwrap();
        assert_eq!((token.x, token.y), (0.0, 100.0));
    }

    #[test]
    fn move_and_remove_of_absent_token_do_nothing() {
        let mut layer = TokenLayer::new();

        assert!(!layer.move_to(7, 10.0, 10.0));
        assert!(!layer.remove(7));
        assert!(layer.is_empty());
    }

    #[test]
    fn from_tokens_keeps_first_duplicate_only() {
        let mut first = PlacedToken::for_player(&player(1, 9));
        first.x = 20.0;
        let mut second = PlacedToken::for_player(&player(1, 9));
        second.x = 80.0;

        let layer = TokenLayer::from_tokens(vec![first, second]);

        assert_eq!(layer.len(), 1);
        assert_eq!(layer.get(1).unwrap().x, 20.0);
    }
}
