use serde::{Deserialize, Serialize};

/// Interaction mode of the tactics board. The two modes are mutually
/// exclusive: token dragging only works in `Move`, stroke capture only in
/// `Draw`. Transitions happen on explicit toggle, never automatically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    #[default]
    Move,
    Draw,
}

impl EditorMode {
    pub fn toggled(&self) -> Self {
        match self {
            EditorMode::Move => EditorMode::Draw,
            EditorMode::Draw => EditorMode::Move,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, EditorMode::Draw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_mode_is_move() {
        assert_eq!(EditorMode::default(), EditorMode::Move);
    }

    #[test]
    fn toggle_alternates_between_the_two_modes() {
        let mode = EditorMode::Move;
        assert_eq!(mode.toggled(), EditorMode::Draw);
        assert_eq!(mode.toggled().toggled(), EditorMode::Move);
    }
}
