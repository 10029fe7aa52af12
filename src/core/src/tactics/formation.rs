use crate::tactics::pitch::PitchMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Formation {
    FourFourTwo,
    FourThreeThree,
    ThreeFiveTwo,
    FourTwoThreeOne,
    FutsalDiamond,
    FutsalSquare,
}

/// Default token layouts per formation, own goal at the bottom (y = 100).
/// Slots are ordered goalkeeper first, then line by line left to right.
pub const FORMATION_LAYOUTS: &[(Formation, &[(f32, f32)])] = &[
    (
        Formation::FourFourTwo,
        &[
            (50.0, 93.0),
            (18.0, 75.0),
            (38.0, 78.0),
            (62.0, 78.0),
            (82.0, 75.0),
            (18.0, 48.0),
            (38.0, 52.0),
            (62.0, 52.0),
            (82.0, 48.0),
            (38.0, 22.0),
            (62.0, 22.0),
        ],
    ),
    (
        Formation::FourThreeThree,
        &[
            (50.0, 93.0),
            (18.0, 75.0),
            (38.0, 78.0),
            (62.0, 78.0),
            (82.0, 75.0),
            (30.0, 52.0),
            (50.0, 56.0),
            (70.0, 52.0),
            (20.0, 22.0),
            (50.0, 18.0),
            (80.0, 22.0),
        ],
    ),
    (
        Formation::ThreeFiveTwo,
        &[
            (50.0, 93.0),
            (28.0, 78.0),
            (50.0, 80.0),
            (72.0, 78.0),
            (12.0, 50.0),
            (32.0, 54.0),
            (50.0, 58.0),
            (68.0, 54.0),
            (88.0, 50.0),
            (38.0, 22.0),
            (62.0, 22.0),
        ],
    ),
    (
        Formation::FourTwoThreeOne,
        &[
            (50.0, 93.0),
            (18.0, 75.0),
            (38.0, 78.0),
            (62.0, 78.0),
            (82.0, 75.0),
            (38.0, 60.0),
            (62.0, 60.0),
            (22.0, 38.0),
            (50.0, 40.0),
            (78.0, 38.0),
            (50.0, 16.0),
        ],
    ),
    (
        Formation::FutsalDiamond,
        &[
            (50.0, 92.0),
            (50.0, 72.0),
            (25.0, 50.0),
            (75.0, 50.0),
            (50.0, 25.0),
        ],
    ),
    (
        Formation::FutsalSquare,
        &[
            (50.0, 92.0),
            (30.0, 68.0),
            (70.0, 68.0),
            (30.0, 32.0),
            (70.0, 32.0),
        ],
    ),
];

impl Formation {
    pub fn label(&self) -> &'static str {
        match self {
            Formation::FourFourTwo => "4-4-2",
            Formation::FourThreeThree => "4-3-3",
            Formation::ThreeFiveTwo => "3-5-2",
            Formation::FourTwoThreeOne => "4-2-3-1",
            Formation::FutsalDiamond => "1-2-1",
            Formation::FutsalSquare => "2-2",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        FORMATION_LAYOUTS
            .iter()
            .map(|(formation, _)| *formation)
            .find(|formation| formation.label() == label)
    }

    pub fn pitch_mode(&self) -> PitchMode {
        match self {
            Formation::FutsalDiamond | Formation::FutsalSquare => PitchMode::Futsal,
            _ => PitchMode::Football,
        }
    }

    pub fn for_mode(mode: PitchMode) -> Vec<Formation> {
        FORMATION_LAYOUTS
            .iter()
            .map(|(formation, _)| *formation)
            .filter(|formation| formation.pitch_mode() == mode)
            .collect()
    }

    pub fn default_for(mode: PitchMode) -> Formation {
        match mode {
            PitchMode::Football => Formation::FourFourTwo,
            PitchMode::Futsal => Formation::FutsalDiamond,
        }
    }

    pub fn layout(&self) -> &'static [(f32, f32)] {
        let (_, layout) = FORMATION_LAYOUTS
            .iter()
            .find(|(formation, _)| formation == self)
            .unwrap_or(&FORMATION_LAYOUTS[0]);

        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_layout_fills_the_squad_for_its_mode() {
        for (formation, layout) in FORMATION_LAYOUTS {
            assert_eq!(
                layout.len(),
                formation.pitch_mode().squad_size(),
                "layout size mismatch for {}",
                formation.label()
            );
        }
    }

    #[test]
    fn layout_slots_stay_inside_the_canvas() {
        for (_, layout) in FORMATION_LAYOUTS {
            for (x, y) in layout.iter() {
                assert!((0.0..=100.0).contains(x));
                assert!((0.0..=100.0).contains(y));
            }
        }
    }

    #[test]
    fn labels_round_trip() {
        for (formation, _) in FORMATION_LAYOUTS {
            assert_eq!(Formation::from_label(formation.label()), Some(*formation));
        }

        assert_eq!(Formation::from_label("9-9-9"), None);
    }

    #[test]
    fn mode_defaults_match_their_mode() {
        assert_eq!(
            Formation::default_for(PitchMode::Futsal).pitch_mode(),
            PitchMode::Futsal
        );
        assert_eq!(
            Formation::default_for(PitchMode::Football).pitch_mode(),
            PitchMode::Football
        );
    }
}
