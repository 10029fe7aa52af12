use crate::tactics::drawing::DrawPath;
use crate::tactics::error::TacticError;
use crate::tactics::pitch::PitchMode;
use crate::tactics::token::PlacedToken;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Version tag of the drawing payload encoding. Bumped only when the wire
/// shape of [`DrawPath`] changes incompatibly.
pub const DRAWING_PAYLOAD_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct DrawingPayload {
    version: u32,
    paths: Vec<DrawPath>,
}

/// Serialized union of token positions, drawing annotations and metadata.
/// The persistence collaborator stores and returns this shape verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TacticDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    pub mode: PitchMode,
    pub formation_label: String,
    pub players: Vec<PlacedToken>,
    pub drawing_data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

impl TacticDocument {
    /// Composes a document from live editor state. The token list is taken
    /// verbatim; the drawing is folded into the opaque payload string.
    pub fn compose(
        name: &str,
        mode: PitchMode,
        formation_label: &str,
        tokens: &[PlacedToken],
        paths: &[DrawPath],
    ) -> Result<TacticDocument, TacticError> {
        let document = TacticDocument {
            id: None,
            name: name.trim().to_string(),
            mode,
            formation_label: formation_label.to_string(),
            players: tokens.to_vec(),
            drawing_data: encode_drawing(paths),
            created_at: None,
            updated_at: None,
        };

        document.validate()?;

        Ok(document)
    }

    /// A document must carry a non-empty name before it may reach the
    /// persistence collaborator.
    pub fn validate(&self) -> Result<(), TacticError> {
        if self.name.trim().is_empty() {
            return Err(TacticError::Validation(
                "tactic name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn decode_paths(&self) -> Result<Vec<DrawPath>, TacticError> {
        decode_drawing(&self.drawing_data)
    }
}

pub fn encode_drawing(paths: &[DrawPath]) -> String {
    let payload = DrawingPayload {
        version: DRAWING_PAYLOAD_VERSION,
        paths: paths.to_vec(),
    };

    serde_json::to_string(&payload).expect("drawing payload serialization cannot fail")
}

/// Strict inverse of [`encode_drawing`]. An empty payload string counts as
/// an empty drawing; anything else must parse as a versioned payload or
/// the load is rejected as malformed.
pub fn decode_drawing(data: &str) -> Result<Vec<DrawPath>, TacticError> {
    if data.trim().is_empty() {
        return Ok(Vec::new());
    }

    let payload: DrawingPayload = serde_json::from_str(data)
        .map_err(|err| TacticError::MalformedData(err.to_string()))?;

    if payload.version != DRAWING_PAYLOAD_VERSION {
        return Err(TacticError::MalformedData(format!(
            "unsupported drawing payload version {}",
            payload.version
        )));
    }

    Ok(payload.paths)
}

/// Partial update accepted by `PUT /api/tactics/{id}`. Absent fields keep
/// their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TacticUpdate {
    pub name: Option<String>,
    pub mode: Option<PitchMode>,
    pub formation_label: Option<String>,
    pub players: Option<Vec<PlacedToken>>,
    pub drawing_data: Option<String>,
}

impl TacticUpdate {
    pub fn apply_to(self, document: &mut TacticDocument) {
        if let Some(name) = self.name {
            document.name = name;
        }
        if let Some(mode) = self.mode {
            document.mode = mode;
        }
        if let Some(formation_label) = self.formation_label {
            document.formation_label = formation_label;
        }
        if let Some(players) = self.players {
            document.players = players;
        }
        if let Some(drawing_data) = self.drawing_data {
            document.drawing_data = drawing_data;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tactics::drawing::DEFAULT_STROKE_WIDTH;
    use nalgebra::Point2;

    fn path_with_points(id: u32, count: usize) -> DrawPath {
        DrawPath {
            id,
            points: (0..count)
                .map(|i| Point2::new(i as f32 * 1.5, 100.0 - i as f32))
                .collect(),
            color_tag: "chalk".to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }

    #[test]
    fn empty_path_list_round_trips() {
        let paths: Vec<DrawPath> = Vec::new();

        assert_eq!(decode_drawing(&encode_drawing(&paths)).unwrap(), paths);
    }

    #[test]
    fn varied_path_list_round_trips() {
        let paths = vec![
            path_with_points(1, 0),
            path_with_points(2, 1),
            path_with_points(3, 2),
            path_with_points(4, 50),
            path_with_points(5, 7),
        ];

        assert_eq!(decode_drawing(&encode_drawing(&paths)).unwrap(), paths);
    }

    #[test]
    fn empty_payload_string_is_an_empty_drawing() {
        assert_eq!(decode_drawing("").unwrap(), Vec::new());
        assert_eq!(decode_drawing("  ").unwrap(), Vec::new());
    }

    #[test]
    fn garbage_payload_is_malformed_not_a_parse_panic() {
        let result = decode_drawing("{not json");
        assert!(matches!(result, Err(TacticError::MalformedData(_))));

        let result = decode_drawing("[1,2,3]");
        assert!(matches!(result, Err(TacticError::MalformedData(_))));
    }

    #[test]
    fn future_payload_version_is_rejected() {
        let data = format!(
            "{{\"version\":{},\"paths\":[]}}",
            DRAWING_PAYLOAD_VERSION + 1
        );

        assert!(matches!(
            decode_drawing(&data),
            Err(TacticError::MalformedData(_))
        ));
    }

    #[test]
    fn compose_rejects_empty_name() {
        let result = TacticDocument::compose("   ", PitchMode::Football, "4-4-2", &[], &[]);

        assert!(matches!(result, Err(TacticError::Validation(_))));
    }

    #[test]
    fn compose_trims_the_name() {
        let document =
            TacticDocument::compose("  Press high  ", PitchMode::Football, "4-4-2", &[], &[])
                .unwrap();

        assert_eq!(document.name, "Press high");
    }

    #[test]
    fn update_overwrites_only_present_fields() {
        let mut document =
            TacticDocument::compose("Press high", PitchMode::Football, "4-4-2", &[], &[]).unwrap();

        TacticUpdate {
            name: Some("Low block".to_string()),
            ..TacticUpdate::default()
        }
        .apply_to(&mut document);

        assert_eq!(document.name, "Low block");
        assert_eq!(document.mode, PitchMode::Football);
        assert_eq!(document.formation_label, "4-4-2");
    }
}
