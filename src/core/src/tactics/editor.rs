use crate::club::RosterPlayer;
use crate::tactics::document::TacticDocument;
use crate::tactics::drawing::DrawingLayer;
use crate::tactics::error::TacticError;
use crate::tactics::formation::Formation;
use crate::tactics::mode::EditorMode;
use crate::tactics::pitch::PitchMode;
use crate::tactics::token::TokenLayer;
use itertools::Itertools;
use log::debug;

/// What the current user may do with the board. Passed in explicitly at
/// construction instead of being read from ambient session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorCapabilities {
    pub can_edit: bool,
    pub can_save: bool,
}

impl EditorCapabilities {
    pub fn full() -> Self {
        EditorCapabilities {
            can_edit: true,
            can_save: true,
        }
    }

    pub fn read_only() -> Self {
        EditorCapabilities {
            can_edit: false,
            can_save: false,
        }
    }
}

/// The tactics board: mode state machine, token layer and drawing layer
/// behind one facade that enforces their mutual exclusion rules.
#[derive(Debug)]
pub struct TacticsEditor {
    mode: EditorMode,
    pitch: PitchMode,
    formation: Formation,
    name: String,
    document_id: Option<u32>,
    tokens: TokenLayer,
    drawing: DrawingLayer,
    capabilities: EditorCapabilities,
}

impl TacticsEditor {
    pub fn new(pitch: PitchMode, capabilities: EditorCapabilities) -> Self {
        TacticsEditor {
            mode: EditorMode::default(),
            pitch,
            formation: Formation::default_for(pitch),
            name: String::new(),
            document_id: None,
            tokens: TokenLayer::new(),
            drawing: DrawingLayer::new(),
            capabilities,
        }
    }

    // ---- accessors ----

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn pitch_mode(&self) -> PitchMode {
        self.pitch
    }

    pub fn formation(&self) -> Formation {
        self.formation
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn document_id(&self) -> Option<u32> {
        self.document_id
    }

    pub fn tokens(&self) -> &TokenLayer {
        &self.tokens
    }

    pub fn drawing(&self) -> &DrawingLayer {
        &self.drawing
    }

    pub fn capabilities(&self) -> EditorCapabilities {
        self.capabilities
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    // ---- mode state machine ----

    /// Explicit user toggle, the only transition between `Move` and `Draw`.
    /// A stroke still in progress when leaving `Draw` is discarded, never
    /// silently committed.
    pub fn toggle_mode(&mut self) -> EditorMode {
        if self.mode.is_draw() {
            self.drawing.cancel_stroke();
        }

        self.mode = self.mode.toggled();
        self.mode
    }

    // ---- token layer ----

    pub fn add_token(&mut self, player: &RosterPlayer) -> bool {
        if !self.capabilities.can_edit {
            return false;
        }

        self.tokens.add(player)
    }

    /// Token dragging is disabled while the drawing layer owns the pointer.
    pub fn move_token(&mut self, player_id: u32, x: f32, y: f32) -> bool {
        if !self.capabilities.can_edit || self.mode.is_draw() {
            return false;
        }

        self.tokens.move_to(player_id, x, y)
    }

    pub fn remove_token(&mut self, player_id: u32) -> bool {
        if !self.capabilities.can_edit {
            return false;
        }

        self.tokens.remove(player_id)
    }

    // ---- drawing layer ----

    pub fn begin_stroke(&mut self, x: f32, y: f32) {
        if self.capabilities.can_edit && self.mode.is_draw() {
            self.drawing.begin_stroke(x, y);
        }
    }

    pub fn extend_stroke(&mut self, x: f32, y: f32) {
        if self.capabilities.can_edit && self.mode.is_draw() {
            self.drawing.extend_stroke(x, y);
        }
    }

    pub fn end_stroke(&mut self) -> Option<u32> {
        if self.capabilities.can_edit && self.mode.is_draw() {
            self.drawing.end_stroke()
        } else {
            None
        }
    }

    pub fn clear_drawing(&mut self) {
        if self.capabilities.can_edit {
            self.drawing.clear_all();
        }
    }

    // ---- formation presets ----

    /// Snaps placed tokens onto the formation's slots, lowest jersey number
    /// first. Tokens beyond the slot count keep their positions.
    pub fn apply_formation(&mut self, formation: Formation) {
        if !self.capabilities.can_edit || formation.pitch_mode() != self.pitch {
            return;
        }

        self.formation = formation;

        let layout = formation.layout();
        let order: Vec<u32> = self
            .tokens
            .tokens()
            .iter()
            .sorted_by_key(|token| token.number)
            .map(|token| token.player_id)
            .collect();

        for (player_id, (x, y)) in order.into_iter().zip(layout.iter()) {
            self.tokens.move_to(player_id, *x, *y);
        }
    }

    pub fn set_pitch_mode(&mut self, pitch: PitchMode) {
        if self.pitch == pitch {
            return;
        }

        self.pitch = pitch;

        if self.formation.pitch_mode() != pitch {
            self.formation = Formation::default_for(pitch);
        }
    }

    // ---- document boundary ----

    /// Serializes the current board into a document. Requires a non-empty
    /// name; the save capability is checked here so a read-only board never
    /// produces a persistable document.
    pub fn compose_document(&self) -> Result<TacticDocument, TacticError> {
        if !self.capabilities.can_save {
            return Err(TacticError::Validation(
                "saving is not permitted for this user".to_string(),
            ));
        }

        let mut document = TacticDocument::compose(
            &self.name,
            self.pitch,
            self.formation.label(),
            self.tokens.tokens(),
            self.drawing.paths(),
        )?;

        document.id = self.document_id;

        Ok(document)
    }

    /// Replaces the whole board state from a stored document. The drawing
    /// payload is decoded first; on failure the current state stays
    /// untouched and the error is returned to the caller.
    pub fn load(&mut self, document: &TacticDocument) -> Result<(), TacticError> {
        let paths = document.decode_paths()?;

        self.tokens = TokenLayer::from_tokens(document.players.clone());
        self.drawing = DrawingLayer::from_paths(paths);
        self.pitch = document.mode;
        self.formation = Formation::from_label(&document.formation_label)
            .unwrap_or_else(|| Formation::default_for(document.mode));
        self.name = document.name.clone();
        self.document_id = document.id;
        self.mode = EditorMode::Move;

        debug!(
            "tactic loaded: {} tokens, {} paths",
            self.tokens.len(),
            self.drawing.len()
        );

        Ok(())
    }
}
