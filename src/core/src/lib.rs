pub mod club;
pub mod shared;
pub mod tactics;
pub mod utils;

// Re-export club items
pub use club::{
    ClubEvent, ClubMessage, ClubState, ClubStateError, EventForm, EventKind, MessageForm,
    PlayerForm, PlayerPosition, RosterPlayer,
};

// Re-export tactics items
pub use tactics::{
    DrawPath, DrawingLayer, EditorCapabilities, EditorMode, Formation, PitchGeometry, PitchMode,
    PlacedToken, TacticDocument, TacticError, TacticUpdate, TacticsEditor, TokenLayer, COORD_MAX,
    DRAWING_PAYLOAD_VERSION,
};

pub use shared::FullName;
pub use utils::*;
