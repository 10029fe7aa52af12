pub mod document;
pub mod drawing;
pub mod editor;
pub mod error;
pub mod formation;
pub mod mode;
pub mod pitch;
pub mod token;

pub use document::{TacticDocument, TacticUpdate, DRAWING_PAYLOAD_VERSION};
pub use drawing::{DrawPath, DrawingLayer, DEFAULT_STROKE_WIDTH};
pub use editor::{EditorCapabilities, TacticsEditor};
pub use error::TacticError;
pub use formation::Formation;
pub use mode::EditorMode;
pub use pitch::{PitchGeometry, PitchMode, COORD_MAX};
pub use token::{PlacedToken, TokenLayer, DEFAULT_TOKEN_X, DEFAULT_TOKEN_Y};
