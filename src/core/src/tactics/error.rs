use std::fmt::{Display, Formatter};

/// Failure taxonomy of the tactics editor.
///
/// `Validation` blocks the action locally (e.g. saving without a name),
/// `MalformedData` aborts a document load while the previous canvas state
/// stays untouched, `Persistence` wraps a store failure verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TacticError {
    Validation(String),
    MalformedData(String),
    Persistence(String),
}

impl Display for TacticError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TacticError::Validation(message) => write!(f, "validation failed: {}", message),
            TacticError::MalformedData(message) => {
                write!(f, "malformed tactic data: {}", message)
            }
            TacticError::Persistence(message) => write!(f, "persistence failed: {}", message),
        }
    }
}

impl std::error::Error for TacticError {}
