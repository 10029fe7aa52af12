pub mod tactic;

pub use tactic::*;
