pub mod generator;
pub mod roster;

pub use generator::*;
pub use roster::*;
