pub mod event;
pub mod player;

pub use event::*;
pub use player::*;

use include_dir::{include_dir, Dir};

static SEED_DATA: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/data");

pub(crate) fn seed_file(name: &str) -> &'static str {
    SEED_DATA
        .get_file(name)
        .and_then(|file| file.contents_utf8())
        .unwrap_or_else(|| panic!("embedded seed file {} is missing", name))
}
