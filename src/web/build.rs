use std::env;
use std::fs;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::path::Path;

// Hash the stylesheet into a cache-busting version constant so embedded
// assets and templates stay in sync across rebuilds.
fn main() {
    println!("cargo:rerun-if-changed=assets/styles.css");

    let css = fs::read("assets/styles.css").unwrap_or_default();

    let mut hasher = DefaultHasher::new();
    css.hash(&mut hasher);

    let contents = format!(
        "pub const CSS_VERSION: &str = \"{:016x}\";\n",
        hasher.finish()
    );

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    fs::write(Path::new(&out_dir).join("css_hash.rs"), contents)
        .expect("failed to write css_hash.rs");
}
