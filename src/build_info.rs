//! Revision and date stamped in by the build script.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-line version string for `--version`.
pub fn version_line() -> String {
    format!("mosaic {} ({}, built {})", VERSION, BUILD_COMMIT, BUILD_DATE)
}
