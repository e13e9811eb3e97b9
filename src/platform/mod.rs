// CloudNav platform paths
// Resolves the per-user directory the application stores its files in,
// following each OS's conventions via the `dirs` crate.

use std::path::PathBuf;

/// Directory name used on Linux (lowercase by convention).
#[cfg(target_os = "linux")]
const APP_DIR: &str = "cloudnav";

/// Directory name used on macOS and Windows.
#[cfg(not(target_os = "linux"))]
const APP_DIR: &str = "CloudNav";

/// Returns the data directory for CloudNav, where the local database lives.
///
/// - **Linux**: `$XDG_DATA_HOME/cloudnav` (usually `~/.local/share/cloudnav`)
/// - **macOS**: `~/Library/Application Support/CloudNav`
/// - **Windows**: `%APPDATA%/CloudNav`
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}
