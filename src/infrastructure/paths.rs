//! Path utilities for the Zellij sandbox environment.
//!
//! Inside the plugin sandbox the host filesystem is mounted under `/host`.
//! zelmap keeps no data of its own; the only file it writes is the trace
//! export.

use std::path::PathBuf;

/// File name of the OTLP trace export.
pub const TRACE_FILE_NAME: &str = "zelmap-otlp.json";

/// Returns the data directory for zelmap.
///
/// `/host` points to the cwd of the last focused terminal, or the folder
/// Zellij was started from. Started from a home directory this is
/// `~/.local/share/zellij/zelmap`.
///
/// # Examples
///
/// ```
/// use zelmap::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/zelmap");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zelmap")
}

/// Path of the trace export file inside [`get_data_dir`].
#[must_use]
pub fn trace_file_path() -> PathBuf {
    get_data_dir().join(TRACE_FILE_NAME)
}

/// Expands a leading `~` to the sandbox's `/host` mount.
///
/// Used for user-supplied paths such as `theme_file`.
///
/// # Examples
///
/// ```
/// use zelmap::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("/abs/dark.toml"), "/abs/dark.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
