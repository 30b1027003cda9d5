//! XDG-compliant path resolution for yarn-webapp
//!
//! - Linux/macOS: ~/.config/yarn-webapp/
//! - Windows: %APPDATA%\yarn-webapp\

use std::path::PathBuf;

/// Get the configuration directory path
///
/// Returns the directory where yarn-site.json should be stored:
/// - Linux: `~/.config/yarn-webapp/`
/// - macOS: `~/.config/yarn-webapp/` (XDG-style, not ~/Library)
/// - Windows: `%APPDATA%\yarn-webapp\`
pub fn get_config_dir() -> Option<PathBuf> {
    #[cfg(any(target_os = "linux", target_os = "macos"))]
    {
        directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(".config").join("yarn-webapp"))
    }
    #[cfg(target_os = "windows")]
    {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().to_path_buf())
            .map(|d| d.join("yarn-webapp"))
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        None
    }
}

/// Get the full path to the config file
///
/// Returns: `{config_dir}/yarn-site.json`
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|d| d.join("yarn-site.json"))
}
