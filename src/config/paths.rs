use crate::constants::LOG_FILE_NAME;
use std::path::Path;

const APP_DIR: &str = "ct_teletext";

/// Returns the platform-specific path for the config file.
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_DIR)
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_DIR)
        .join("logs")
        .to_string_lossy()
        .to_string()
}

/// Splits a custom log file path into the directory and file name the
/// rolling appender expects. Falls back to the default file name when the
/// path has no file component.
pub fn split_log_file_path(custom_path: &str) -> (String, String) {
    let path = Path::new(custom_path);
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(LOG_FILE_NAME);
    (parent.to_string_lossy().to_string(), file_name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_log_file_path_with_directory() {
        let (dir, file) = split_log_file_path("/var/log/teletext/viewer.log");
        assert_eq!(dir, "/var/log/teletext");
        assert_eq!(file, "viewer.log");
    }

    #[test]
    fn test_split_log_file_path_bare_file_name() {
        let (dir, file) = split_log_file_path("viewer.log");
        assert_eq!(dir, ".");
        assert_eq!(file, "viewer.log");
    }
}
