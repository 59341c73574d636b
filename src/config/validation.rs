use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Teletext URL cannot be empty and must use http:// or https://
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
/// - If an HTTP timeout is provided, it must be non-zero
pub fn validate_config(
    api_url: &str,
    log_file_path: &Option<String>,
    http_timeout_seconds: Option<u64>,
) -> Result<(), AppError> {
    if api_url.is_empty() {
        return Err(AppError::config_error("Teletext URL cannot be empty"));
    }

    if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
        return Err(AppError::config_error(
            "Teletext URL must start with http:// or https://",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    if http_timeout_seconds == Some(0) {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    Ok(())
}
