use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings.
///
/// # Validation Rules
/// - Store URL cannot be empty
/// - Store URL must be a valid URL or domain name
/// - If a log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(store_url: &str, log_file_path: &Option<String>) -> Result<(), AppError> {
    if store_url.is_empty() {
        return Err(AppError::config_error("Store URL cannot be empty"));
    }

    if !store_url.starts_with("http://") && !store_url.starts_with("https://") {
        // Without a protocol it should at least look like a domain
        if !store_url.contains('.') && !store_url.starts_with("localhost") {
            return Err(AppError::config_error(
                "Store URL must be a valid URL or domain name",
            ));
        }
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.exists()
        {
            // Try to create the directory to validate the path
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
