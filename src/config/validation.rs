//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Upper bound for either worker pool.
pub const MAX_WORKERS: usize = 256;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_target_url(&config.target.target_url)?;
    validate_number_of_files(config.target.number_of_files)?;
    validate_workers("resolve_workers", config.options.resolve_workers)?;
    validate_workers("transfer_workers", config.options.transfer_workers)?;
    validate_destination(config)?;

    Ok(())
}

/// Validate the public folder URL.
pub fn validate_target_url(target_url: &str) -> Result<()> {
    if target_url.trim().is_empty() {
        return Err(Error::MissingConfig("target_url".to_string()));
    }

    let parsed = url::Url::parse(target_url.trim())?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "target_url".to_string(),
            message: format!("Unsupported URL scheme '{}'", parsed.scheme()),
        });
    }

    folder_id_from_url(target_url)?;
    Ok(())
}

/// Validate the listing limit.
pub fn validate_number_of_files(number_of_files: u32) -> Result<()> {
    if number_of_files == 0 {
        return Err(Error::ConfigValidation {
            field: "number_of_files".to_string(),
            message: "Must be at least 1".to_string(),
        });
    }
    Ok(())
}

/// Validate a worker pool width.
pub fn validate_workers(field: &str, workers: usize) -> Result<()> {
    if workers == 0 || workers > MAX_WORKERS {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!("Must be between 1 and {} (got {})", MAX_WORKERS, workers),
        });
    }
    Ok(())
}

/// The destination must be an existing directory.
pub fn validate_destination(config: &Config) -> Result<()> {
    let destination = config.destination_folder();

    if !destination.exists() {
        return Err(Error::ConfigValidation {
            field: "destination_folder".to_string(),
            message: format!("Directory does not exist: {}", destination.display()),
        });
    }

    if !destination.is_dir() {
        return Err(Error::ConfigValidation {
            field: "destination_folder".to_string(),
            message: format!("Not a directory: {}", destination.display()),
        });
    }

    Ok(())
}

/// Extract the folder identifier from a public folder URL.
///
/// The identifier is the path segment after the last `/`. A single trailing
/// slash is ignored, so `https://disk.yandex.ru/d/AbC/` yields `AbC`.
pub fn folder_id_from_url(target_url: &str) -> Result<String> {
    let without_query = target_url.trim().split(['?', '#']).next().unwrap_or_default();
    let trimmed = without_query.trim_end_matches('/');

    let id = match trimmed.rfind('/') {
        Some(pos) => &trimmed[pos + 1..],
        None => trimmed,
    };

    if id.is_empty() || id.contains(':') {
        return Err(Error::ConfigValidation {
            field: "target_url".to_string(),
            message: format!("Could not extract folder id from URL: {}", target_url),
        });
    }

    Ok(id.to_string())
}
