//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Minimum length for a plausible browser user agent.
const MIN_USER_AGENT_LENGTH: usize = 20;

/// Maximum request timeout in seconds.
const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_timeout(config.client.timeout_seconds)?;
    validate_user_agent(&config.client.user_agent)?;
    validate_extension(&config.options.default_extension, "default_extension")?;

    for ext in &config.options.recognized_extensions {
        validate_extension(ext, "recognized_extensions")?;
    }

    Ok(())
}

/// Validate the request timeout.
pub fn validate_timeout(timeout_seconds: u64) -> Result<()> {
    if timeout_seconds == 0 {
        return Err(Error::ConfigValidation {
            field: "timeout_seconds".to_string(),
            message: "Timeout must be at least 1 second".to_string(),
        });
    }

    if timeout_seconds > MAX_TIMEOUT_SECONDS {
        return Err(Error::ConfigValidation {
            field: "timeout_seconds".to_string(),
            message: format!(
                "Timeout must be at most {} seconds (got {})",
                MAX_TIMEOUT_SECONDS, timeout_seconds
            ),
        });
    }

    Ok(())
}

/// Validate the user agent string.
pub fn validate_user_agent(user_agent: &str) -> Result<()> {
    if user_agent.is_empty() {
        return Err(Error::ConfigValidation {
            field: "user_agent".to_string(),
            message: "User agent must not be empty".to_string(),
        });
    }

    if user_agent.len() < MIN_USER_AGENT_LENGTH {
        return Err(Error::ConfigValidation {
            field: "user_agent".to_string(),
            message: format!(
                "User agent must be at least {} characters (got {})",
                MIN_USER_AGENT_LENGTH,
                user_agent.len()
            ),
        });
    }

    Ok(())
}

/// Validate a file extension value (no dot, alphanumeric only).
pub fn validate_extension(extension: &str, field: &str) -> Result<()> {
    if extension.is_empty() {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: "Extension must not be empty".to_string(),
        });
    }

    if !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!(
                "Extension '{}' must be alphanumeric, without a leading dot",
                extension
            ),
        });
    }

    Ok(())
}
