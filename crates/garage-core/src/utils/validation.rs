//! Input validation for values typed on the command line

use crate::error::CliError;

/// Validate email format
pub fn validate_email(email: &str) -> crate::Result<()> {
    if email.is_empty() {
        return Err(CliError::InvalidArguments("Email cannot be empty".to_string()).into());
    }

    if !email.contains('@') {
        return Err(CliError::InvalidArguments(format!(
            "Invalid email '{}': Email must contain @ symbol",
            email
        ))
        .into());
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return Err(CliError::InvalidArguments(format!(
            "Invalid email '{}': Email must have username and domain parts",
            email
        ))
        .into());
    }

    if !parts[1].contains('.') {
        return Err(CliError::InvalidArguments(format!(
            "Invalid email '{}': Domain must contain dot",
            email
        ))
        .into());
    }

    Ok(())
}

/// Validate a person's display name
pub fn validate_name(name: &str) -> crate::Result<()> {
    if name.trim().is_empty() {
        return Err(CliError::InvalidArguments("Name cannot be empty".to_string()).into());
    }
    Ok(())
}

/// Validate a rows-per-page value
pub fn validate_page_size(page_size: usize) -> crate::Result<()> {
    if page_size == 0 {
        return Err(CliError::InvalidArguments(
            "Page size must be greater than 0".to_string(),
        )
        .into());
    }
    Ok(())
}
