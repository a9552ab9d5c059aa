//! Argument validation for the command handlers

use crate::error::CliError;
use crate::utils::file::same_file;
use std::path::Path;

/// Validate that a path argument is not empty
pub fn validate_path(label: &str, path: &Path) -> crate::Result<()> {
    if path.as_os_str().is_empty() {
        return Err(CliError::InvalidArguments(format!("{} path cannot be empty", label)).into());
    }
    Ok(())
}

/// Validate the source/destination pair of a reverse run
pub fn validate_reverse_paths(input: &Path, output: &Path) -> crate::Result<()> {
    validate_path("Input", input)?;
    validate_path("Output", output)?;

    // Truncating the destination would destroy the source before it is read back
    if same_file(input, output) {
        return Err(CliError::InvalidArguments(format!(
            "Input and output must differ: '{}'",
            input.display()
        ))
        .into());
    }

    Ok(())
}
