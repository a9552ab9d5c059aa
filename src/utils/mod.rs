//! Utils module - Shared utilities and helpers

/// File system helpers
pub mod file;

/// `log` backend and stderr helpers
pub mod logging;

/// Trimming and log previews
pub mod text;

/// Argument validation
pub mod validation;
