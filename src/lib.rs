//! # textops
//!
//! Three independent text utilities behind one small CLI:
//!
//! - [`core::numbers`]: pull digit runs out of a string and sum their squares
//! - [`core::lines`]: reverse the characters of every line of a file
//! - [`core::substring`]: exact substring containment
//!
//! ```rust
//! use textops::prelude::*;
//!
//! let result = sum_squares(" 1, 2, 3, 4, 5 ", TrailingTokenPolicy::Flush).unwrap();
//! assert_eq!(result.sum, 55);
//! assert!(contains("Hello, world!", "world"));
//! ```

pub use error::AppError;

/// Commonly used types and functions.
pub mod prelude {
    pub use crate::Result;
    pub use crate::core::lines::{ReverseSummary, reverse_file, reverse_line};
    pub use crate::core::numbers::{SumSquares, TrailingTokenPolicy, sum_squares, tokenize};
    pub use crate::core::substring::{SubstringReport, check, contains};
    pub use crate::error::{AppError, TextError};
    pub use crate::storage::config::Config;
}

/// Main architecture layers (dependency flow: CLI → Core → Storage)
pub mod cli; // Command-line interface
pub mod core; // Text utilities
pub mod storage; // Configuration persistence

/// Support modules (used across layers)
pub mod display; // Output formatting
pub mod error; // Error handling
pub mod utils; // Shared utilities and helpers

pub type Result<T> = std::result::Result<T, AppError>;
