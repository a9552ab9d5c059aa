//! Storage layer for textops
//!
//! Persists default paths and tokenizer settings as a TOML file.

use crate::error::StorageError;

pub mod config;

type Result<T> = std::result::Result<T, StorageError>;
