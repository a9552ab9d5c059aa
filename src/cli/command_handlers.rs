use crate::cli::main_types::ConfigCommands;
use crate::core::numbers::{TrailingTokenPolicy, sum_squares};
use crate::core::{lines, substring};
use crate::display::{
    OutputFormat, render_config_table, render_reverse, render_substring, render_sum_squares,
};
use crate::error::AppError;
use crate::storage::config::Config;
use crate::utils::validation::validate_reverse_paths;
use std::path::{Path, PathBuf};

#[derive(Default)]
pub struct NumbersHandler;

impl NumbersHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        input: &str,
        policy: TrailingTokenPolicy,
        format: OutputFormat,
    ) -> Result<String, AppError> {
        let result = sum_squares(input, policy)?;
        render_sum_squares(&result, format)
    }
}

#[derive(Default)]
pub struct ReverseHandler;

impl ReverseHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        input: &Path,
        output: &Path,
        format: OutputFormat,
    ) -> Result<String, AppError> {
        validate_reverse_paths(input, output)?;
        let summary = lines::reverse_file(input, output)?;
        render_reverse(&summary, input, output, format)
    }
}

#[derive(Default)]
pub struct ContainsHandler;

impl ContainsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        haystack: &str,
        needle: &str,
        format: OutputFormat,
    ) -> Result<String, AppError> {
        render_substring(&substring::check(haystack, needle), format)
    }
}

pub struct ConfigHandler {
    config_path: Option<PathBuf>,
}

impl ConfigHandler {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self { config_path }
    }

    fn source_label(&self) -> String {
        match &self.config_path {
            Some(path) => path.display().to_string(),
            None => Config::config_file_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "defaults".to_string()),
        }
    }

    pub fn handle(&self, command: ConfigCommands, config: &Config) -> Result<String, AppError> {
        match command {
            ConfigCommands::Show => {
                log::debug!("Showing configuration from {}", self.source_label());
                Ok(render_config_table(config, &self.source_label()))
            }
            ConfigCommands::Set { key, value } => {
                log::debug!("Setting config key '{}' to '{}'", key, value);
                let mut updated = config.clone();
                updated.set_field(&key, &value)?;
                updated.save(self.config_path.clone())?;
                Ok(format!("Set {} = {}", key, value))
            }
        }
    }
}
