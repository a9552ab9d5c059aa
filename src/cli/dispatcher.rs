use crate::cli::command_handlers::{
    ConfigHandler, ContainsHandler, NumbersHandler, ReverseHandler,
};
use crate::cli::main_types::Commands;
use crate::core::numbers::TrailingTokenPolicy;
use crate::display::OutputFormat;
use crate::error::AppError;
use crate::storage::config::Config;
use std::path::PathBuf;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    format: OutputFormat,
}

impl Dispatcher {
    pub fn new(config: Config, config_path: Option<PathBuf>, format: OutputFormat) -> Self {
        Self {
            config,
            config_path,
            format,
        }
    }

    /// Run `command` and return the text to print on success
    pub fn dispatch(&self, command: Commands) -> Result<String, AppError> {
        match command {
            Commands::SumSquares { input, trailing } => {
                let policy = trailing
                    .map(TrailingTokenPolicy::from)
                    .unwrap_or(self.config.trailing_token);
                NumbersHandler::new().handle(&input, policy, self.format)
            }
            Commands::Reverse { input, output } => {
                let input = input.unwrap_or_else(|| self.config.input_path.clone());
                let output = output.unwrap_or_else(|| self.config.output_path.clone());
                ReverseHandler::new().handle(&input, &output, self.format)
            }
            Commands::Contains { haystack, needle } => {
                ContainsHandler::new().handle(&haystack, &needle, self.format)
            }
            Commands::Config { command } => ConfigHandler::new(self.config_path.clone())
                .handle(command, &self.config),
        }
    }
}
