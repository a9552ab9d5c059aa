use clap::Parser;
use std::path::PathBuf;
use textops::cli::dispatcher::Dispatcher;
use textops::cli::main_types::Cli;
use textops::storage::config::{CONFIG_FILE_NAME, Config};
use textops::utils::logging::{VerboseLogger, log_error, log_hint};

fn main() {
    let cli = Cli::parse();
    VerboseLogger::init(cli.verbose);

    // Load Config
    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join(CONFIG_FILE_NAME));

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            log_error(&format!("loading config: {}", err));
            std::process::exit(1);
        }
    };

    if let Some(config_dir) = &cli.config_dir {
        log::info!("Using config directory: {}", config_dir);
    }

    let dispatcher = Dispatcher::new(config, config_path, cli.format);

    match dispatcher.dispatch(cli.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            log::debug!("Command failed ({})", e.severity().label());
            log_error(&e.display_friendly());
            if let Some(hint) = e.troubleshooting_hint() {
                log_hint(&hint);
            }
            std::process::exit(1);
        }
    }
}
