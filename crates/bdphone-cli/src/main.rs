//! bdphone CLI - Bangladeshi mobile number validation from the command line
//!
//! This is the main entry point for the bdphone CLI application, providing
//! commands for validating, formatting, normalizing and transforming phone
//! numbers and for identifying their operator.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands, OutputFormat};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Run the application
    let result = run(cli);

    // Handle the result
    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );

            if e.should_show_help() {
                eprintln!("\nFor more information, try '--help'");
            }

            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
fn run(cli: Cli) -> Result<()> {
    // Completions must work even with a broken config file
    if let Commands::Completions(args) = cli.command {
        return handlers::handle_completions(args);
    }

    // Load configuration
    let config = Config::load_with_file(cli.config.as_deref())?;

    // Initialize logging
    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if !config.output.color {
        control::set_override(false);
    }

    dispatch(cli, &config)
}

#[instrument(skip(cli, config), fields(command = ?cli.command))]
fn dispatch(cli: Cli, config: &Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    // Create output writer
    let use_color = cli.use_color() && config.output.color;
    let format = cli
        .output
        .or(config.output.format)
        .unwrap_or(OutputFormat::Human);
    let mut output = OutputWriter::new(format, use_color, cli.quiet);

    tracing::info!(
        output = ?output.format(),
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    // Handle the subcommand
    match cli.command {
        Commands::Validate(args) => handlers::handle_validate(args, config, &mut output),
        Commands::Format(args) => handlers::handle_format(args, config, &mut output),
        Commands::Normalize(args) => handlers::handle_normalize(args, config, &mut output),
        Commands::Operator(args) => handlers::handle_operator(args, config, &mut output),
        Commands::Customize(args) => handlers::handle_customize(args, config, &mut output),
        Commands::Config(args) => handlers::handle_config(args, config, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let logging_config = LoggingConfig::resolve(cli.verbosity_level(), cli.quiet, &config.logging);
    logging::init_logging(logging_config)
}
