//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod completions;
mod config;
mod customize;
mod format;
mod operator;
mod utils;
mod validate;

pub use completions::handle_completions;
pub use config::handle_config;
pub use customize::handle_customize;
pub use format::{handle_format, handle_normalize};
pub use operator::handle_operator;
pub use validate::handle_validate;
