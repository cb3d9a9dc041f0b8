//! Configuration command handlers

use crate::cli::{ConfigAction, ConfigArgs, ConfigFormat};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use std::path::PathBuf;

/// Handle the config command
pub fn handle_config(args: ConfigArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    match args.action {
        ConfigAction::Show { format } => handle_config_show(format, config, output),
        ConfigAction::Init { path, force } => handle_config_init(path, force, output),
    }
}

/// Print the effective configuration
fn handle_config_show(format: ConfigFormat, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let rendered = config.render(format)?;
    output.write(&rendered)?;
    if !rendered.ends_with('\n') {
        output.writeln("")?;
    }
    Ok(())
}

/// Write a default configuration file
fn handle_config_init(path: Option<PathBuf>, force: bool, output: &mut OutputWriter) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => Config::user_config_path()
            .ok_or_else(|| Error::config("Unable to determine user config directory"))?,
    };

    if path.exists() && !force {
        output.warning(&format!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        ))?;
        return Err(Error::config(format!("{} already exists", path.display())));
    }

    Config::default().save(&path)?;
    tracing::info!(path = %path.display(), "Wrote configuration file");
    output.success(&format!("✓ Created config at {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn sink() -> OutputWriter {
        OutputWriter::with_writer(OutputFormat::Human, false, true, Box::new(std::io::sink()))
    }

    #[test]
    fn test_init_writes_loadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bdphone.toml");

        handle_config_init(Some(path.clone()), false, &mut sink()).unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bdphone.yaml");
        std::fs::write(&path, "validation: {}\n").unwrap();

        assert!(handle_config_init(Some(path.clone()), false, &mut sink()).is_err());
        assert!(handle_config_init(Some(path), true, &mut sink()).is_ok());
    }
}
