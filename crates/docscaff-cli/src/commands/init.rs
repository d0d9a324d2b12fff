//! `docscaff init`: create a default configuration file.

use std::path::{Path, PathBuf};

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

const HEADER: &str = "\
# docscaff configuration
#
# Page bodies may use {{TITLE}} and {{KEY}}.
# Any key can be overridden with DOCSCAFF__SECTION__KEY, e.g.
#   DOCSCAFF__SCAFFOLD__EXTENSION=md

";

pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let path = target_path(args.local)?;

    if path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            path.display(),
        ))?;
        return Ok(());
    }

    write_default(&path)?;
    output.success(&format!("Configuration created at {}", path.display()))?;
    Ok(())
}

fn target_path(local: bool) -> CliResult<PathBuf> {
    if local {
        return Ok(PathBuf::from(LOCAL_CONFIG_FILE));
    }
    AppConfig::global_path().ok_or_else(|| CliError::ConfigError {
        message: "No global config directory on this platform; use --local".into(),
        source: None,
    })
}

/// Write the built-in defaults to `path`, creating parent directories.
pub fn write_default(path: &Path) -> CliResult<()> {
    let body = toml::to_string_pretty(&AppConfig::default())
        .with_cli_context(|| "Failed to serialise default config")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create config directory '{}'", parent.display()))?;
    }

    std::fs::write(path, format!("{HEADER}{body}"))
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}
