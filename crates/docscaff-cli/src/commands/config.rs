//! `docscaff config`: read and write configuration values.

use std::path::Path;

use clap::ValueEnum;
use docscaff_core::domain::ScaffoldOptions;

use crate::{
    cli::{ConfigCommands, OutputFormat},
    config::{AppConfig, ConfigLayers, KNOWN_KEYS},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    layers: ConfigLayers,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key)?;
            output.print(&value)?;
        }

        ConfigCommands::Set { key, value } => {
            let path = active_file(&layers)?;
            set_value(&path, &key, &value)?;
            output.success(&format!("Set {key} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                let serialised = toml::to_string_pretty(&config)
                    .with_cli_context(|| "Failed to serialise config")?;
                output.header("Current Configuration:")?;
                output.print(&serialised)?;
            }
        }

        ConfigCommands::Path => {
            output.print(&active_file(&layers)?.display().to_string())?;
        }
    }

    Ok(())
}

fn active_file(layers: &ConfigLayers) -> CliResult<std::path::PathBuf> {
    layers.active_file().ok_or_else(|| CliError::ConfigError {
        message: "No configuration file location available".into(),
        source: None,
    })
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Set `key` to `raw` in the TOML file at `path`, creating the file if needed.
/// Other keys and sections in the file are kept.
pub fn set_value(path: &Path, key: &str, raw: &str) -> CliResult<()> {
    let value = parse_value(key, raw)?;
    let Some((section, field)) = key.split_once('.') else {
        return Err(CliError::UnknownConfigKey { key: key.into() });
    };

    let mut doc: toml::Table = if path.is_file() {
        let text = std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read '{}'", path.display()))?;
        toml::from_str::<toml::Table>(&text)
            .with_cli_context(|| format!("Failed to parse '{}'", path.display()))?
    } else {
        toml::Table::new()
    };

    let table = doc
        .entry(section)
        .or_insert(toml::Value::Table(toml::Table::new()))
        .as_table_mut()
        .ok_or_else(|| CliError::ConfigError {
            message: format!("'{section}' in '{}' is not a table", path.display()),
            source: None,
        })?;
    table.insert(field.to_string(), value);

    let body = toml::to_string_pretty(&doc).with_cli_context(|| "Failed to serialise config")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, body).with_cli_context(|| format!("Failed to write '{}'", path.display()))
}

/// Type and validate a raw value for `key`.
fn parse_value(key: &str, raw: &str) -> CliResult<toml::Value> {
    if !KNOWN_KEYS.contains(&key) {
        return Err(CliError::UnknownConfigKey { key: key.into() });
    }

    let invalid = |message: String| CliError::ConfigError {
        message,
        source: None,
    };

    match key {
        "output.no_color" => raw
            .parse::<bool>()
            .map(toml::Value::Boolean)
            .map_err(|_| invalid(format!("'{raw}' is not true or false"))),
        "output.format" => OutputFormat::from_str(raw, true)
            .map(|_| toml::Value::String(raw.to_ascii_lowercase()))
            .map_err(|_| invalid(format!("'{raw}' is not one of auto, human, plain, json"))),
        "scaffold.extension" => {
            let options = ScaffoldOptions::default().with_extension(raw);
            options
                .validate()
                .map_err(|e| invalid(e.to_string()))?;
            Ok(toml::Value::String(options.extension))
        }
        "scaffold.index_name" => {
            ScaffoldOptions::default()
                .with_index_name(raw)
                .validate()
                .map_err(|e| invalid(e.to_string()))?;
            Ok(toml::Value::String(raw.into()))
        }
        _ => Ok(toml::Value::String(raw.into())),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
