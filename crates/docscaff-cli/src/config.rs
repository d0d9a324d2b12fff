//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`ScaffoldOptions`]
//! built from it.
//!
//! # Resolution order (lowest priority first)
//!
//! 1. Built-in defaults
//! 2. Global file: `<config dir>/docscaff/config.toml`
//! 3. Local file: `.docscaff.toml` in the current directory
//! 4. `--config FILE` (must exist when given)
//! 5. Environment: `DOCSCAFF__SECTION__KEY`, e.g. `DOCSCAFF__SCAFFOLD__EXTENSION=md`
//!
//! CLI flags such as `--ext` override the result at the call-site.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{
    Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, builder::DefaultState,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use docscaff_core::domain::{
    PageTemplate, ScaffoldOptions,
    value_objects::{DEFAULT_EXTENSION, DEFAULT_INDEX_NAME, DEFAULT_INDEX_PAGE, DEFAULT_LEAF_PAGE},
};

use crate::error::{CliError, CliResult};

pub const LOCAL_CONFIG_FILE: &str = ".docscaff.toml";
pub const ENV_PREFIX: &str = "DOCSCAFF";

/// Every dotted key `config get` / `config set` accept.
pub const KNOWN_KEYS: &[&str] = &[
    "scaffold.extension",
    "scaffold.index_name",
    "pages.leaf",
    "pages.index",
    "output.no_color",
    "output.format",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub scaffold: ScaffoldConfig,
    /// Placeholder page bodies; `{{TITLE}}` and `{{KEY}}` are substituted.
    pub pages: PageTemplate,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    pub extension: String,
    pub index_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scaffold: ScaffoldConfig {
                extension: DEFAULT_EXTENSION.into(),
                index_name: DEFAULT_INDEX_NAME.into(),
            },
            pages: PageTemplate::default(),
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

/// The config files that may contribute to an [`AppConfig`].
#[derive(Debug, Clone, Default)]
pub struct ConfigLayers {
    pub global: Option<PathBuf>,
    pub local: Option<PathBuf>,
    pub explicit: Option<PathBuf>,
}

impl ConfigLayers {
    /// Standard locations plus an optional `--config` file.
    pub fn discover(explicit: Option<&Path>) -> Self {
        Self {
            global: AppConfig::global_path(),
            local: Some(PathBuf::from(LOCAL_CONFIG_FILE)),
            explicit: explicit.map(Path::to_path_buf),
        }
    }

    /// The file `config set` writes to and `config path` reports:
    /// `--config`, else an existing local file, else the global file.
    pub fn active_file(&self) -> Option<PathBuf> {
        if let Some(explicit) = &self.explicit {
            return Some(explicit.clone());
        }
        match &self.local {
            Some(local) if local.is_file() => Some(local.clone()),
            _ => self.global.clone().or_else(|| self.local.clone()),
        }
    }
}

impl AppConfig {
    /// Load configuration from `layers`, lowest priority first.
    pub fn load_layers(layers: &ConfigLayers) -> anyhow::Result<Self> {
        let mut builder = builder_with_defaults().context("Failed to apply config defaults")?;
        builder = add_optional_file(builder, layers.global.as_deref());
        builder = add_optional_file(builder, layers.local.as_deref());

        if let Some(path) = &layers.explicit {
            debug!(path = %path.display(), "Adding config file");
            builder = builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the global configuration file, if the platform has a config dir.
    pub fn global_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("io", "docscaff", "docscaff")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Scaffold options before CLI overrides.
    pub fn scaffold_options(&self) -> ScaffoldOptions {
        ScaffoldOptions::default()
            .with_extension(self.scaffold.extension.as_str())
            .with_index_name(self.scaffold.index_name.as_str())
            .with_pages(self.pages.clone())
    }

    /// Value of a dotted key, as `config get` prints it.
    pub fn get(&self, key: &str) -> CliResult<String> {
        match key {
            "scaffold.extension" => Ok(self.scaffold.extension.clone()),
            "scaffold.index_name" => Ok(self.scaffold.index_name.clone()),
            "pages.leaf" => Ok(self.pages.leaf.clone()),
            "pages.index" => Ok(self.pages.index.clone()),
            "output.no_color" => Ok(self.output.no_color.to_string()),
            "output.format" => Ok(self.output.format.clone()),
            _ => Err(CliError::UnknownConfigKey { key: key.into() }),
        }
    }
}

fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("scaffold.extension", DEFAULT_EXTENSION)?
        .set_default("scaffold.index_name", DEFAULT_INDEX_NAME)?
        .set_default("pages.leaf", DEFAULT_LEAF_PAGE)?
        .set_default("pages.index", DEFAULT_INDEX_PAGE)?
        .set_default("output.no_color", false)?
        .set_default("output.format", "auto")
}

fn add_optional_file(
    builder: ConfigBuilder<DefaultState>,
    path: Option<&Path>,
) -> ConfigBuilder<DefaultState> {
    match path {
        Some(path) if path.is_file() => {
            debug!(path = %path.display(), "Adding config file");
            builder.add_source(File::from(path).format(FileFormat::Toml).required(false))
        }
        _ => builder,
    }
}
