//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`PipelineSettings`]
//! derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables `SVCGEN_<SECTION>__<KEY>`
//! 2. `--config FILE` (must exist when given)
//! 3. `./.svcgen.toml`
//! 4. User config file (see [`AppConfig::config_path`])
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use svcgen_core::{
    application::PipelineSettings,
    domain::{RegistryFiles, RegistryKind, ServiceLayout},
};

/// Name of the per-workspace config file written by `svcgen init`.
pub const LOCAL_CONFIG_FILE: &str = ".svcgen.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where services are generated and with which extensions.
    pub layout: LayoutConfig,
    /// Locations relative to `layout.base_dir`.
    pub paths: PathsConfig,
    /// Registry file names.
    pub registry: RegistryConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub base_dir: PathBuf,
    pub source_extension: String,
    pub interface_extension: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub templates: PathBuf,
    pub registry: PathBuf,
    pub script: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub http_file: String,
    pub rpc_file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            source_extension: "go".into(),
            interface_extension: "proto".into(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            templates: PathBuf::from("templates"),
            registry: PathBuf::from("server"),
            script: PathBuf::from("proto-gen.sh"),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            http_file: RegistryKind::Http.default_file_name().into(),
            rpc_file: RegistryKind::Rpc.default_file_name().into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from every source in priority order.
    ///
    /// `config_file` is the path passed via `--config`; unlike the user and
    /// local files it must exist.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(
            Some(Self::config_path()),
            Path::new(LOCAL_CONFIG_FILE),
            config_file.map(PathBuf::as_path),
        )
    }

    fn load_from(
        user_file: Option<PathBuf>,
        local_file: &Path,
        explicit_file: Option<&Path>,
    ) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default config")?;

        let mut builder = Config::builder().add_source(defaults);
        if let Some(user_file) = user_file {
            builder = builder.add_source(File::from(user_file).required(false));
        }
        builder = builder.add_source(File::from(local_file).required(false));
        if let Some(path) = explicit_file {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix("SVCGEN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.svcgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "svcgen", "svcgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// `path` as given if absolute, else under `layout.base_dir`.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.layout.base_dir.join(path)
        }
    }

    pub fn template_root(&self) -> PathBuf {
        self.resolve(&self.paths.templates)
    }

    pub fn script_path(&self) -> PathBuf {
        self.resolve(&self.paths.script)
    }

    pub fn service_layout(&self) -> ServiceLayout {
        ServiceLayout::new(&self.layout.base_dir)
            .with_source_extension(&self.layout.source_extension)
            .with_interface_extension(&self.layout.interface_extension)
    }

    pub fn registry_files(&self) -> RegistryFiles {
        RegistryFiles::new(self.resolve(&self.paths.registry))
            .with_file_name(RegistryKind::Http, &self.registry.http_file)
            .with_file_name(RegistryKind::Rpc, &self.registry.rpc_file)
    }

    /// Everything the generation pipeline needs to know about locations.
    pub fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings::new(self.service_layout())
            .with_registry(self.registry_files())
            .with_script(self.script_path())
    }
}
