use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::paths::home_dir::resolve_home_dir;

/// Application configuration with strongly-typed global sections
/// and a flexible per-module configuration bag.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Base directory for relative database and log paths.
    /// Empty means the platform default; normalized to an absolute path on load.
    #[serde(default)]
    pub home_dir: String,
    /// Record store configuration (optional).
    pub database: Option<DatabaseConfig>,
    /// Logging configuration (optional, uses defaults if None).
    pub logging: Option<LoggingConfig>,
    /// Per-module configuration bag: module_name → arbitrary JSON/YAML value.
    #[serde(default)]
    pub modules: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Connection URL, e.g. "sqlite://database/practice.db" or "sqlite::memory:".
    pub url: String,
    /// Maximum number of pooled connections (defaults to 5).
    pub max_conns: Option<u32>,
}

/// Logging configuration: maps crate names to their logging settings.
/// Key "default" is the catch-all for targets without an explicit section.
pub type LoggingConfig = HashMap<String, Section>;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Section {
    pub console_level: String, // "info", "debug", "error", "off"
    pub file: String,          // "logs/practice-stats.log", empty disables the file
    #[serde(default)]
    pub file_level: String,
    #[serde(default)]
    pub max_size_mb: Option<u64>,
}

/// Create a default logging configuration.
pub fn default_logging_config() -> LoggingConfig {
    let mut logging = HashMap::new();
    logging.insert(
        "default".to_string(),
        Section {
            console_level: "info".to_string(),
            file: "logs/practice-stats.log".to_string(),
            file_level: "debug".to_string(),
            max_size_mb: Some(50),
        },
    );
    logging
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://database/practice.db".to_string(),
            max_conns: Some(5),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            home_dir: String::new(),
            database: Some(DatabaseConfig::default()),
            logging: Some(default_logging_config()),
            modules: HashMap::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration with layered loading: defaults → YAML file → environment variables.
    /// Also normalizes `home_dir` into an absolute path and creates the directory.
    pub fn load_layered<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        use figment::{
            providers::{Env, Format, Serialized, Yaml},
            Figment,
        };

        let config_path = config_path.as_ref();
        if !config_path.is_file() {
            bail!("Config file not found: {}", config_path.display());
        }

        // Optional sections stay None unless YAML/ENV provide them.
        let base = AppConfig {
            home_dir: String::new(),
            database: None,
            logging: None,
            modules: HashMap::new(),
        };

        let figment = Figment::new()
            .merge(Serialized::defaults(base))
            .merge(Yaml::file(config_path))
            // APP__DATABASE__URL=sqlite::memory: maps to database.url
            .merge(Env::prefixed("APP__").split("__"));

        let mut config: AppConfig = figment
            .extract()
            .with_context(|| "Failed to extract config from figment".to_string())?;

        normalize_home_dir_inplace(&mut config).context("Failed to resolve home_dir")?;
        Ok(config)
    }

    /// Load configuration from file or fall back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_layered(path),
            None => {
                let mut c = Self::default();
                normalize_home_dir_inplace(&mut c)
                    .context("Failed to resolve home_dir (defaults)")?;
                Ok(c)
            }
        }
    }

    /// Serialize configuration to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize config to YAML")
    }

    /// Typed view of one module's section; a missing section yields `T::default()`.
    pub fn module_config<T>(&self, module_name: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        match self.modules.get(module_name) {
            Some(raw) => serde_json::from_value(raw.clone())
                .with_context(|| format!("Invalid configuration for module '{module_name}'")),
            None => Ok(T::default()),
        }
    }

    pub fn home_path(&self) -> PathBuf {
        PathBuf::from(&self.home_dir)
    }

    /// Apply overrides from command line arguments.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        let logging = self.logging.get_or_insert_with(default_logging_config);
        if let Some(default_section) = logging.get_mut("default") {
            default_section.console_level = match args.verbose {
                0 => default_section.console_level.clone(),
                1 => "debug".to_string(),
                _ => "trace".to_string(),
            };
        }

        if args.mock {
            self.database = None;
        }
    }
}

/// Command line arguments that influence configuration.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub config: Option<String>,
    pub print_config: bool,
    pub verbose: u8,
    pub mock: bool,
}

const fn default_subdir() -> &'static str {
    ".practice-stats"
}

fn normalize_home_dir_inplace(config: &mut AppConfig) -> Result<()> {
    let opt = if config.home_dir.trim().is_empty() {
        None
    } else {
        Some(config.home_dir.clone())
    };

    let resolved: PathBuf = resolve_home_dir(opt, default_subdir(), true)
        .context("home_dir normalization failed")?;

    config.home_dir = resolved.to_string_lossy().to_string();
    Ok(())
}
