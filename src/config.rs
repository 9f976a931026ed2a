//! Layered application configuration.
//!
//! Precedence: CLI > env > explicit config file > `./formfilter.toml` >
//! `<config_dir>/formfilter.toml` > defaults.

use crate::errors::FilterError;
use crate::query::Logic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "formfilter.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Ndjson,
    Json,
    Ids,
}

impl std::str::FromStr for OutputMode {
    type Err = FilterError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            "json" => Ok(Self::Json),
            "ids" => Ok(Self::Ids),
            other => Err(FilterError::Config(format!("unknown output mode: {other}"))),
        }
    }
}

/// Settings as they appear in a TOML file; every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub records_dir: Option<PathBuf>,
    pub default_logic: Option<Logic>,
    pub output: Option<OutputMode>,
    pub log_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_retention: Option<usize>,
}

impl FileConfig {
    /// # Errors
    /// Returns an error if the text is not valid TOML for this schema.
    pub fn from_toml_str(s: &str) -> Result<Self, FilterError> {
        Ok(toml::from_str(s)?)
    }

    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, FilterError> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| FilterError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&s)
    }

    /// Fills keys that are still unset from `lower`.
    fn or(self, lower: Self) -> Self {
        Self {
            records_dir: self.records_dir.or(lower.records_dir),
            default_logic: self.default_logic.or(lower.default_logic),
            output: self.output.or(lower.output),
            log_dir: self.log_dir.or(lower.log_dir),
            log_level: self.log_level.or(lower.log_level),
            log_retention: self.log_retention.or(lower.log_retention),
        }
    }
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    pub records_dir: PathBuf,
    pub default_logic: Logic,
    pub output: OutputMode,
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
    pub log_retention: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            records_dir: PathBuf::from("."),
            default_logic: Logic::And,
            output: OutputMode::Ndjson,
            log_dir: None,
            log_level: "warn".to_string(),
            log_retention: 7,
        }
    }
}

impl From<FileConfig> for AppConfig {
    fn from(f: FileConfig) -> Self {
        let d = Self::default();
        Self {
            records_dir: f.records_dir.unwrap_or(d.records_dir),
            default_logic: f.default_logic.unwrap_or(d.default_logic),
            output: f.output.unwrap_or(d.output),
            log_dir: f.log_dir,
            log_level: f.log_level.unwrap_or(d.log_level),
            log_retention: f.log_retention.unwrap_or(d.log_retention),
        }
    }
}

/// Candidate config files, highest precedence first.
#[must_use]
pub fn find_config_paths(cli_cfg: Option<&Path>) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = vec![];
    if let Some(p) = cli_cfg {
        paths.push(p.to_path_buf());
    }
    if let Ok(p) = std::env::var("FORMFILTER_CONFIG") {
        paths.push(PathBuf::from(p));
    }
    if let Ok(cur) = std::env::current_dir() {
        paths.push(cur.join(CONFIG_FILE_NAME));
    }
    if let Some(dir) = dirs_next::config_dir() {
        paths.push(dir.join(CONFIG_FILE_NAME));
    }
    paths
}

/// Settings taken from `FORMFILTER_*` environment variables.
///
/// # Errors
/// Returns an error if a variable holds an unparseable value.
pub fn env_config() -> Result<FileConfig, FilterError> {
    let var = |k: &str| std::env::var(k).ok().filter(|s| !s.is_empty());
    Ok(FileConfig {
        records_dir: var("FORMFILTER_RECORDS_DIR").map(PathBuf::from),
        default_logic: var("FORMFILTER_LOGIC").map(|s| s.parse()).transpose()?,
        output: var("FORMFILTER_OUTPUT").map(|s| s.parse()).transpose()?,
        log_dir: var("FORMFILTER_LOG_DIR").map(PathBuf::from),
        log_level: var("FORMFILTER_LOG_LEVEL"),
        log_retention: var("FORMFILTER_LOG_RETENTION")
            .map(|s| {
                s.parse::<usize>()
                    .map_err(|e| FilterError::Config(format!("FORMFILTER_LOG_RETENTION: {e}")))
            })
            .transpose()?,
    })
}

/// Merges `overrides` (CLI), the environment and config files.
///
/// An explicitly given config file must exist; discovered files are optional.
///
/// # Errors
/// Returns an error if a config file is malformed or an explicit one is missing.
pub fn load(cli_cfg: Option<&Path>, overrides: FileConfig) -> Result<AppConfig, FilterError> {
    let mut merged = overrides.or(env_config()?);
    for (i, p) in find_config_paths(cli_cfg).into_iter().enumerate() {
        let explicit = i == 0 && cli_cfg.is_some();
        if !p.is_file() {
            if explicit {
                return Err(FilterError::Config(format!("config file not found: {}", p.display())));
            }
            continue;
        }
        log::debug!("reading config {}", p.display());
        merged = merged.or(FileConfig::from_path(&p)?);
    }
    Ok(merged.into())
}
