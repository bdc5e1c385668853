// Configuration loading and validation (config/pickxi.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file inside `config/` and `defaults/`.
pub const CONFIG_FILE: &str = "pickxi.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// pickxi.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    pool: PoolConfig,
    output: OutputConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

/// Where the player pool comes from and how it is narrowed before use.
#[derive(Debug, Clone, Deserialize)]
pub struct PoolConfig {
    /// CSV file with one row per player.
    pub players: String,
    /// Drop players outside the announced playing side before any roster
    /// building.
    #[serde(default)]
    pub only_playing: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory committed teams are written to as JSON.
    pub teams_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig { dir: "logs".into() }
    }
}

/// Assembled configuration. Relative paths resolve against `base_dir`.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_dir: PathBuf,
    pub pool: PoolConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn players_path(&self) -> PathBuf {
        self.resolve(&self.pool.players)
    }

    pub fn teams_dir(&self) -> PathBuf {
        self.resolve(&self.output.teams_dir)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.resolve(&self.logging.dir)
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let p = Path::new(path);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.base_dir.join(p)
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/pickxi.toml` relative to `base_dir`.
///
/// Does not copy defaults; see [`load_config`].
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = std::fs::read_to_string(&path)
        .map_err(|_| ConfigError::FileNotFound { path: path.clone() })?;
    let file: ConfigFile =
        toml::from_str(&text).map_err(|e| ConfigError::ParseError { path, source: e })?;

    let config = Config {
        base_dir: base_dir.to_path_buf(),
        pool: file.pool,
        output: file.output,
        logging: file.logging,
    };
    validate(&config)?;
    Ok(config)
}

/// Copy any file in `defaults/` that is missing from `config/`.
///
/// Existing config files are never overwritten. Returns the files copied.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.is_dir() {
        if config_dir.is_dir() {
            return Ok(vec![]);
        }
        return Err(ConfigError::DefaultsCopyError {
            message: format!(
                "neither defaults/ nor config/ found in {}",
                base_dir.display()
            ),
        });
    }

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create config directory: {e}"),
    })?;

    let entries = std::fs::read_dir(&defaults_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to read defaults directory: {e}"),
    })?;

    let mut copied = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| ConfigError::DefaultsCopyError {
                message: format!("failed to read defaults entry: {e}"),
            })?
            .path();
        let Some(file_name) = path.file_name() else {
            continue;
        };
        if !path.is_file() {
            continue;
        }

        let target = config_dir.join(file_name);
        if target.exists() {
            continue;
        }
        std::fs::copy(&path, &target).map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to copy {}: {e}", path.display()),
        })?;
        copied.push(target);
    }

    Ok(copied)
}

/// Load config relative to `base_dir`, seeding `config/` from `defaults/`
/// first.
pub fn load_config(base_dir: &Path) -> Result<Config, ConfigError> {
    ensure_config_files(base_dir)?;
    load_config_from(base_dir)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    let required: &[(&str, &str)] = &[
        ("pool.players", &config.pool.players),
        ("output.teams_dir", &config.output.teams_dir),
        ("logging.dir", &config.logging.dir),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: field.to_string(),
                message: "must not be empty".into(),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
