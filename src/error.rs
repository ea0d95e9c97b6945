use std::path::PathBuf;

/// Errors that can occur when loading configuration.
///
/// The game engine itself reports nothing here: full columns and exhausted
/// boards are communicated through `Option` sentinels, not errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
