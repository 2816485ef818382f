use std::path::PathBuf;
use thiserror::Error;

/// Failures while turning configuration text into demo inputs.
///
/// The patterns themselves never fail; only names coming from a config
/// file can be wrong.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Unknown topping '{0}' (expected one of: cheese, olives, pepperoni)")]
    UnknownTopping(String),

    #[error("Unknown vehicle '{0}' (expected one of: passenger, sports, offload)")]
    UnknownVehicle(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PatternError>;
