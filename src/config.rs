use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::decorator::ToppingKind;
use crate::error::{PatternError, Result};
use crate::strategy::VehicleKind;

const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

/// Inputs for the two demos.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    #[serde(default)]
    pub pizza: PizzaSection,
    #[serde(default)]
    pub fleet: FleetSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PizzaSection {
    #[serde(default)]
    pub toppings: Vec<ToppingKind>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FleetSection {
    #[serde(default)]
    pub vehicles: Vec<VehicleKind>,
}

impl DemoConfig {
    /// The embedded configuration the binaries run with.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| PatternError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded demo config");
        Self::from_toml_str(&text)
    }
}
