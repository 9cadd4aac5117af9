//! Serializable settings a [`CoordinateVector`] can be built from and saved to
//!
//! Every field is optional in JSON and falls back to the vector defaults:
//!
//! ```json
//! {"dimension": 3, "minimum": -1e5, "maximum": 1e5, "single_step": 0.1,
//!  "decimals": 3, "decimals_option": "by_value", "coordinates": [0, 0, 0]}
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use super::CoordinateVector;
use crate::bounded::DecimalsOption;
use crate::constants::{
    DEFAULT_DECIMALS, DEFAULT_DIMENSION, DEFAULT_MAXIMUM, DEFAULT_MINIMUM, DEFAULT_SINGLE_STEP,
};
use crate::{CoordinatesError, Result};

/// Settings and optional initial values of a coordinate vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinatesConfig {
    pub dimension: usize,
    pub minimum: f64,
    pub maximum: f64,
    pub single_step: f64,
    pub decimals: usize,
    pub decimals_option: DecimalsOption,
    pub normalized: bool,
    pub inverted_controls: bool,
    /// Initial coordinates; zeros when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Vec<f64>>,
}

impl Default for CoordinatesConfig {
    fn default() -> Self {
        CoordinatesConfig {
            dimension: DEFAULT_DIMENSION,
            minimum: DEFAULT_MINIMUM,
            maximum: DEFAULT_MAXIMUM,
            single_step: DEFAULT_SINGLE_STEP,
            decimals: DEFAULT_DECIMALS,
            decimals_option: DecimalsOption::Fixed,
            normalized: false,
            inverted_controls: false,
            coordinates: None,
        }
    }
}

impl CoordinatesConfig {
    /// Parses a configuration from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading coordinates configuration from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serializes the configuration as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// Builds a vector with these settings
    ///
    /// The range is ignored when `normalized` is set, since normalization
    /// pins it to `[-1, 1]`.
    pub fn build(&self) -> Result<CoordinateVector> {
        if let Some(values) = &self.coordinates {
            if values.len() != self.dimension {
                return Err(CoordinatesError::DimensionMismatch {
                    expected: self.dimension,
                    actual: values.len(),
                });
            }
        }

        let mut vector = CoordinateVector::with_dimension(self.dimension);
        if !self.normalized {
            vector.set_range(self.minimum, self.maximum)?;
        }
        vector.set_single_step(self.single_step)?;
        vector.set_decimals(self.decimals)?;
        vector.set_decimals_option(self.decimals_option);
        vector.set_inverted_controls(self.inverted_controls);
        if let Some(values) = &self.coordinates {
            vector.set_coordinates(values)?;
        }
        if self.normalized {
            vector.normalize();
        }
        Ok(vector)
    }
}

impl CoordinateVector {
    /// Builds a vector from a configuration
    pub fn from_config(config: &CoordinatesConfig) -> Result<Self> {
        config.build()
    }

    /// Captures the current settings and coordinates
    pub fn to_config(&self) -> CoordinatesConfig {
        CoordinatesConfig {
            dimension: self.dimension(),
            minimum: self.minimum(),
            maximum: self.maximum(),
            single_step: self.single_step(),
            decimals: self.decimals(),
            decimals_option: self.decimals_option(),
            normalized: self.is_normalized(),
            inverted_controls: self.inverted_controls(),
            coordinates: Some(self.coordinates().to_vec()),
        }
    }
}
