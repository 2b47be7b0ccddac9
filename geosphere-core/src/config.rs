//! Tunable parameters: sphere radius and arc resolution

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geodesic::DEFAULT_RESOLUTION;
use crate::sphere::Sphere;

/// Configuration shared by the session and the geodesic engine
///
/// Fields missing from a TOML file fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    /// Sphere radius, positive
    pub radius: f64,
    /// Points per arc, at least 2
    pub resolution: usize,
}

impl SphereConfig {
    /// Set the sphere radius
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Set the number of points per arc
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn validate(&self) -> Result<()> {
        Sphere::new(self.radius)?;
        if self.resolution < 2 {
            return Err(Error::InvalidConfig(format!(
                "arc resolution must be at least 2, got {}",
                self.resolution
            )));
        }
        Ok(())
    }

    /// The sphere described by this configuration
    pub fn sphere(&self) -> Result<Sphere> {
        Sphere::new(self.radius)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}
