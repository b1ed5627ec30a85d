//! Detection parameters and their validation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::hysteresis::HysteresisMode;
use crate::error::{CannyError, Result};

/// Parameters of one detection run.
///
/// Deserializes from partial JSON: missing fields take their defaults, and
/// the threshold ratios also accept the `lowThreshold` / `highThreshold`
/// spellings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CannyParams {
    /// Gaussian standard deviation
    pub sigma: f64,
    /// Gaussian kernel side length (odd)
    pub kernel_size: usize,
    /// Label for candidate edge pixels
    pub weak_pixel: i32,
    /// Label for definite edge pixels
    pub strong_pixel: i32,
    /// Low threshold as a fraction of the high threshold
    #[serde(alias = "lowThreshold", alias = "lowthreshold")]
    pub low_threshold: f64,
    /// High threshold as a fraction of the suppressed magnitude maximum
    #[serde(alias = "highThreshold", alias = "highthreshold")]
    pub high_threshold: f64,
    pub hysteresis: HysteresisMode,
}

impl Default for CannyParams {
    fn default() -> Self {
        Self {
            sigma: 1.0,
            kernel_size: 5,
            weak_pixel: 75,
            strong_pixel: 255,
            low_threshold: 0.05,
            high_threshold: 0.15,
            hysteresis: HysteresisMode::SinglePass,
        }
    }
}

impl CannyParams {
    /// Check every parameter; nothing is clamped or corrected.
    pub fn validate(&self) -> Result<()> {
        if self.kernel_size == 0 || self.kernel_size % 2 == 0 {
            return Err(CannyError::InvalidConfig(format!(
                "kernel_size must be a positive odd integer, got {}",
                self.kernel_size
            )));
        }
        if !(self.sigma.is_finite() && self.sigma > 0.0) {
            return Err(CannyError::InvalidConfig(format!(
                "sigma must be positive, got {}",
                self.sigma
            )));
        }
        for (name, value) in [
            ("low_threshold", self.low_threshold),
            ("high_threshold", self.high_threshold),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(CannyError::InvalidConfig(format!(
                    "{name} must be in (0, 1], got {value}"
                )));
            }
        }
        // Effective low = high · low_threshold, which reaches high only at 1.
        if self.low_threshold >= 1.0 {
            return Err(CannyError::InvalidConfig(format!(
                "low_threshold {} leaves no room below the high threshold",
                self.low_threshold
            )));
        }
        if self.weak_pixel == 0 || self.strong_pixel == 0 {
            return Err(CannyError::InvalidConfig(
                "weak_pixel and strong_pixel must be non-zero".to_string(),
            ));
        }
        if self.weak_pixel == self.strong_pixel {
            return Err(CannyError::InvalidConfig(format!(
                "weak_pixel and strong_pixel must differ, both are {}",
                self.weak_pixel
            )));
        }
        Ok(())
    }

    /// Load and validate parameters from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| CannyError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let params: Self = serde_json::from_str(&data).map_err(|e| CannyError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        params.validate()?;
        Ok(params)
    }
}
