//! Render configuration.

use crate::{RenderError, RenderResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default bounce cap. Roulette normally ends paths long before this;
/// it only matters for albedos of exactly 1.0.
pub const DEFAULT_MAX_BOUNCES: u32 = 1024;

/// Render configuration.
///
/// Every field has a default, so JSON files only need to name the
/// settings they change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Samples per pixel
    pub samples_per_pixel: u32,
    /// Safety cap on path length; `None` leaves termination to roulette alone
    pub max_bounces: Option<u32>,
    /// Seed for the render's random stream
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            samples_per_pixel: 100,
            max_bounces: Some(DEFAULT_MAX_BOUNCES),
            seed: 0,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set samples per pixel.
    pub fn with_samples(mut self, samples_per_pixel: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self
    }

    /// Set or remove the bounce cap.
    pub fn with_max_bounces(mut self, max_bounces: Option<u32>) -> Self {
        self.max_bounces = max_bounces;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Parse a (possibly partial) JSON configuration.
    pub fn from_json_str(json: &str) -> RenderResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a (possibly partial) JSON configuration from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        log::debug!("Loading render config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject settings that cannot produce an image.
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "resolution must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidConfig(
                "samples_per_pixel must be at least 1".to_string(),
            ));
        }
        if self.max_bounces == Some(0) {
            return Err(RenderError::InvalidConfig(
                "max_bounces must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}
