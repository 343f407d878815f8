//! Engine configuration
//!
//! All tuned heuristics live here so callers can adjust them without
//! touching the algorithms. Every section falls back to its `Default`
//! when omitted, so a partial YAML/JSON document is valid.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Strip Scanner thresholds (pixel units of the rendered page)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// A pixel counts as ink when its mean RGB is below this value
    pub ink_threshold: u8,
    /// A row extends a block only when its ink count exceeds this
    pub noise_threshold: usize,
    /// Blocks shorter than this many rows are discarded
    pub min_block_height: u32,
    /// Rows added above and below each block when cropping
    pub padding: u32,
    /// Cropped strips taller than this are downscaled to it
    pub max_strip_height: u32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ink_threshold: 200,
            noise_threshold: 2,
            min_block_height: 6,
            padding: 6,
            max_strip_height: 96,
        }
    }
}

/// Token Classifier tolerances (page pixel units)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Max vertical distance from a line's anchor for a fragment to join it
    pub line_tolerance_px: f32,
    /// Max horizontal gap for a continuation fragment to be merged
    pub merge_gap_px: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            line_tolerance_px: 10.0,
            merge_gap_px: 6.0,
        }
    }
}

/// Positional weights for key estimation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyWeights {
    pub occurrence: u32,
    pub first: u32,
    pub second: u32,
    pub last: u32,
}

impl Default for KeyWeights {
    fn default() -> Self {
        Self {
            occurrence: 1,
            first: 10,
            second: 2,
            last: 3,
        }
    }
}

/// Correction matching and added-token sizing (percent of page)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub match_tolerance_x_pct: f32,
    pub match_tolerance_y_pct: f32,
    /// Height given to user-added tokens on a page with no detected tokens
    pub default_height_pct: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            match_tolerance_x_pct: 1.5,
            match_tolerance_y_pct: 1.0,
            default_height_pct: 1.5,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub scan: ScanConfig,
    pub classifier: ClassifierConfig,
    pub key: KeyWeights,
    pub overlay: OverlayConfig,
}

impl EngineConfig {
    /// Parse a YAML document and validate it
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: EngineConfig =
            serde_yaml::from_str(text).map_err(|e| EngineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document and validate it
    pub fn from_json(text: &str) -> Result<Self> {
        let config: EngineConfig =
            serde_json::from_str(text).map_err(|e| EngineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.scan.ink_threshold == 0 {
            return Err(EngineError::Config("scan.ink_threshold must be above 0".into()));
        }
        if self.scan.max_strip_height == 0 {
            return Err(EngineError::Config("scan.max_strip_height must be positive".into()));
        }
        if !(self.classifier.line_tolerance_px >= 0.0) || !(self.classifier.merge_gap_px >= 0.0) {
            return Err(EngineError::Config("classifier tolerances must be non-negative".into()));
        }
        if !(self.overlay.match_tolerance_x_pct >= 0.0) || !(self.overlay.match_tolerance_y_pct >= 0.0) {
            return Err(EngineError::Config("overlay tolerances must be non-negative".into()));
        }
        if !(self.overlay.default_height_pct > 0.0) {
            return Err(EngineError::Config("overlay.default_height_pct must be positive".into()));
        }
        Ok(())
    }
}
