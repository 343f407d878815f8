//! Shared types for the WASM API
//!
//! This module contains result types returned by more than one API call.

use crate::key::KeyScore;
use crate::models::ChordStrip;

/// Result of a page scan
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
pub struct ScanResult {
    pub strips: Vec<ChordStrip>,
    pub elapsed_ms: f64,
}

/// Key estimate with the score of every candidate root
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
pub struct KeyEstimate {
    pub root: Option<String>,
    pub scores: Vec<KeyScore>,
}
