//! Key estimation from detected chord roots

pub mod estimator;

pub use estimator::{estimate_key, estimate_key_from_tokens, estimate_key_with, score_roots, KeyScore};
