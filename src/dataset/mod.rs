//! Dataset access
//!
//! This module contains everything that touches the dataset on disk:
//! - Category identifier parsing
//! - Category directory scanning
//! - Image decoding
//! - Seeded sampling

/// Image decoding collaborator
pub mod loader;
/// Seeded per-category sampling
pub mod sampler;
/// Category directory enumeration
pub mod scanner;
/// Plant/condition identifier parsing
pub mod taxon;

pub use sampler::Sample;
pub use scanner::{Category, CategoryScanner};
