//! Stratified sample grids for directory-per-category image datasets
//!
//! Categories are scanned from disk, a seeded sampler draws a bounded number
//! of images per category, and grid planners place them into fixed-column
//! layouts (flat, or one row block per plant) with labels derived from the
//! category identifiers. A renderer turns the result into a PNG artifact.

#![forbid(unsafe_code)]

/// Category scanning, taxon parsing, image loading and sampling
pub mod dataset;
/// Input/output operations, configuration and error handling
pub mod io;
/// Cell titles derived from category identifiers
pub mod labels;
/// Flat and grouped grid planning
pub mod layout;
/// Canvas description and raster rendering
pub mod render;
/// Report views tying the pipeline together
pub mod report;

pub use io::error::{ReportError, Result};
