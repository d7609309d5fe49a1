//! Seeded per-category image sampling
//!
//! Picks are made over the sorted file list of a category with a
//! caller-owned random source, so one seed reproduces the same images
//! regardless of directory enumeration order.

use crate::dataset::loader::ImageLoader;
use crate::dataset::scanner::Category;
use crate::io::error::{Diagnostics, ReportError};
use image::RgbImage;
use rand::Rng;
use std::path::{Path, PathBuf};

/// A decoded image together with the category it was drawn from
#[derive(Debug, Clone)]
pub struct Sample {
    /// Decoded, resized RGB picture
    pub image: RgbImage,
    /// Identifier of the owning category
    pub category: String,
    /// File the picture was decoded from
    pub source: PathBuf,
}

/// Draw up to `k` distinct paths uniformly at random
///
/// The candidates are sorted before drawing. The result keeps draw order and
/// holds `min(k, files.len())` entries.
pub fn pick<'a, R: Rng + ?Sized>(files: &'a [PathBuf], k: usize, rng: &mut R) -> Vec<&'a Path> {
    let mut sorted: Vec<&Path> = files.iter().map(PathBuf::as_path).collect();
    sorted.sort_unstable();

    let amount = k.min(sorted.len());
    rand::seq::index::sample(rng, sorted.len(), amount)
        .into_iter()
        .filter_map(|index| sorted.get(index).copied())
        .collect()
}

/// Draws and decodes images per category
#[derive(Debug, Clone)]
pub struct Sampler<L> {
    loader: L,
}

impl<L: ImageLoader> Sampler<L> {
    /// Create a sampler decoding through `loader`
    pub const fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Draw `k` images of `category` and decode them
    ///
    /// Files that fail to decode are recorded in `diagnostics` and skipped,
    /// so fewer than `min(k, available)` samples may come back. A category
    /// whose every draw fails additionally records
    /// [`ReportError::InsufficientSamples`].
    pub fn sample<R: Rng + ?Sized>(
        &self,
        category: &Category,
        k: usize,
        rng: &mut R,
        diagnostics: &mut Diagnostics,
    ) -> Vec<Sample> {
        let picks = pick(&category.images, k, rng);
        let attempted = picks.len();

        let mut samples = Vec::with_capacity(attempted);
        for path in picks {
            match self.loader.load(path) {
                Ok(image) => samples.push(Sample {
                    image,
                    category: category.id.clone(),
                    source: path.to_path_buf(),
                }),
                Err(error) => diagnostics.record(error),
            }
        }

        if samples.is_empty() && attempted > 0 {
            diagnostics.record(ReportError::InsufficientSamples {
                category: category.id.clone(),
                attempted,
            });
        }

        samples
    }
}
