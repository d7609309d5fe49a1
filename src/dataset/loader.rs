//! Image decoding collaborator used by the sampler

use crate::io::error::{ReportError, Result};
use image::RgbImage;
use image::imageops::FilterType;
use std::path::Path;

/// Decodes an image file into a fixed-size RGB picture
pub trait ImageLoader {
    /// Load, coerce to RGB and resize the image at `path`
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::ImageLoad`] if the file cannot be read or decoded
    fn load(&self, path: &Path) -> Result<RgbImage>;
}

/// Loads images from disk and resizes them to a square edge length
#[derive(Debug, Clone, Copy)]
pub struct FsImageLoader {
    size: u32,
}

impl FsImageLoader {
    /// Create a loader producing `size` x `size` images
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero
    pub fn new(size: u32) -> Result<Self> {
        if size == 0 {
            return Err(crate::io::error::invalid_parameter(
                "image_size",
                &size,
                &"must be positive",
            ));
        }
        Ok(Self { size })
    }

    /// Edge length of produced images
    pub const fn size(&self) -> u32 {
        self.size
    }
}

impl ImageLoader for FsImageLoader {
    fn load(&self, path: &Path) -> Result<RgbImage> {
        let decoded = image::open(path).map_err(|e| ReportError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

        // Lanczos keeps leaf texture legible at thumbnail sizes
        let resized = decoded.resize_exact(self.size, self.size, FilterType::Lanczos3);
        Ok(resized.to_rgb8())
    }
}
