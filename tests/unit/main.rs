//! Unit tests mirroring the src tree, plus shared on-disk fixtures

mod report;

use image::{Rgb, RgbImage};
use plantgrid::Result;
use std::path::Path;

/// Write an 8x8 solid picture; the encoder follows the file extension
pub fn write_image(path: &Path, color: [u8; 3]) -> Result<()> {
    RgbImage::from_pixel(8, 8, Rgb(color)).save(path)?;
    Ok(())
}

/// Create one directory per category holding the named files
///
/// Names ending in `.txt` or containing `corrupt` get non-image bytes.
pub fn write_dataset(root: &Path, categories: &[(&str, &[&str])]) -> Result<()> {
    for (category, files) in categories {
        let directory = root.join(category);
        std::fs::create_dir_all(&directory)?;
        for (index, file) in files.iter().enumerate() {
            let path = directory.join(file);
            if file.ends_with(".txt") || file.contains("corrupt") {
                std::fs::write(&path, b"not an image")?;
            } else {
                write_image(&path, [index as u8 * 40, 120, 60])?;
            }
        }
    }
    Ok(())
}
