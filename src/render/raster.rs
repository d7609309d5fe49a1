//! PNG painter for laid-out grids
//!
//! Style lives in an explicit [`RenderConfig`] handed to the renderer.
//! Captions are painted as color bands: a filled band for bold labels, an
//! underline stroke for regular ones, inset for the small size class, one
//! band per text line. Glyph rasterization is left to richer renderers.

use crate::io::configuration::{
    CAPTION_HEIGHT, CELL_PADDING, PLACEHOLDER_SIZE, REGULAR_STROKE, TITLE_HEIGHT,
};
use crate::io::error::{ReportError, Result};
use crate::labels::formatter::{ColorClass, Emphasis, Label, LabelSize};
use crate::render::canvas::Canvas;
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use std::path::Path;

/// Turns a canvas description into an artifact on disk
pub trait Renderer {
    /// Paint `canvas` and write it to `output`
    ///
    /// # Errors
    ///
    /// Returns an error if the artifact cannot be written
    fn render(&self, canvas: &Canvas<'_>, output: &Path) -> Result<()>;

    /// Write a stand-in artifact for runs without data
    ///
    /// # Errors
    ///
    /// Returns an error if the artifact cannot be written
    fn render_placeholder(&self, title: &str, output: &Path) -> Result<()>;
}

/// Visual style of rendered grids
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Edge length of a cell picture in pixels
    pub cell_size: u32,
    /// Gap between cells and around the canvas
    pub padding: u32,
    /// Height of one caption line
    pub caption_height: u32,
    /// Height of the title band
    pub title_height: u32,
    /// Underline stroke for regular-weight captions
    pub regular_stroke: u32,
    /// Canvas background
    pub background: Rgb<u8>,
    /// Title band color
    pub title_color: Rgb<u8>,
    /// Caption color of healthy categories
    pub healthy_color: Rgb<u8>,
    /// Caption color of diseased categories
    pub diseased_color: Rgb<u8>,
}

impl RenderConfig {
    /// Default style for pictures of the given edge length
    pub const fn with_cell_size(cell_size: u32) -> Self {
        Self {
            cell_size,
            padding: CELL_PADDING,
            caption_height: CAPTION_HEIGHT,
            title_height: TITLE_HEIGHT,
            regular_stroke: REGULAR_STROKE,
            background: Rgb([255, 255, 255]),
            title_color: Rgb([44, 62, 80]),
            healthy_color: Rgb([0, 128, 0]),
            diseased_color: Rgb([139, 0, 0]),
        }
    }

    const fn caption_color(&self, color: ColorClass) -> Rgb<u8> {
        match color {
            ColorClass::Healthy => self.healthy_color,
            ColorClass::Diseased => self.diseased_color,
        }
    }
}

/// Paints canvases into RGB rasters saved as PNG
#[derive(Debug, Clone)]
pub struct RasterRenderer {
    config: RenderConfig,
}

impl RasterRenderer {
    /// Create a renderer with the given style
    pub const fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Style in use
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Canvas dimensions (width, height) for a lattice with `caption_lines` per cell
    pub const fn dimensions(&self, rows: usize, columns: usize, caption_lines: u32) -> (u32, u32) {
        let c = &self.config;
        let width = c.padding + columns as u32 * (c.cell_size + c.padding);
        let height = c.title_height
            + c.padding
            + rows as u32 * (caption_lines * c.caption_height + c.cell_size + c.padding);
        (max_one(width), max_one(height))
    }

    /// Paint a canvas into memory
    pub fn paint(&self, canvas: &Canvas<'_>) -> RgbImage {
        let c = &self.config;
        let caption_lines = canvas
            .visible()
            .filter_map(|cell| cell.content.as_ref())
            .map(|(_, label)| line_count(label))
            .max()
            .unwrap_or(1);

        let (width, height) = self.dimensions(canvas.rows, canvas.columns, caption_lines);
        let mut raster = RgbImage::from_pixel(width, height, c.background);
        fill_rect(&mut raster, 0, 0, width, c.title_height, c.title_color);

        let row_height = caption_lines * c.caption_height + c.cell_size + c.padding;
        for cell in &canvas.cells {
            let Some((picture, label)) = &cell.content else {
                continue;
            };

            let x = c.padding + cell.col as u32 * (c.cell_size + c.padding);
            let y = c.title_height + c.padding + cell.row as u32 * row_height;

            self.paint_caption(&mut raster, x, y, label);

            let image_y = y + caption_lines * c.caption_height;
            if picture.dimensions() == (c.cell_size, c.cell_size) {
                imageops::overlay(&mut raster, *picture, i64::from(x), i64::from(image_y));
            } else {
                let fitted =
                    imageops::resize(*picture, c.cell_size, c.cell_size, FilterType::Lanczos3);
                imageops::overlay(&mut raster, &fitted, i64::from(x), i64::from(image_y));
            }
        }

        raster
    }

    fn paint_caption(&self, raster: &mut RgbImage, x: u32, y: u32, label: &Label) {
        let c = &self.config;
        let color = c.caption_color(label.color);
        let inset = match label.size {
            LabelSize::Regular => 0,
            LabelSize::Small => c.cell_size / 8,
        };
        let band_width = c.cell_size.saturating_sub(2 * inset);

        for line in 0..line_count(label) {
            let top = y + line * c.caption_height;
            match label.emphasis {
                Emphasis::Bold => {
                    fill_rect(raster, x + inset, top, band_width, c.caption_height, color);
                }
                Emphasis::Regular => {
                    let stroke = c.regular_stroke.min(c.caption_height);
                    let stroke_top = top + c.caption_height - stroke;
                    fill_rect(raster, x + inset, stroke_top, band_width, stroke, color);
                }
            }
        }
    }

    fn save(raster: &RgbImage, output: &Path) -> Result<()> {
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ReportError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        raster.save(output).map_err(|e| ReportError::ImageExport {
            path: output.to_path_buf(),
            source: e,
        })
    }
}

impl Renderer for RasterRenderer {
    fn render(&self, canvas: &Canvas<'_>, output: &Path) -> Result<()> {
        let raster = self.paint(canvas);
        Self::save(&raster, output)?;
        tracing::info!(
            "Rendered {} ({}x{} grid, {} pictures)",
            output.display(),
            canvas.rows,
            canvas.columns,
            canvas.visible().count()
        );
        Ok(())
    }

    fn render_placeholder(&self, title: &str, output: &Path) -> Result<()> {
        let c = &self.config;
        let (width, height) = PLACEHOLDER_SIZE;
        let mut raster = RgbImage::from_pixel(width, height, c.background);
        fill_rect(&mut raster, 0, 0, width, c.title_height, c.title_color);
        fill_rect(
            &mut raster,
            width / 4,
            height / 2 - c.caption_height / 2,
            width / 2,
            c.caption_height,
            c.diseased_color,
        );
        Self::save(&raster, output)?;
        tracing::info!("Rendered placeholder for '{title}' at {}", output.display());
        Ok(())
    }
}

fn line_count(label: &Label) -> u32 {
    label.text.lines().count().max(1) as u32
}

const fn max_one(value: u32) -> u32 {
    if value == 0 { 1 } else { value }
}

// Clamps to the raster so callers may pass partially outside rectangles
fn fill_rect(raster: &mut RgbImage, x: u32, y: u32, width: u32, height: u32, color: Rgb<u8>) {
    let x_end = x.saturating_add(width).min(raster.width());
    let y_end = y.saturating_add(height).min(raster.height());
    for py in y..y_end {
        for px in x..x_end {
            raster.put_pixel(px, py, color);
        }
    }
}
