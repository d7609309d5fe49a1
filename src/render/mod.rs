/// Renderer-neutral grid description
pub mod canvas;
/// PNG painter
pub mod raster;

pub use canvas::Canvas;
pub use raster::{RasterRenderer, RenderConfig, Renderer};
