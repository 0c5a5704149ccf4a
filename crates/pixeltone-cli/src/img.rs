//! Image file collaborators: grayscale raster in, PNG out.

use std::path::Path;

use anyhow::{Context, Result};
use pixeltone_codec::GrayRaster;

/// Loads any supported image file as a normalized grayscale raster.
pub fn load_gray(path: &Path) -> Result<GrayRaster> {
    let img = image::open(path)
        .with_context(|| format!("failed to open image {}", path.display()))?;
    let luma = img.to_luma8();
    let (width, height) = luma.dimensions();
    Ok(GrayRaster::from_luma8(width, height, luma.as_raw()))
}

/// Saves a raster as an 8-bit grayscale image (format from the extension).
pub fn save_gray(path: &Path, raster: &GrayRaster) -> Result<()> {
    let buffer = image::GrayImage::from_raw(raster.width(), raster.height(), raster.to_luma8())
        .context("raster geometry does not match its pixel buffer")?;
    buffer
        .save(path)
        .with_context(|| format!("failed to write image {}", path.display()))?;
    Ok(())
}
