//! Grayscale raster value type.
//!
//! Intensities are stored row-major as `f32` in `[0.0, 1.0]`, normalized from
//! 8-bit luma by the image-loading collaborator. The codec itself never reads
//! or writes image files.

/// A grayscale image with normalized intensities.
#[derive(Debug, Clone, PartialEq)]
pub struct GrayRaster {
    width: u32,
    height: u32,
    pixels: Vec<f32>,
}

impl GrayRaster {
    /// Creates a black (all-zero) raster.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0.0; width as usize * height as usize],
        }
    }

    /// Creates a raster from pre-normalized intensities.
    ///
    /// # Panics
    /// Panics if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<f32>) -> Self {
        assert_eq!(
            pixels.len(),
            width as usize * height as usize,
            "pixel buffer length must match raster geometry"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Creates a raster from row-major 8-bit luma samples, normalizing to `[0, 1]`.
    ///
    /// # Panics
    /// Panics if `luma.len() != width * height`.
    pub fn from_luma8(width: u32, height: u32, luma: &[u8]) -> Self {
        assert_eq!(
            luma.len(),
            width as usize * height as usize,
            "luma buffer length must match raster geometry"
        );
        let pixels = luma.iter().map(|&v| v as f32 / 255.0).collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Raster width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total pixel count.
    pub fn num_pixels(&self) -> usize {
        self.pixels.len()
    }

    /// Intensity at `(x, y)`.
    ///
    /// # Panics
    /// Panics if the coordinate lies outside the raster.
    pub fn get(&self, x: u32, y: u32) -> f32 {
        assert!(x < self.width && y < self.height, "coordinate out of bounds");
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Sets the intensity at `(x, y)`.
    ///
    /// # Panics
    /// Panics if the coordinate lies outside the raster.
    pub fn set(&mut self, x: u32, y: u32, value: f32) {
        assert!(x < self.width && y < self.height, "coordinate out of bounds");
        self.pixels[y as usize * self.width as usize + x as usize] = value;
    }

    /// Row-major view of the normalized intensities.
    pub fn pixels(&self) -> &[f32] {
        &self.pixels
    }

    /// Quantizes back to row-major 8-bit luma samples.
    pub fn to_luma8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect()
    }
}
