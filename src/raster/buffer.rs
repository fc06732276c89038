//! Owned RGBA pixel memory for one working image.

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{RecolorError, Result};
use crate::types::ColorValue;

/// A grid of RGBA pixels (row-major, 4 bytes per pixel).
///
/// `Clone` is a deep copy of the pixel memory; history snapshots and the
/// reset baseline rely on that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    image: RgbaImage,
}

impl RasterBuffer {
    /// Wrap raw RGBA bytes. The length must be exactly `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let mismatch = |len| RecolorError::DimensionMismatch { width, height, len };

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4));
        if expected != Some(pixels.len()) {
            return Err(mismatch(pixels.len()));
        }

        let len = pixels.len();
        let image = ImageBuffer::from_raw(width, height, pixels).ok_or_else(|| mismatch(len))?;
        Ok(Self { image })
    }

    /// A buffer of a single opaque colour.
    pub fn filled(width: u32, height: u32, colour: ColorValue) -> Self {
        Self {
            image: ImageBuffer::from_pixel(width, height, Rgba(colour.to_rgba(255))),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Get the dimensions as (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn check_bounds(&self, x: i64, y: i64) -> Result<(u32, u32)> {
        let (width, height) = self.dimensions();
        if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
            return Err(RecolorError::OutOfBounds { x, y, width, height });
        }
        Ok((x as u32, y as u32))
    }

    /// Read the colour at a pixel. Coordinates outside the raster are an error,
    /// never clamped.
    pub fn sample(&self, x: i64, y: i64) -> Result<ColorValue> {
        self.rgba_at(x, y).map(ColorValue::from_rgba)
    }

    /// Read the full RGBA value at a pixel.
    pub fn rgba_at(&self, x: i64, y: i64) -> Result<[u8; 4]> {
        let (x, y) = self.check_bounds(x, y)?;
        Ok(self.image.get_pixel(x, y).0)
    }

    /// Overwrite a pixel's RGB, keeping its alpha.
    pub fn set(&mut self, x: i64, y: i64, colour: ColorValue) -> Result<()> {
        let (x, y) = self.check_bounds(x, y)?;
        let pixel = self.image.get_pixel_mut(x, y);
        pixel.0 = colour.to_rgba(pixel.0[3]);
        Ok(())
    }

    /// Visit every pixel in row-major order, allowing in-place mutation.
    pub fn for_each_pixel<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut [u8; 4]),
    {
        for pixel in self.image.pixels_mut() {
            f(&mut pixel.0);
        }
    }

    /// Copy out a `size`x`size` window centred on (x, y).
    ///
    /// The centre must be inside the raster. Window cells that fall outside
    /// the raster are transparent black.
    pub fn neighbourhood(&self, x: i64, y: i64, size: u32) -> Result<RasterBuffer> {
        self.check_bounds(x, y)?;
        let size = size.max(1);
        let half = i64::from(size / 2);

        let image = ImageBuffer::from_fn(size, size, |wx, wy| {
            let sx = x - half + i64::from(wx);
            let sy = y - half + i64::from(wy);
            match self.check_bounds(sx, sy) {
                Ok((sx, sy)) => *self.image.get_pixel(sx, sy),
                Err(_) => Rgba([0, 0, 0, 0]),
            }
        });

        Ok(Self { image })
    }

    /// Raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Bytes held by the pixel memory.
    pub fn memory_size(&self) -> usize {
        self.image.as_raw().len()
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume into raw RGBA bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.image.into_raw()
    }
}

impl From<RgbaImage> for RasterBuffer {
    fn from(image: RgbaImage) -> Self {
        Self { image }
    }
}
