//! Image file boundary: decode into a raster, encode a raster to PNG.
//!
//! Also provides integer nearest-neighbour scaling for loupe previews.

use std::path::Path;

use image::ImageBuffer;

use crate::error::{RecolorError, Result};

use super::RasterBuffer;

/// Decode any supported image file into an RGBA raster.
pub fn load_image(path: &Path) -> Result<RasterBuffer> {
    let img = image::open(path).map_err(|e| RecolorError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to decode image: {}", e),
    })?;

    Ok(RasterBuffer::from(img.to_rgba8()))
}

/// Write a raster to a PNG file.
///
/// # Arguments
///
/// * `raster` - The pixels to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(raster: &RasterBuffer, path: &Path, scale: u32) -> Result<()> {
    let scaled;
    let out = if scale > 1 {
        scaled = scale_pixels(raster, scale);
        &scaled
    } else {
        raster
    };

    out.as_image().save(path).map_err(|e| RecolorError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

/// Scale a raster by an integer factor.
///
/// Uses nearest-neighbour scaling so individual pixels stay crisp.
pub fn scale_pixels(raster: &RasterBuffer, scale: u32) -> RasterBuffer {
    if scale <= 1 {
        return raster.clone();
    }

    let (width, height) = raster.dimensions();
    let source = raster.as_image();
    let scaled = ImageBuffer::from_fn(
        width.saturating_mul(scale),
        height.saturating_mul(scale),
        |x, y| *source.get_pixel(x / scale, y / scale),
    );

    RasterBuffer::from(scaled)
}

/// File name used for a downloaded matching image.
pub fn matching_file_name(design_number: &str, matching_number: u32) -> String {
    format!("design_{}_match_{}.png", design_number, matching_number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorValue;
    use tempfile::tempdir;

    fn checker() -> RasterBuffer {
        let pixels = vec![
            0, 0, 0, 255, 255, 255, 255, 255, //
            255, 255, 255, 255, 0, 0, 0, 255,
        ];
        RasterBuffer::from_rgba(2, 2, pixels).unwrap()
    }

    #[test]
    fn test_write_and_load_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        write_png(&checker(), &path, 1).unwrap();
        assert!(path.exists());

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded, checker());
    }

    #[test]
    fn test_write_png_keeps_transparency() {
        let raster = RasterBuffer::from_rgba(2, 1, vec![0, 0, 0, 0, 255, 0, 0, 128]).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("alpha.png");

        write_png(&raster, &path, 1).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 0, 0, 128]);
    }

    #[test]
    fn test_write_png_scaled() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scaled.png");

        write_png(&checker(), &path, 3).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (6, 6));
    }

    #[test]
    fn test_scale_pixels() {
        let scaled = scale_pixels(&checker(), 2);

        assert_eq!(scaled.dimensions(), (4, 4));
        assert_eq!(scaled.sample(0, 0).unwrap(), ColorValue::BLACK);
        assert_eq!(scaled.sample(1, 1).unwrap(), ColorValue::BLACK);
        assert_eq!(scaled.sample(2, 0).unwrap(), ColorValue::WHITE);
        assert_eq!(scaled.sample(3, 1).unwrap(), ColorValue::WHITE);
        assert_eq!(scaled.sample(3, 3).unwrap(), ColorValue::BLACK);
    }

    #[test]
    fn test_scale_pixels_no_scale() {
        assert_eq!(scale_pixels(&checker(), 1), checker());
        assert_eq!(scale_pixels(&checker(), 0), checker());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_image(&dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, RecolorError::Io { .. }));
    }

    #[test]
    fn test_matching_file_name() {
        assert_eq!(matching_file_name("0042", 3), "design_0042_match_3.png");
    }
}
