//! Flat colour substitution over a raster.
//!
//! Substitution is a global colour predicate, not a region fill: every pixel
//! close to the source colour is rewritten, wherever it is.

use crate::error::Result;
use crate::types::ColorValue;

use super::RasterBuffer;

/// Rewrite every pixel within `tolerance` of `source` to `target`.
///
/// Both hex strings are parsed before the buffer is touched, so a malformed
/// colour leaves the pixels unchanged. Returns the number of matching pixels.
pub fn substitute(
    buffer: &mut RasterBuffer,
    source_hex: &str,
    target_hex: &str,
    tolerance: u8,
) -> Result<usize> {
    let source = ColorValue::parse_hex(source_hex)?;
    let target = ColorValue::parse_hex(target_hex)?;
    Ok(substitute_colour(buffer, source, target, tolerance))
}

/// Same as [`substitute`] for already-parsed colours.
///
/// Alpha is never modified. When `source == target` the matching pixels are
/// still counted even though their bytes do not change.
pub fn substitute_colour(
    buffer: &mut RasterBuffer,
    source: ColorValue,
    target: ColorValue,
    tolerance: u8,
) -> usize {
    let mut count = 0;
    buffer.for_each_pixel(|px| {
        if ColorValue::from_rgba(*px).is_close(source, tolerance) {
            px[0] = target.r;
            px[1] = target.g;
            px[2] = target.b;
            count += 1;
        }
    });
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecolorError;
    use crate::types::DEFAULT_TOLERANCE;

    fn buffer(pixels: &[[u8; 4]]) -> RasterBuffer {
        let bytes = pixels.iter().flatten().copied().collect();
        RasterBuffer::from_rgba(pixels.len() as u32, 1, bytes).unwrap()
    }

    #[test]
    fn test_substitute_exact_and_close() {
        let mut buf = buffer(&[
            [255, 0, 0, 255],
            [252, 3, 4, 255],
            [249, 0, 0, 255],
            [0, 0, 0, 255],
        ]);

        let count = substitute(&mut buf, "#ff0000", "#0000ff", DEFAULT_TOLERANCE).unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            buf.as_bytes(),
            &[0, 0, 255, 255, 0, 0, 255, 255, 249, 0, 0, 255, 0, 0, 0, 255]
        );
    }

    #[test]
    fn test_substitute_preserves_alpha() {
        let mut buf = buffer(&[[255, 0, 0, 0], [255, 0, 0, 90]]);
        substitute(&mut buf, "#F00", "#00FF00", 0).unwrap();
        assert_eq!(buf.rgba_at(0, 0).unwrap(), [0, 255, 0, 0]);
        assert_eq!(buf.rgba_at(1, 0).unwrap(), [0, 255, 0, 90]);
    }

    #[test]
    fn test_substitute_same_colour_counts() {
        let mut buf = buffer(&[[255, 0, 0, 255], [1, 1, 1, 255]]);
        let before = buf.clone();
        let count = substitute(&mut buf, "#ff0000", "#ff0000", DEFAULT_TOLERANCE).unwrap();
        assert_eq!(count, 1);
        assert_eq!(buf, before);
    }

    #[test]
    fn test_substitute_invalid_hex_leaves_buffer() {
        let mut buf = buffer(&[[255, 0, 0, 255]]);
        let before = buf.clone();

        let err = substitute(&mut buf, "#ff0000", "blue", DEFAULT_TOLERANCE).unwrap_err();
        assert!(matches!(err, RecolorError::InvalidColorFormat { input } if input == "blue"));
        assert_eq!(buf, before);

        assert!(substitute(&mut buf, "#ff00", "#0000ff", DEFAULT_TOLERANCE).is_err());
        assert_eq!(buf, before);
    }

    #[test]
    fn test_substitute_no_match() {
        let mut buf = buffer(&[[10, 10, 10, 255]]);
        let count = substitute(&mut buf, "#ffffff", "#000000", DEFAULT_TOLERANCE).unwrap();
        assert_eq!(count, 0);
        assert_eq!(buf.rgba_at(0, 0).unwrap(), [10, 10, 10, 255]);
    }

    #[test]
    fn test_substitute_is_single_pass() {
        // Target lies within tolerance of source; a pixel must not be rewritten twice.
        let mut buf = buffer(&[[100, 100, 100, 255], [103, 100, 100, 255]]);
        let count = substitute_colour(
            &mut buf,
            ColorValue::rgb(100, 100, 100),
            ColorValue::rgb(104, 100, 100),
            DEFAULT_TOLERANCE,
        );
        assert_eq!(count, 2);
        assert_eq!(buf.sample(0, 0).unwrap(), ColorValue::rgb(104, 100, 100));
        assert_eq!(buf.sample(1, 0).unwrap(), ColorValue::rgb(104, 100, 100));
    }
}
