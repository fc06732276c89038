//! Raster module for recolor.
//!
//! Owns decoded pixel memory and the substitution pass that rewrites it.

mod buffer;
mod png;
mod substitute;

pub use buffer::RasterBuffer;
pub use png::{load_image, matching_file_name, scale_pixels, write_png};
pub use substitute::{substitute, substitute_colour};
