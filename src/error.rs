use miette::Diagnostic;
use thiserror::Error;

/// Main error type for recolor operations
#[derive(Error, Diagnostic, Debug)]
pub enum RecolorError {
    #[error("Invalid colour format: {input:?}")]
    #[diagnostic(
        code(recolor::colour),
        help("Use #RGB or #RRGGBB hex notation")
    )]
    InvalidColorFormat { input: String },

    #[error("Pixel ({x}, {y}) is outside the {width}x{height} raster")]
    #[diagnostic(code(recolor::bounds))]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    #[error("Unknown screen colour: {id}")]
    #[diagnostic(
        code(recolor::screen),
        help("Only screen colours configured for this design can be substituted")
    )]
    UnknownScreenColor { id: String },

    #[error("Nothing to undo")]
    #[diagnostic(code(recolor::history))]
    NothingToUndo,

    #[error("Nothing to redo")]
    #[diagnostic(code(recolor::history))]
    NothingToRedo,

    #[error("Pixel buffer of {len} bytes does not fit a {width}x{height} RGBA raster")]
    #[diagnostic(code(recolor::raster))]
    DimensionMismatch { width: u32, height: u32, len: usize },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(recolor::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(recolor::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(recolor::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, RecolorError>;
