//! Sample command implementation.
//!
//! Prints the colour of one pixel, optionally writing a zoomed loupe of its
//! surroundings.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::raster::{load_image, write_png};

/// Print the hex colour of a pixel
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Image to sample
    #[arg(required = true)]
    pub image: PathBuf,

    /// Column (0 = left edge)
    #[arg(allow_negative_numbers = true)]
    pub x: i64,

    /// Row (0 = top edge)
    #[arg(allow_negative_numbers = true)]
    pub y: i64,

    /// Also write a zoomed preview of the surrounding pixels
    #[arg(long)]
    pub loupe: Option<PathBuf>,

    /// Loupe window size in source pixels
    #[arg(long, default_value = "15")]
    pub size: u32,

    /// Loupe magnification
    #[arg(long, default_value = "8")]
    pub zoom: u32,
}

pub fn run(args: SampleArgs, printer: &Printer) -> Result<()> {
    let raster = load_image(&args.image)?;
    let colour = raster.sample(args.x, args.y)?;

    println!("{}", colour);
    printer.info(
        "Sampled",
        &format!("({}, {}) {}", args.x, args.y, printer.swatch(colour)),
    );

    if let Some(loupe) = &args.loupe {
        let window = raster.neighbourhood(args.x, args.y, args.size)?;
        write_png(&window, loupe, args.zoom)?;
        printer.status("Wrote", &format!("loupe {}", display_path(loupe)));
    }

    Ok(())
}
