//! Check command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::output::{display_path, Printer};
use crate::raster::load_image;
use crate::validation::{print_diagnostics, validate_inputs, SessionInputs};

/// Check screen and palette colours against a design without editing it
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Base design image
    #[arg(required = true)]
    pub image: PathBuf,

    /// Manifest listing screen and palette colours
    #[arg(long, short, default_value = MANIFEST_FILENAME)]
    pub manifest: PathBuf,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::load(&args.manifest)?;
    let raster = load_image(&args.image)?;
    printer.status("Checking", &display_path(&args.image));

    let palette = manifest.palette();
    let result = validate_inputs(&SessionInputs {
        screen_colors: &manifest.screen_colors,
        palette: &palette,
        raster: &raster,
        tolerance: manifest.tolerance,
    });

    print_diagnostics(&result, printer);
    result.into_result()
}
