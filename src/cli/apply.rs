//! Apply command implementation.
//!
//! Drives an edit session from the command line: each `--step` is one user
//! intent (substitute, undo, redo or reset), and the committed result is
//! written as a PNG plus a JSON ledger.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::Args;

use crate::error::{RecolorError, Result};
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::output::{display_path, plural, Printer};
use crate::raster::{load_image, matching_file_name, write_png};
use crate::session::{summarize, ChangeLedger, Commit, EditSession};
use crate::types::{Palette, PaletteColor};
use crate::validation::{print_diagnostics, validate_inputs, SessionInputs};

/// Recolour a design by substituting screen colours with palette colours
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Base design image
    #[arg(required = true)]
    pub image: PathBuf,

    /// Manifest listing screen and palette colours
    #[arg(long, short, default_value = MANIFEST_FILENAME)]
    pub manifest: PathBuf,

    /// Edit step, in order: SCREEN=PALETTE, SCREEN=#hex, undo, redo or reset
    #[arg(long = "step", short = 's')]
    pub steps: Vec<Step>,

    /// Saved changes (JSON) of a matching to reopen before editing
    #[arg(long)]
    pub existing: Option<PathBuf>,

    /// Matching number used in the output file name
    #[arg(long, default_value = "1")]
    pub matching: u32,

    /// Output directory (overrides the manifest)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Skip input validation
    #[arg(long)]
    pub no_validate: bool,
}

/// One user intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Substitute { screen: String, palette: String },
    Undo,
    Redo,
    Reset,
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "undo" => Ok(Step::Undo),
            "redo" => Ok(Step::Redo),
            "reset" => Ok(Step::Reset),
            _ => match s.split_once('=') {
                Some((screen, palette)) if !screen.is_empty() && !palette.is_empty() => {
                    Ok(Step::Substitute {
                        screen: screen.to_string(),
                        palette: palette.to_string(),
                    })
                }
                _ => Err(format!(
                    "invalid step '{}': expected SCREEN=PALETTE, undo, redo or reset",
                    s
                )),
            },
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Substitute { screen, palette } => write!(f, "{}={}", screen, palette),
            Step::Undo => write!(f, "undo"),
            Step::Redo => write!(f, "redo"),
            Step::Reset => write!(f, "reset"),
        }
    }
}

pub fn run(args: ApplyArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::load(&args.manifest)?;
    let palette = manifest.palette();

    let original = load_image(&args.image)?;
    printer.status(
        "Loaded",
        &format!(
            "{} ({}x{})",
            display_path(&args.image),
            original.width(),
            original.height()
        ),
    );

    if !args.no_validate {
        let result = validate_inputs(&SessionInputs {
            screen_colors: &manifest.screen_colors,
            palette: &palette,
            raster: &original,
            tolerance: manifest.tolerance,
        });
        if !result.is_ok() {
            print_diagnostics(&result, printer);
        }
        result.into_result()?;
    }

    let stored = match &args.existing {
        Some(path) => load_changes(path)?,
        None => ChangeLedger::new(),
    };
    if !stored.is_empty() {
        printer.info("Reopened", &plural(stored.len(), "saved change", "saved changes"));
    }

    let mut session = EditSession::open_with_tolerance(
        original,
        manifest.screen_colors.clone(),
        Vec::from(stored),
        manifest.tolerance,
    )?;

    for step in &args.steps {
        run_step(&mut session, step, &palette, printer)?;
    }

    let commit = session.commit();
    let output_dir = args.output.clone().unwrap_or_else(|| manifest.output.clone());
    let image_path = output_dir.join(output_name(&args.image, &manifest, args.matching));
    write_commit(&commit, &image_path)?;
    printer.success("Wrote", &display_path(&image_path));

    for line in summarize(&commit.ledger, session.screen_colors(), &palette) {
        printer.info("Changed", &line.to_string());
    }

    let rows = serde_json::to_string(&commit.rows()).map_err(|e| RecolorError::Parse {
        message: format!("Failed to serialize change rows: {}", e),
        help: None,
    })?;
    println!("{}", rows);

    Ok(())
}

fn run_step(
    session: &mut EditSession,
    step: &Step,
    palette: &Palette,
    printer: &Printer,
) -> Result<()> {
    match step {
        Step::Substitute {
            screen,
            palette: wanted,
        } => {
            let replacement = find_palette_colour(palette, wanted)?;
            let from = session.current_colour(screen)?;
            let count = session.apply_palette_color(screen, replacement)?;
            printer.status(
                "Replaced",
                &format!(
                    "{} {} → {} ({})",
                    screen,
                    printer.swatch(from),
                    printer.swatch(replacement.hex),
                    plural(count, "pixel", "pixels")
                ),
            );
        }
        Step::Undo | Step::Redo => {
            let outcome = if *step == Step::Undo {
                session.undo()
            } else {
                session.redo()
            };
            match outcome {
                Ok(()) => printer.status("Stepped", &step.to_string()),
                Err(e @ (RecolorError::NothingToUndo | RecolorError::NothingToRedo)) => {
                    printer.warning("Skipped", &e.to_string().to_lowercase())
                }
                Err(e) => return Err(e),
            }
        }
        Step::Reset => {
            session.reset();
            printer.status("Reset", "to the original design");
        }
    }

    Ok(())
}

/// Look up a palette colour by id, or by hex when `wanted` starts with `#`.
fn find_palette_colour<'a>(palette: &'a Palette, wanted: &str) -> Result<&'a PaletteColor> {
    if wanted.starts_with('#') {
        return palette
            .find_by_hex(wanted)?
            .ok_or_else(|| RecolorError::Validation {
                message: format!("No palette colour with hex {}", wanted),
                help: Some("Only colours in the manifest palette can be applied".to_string()),
            });
    }

    palette.get(wanted).ok_or_else(|| RecolorError::Validation {
        message: format!("Unknown palette colour: {}", wanted),
        help: Some("Add it to the palette section of the manifest".to_string()),
    })
}

/// Read a ledger previously written next to an output image.
pub fn load_changes(path: &Path) -> Result<ChangeLedger> {
    let content = fs::read_to_string(path).map_err(|e| RecolorError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read changes: {}", e),
    })?;

    serde_json::from_str(&content).map_err(|e| RecolorError::Parse {
        message: format!("Invalid changes file {}: {}", path.display(), e),
        help: None,
    })
}

/// Write the committed image and its ledger (`<stem>.changes.json`).
fn write_commit(commit: &Commit, image_path: &Path) -> Result<()> {
    if let Some(dir) = image_path.parent() {
        fs::create_dir_all(dir).map_err(|e| RecolorError::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    write_png(&commit.raster, image_path, 1)?;

    let changes_path = image_path.with_extension("changes.json");
    let json = serde_json::to_string_pretty(&commit.ledger).map_err(|e| RecolorError::Parse {
        message: format!("Failed to serialize changes: {}", e),
        help: None,
    })?;
    fs::write(&changes_path, json).map_err(|e| RecolorError::Io {
        path: changes_path.clone(),
        message: format!("Failed to write changes: {}", e),
    })?;

    Ok(())
}

fn output_name(image: &Path, manifest: &Manifest, matching: u32) -> String {
    match &manifest.design_number {
        Some(design) => matching_file_name(design, matching),
        None => {
            let stem = image
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("design");
            format!("{}_match_{}.png", stem, matching)
        }
    }
}
