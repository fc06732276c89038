pub mod apply;
pub mod check;
pub mod completions;
pub mod sample;

use clap::{Parser, Subcommand};

/// recolor - Screen-colour substitution for design matchings
#[derive(Parser, Debug)]
#[command(name = "recolor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Substitute screen colours and write the matching
    Apply(apply::ApplyArgs),

    /// Check screen and palette colours against a design
    Check(check::CheckArgs),

    /// Print the colour of a pixel
    Sample(sample::SampleArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
