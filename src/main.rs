use clap::Parser;
use miette::Result;
use recolor::cli::{Cli, Commands};
use recolor::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Apply(args) => recolor::cli::apply::run(args, &printer)?,
        Commands::Check(args) => recolor::cli::check::run(args, &printer)?,
        Commands::Sample(args) => recolor::cli::sample::run(args, &printer)?,
        Commands::Completions(args) => recolor::cli::completions::run(args)?,
    }

    Ok(())
}
