use anyhow::Context;
use clap::Parser;
use qmd_nav_cli::args::Args;
use qmd_nav_cli::config::Config;
use qmd_nav_cli::error::AppError;
use qmd_nav_cli::{logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    logging::init(args.verbose).map_err(AppError::from)?;

    let root = args.root.clone();
    let config = Config::try_from(args).map_err(AppError::from)?;
    presentation::print_results(&config)
        .map_err(AppError::from)
        .with_context(|| format!("failed to render {} for '{}'", config.shape, root.display()))?;
    Ok(())
}
