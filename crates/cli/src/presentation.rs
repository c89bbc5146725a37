// crates/cli/src/presentation.rs
use crate::config::Config;
use qmd_nav_engine::error::Result;
use std::io::{self, BufWriter};

/// Run the configured shape against standard output.
///
/// # Errors
/// Propagates walker failures and write failures on stdout (including a closed pipe).
pub fn print_results(config: &Config) -> Result<usize> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    qmd_nav_engine::run(config, &mut out)
}
