// crates/engine/src/lib.rs
use std::io::Write;

pub mod config;
pub mod entry;
pub mod error;
pub mod filesystem;
pub mod format;
pub mod options;

use crate::config::Config;
use crate::error::Result;
use crate::options::Shape;

/// Walk `config.walk.root` and write the requested shape to `out`.
///
/// Returns the number of entries written. For [`Shape::Nav`] the tree is
/// walked twice, once per fragment, and the count covers both.
///
/// # Errors
///
/// Fails if the format options are invalid, if the root is missing or not a
/// directory, if a directory below it cannot be read, or if `out` rejects a
/// write. Nothing is retried; lines written before the failure stay written.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<usize> {
    log::info!(
        "rendering {} for {} (suffix filter: {})",
        config.shape,
        config.walk.root.display(),
        if config.shape.filters_suffix() { config.format.suffix.as_str() } else { "none" }
    );

    if config.shape.filters_suffix() {
        config.format.check()?;
    }

    let written = match config.shape {
        Shape::Listing => format::write_listing(filesystem::walk(&config.walk)?, out)?,
        Shape::Yaml => format::write_yaml(filesystem::walk(&config.walk)?, &config.format, out)?,
        Shape::Markdown => {
            format::write_markdown(filesystem::walk(&config.walk)?, &config.format, out)?
        }
        Shape::Nav => {
            let yaml = format::write_yaml(filesystem::walk(&config.walk)?, &config.format, out)?;
            let markdown =
                format::write_markdown(filesystem::walk(&config.walk)?, &config.format, out)?;
            yaml + markdown
        }
    };

    out.flush()?;
    log::info!("wrote {written} entries");
    Ok(written)
}
