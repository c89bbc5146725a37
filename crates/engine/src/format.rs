//! Line formatters for the three output shapes.
//!
//! Each `write_*` function drains a stream of walker results, stops at the
//! first error, and returns the number of entries written.

use crate::config::FormatOptions;
use crate::entry::FileEntry;
use crate::error::{EngineError, Result};
use std::io::Write;

/// Joined path of `entry`, as printed by the plain listing.
pub fn listing_line(entry: &FileEntry) -> String {
    entry.path().display().to_string()
}

/// Two-line YAML list item for `entry`, or `None` if it does not match the suffix.
///
/// The `href:` line is always indented one unit deeper than the `- text:` line.
///
/// # Errors
/// Returns [`EngineError::Config`] if `options` fail [`FormatOptions::check`].
pub fn yaml_item(entry: &FileEntry, options: &FormatOptions) -> Result<Option<String>> {
    options.check()?;
    let Some(label) = entry.label(&options.suffix) else {
        return Ok(None);
    };
    let inner_depth = options
        .tabs
        .checked_add(1)
        .ok_or_else(|| EngineError::Config(format!("tabs out of range: {}", options.tabs)))?;
    let outer = options.indent_unit.repeat(options.tabs);
    let inner = options.indent_unit.repeat(inner_depth);
    Ok(Some(format!(
        "{outer}- text: \"{label}\"\n{inner}href: {}",
        entry.path().display()
    )))
}

/// Markdown bullet link for `entry`, or `None` if it does not match the suffix.
pub fn markdown_item(entry: &FileEntry, options: &FormatOptions) -> Option<String> {
    let label = entry.label(&options.suffix)?;
    Some(format!("- [{label}]({})", entry.path().display()))
}

/// Print every entry's joined path, one per line.
///
/// # Errors
/// Returns the first walker error, or the write error if `out` rejects output.
pub fn write_listing<I, W>(entries: I, out: &mut W) -> Result<usize>
where
    I: IntoIterator<Item = Result<FileEntry>>,
    W: Write,
{
    write_lines(entries, out, |entry| Ok(Some(listing_line(entry))))
}

/// Print the YAML fragment for entries matching `options.suffix`.
///
/// # Errors
/// Returns [`EngineError::Config`] for invalid `options` before anything is
/// written, then the first walker error or the write error if `out` rejects output.
pub fn write_yaml<I, W>(entries: I, options: &FormatOptions, out: &mut W) -> Result<usize>
where
    I: IntoIterator<Item = Result<FileEntry>>,
    W: Write,
{
    options.check()?;
    write_lines(entries, out, |entry| yaml_item(entry, options))
}

/// Print the Markdown list for entries matching `options.suffix`.
///
/// # Errors
/// Returns [`EngineError::Config`] for invalid `options` before anything is
/// written, then the first walker error or the write error if `out` rejects output.
pub fn write_markdown<I, W>(entries: I, options: &FormatOptions, out: &mut W) -> Result<usize>
where
    I: IntoIterator<Item = Result<FileEntry>>,
    W: Write,
{
    options.check()?;
    write_lines(entries, out, |entry| Ok(markdown_item(entry, options)))
}

fn write_lines<I, W, F>(entries: I, out: &mut W, render: F) -> Result<usize>
where
    I: IntoIterator<Item = Result<FileEntry>>,
    W: Write,
    F: Fn(&FileEntry) -> Result<Option<String>>,
{
    let mut written = 0;
    for entry in entries {
        let entry = entry?;
        if let Some(text) = render(&entry)? {
            writeln!(out, "{text}")?;
            written += 1;
        }
    }
    Ok(written)
}
