// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use qmd_nav_engine::config::{DEFAULT_ROOT, DEFAULT_SUFFIX, DEFAULT_TABS};

use crate::parsers::{SuffixArg, parse_tabs};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "qmd_nav",
    version = crate::VERSION,
    about = "Walk a directory tree and print file listings or navigation fragments"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Root directory to walk
    #[arg(short, long, global = true, default_value = DEFAULT_ROOT, value_hint = ValueHint::DirPath)]
    pub root: PathBuf,

    /// Entry suffix filter for the yaml/markdown/nav output
    #[arg(short, long, global = true, default_value = DEFAULT_SUFFIX)]
    pub suffix: SuffixArg,

    /// YAML indentation depth in two-space units
    #[arg(short, long, global = true, default_value_t = DEFAULT_TABS, value_parser = parse_tabs)]
    pub tabs: usize,

    /// Sort directory entries by name during the walk
    #[arg(long, global = true)]
    pub sorted: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print every file path under the root (default)
    List,
    /// Print the YAML navigation fragment
    Yaml,
    /// Print the Markdown bullet list
    Markdown,
    /// Print the YAML fragment followed by the Markdown list
    Nav,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_arguments_uses_defaults() {
        let args = Args::try_parse_from(["qmd_nav"]).unwrap();
        assert_eq!(args.command, None);
        assert_eq!(args.root, PathBuf::from("tips"));
        assert_eq!(args.suffix.0, ".qmd");
        assert_eq!(args.tabs, 5);
        assert!(!args.sorted);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn global_options_follow_subcommand() {
        let args = Args::try_parse_from(["qmd_nav", "yaml", "--root", "docs", "-t", "2", "-vv"]).unwrap();
        assert_eq!(args.command, Some(Command::Yaml));
        assert_eq!(args.root, PathBuf::from("docs"));
        assert_eq!(args.tabs, 2);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn oversized_tabs_are_a_usage_error() {
        assert!(Args::try_parse_from(["qmd_nav", "yaml", "-t", "18446744073709551615"]).is_err());
        assert!(Args::try_parse_from(["qmd_nav", "yaml", "-t", "65"]).is_err());
        assert!(Args::try_parse_from(["qmd_nav", "yaml", "-t", "64"]).is_ok());
    }

    #[test]
    fn empty_suffix_is_a_usage_error() {
        assert!(Args::try_parse_from(["qmd_nav", "markdown", "--suffix", ""]).is_err());
    }
}
