// crates/cli/src/config.rs
use crate::args::{Args, Command};
pub use qmd_nav_engine::config::Config;
use qmd_nav_engine::config::{ConfigBuilder, FormatOptionsBuilder, WalkOptionsBuilder};
use qmd_nav_engine::error::EngineError;
use qmd_nav_engine::options::Shape;

impl From<Command> for Shape {
    fn from(command: Command) -> Self {
        match command {
            Command::List => Self::Listing,
            Command::Yaml => Self::Yaml,
            Command::Markdown => Self::Markdown,
            Command::Nav => Self::Nav,
        }
    }
}

/// Resolve parsed arguments into an engine configuration.
///
/// # Errors
/// Returns [`EngineError::Config`] if the arguments do not form a valid configuration.
pub fn config_from_args(args: &Args) -> Result<Config, EngineError> {
    let walk = WalkOptionsBuilder::default()
        .root(args.root.clone())
        .sort_by_name(args.sorted)
        .build()
        .map_err(|e| EngineError::Config(e.to_string()))?;

    let format = FormatOptionsBuilder::default()
        .suffix(args.suffix.0.clone())
        .tabs(args.tabs)
        .build()
        .map_err(|e| EngineError::Config(e.to_string()))?;

    let shape = args.command.map(Shape::from).unwrap_or_default();

    ConfigBuilder::default()
        .walk(walk)
        .format(format)
        .shape(shape)
        .build()
        .map_err(|e| EngineError::Config(e.to_string()))
}

impl TryFrom<Args> for Config {
    type Error = EngineError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        config_from_args(&args)
    }
}
