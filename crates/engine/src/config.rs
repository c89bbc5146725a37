use crate::error::{EngineError, Result};
use crate::options::Shape;
use derive_builder::Builder;
use std::path::PathBuf;

pub const DEFAULT_ROOT: &str = "tips";
pub const DEFAULT_SUFFIX: &str = ".qmd";
pub const DEFAULT_TABS: usize = 5;
pub const DEFAULT_INDENT_UNIT: &str = "  ";
/// Deepest YAML indentation accepted; the `href:` line sits one unit below it.
pub const MAX_TABS: usize = 64;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default = "PathBuf::from(DEFAULT_ROOT)")]
    pub root: PathBuf,
    /// Sort directory contents by file name while walking.
    #[builder(default)]
    pub sort_by_name: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            sort_by_name: false,
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct FormatOptions {
    #[builder(default = "DEFAULT_SUFFIX.to_string()")]
    pub suffix: String,
    /// Indentation depth of the YAML item line, in `indent_unit`s.
    #[builder(default = "DEFAULT_TABS")]
    pub tabs: usize,
    #[builder(default = "DEFAULT_INDENT_UNIT.to_string()")]
    pub indent_unit: String,
}

impl FormatOptionsBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.suffix.as_ref().is_some_and(String::is_empty) {
            return Err("suffix must not be empty".to_string());
        }
        match self.tabs {
            Some(tabs) => check_tabs(tabs),
            None => Ok(()),
        }
    }
}

fn check_tabs(tabs: usize) -> std::result::Result<(), String> {
    if tabs > MAX_TABS {
        return Err(format!("tabs must be at most {MAX_TABS}, got {tabs}"));
    }
    Ok(())
}

impl FormatOptions {
    /// Re-check invariants for options assembled without the builder.
    ///
    /// # Errors
    /// Returns [`EngineError::Config`] for an empty suffix or `tabs` above [`MAX_TABS`].
    pub fn check(&self) -> Result<()> {
        if self.suffix.is_empty() {
            return Err(EngineError::Config("suffix must not be empty".to_string()));
        }
        check_tabs(self.tabs).map_err(EngineError::Config)
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            tabs: DEFAULT_TABS,
            indent_unit: DEFAULT_INDENT_UNIT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,
    #[builder(default)]
    pub format: FormatOptions,
    #[builder(default)]
    pub shape: Shape,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_fall_back_to_defaults() {
        let walk = WalkOptionsBuilder::default().build().unwrap();
        assert_eq!(walk.root, PathBuf::from("tips"));
        assert!(!walk.sort_by_name);

        let format = FormatOptionsBuilder::default().build().unwrap();
        assert_eq!(format.suffix, ".qmd");
        assert_eq!(format.tabs, 5);
        assert_eq!(format.indent_unit, "  ");
    }

    #[test]
    fn empty_suffix_is_rejected() {
        let err = FormatOptionsBuilder::default().suffix("").build().unwrap_err();
        assert!(err.to_string().contains("suffix must not be empty"));
    }

    #[test]
    fn tabs_are_bounded() {
        assert!(FormatOptionsBuilder::default().tabs(MAX_TABS).build().is_ok());
        let err = FormatOptionsBuilder::default().tabs(usize::MAX).build().unwrap_err();
        assert!(err.to_string().contains("tabs must be at most"));
    }

    #[test]
    fn check_rejects_hand_built_options() {
        let options = FormatOptions {
            tabs: usize::MAX,
            ..FormatOptions::default()
        };
        assert!(matches!(options.check(), Err(EngineError::Config(_))));

        let options = FormatOptions {
            suffix: String::new(),
            ..FormatOptions::default()
        };
        assert!(matches!(options.check(), Err(EngineError::Config(_))));
        assert!(FormatOptions::default().check().is_ok());
    }

    #[test]
    fn config_builder_keeps_overrides() {
        let config = ConfigBuilder::default()
            .walk(WalkOptionsBuilder::default().root("docs").build().unwrap())
            .shape(Shape::Markdown)
            .build()
            .unwrap();
        assert_eq!(config.walk.root, PathBuf::from("docs"));
        assert_eq!(config.shape, Shape::Markdown);
        assert_eq!(config.format.tabs, 5);
    }
}
