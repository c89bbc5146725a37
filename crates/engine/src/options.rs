use std::fmt;

/// Output shape produced by a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Shape {
    /// Every file path under the root, unfiltered.
    #[default]
    Listing,
    /// Two-line YAML list items (`- text:` / `href:`).
    Yaml,
    /// Markdown bullet links.
    Markdown,
    /// The YAML fragment followed by the Markdown list.
    Nav,
}

impl Shape {
    /// Whether this shape only reports entries matching the suffix filter.
    pub const fn filters_suffix(self) -> bool {
        !matches!(self, Self::Listing)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Listing => "list",
            Self::Yaml => "yaml",
            Self::Markdown => "markdown",
            Self::Nav => "nav",
        };
        f.write_str(name)
    }
}
