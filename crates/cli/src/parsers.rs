use qmd_nav_engine::config::MAX_TABS;
use std::fmt;
use std::str::FromStr;

/// Literal file-name suffix used to select entries (e.g. `.qmd`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixArg(pub String);

impl FromStr for SuffixArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("suffix must not be empty".to_string());
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for SuffixArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse a YAML indentation depth, bounded by [`MAX_TABS`].
///
/// # Errors
/// Returns a message for non-numeric input or depths above the limit.
pub fn parse_tabs(s: &str) -> Result<usize, String> {
    let tabs: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid indentation depth: {s}"))?;
    if tabs > MAX_TABS {
        return Err(format!("indentation depth must be at most {MAX_TABS}"));
    }
    Ok(tabs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_suffix() {
        assert_eq!(".qmd".parse::<SuffixArg>().unwrap(), SuffixArg(".qmd".to_string()));
        assert_eq!("_index.md".parse::<SuffixArg>().unwrap().to_string(), "_index.md");
    }

    #[test]
    fn rejects_empty_suffix() {
        assert!("".parse::<SuffixArg>().is_err());
    }

    #[test]
    fn tabs_within_limit() {
        assert_eq!(parse_tabs("0").unwrap(), 0);
        assert_eq!(parse_tabs("5").unwrap(), 5);
        assert_eq!(parse_tabs(&MAX_TABS.to_string()).unwrap(), MAX_TABS);
    }

    #[test]
    fn tabs_out_of_range_or_garbage() {
        assert!(parse_tabs(&(MAX_TABS + 1).to_string()).unwrap_err().contains("at most"));
        assert!(parse_tabs("18446744073709551615").is_err());
        assert!(parse_tabs("-1").is_err());
        assert!(parse_tabs("five").is_err());
    }
}
