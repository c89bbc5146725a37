use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Root directory '{path}' is not accessible: {source}")]
    RootUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Root '{0}' is not a directory")]
    NotADirectory(PathBuf),

    #[error("Path '{}' is not valid UTF-8 and cannot be printed faithfully", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
