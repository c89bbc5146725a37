// crates/cli/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] qmd_nav_engine::error::EngineError),

    #[error("Logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),
}
