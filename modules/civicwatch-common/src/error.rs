use thiserror::Error;

#[derive(Error, Debug)]
pub enum CivicWatchError {
    #[error("Vectorization error: {0}")]
    Vectorization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
