// File: src/error.rs
// Purpose: Error type shared by the core and the browser bindings

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to parse site config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Unknown field kind: {0:?}")]
    UnknownFieldKind(String),

    #[error("Submission failed: {0}")]
    Submit(String),
}
