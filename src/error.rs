//! Error types for book generation.
//!
//! Unsupported body kinds are not errors: they render as a placeholder.
//! Everything here aborts the run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed `{kind}` body in page {route}: {source}")]
    MalformedNode {
        route: String,
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid unicode codepoint: {0:#x}")]
    InvalidCodepoint(u32),

    #[error("HTML conversion failed: {0}")]
    Converter(String),

    #[error("heading level {level} exceeds the maximum of {max}")]
    HeadingTooDeep { level: usize, max: u8 },

    #[error("failed to write book manifest: {0}")]
    Manifest(#[from] toml::ser::Error),

    #[error("invalid route: {0}")]
    InvalidRoute(String),

    #[error("duplicate route: {0}")]
    DuplicateRoute(String),

    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an I/O error with the path it happened at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
