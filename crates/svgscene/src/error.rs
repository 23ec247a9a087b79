//! Error types for svgscene operations.
//!
//! Rendering into a caller-supplied sink never produces this type: the
//! sink's own error is returned unchanged. [`Error`] covers the operations
//! that own their I/O or validate input.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::color::ParseColorError;

/// The main error type for svgscene operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error writing `{}`: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error(transparent)]
    InvalidColor(#[from] ParseColorError),
}

impl Error {
    /// Create a new `Io` error for the given path.
    pub fn new_io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
