//! Crate error type.
//!
//! Two failure kinds are surfaced: the layout engine rejecting the document
//! (including invalid dataset content and link-annotation failures) and the
//! output path being unusable.  Rendering is all-or-nothing, so neither kind
//! leaves a partial file behind.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::links::LinkError;
use crate::model::InvalidCurriculum;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// The layout engine rejected the document content.
    Render(genpdf::error::Error),
    /// The rendered document could not be written to the output path.
    Write {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(err) => write!(f, "Failed to render the document: {err}"),
            Self::Write { path, source } => {
                write!(f, "Failed to write {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(err) => Some(err),
            Self::Write { source, .. } => Some(source),
        }
    }
}

impl From<genpdf::error::Error> for Error {
    fn from(err: genpdf::error::Error) -> Self {
        Self::Render(err)
    }
}

impl From<InvalidCurriculum> for Error {
    fn from(err: InvalidCurriculum) -> Self {
        Self::Render(genpdf::error::Error::new(
            format!("Invalid curriculum dataset: {err}"),
            genpdf::error::ErrorKind::InvalidData,
        ))
    }
}

impl From<LinkError> for Error {
    fn from(err: LinkError) -> Self {
        Self::Render(genpdf::error::Error::new(
            format!("Failed to embed link annotations: {err}"),
            genpdf::error::ErrorKind::InvalidData,
        ))
    }
}
