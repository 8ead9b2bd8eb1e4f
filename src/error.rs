//! Per-icon pipeline errors.
//!
//! Every failure is a deterministic function of the input document, so
//! errors are `Clone` and get memoized next to successful results.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure of one icon's extraction or rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IconError {
    /// Input is not well-formed XML or has no root element.
    #[error("malformed document: {0}")]
    DocumentMalformed(String),

    /// The vendor template does not have the expected shape.
    #[error("variant not found: {0}")]
    VariantNotFound(String),

    /// The rasterizer produced nothing for the cleaned document.
    #[error("rasterization failed")]
    RenderFailed,

    /// The final image could not be encoded.
    #[error("encoding failed: {0}")]
    EncodingFailed(String),

    /// The rendered image has no visible pixel.
    #[error("rendered image is fully transparent")]
    BlankImage,

    #[error("IO error on `{path}`: {message}")]
    Io { path: PathBuf, message: String },

    #[error("unknown icon `{0}`")]
    UnknownIcon(String),
}

impl IconError {
    pub fn io(path: &Path, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

pub type IconResult<T> = Result<T, IconError>;
