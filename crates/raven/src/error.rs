//! Error types for Raven operations.
//!
//! This module provides the main error type [`RavenError`] which wraps the
//! error conditions that can occur while loading figure documents, building
//! elements and applying transformations.

use std::io;

use thiserror::Error;

use raven_core::{
    draw::DrawError, element::StructureError, transformation::TransformError,
};

/// The main error type for Raven operations.
///
/// # Diagnostic Variants
///
/// The `Document` variant keeps the TOML source next to the parse error so
/// the byte span the error reports can be shown in context.
#[derive(Debug, Error)]
pub enum RavenError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{}", err.message())]
    Document { err: toml::de::Error, src: String },

    #[error("Serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("unknown routine `{0}`")]
    UnknownRoutine(String),

    #[error("unknown decorator `{0}`")]
    UnknownDecorator(String),

    #[error("malformed figure: {0}")]
    Structure(#[from] StructureError),

    #[error("Transformation error: {0}")]
    Transform(#[from] TransformError),

    #[error("Drawing error in cell `{cell}`: {err}")]
    Draw { cell: String, err: DrawError },
}

impl RavenError {
    /// Create a new `Document` error with the associated source text.
    pub fn new_document_error(err: toml::de::Error, src: impl Into<String>) -> Self {
        Self::Document {
            err,
            src: src.into(),
        }
    }

    /// Create a new `Draw` error for the cell with the given id.
    pub fn new_draw_error(err: DrawError, cell: impl Into<String>) -> Self {
        Self::Draw {
            cell: cell.into(),
            err,
        }
    }
}
