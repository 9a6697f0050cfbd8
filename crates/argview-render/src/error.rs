//! Error type for rendering operations.

/// Errors that can occur while configuring or producing display output.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A column policy string could not be understood.
    ///
    /// Only the empty string falls back to a single column; anything else
    /// that is not `auto`, an integer, or a `sub`/`sub-auto`/`sub-N` form
    /// is a caller configuration error and is reported, not coerced.
    #[error("invalid column spec: {0:?}")]
    InvalidColumns(String),

    /// A table format name did not match any known format.
    #[error("unknown table format: {0:?}")]
    UnknownFormat(String),

    /// Writing to the output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
