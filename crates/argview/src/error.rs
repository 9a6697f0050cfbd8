//! Error type for parsing and the display hand-off.

use argview_render::RenderError;

/// Errors surfaced by the parse entry points.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The underlying engine rejected the command line (also carries
    /// `--help`/`--version` displays; use `clap::Error::exit` to honor
    /// them).
    #[error(transparent)]
    Clap(#[from] clap::Error),

    /// A command string could not be split into tokens.
    #[error("invalid command line: {0}")]
    CommandLine(#[from] shell_words::ParseError),

    /// Displaying the parsed set failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}
