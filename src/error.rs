//! Error types for placeholder generation

use thiserror::Error;

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, Error>;

/// A hex color string could not be parsed
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseColorError {
    /// Nothing left after stripping the optional leading `#`
    #[error("empty color string")]
    Empty,

    /// Only 3-digit shorthand and the full 6-digit form are accepted
    #[error("expected 3 or 6 hex digits, got {0}")]
    BadLength(usize),

    /// A character outside `[0-9a-fA-F]`
    #[error("color string contains a non-hex character")]
    BadDigit,
}

/// The embedded font could not be loaded at startup
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontError {
    /// The byte blob is not a parsable font
    #[error("font data could not be parsed")]
    UnparsableFont,

    /// The font parsed but exposes no face the renderer can use
    #[error("font data contains no usable face")]
    NoUsableFace,
}

/// Rendering failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Width and height must be positive and within the canvas limit
    #[error("unsupported canvas dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    /// PNG encoder failure; not driven by user input
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Any failure surfaced to the embedding caller
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Font(#[from] FontError),

    #[error(transparent)]
    Parse(#[from] ParseColorError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl Error {
    /// True when the failure is bad caller input (a 400-class condition for
    /// an HTTP front end) rather than an internal fault.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::Parse(_) | Error::Render(RenderError::InvalidDimensions { .. })
        )
    }
}
