//! Error types for the `svg_sanitizer` crate.

/// All errors that can occur while sanitizing SVG content.
///
/// Content that violates the policy is never an error: it is removed. Only
/// input the sanitizer cannot safely process at all is rejected.
#[derive(Debug, thiserror::Error)]
pub enum SvgSanitizerError {
    /// The input is not well-formed XML.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The input exceeds a configured depth or size guard.
    #[error("Limit exceeded: {limit} is larger than {max}")]
    LimitExceeded {
        /// Which guard tripped (`"tree depth"` or `"input size"`).
        limit: &'static str,
        /// The configured maximum.
        max: usize,
    },

    /// Reading or writing a file failed in [`sanitize_file`](crate::sanitize_file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for SvgSanitizerError {
    fn from(e: quick_xml::Error) -> Self {
        SvgSanitizerError::Parse(e.to_string())
    }
}

/// A type alias for `Result<T, SvgSanitizerError>`.
pub type Result<T> = std::result::Result<T, SvgSanitizerError>;
