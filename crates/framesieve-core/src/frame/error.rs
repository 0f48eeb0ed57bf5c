use thiserror::Error;

/// Reasons a byte range could not be turned into a frame view.
///
/// Both variants are routine rejections; filters log and drop them.
///
/// # Examples
/// ```
/// use framesieve_core::ParseError;
///
/// let err = ParseError::TooSmall { needed: 14, actual: 3 };
/// assert!(err.to_string().contains("frame too small"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("frame too small: need {needed} bytes, got {actual}")]
    TooSmall { needed: usize, actual: usize },
    #[error("{frame} frame failed validation")]
    ValidationFailed { frame: &'static str },
}
