//! Error types for the media-typer crate.

use thiserror::Error;

/// The main error type for the media-typer crate.
///
/// Every variant is a caller-input error; none of them is transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The named argument was missing or empty.
    #[error("argument {0} is required")]
    ArgumentRequired(&'static str),

    /// The type component is empty or not a restricted-name
    #[error("invalid type")]
    InvalidType,

    /// The subtype component is empty or not a restricted-name
    #[error("invalid subtype")]
    InvalidSubtype,

    /// The suffix component is present but not a restricted-name
    #[error("invalid suffix")]
    InvalidSuffix,

    /// The input does not match `type/subtype[+suffix]`
    #[error("invalid media type")]
    InvalidMediaType,
}

/// Specialized Result type for media type operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ArgumentRequired("string");
        assert_eq!(err.to_string(), "argument string is required");

        let err = Error::ArgumentRequired("obj");
        assert_eq!(err.to_string(), "argument obj is required");

        assert_eq!(Error::InvalidType.to_string(), "invalid type");
        assert_eq!(Error::InvalidSubtype.to_string(), "invalid subtype");
        assert_eq!(Error::InvalidSuffix.to_string(), "invalid suffix");
        assert_eq!(Error::InvalidMediaType.to_string(), "invalid media type");
    }

    #[test]
    fn test_error_debug() {
        let debug_str = format!("{:?}", Error::InvalidSuffix);
        assert!(debug_str.contains("InvalidSuffix"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_std_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_std_error(&Error::InvalidMediaType);
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert_eq!(ok_result.unwrap(), 42);

        let err_result: Result<i32> = Err(Error::InvalidType);
        assert_eq!(err_result, Err(Error::InvalidType));
    }
}
