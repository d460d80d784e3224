//! Canonical error taxonomy for the showcase helpers.
//!
//! Display strings use a `Kind: message` prefix so the driver, the CLI and the tests all agree on the
//! user-facing text.

use miette::Diagnostic;
use thiserror::Error;

/// Message used when a record name is empty or whitespace-only.
pub const NAME_CANNOT_BE_EMPTY_MSG: &str = "Name cannot be empty";

/// Represent the category of a [`CoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    IndexOutOfRange,
}

impl ErrorKind {
    /// Return the canonical spelling of this kind (the prefix used in error messages).
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::IndexOutOfRange => "IndexOutOfRange",
        }
    }
}

/// Errors raised by the showcase helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum CoreError {
    /// A value was rejected by a validation guard.
    #[error("InvalidArgument: {message}")]
    #[diagnostic(code(showcase::invalid_argument))]
    InvalidArgument { message: String },

    /// A negative position was passed to `get_at`.
    #[error("IndexOutOfRange: index {index} must not be negative")]
    #[diagnostic(code(showcase::index_out_of_range))]
    NegativeIndex { index: i64 },

    /// The sequence ended before reaching the requested position.
    #[error("IndexOutOfRange: index {index} out of range for sequence of length {len}")]
    #[diagnostic(
        code(showcase::index_out_of_range),
        help("the sequence yielded {len} element(s); valid positions are 0..{len}")
    )]
    IndexOutOfRange { index: i64, len: usize },
}

impl CoreError {
    /// Build an `InvalidArgument` error with the given message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CoreError::InvalidArgument {
            message: message.into(),
        }
    }

    /// The error raised when a record name fails validation.
    pub fn empty_name() -> Self {
        Self::invalid_argument(NAME_CANNOT_BE_EMPTY_MSG)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            CoreError::NegativeIndex { .. } | CoreError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_prefixed_with_kind() {
        for err in [
            CoreError::empty_name(),
            CoreError::NegativeIndex { index: -1 },
            CoreError::IndexOutOfRange { index: 3, len: 3 },
        ] {
            let text = err.to_string();
            assert!(
                text.starts_with(&format!("{}: ", err.kind().as_str())),
                "missing kind prefix: {text}"
            );
        }
    }

    #[test]
    fn empty_name_message() {
        assert_eq!(CoreError::empty_name().to_string(), "InvalidArgument: Name cannot be empty");
    }
}
