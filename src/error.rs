//! Crate error type.
//!
//! Driver requests that cannot be honored (full field, cursor at the
//! boundary, validator rejection) fail with [`Error::RequestDenied`].
//! Callers running an interactive loop usually swallow those, the same
//! way a curses application ignores `E_REQUEST_DENIED` and beeps on.

use std::io;
use thiserror::Error;

/// Errors produced by form construction, the form driver, and the screen.
#[derive(Debug, Error)]
pub enum Error {
    /// Terminal I/O failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    /// A driver request could not be honored in the current state.
    #[error("request denied: {0}")]
    RequestDenied(&'static str),

    /// Invalid argument at construction time (empty field list, zero width).
    #[error("bad argument: {0}")]
    BadArgument(&'static str),

    /// The form must be posted before it can be driven or painted.
    #[error("form is not posted")]
    NotPosted,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::RequestDenied("field is full");
        assert_eq!(err.to_string(), "request denied: field is full");

        let err = Error::BadArgument("field list is empty");
        assert_eq!(err.to_string(), "bad argument: field list is empty");

        let err = Error::NotPosted;
        assert_eq!(err.to_string(), "form is not posted");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
