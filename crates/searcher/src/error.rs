//! The three-valued error taxonomy from `spec.md` §7, realized as a real
//! Rust error type instead of the original's out-parameter `error_t`.

use std::fmt;

/// `Info` is never fatal; `Warning` lets the caller decide whether to
/// continue (e.g. one file fails to open, the next is still tried);
/// `Fatal` terminates processing of the current source entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Info,
    Warning,
    Fatal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Info => "info",
            ErrorKind::Warning => "warning",
            ErrorKind::Fatal => "fatal",
        };
        f.write_str(s)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct SearcherError {
    pub kind: ErrorKind,
    pub message: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl SearcherError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        SearcherError { kind, message: message.into(), source: None }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Warning, message)
    }

    pub fn fatal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Fatal, message)
    }

    pub fn from_io(kind: ErrorKind, err: std::io::Error) -> Self {
        SearcherError {
            kind,
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

pub type Result<T> = std::result::Result<T, SearcherError>;
