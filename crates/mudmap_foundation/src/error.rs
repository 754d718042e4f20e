//! Error types for mudmap.
//!
//! The automapper core never fails. These errors come from the outer
//! layers: files, snapshots, client commands and the terminal.

use std::fmt;

use thiserror::Error;

/// A specialized `Result` type for mudmap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// An error raised outside the commit path.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// What went wrong.
    pub kind: ErrorKind,
    /// The file or transcript involved, if known.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates an error without context.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Attaches the file or transcript involved.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Creates an invalid client command error.
    #[must_use]
    pub fn invalid_command(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCommand(message.into()))
    }
}

/// Failure categories.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Encoding or decoding a map snapshot failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A command-line argument was malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A `#` client command was malformed.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// The line editor failed.
    #[error("editor error: {0}")]
    Editor(String),
}

/// Where an error happened.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file, e.g. the transcript being replayed.
    pub source: Option<String>,
    /// Line number in source (1-indexed).
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        Ok(())
    }
}
