use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Position in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: usize, // Units consumed before this position
    pub line: usize,   // Line number (1-based)
    pub column: usize, // Column number (1-based)
}

impl Position {
    pub const START: Position = Position { offset: 0, line: 1, column: 1 };

    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self { offset, line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Discriminant of [`Error`], for matching without borrowing the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Generic,
    InvalidArgument,
    FileOpenFailed,
    ParseFailed,
}

/// Errors raised by character sources and the parsers built on them
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{description}")]
    Generic { description: String },

    #[error("{description}")]
    InvalidArgument { description: String },

    #[error("{description}")]
    FileOpenFailed {
        description: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    ParseFailed(#[from] ParseFailed),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn generic(description: impl Into<String>) -> Self {
        Error::Generic { description: rendered(description.into(), "unspecified error") }
    }

    pub fn invalid_argument(description: impl Into<String>) -> Self {
        Error::InvalidArgument { description: rendered(description.into(), "invalid argument") }
    }

    /// Open failure for `path`; the description always names the path.
    pub fn file_open_failed(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("failed to open '{}': {}", path.display(), source);
        Error::FileOpenFailed { description, path, source }
    }

    pub fn parse_failed(
        source_desc: impl Into<String>,
        position: Position,
        message: impl Into<String>,
    ) -> Self {
        Error::ParseFailed(ParseFailed::new(source_desc, position, message))
    }

    /// The rendered diagnostic text. Identical on every call.
    pub fn description(&self) -> &str {
        match self {
            Error::Generic { description }
            | Error::InvalidArgument { description }
            | Error::FileOpenFailed { description, .. } => description,
            Error::ParseFailed(failure) => failure.description(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Generic { .. } => ErrorKind::Generic,
            Error::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Error::FileOpenFailed { .. } => ErrorKind::FileOpenFailed,
            Error::ParseFailed(_) => ErrorKind::ParseFailed,
        }
    }

    /// Source location of a parse failure, `None` for every other kind.
    pub fn location(&self) -> Option<&ParseFailed> {
        match self {
            Error::ParseFailed(failure) => Some(failure),
            _ => None,
        }
    }
}

/// A lexical or syntactic failure, pinned to the position where it was found.
///
/// The location fields are a snapshot taken by the caller when the failure is
/// raised. Nothing here re-derives them from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailed {
    source_desc: String,
    position: Position,
    message: String,
    description: String,
}

impl ParseFailed {
    pub fn new(
        source_desc: impl Into<String>,
        position: Position,
        message: impl Into<String>,
    ) -> Self {
        let source_desc = source_desc.into();
        let message = rendered(message.into(), "parse failed");
        let description = format!(
            "{}({},{},{}) : {}",
            source_desc, position.line, position.column, position.offset, message
        );
        Self { source_desc, position, message, description }
    }

    /// Which input failed, e.g. a file name or `"<string>"`
    pub fn source_desc(&self) -> &str {
        &self.source_desc
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn pos(&self) -> usize {
        self.position.offset
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn row(&self) -> usize {
        self.position.column
    }

    /// The message without the location prefix
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for ParseFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl std::error::Error for ParseFailed {}

fn rendered(description: String, fallback: &str) -> String {
    if description.is_empty() {
        fallback.to_string()
    } else {
        description
    }
}
