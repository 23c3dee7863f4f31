//! Character sources, sinks and position-aware errors for GLN parsers.
//!
//! A lexer pulls 16-bit code units one at a time from a [`TextReader`]
//! ([`FileReader`] or [`StringReader`]) until it sees [`EOF`], usually through
//! a [`SourceCursor`] so that failures can be raised as
//! [`Error::ParseFailed`] with an exact offset, line and column.

pub mod config;
pub mod cursor;
pub mod error;
pub mod file;
pub mod reader;
pub mod string;
pub mod writer;

// Re-export commonly used items
pub use config::ReaderConfig;
pub use cursor::SourceCursor;
pub use error::{Error, ErrorKind, ParseFailed, Position, Result};
pub use file::FileReader;
pub use reader::{TextReader, Units, EOF};
pub use string::{CodeUnit, StringReader};
pub use writer::TextWriter;
