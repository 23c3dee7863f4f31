//! Lookahead and position tracking on top of a [`TextReader`]

use crate::error::{Error, Position, Result};
use crate::reader::{to_unit, TextReader, EOF};

const LF: i32 = b'\n' as i32;
const CR: i32 = b'\r' as i32;

/// A [`TextReader`] wrapper that knows where it is.
///
/// Lexers read through the cursor instead of the raw source so that every
/// [`Error::ParseFailed`] they raise carries the offset, line and column of
/// the next unread unit. LF, a lone CR, and CRLF each count as one line break.
#[derive(Debug)]
pub struct SourceCursor<R> {
    reader: R,
    source_desc: String,
    lookahead: Option<i32>,
    offset: usize,
    line: usize,
    column: usize,
}

impl<R: TextReader> SourceCursor<R> {
    pub fn new(reader: R, source_desc: impl Into<String>) -> Self {
        let start = Position::START;
        Self {
            reader,
            source_desc: source_desc.into(),
            lookahead: None,
            offset: start.offset,
            line: start.line,
            column: start.column,
        }
    }

    /// The next unit, without consuming it
    pub fn peek(&mut self) -> i32 {
        match self.lookahead {
            Some(unit) => unit,
            None => {
                let unit = self.reader.read();
                self.lookahead = Some(unit);
                unit
            }
        }
    }

    /// Consume one unit and advance the position past it
    pub fn advance(&mut self) -> i32 {
        let unit = match self.lookahead.take() {
            Some(unit) => unit,
            None => self.reader.read(),
        };

        if unit == LF || (unit == CR && self.peek() != LF) {
            self.line += 1;
            self.column = 0;
        }
        if unit != EOF {
            self.offset += 1;
            self.column += 1;
        }

        unit
    }

    pub fn position(&self) -> Position {
        Position::new(self.offset, self.line, self.column)
    }

    pub fn source_desc(&self) -> &str {
        &self.source_desc
    }

    pub fn is_at_end(&mut self) -> bool {
        self.peek() == EOF
    }

    /// A parse failure located at the current position
    pub fn fail(&self, message: impl Into<String>) -> Error {
        Error::parse_failed(self.source_desc.as_str(), self.position(), message)
    }

    /// Consume `expected`, or fail naming what was found instead.
    pub fn expect(&mut self, expected: u16) -> Result<()> {
        let found = self.advance();
        if found == i32::from(expected) {
            return Ok(());
        }

        Err(self.fail(format!(
            "expected '{}' but found '{}'.",
            describe(i32::from(expected)),
            describe(found)
        )))
    }

    /// Consume units while `pred` holds; returns how many were consumed.
    pub fn skip_while(&mut self, mut pred: impl FnMut(u16) -> bool) -> usize {
        let mut count = 0;
        while let Some(unit) = to_unit(self.peek()) {
            if !pred(unit) {
                break;
            }
            self.advance();
            count += 1;
        }
        count
    }

    /// Consume the rest of the line, terminator included.
    ///
    /// Returns the line without its CR, LF or CRLF, or `None` when nothing is
    /// left to read.
    pub fn read_line(&mut self) -> Option<Vec<u16>> {
        if self.is_at_end() {
            return None;
        }

        let mut line = Vec::new();
        loop {
            match self.advance() {
                EOF | LF => break,
                CR => {
                    if self.peek() == LF {
                        self.advance();
                    }
                    break;
                }
                unit => line.extend(to_unit(unit)),
            }
        }

        Some(line)
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Unwrap the reader, along with a unit that was peeked at but not
    /// consumed. The reader itself has already moved past that unit.
    pub fn into_inner(self) -> (R, Option<u16>) {
        let pending = self.lookahead.and_then(to_unit);
        (self.reader, pending)
    }
}

impl<R: TextReader> TextReader for SourceCursor<R> {
    fn read(&mut self) -> i32 {
        self.advance()
    }
}

/// Render a unit for a diagnostic, `<EOF>` for the sentinel
pub(crate) fn describe(unit: i32) -> String {
    match to_unit(unit) {
        None => "<EOF>".to_string(),
        Some(unit) => match char::from_u32(u32::from(unit)) {
            Some(ch) => ch.to_string(),
            None => format!("\\u{:04X}", unit),
        },
    }
}
