//! In-memory character source over a borrowed buffer

use crate::error::{Error, Result};
use crate::reader::{TextReader, EOF};

/// A storage unit that widens to one 16-bit code unit.
///
/// `u8` treats every byte as one character, `u16` is a UCS-2 / UTF-16 buffer.
pub trait CodeUnit: Copy + Eq {
    const NUL: Self;

    fn to_code_unit(self) -> u16;
}

impl CodeUnit for u8 {
    const NUL: Self = 0;

    fn to_code_unit(self) -> u16 {
        u16::from(self)
    }
}

impl CodeUnit for u16 {
    const NUL: Self = 0;

    fn to_code_unit(self) -> u16 {
        self
    }
}

/// Reads units out of a caller-owned buffer without copying it.
///
/// The lifetime ties the reader to the buffer, so it can never outlive it.
#[derive(Debug, Clone)]
pub struct StringReader<'a, U: CodeUnit = u8> {
    units: &'a [U],
    cursor: usize,
}

impl<'a, U: CodeUnit> StringReader<'a, U> {
    /// Read every unit of `source`. Embedded NULs are ordinary data.
    pub fn new(source: &'a [U]) -> Self {
        Self { units: source, cursor: 0 }
    }

    /// Read `source` up to its first NUL unit.
    ///
    /// Fails with [`Error::InvalidArgument`] when the buffer is absent or has
    /// no terminator.
    pub fn from_nul_terminated(source: Option<&'a [U]>) -> Result<Self> {
        let source = source.ok_or_else(|| Error::invalid_argument("string source is null"))?;
        let end = source.iter().position(|&unit| unit == U::NUL).ok_or_else(|| {
            Error::invalid_argument(format!(
                "string source of {} units has no nul terminator",
                source.len()
            ))
        })?;

        Ok(Self::new(&source[..end]))
    }

    /// Units read so far
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    /// Units left before the end of the buffer
    pub fn remaining(&self) -> usize {
        self.units.len() - self.cursor
    }
}

impl<'a> From<&'a str> for StringReader<'a, u8> {
    fn from(source: &'a str) -> Self {
        Self::new(source.as_bytes())
    }
}

impl<U: CodeUnit> TextReader for StringReader<'_, U> {
    fn read(&mut self) -> i32 {
        match self.units.get(self.cursor) {
            Some(&unit) => {
                self.cursor += 1;
                i32::from(unit.to_code_unit())
            }
            None => EOF,
        }
    }
}
