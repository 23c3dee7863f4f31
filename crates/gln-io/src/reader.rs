//! The character-source capability shared by every backing store

use std::iter::FusedIterator;

/// Returned by [`TextReader::read`] once the source is exhausted.
///
/// Valid code units occupy `0..=65535`, so the sentinel never collides with data.
pub const EOF: i32 = -1;

/// A source of 16-bit code units, read one at a time.
///
/// `read` advances by exactly one unit per call. After the end of the source
/// it keeps returning [`EOF`]; calling it again is always safe. There is no
/// pushback: lookahead is the caller's job (see [`crate::SourceCursor`]).
pub trait TextReader {
    /// Read the next code unit, or [`EOF`].
    fn read(&mut self) -> i32;

    /// Iterate the remaining units, stopping at the sentinel.
    fn units(&mut self) -> Units<'_, Self>
    where
        Self: Sized,
    {
        Units { reader: self }
    }
}

impl<R: TextReader + ?Sized> TextReader for &mut R {
    fn read(&mut self) -> i32 {
        (**self).read()
    }
}

impl<R: TextReader + ?Sized> TextReader for Box<R> {
    fn read(&mut self) -> i32 {
        (**self).read()
    }
}

/// Iterator over the units of a [`TextReader`]. See [`TextReader::units`].
#[derive(Debug)]
pub struct Units<'r, R> {
    reader: &'r mut R,
}

impl<R: TextReader> Iterator for Units<'_, R> {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        to_unit(self.reader.read())
    }
}

impl<R: TextReader> FusedIterator for Units<'_, R> {}

/// Narrow a `read` result to a code unit; `None` for the sentinel.
pub(crate) fn to_unit(value: i32) -> Option<u16> {
    u16::try_from(value).ok()
}
