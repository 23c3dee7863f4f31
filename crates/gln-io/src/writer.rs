//! The character-sink contract consumed by serializers

/// A sink for runs of output characters.
///
/// `buf` carries its own length and is not NUL-terminated, so embedded NULs
/// are ordinary payload. Reporting failures such as a full disk is left to
/// each implementation.
pub trait TextWriter {
    fn write(&mut self, buf: &[u8]);
}

impl<W: TextWriter + ?Sized> TextWriter for &mut W {
    fn write(&mut self, buf: &[u8]) {
        (**self).write(buf)
    }
}

impl TextWriter for Vec<u8> {
    fn write(&mut self, buf: &[u8]) {
        self.extend_from_slice(buf);
    }
}
