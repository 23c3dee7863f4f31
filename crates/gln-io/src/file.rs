//! File-backed character source

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use encoding_rs::{CoderResult, Decoder, Encoding};
use log::{debug, trace, warn};

use crate::config::{ReaderConfig, RAW_ENCODING};
use crate::error::{Error, Result};
use crate::reader::{TextReader, EOF};

/// Reads code units from a file it opens and exclusively owns.
///
/// The handle is closed when the reader is dropped. Bytes are pulled in
/// blocks of `buffer_size` and decoded to UTF-16 code units; with the `"raw"`
/// encoding every byte is handed out unchanged as one unit.
pub struct FileReader {
    path: PathBuf,
    file: File,
    decoder: Option<Decoder>,
    bytes: Vec<u8>,
    units: Vec<u16>,
    next: usize,
    exhausted: bool,
    error: Option<io::Error>,
}

impl FileReader {
    /// Open `path` as UTF-8, honoring a byte-order mark if one is present.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, &ReaderConfig::default())
    }

    pub fn open_with(path: impl AsRef<Path>, config: &ReaderConfig) -> Result<Self> {
        let path = path.as_ref();

        if config.buffer_size == 0 {
            return Err(Error::invalid_argument("reader buffer size must be non-zero"));
        }
        let decoder = decoder_for(config)?;

        let file = File::open(path).map_err(|e| Error::file_open_failed(path, e))?;
        let metadata = file.metadata().map_err(|e| Error::file_open_failed(path, e))?;
        if metadata.is_dir() {
            return Err(Error::file_open_failed(path, io::Error::other("is a directory")));
        }

        debug!(
            "opened '{}' as {} (bom sniffing: {})",
            path.display(),
            config.encoding,
            config.bom_sniffing
        );

        Ok(Self {
            path: path.to_path_buf(),
            file,
            decoder,
            bytes: vec![0; config.buffer_size],
            units: Vec::new(),
            next: 0,
            exhausted: false,
            error: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name of the encoding in effect; may change once a byte-order mark is seen.
    pub fn encoding(&self) -> &'static str {
        match &self.decoder {
            Some(decoder) => decoder.encoding().name(),
            None => RAW_ENCODING,
        }
    }

    /// The read failure that ended the stream early, if any.
    ///
    /// [`TextReader::read`] reports such a failure as [`EOF`]; this tells it
    /// apart from a real end of file. Taking the error does not reopen the
    /// stream.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Refill `units`; false once the file has nothing more to give.
    fn fill(&mut self) -> bool {
        self.units.clear();
        self.next = 0;

        while self.units.is_empty() && !self.exhausted {
            let count = self.read_bytes();
            let last = count == 0;

            match self.decoder.as_mut() {
                None => self.units.extend(self.bytes[..count].iter().map(|&b| u16::from(b))),
                Some(decoder) => {
                    let mut consumed = 0;
                    loop {
                        let start = self.units.len();
                        let room = decoder
                            .max_utf16_buffer_length(count - consumed)
                            .unwrap_or(count - consumed + 4);
                        self.units.resize(start + room, 0);

                        let (result, read, written, _) = decoder.decode_to_utf16(
                            &self.bytes[consumed..count],
                            &mut self.units[start..],
                            last,
                        );
                        self.units.truncate(start + written);
                        consumed += read;

                        if result == CoderResult::InputEmpty {
                            break;
                        }
                    }
                }
            }

            self.exhausted = last;
        }

        !self.units.is_empty()
    }

    fn read_bytes(&mut self) -> usize {
        loop {
            match self.file.read(&mut self.bytes) {
                Ok(count) => {
                    trace!("read {} bytes from '{}'", count, self.path.display());
                    return count;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!(
                        "reading '{}' failed, treating as end of input: {}",
                        self.path.display(),
                        e
                    );
                    self.error = Some(e);
                    return 0;
                }
            }
        }
    }
}

impl TextReader for FileReader {
    fn read(&mut self) -> i32 {
        if self.next >= self.units.len() && !self.fill() {
            return EOF;
        }

        let unit = self.units[self.next];
        self.next += 1;
        i32::from(unit)
    }
}

impl fmt::Debug for FileReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileReader")
            .field("path", &self.path)
            .field("encoding", &self.encoding())
            .field("exhausted", &self.exhausted)
            .field("error", &self.error)
            .finish()
    }
}

fn decoder_for(config: &ReaderConfig) -> Result<Option<Decoder>> {
    if config.encoding.eq_ignore_ascii_case(RAW_ENCODING) {
        return Ok(None);
    }

    let encoding = Encoding::for_label(config.encoding.as_bytes()).ok_or_else(|| {
        Error::invalid_argument(format!("unknown encoding label '{}'", config.encoding))
    })?;

    Ok(Some(if config.bom_sniffing {
        encoding.new_decoder()
    } else {
        encoding.new_decoder_without_bom_handling()
    }))
}
