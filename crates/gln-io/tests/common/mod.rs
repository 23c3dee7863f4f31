// Test infrastructure shared by the gln-io integration tests

#![allow(dead_code)]

use gln_io::TextReader;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary directory holding source files for a test
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    /// Write `contents` to `name` inside the fixture and return its path
    pub fn file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }
}

/// Drain a reader into its code units
pub fn read_all(reader: &mut impl TextReader) -> Vec<u16> {
    reader.units().collect()
}

pub fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}
