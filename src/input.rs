//! Input abstraction and line source for FASTA parsing.
//!
//! Normalizes heterogeneous input shapes (filesystem path, in-memory text,
//! open reader, raw bytes) into a single lazy line iterator with trailing
//! newlines stripped. The underlying file handle is owned by the iterator,
//! so it is released deterministically whether the lines are fully consumed
//! or abandoned early.

use crate::error::{FastaError, Result};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A source of FASTA text.
///
/// The explicit variants are the primary API. [`FastaInput::auto`] preserves
/// the historical convenience of passing one string that is either a path or
/// literal content; see its documentation for the ambiguity this carries.
pub enum FastaInput {
    /// A filesystem path, read as UTF-8 text
    Path(PathBuf),
    /// Literal FASTA content
    Text(String),
    /// An open reader yielding UTF-8 text
    Reader(Box<dyn Read>),
    /// Raw bytes, decoded as UTF-8
    Bytes(Vec<u8>),
}

impl fmt::Debug for FastaInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FastaInput::Path(path) => f.debug_tuple("Path").field(path).finish(),
            FastaInput::Text(text) => f.debug_tuple("Text").field(&text.len()).finish(),
            FastaInput::Reader(_) => f.debug_tuple("Reader").finish(),
            FastaInput::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
        }
    }
}

impl FastaInput {
    /// Interpret a string as a path if it names an existing file, otherwise
    /// as literal FASTA content.
    ///
    /// Known ambiguity: literal content that happens to match an existing
    /// path is read as a file. Callers who need to rule that out should
    /// construct [`FastaInput::Text`] or [`FastaInput::Path`] directly.
    pub fn auto(value: &str) -> Self {
        if Path::new(value).exists() {
            debug!("input string resolves to an existing path: {}", value);
            FastaInput::Path(PathBuf::from(value))
        } else {
            FastaInput::Text(value.to_string())
        }
    }

    /// Wrap an open reader
    pub fn reader(reader: impl Read + 'static) -> Self {
        FastaInput::Reader(Box::new(reader))
    }

    /// Convert this input into a lazy line iterator with trailing newlines
    /// stripped. Byte input is decoded as UTF-8 up front; path input opens
    /// the file here and fails fast if it cannot be read.
    pub fn into_lines(self) -> Result<LineSource> {
        let reader: Box<dyn Read> = match self {
            FastaInput::Path(path) => {
                let file = File::open(&path)?;
                debug!("reading FASTA from file: {}", path.display());
                Box::new(file)
            }
            FastaInput::Text(text) => Box::new(Cursor::new(text.into_bytes())),
            FastaInput::Reader(reader) => reader,
            FastaInput::Bytes(bytes) => {
                let text = String::from_utf8(bytes).map_err(|e| {
                    FastaError::unsupported_input(format!("byte input is not valid UTF-8: {}", e))
                })?;
                Box::new(Cursor::new(text.into_bytes()))
            }
        };

        Ok(LineSource {
            lines: BufReader::new(reader).lines(),
        })
    }
}

impl From<PathBuf> for FastaInput {
    fn from(path: PathBuf) -> Self {
        FastaInput::Path(path)
    }
}

impl From<&Path> for FastaInput {
    fn from(path: &Path) -> Self {
        FastaInput::Path(path.to_path_buf())
    }
}

/// String inputs use the path-or-text dispatch of [`FastaInput::auto`].
impl From<&str> for FastaInput {
    fn from(value: &str) -> Self {
        FastaInput::auto(value)
    }
}

impl From<String> for FastaInput {
    fn from(value: String) -> Self {
        FastaInput::auto(&value)
    }
}

impl From<Vec<u8>> for FastaInput {
    fn from(bytes: Vec<u8>) -> Self {
        FastaInput::Bytes(bytes)
    }
}

impl From<File> for FastaInput {
    fn from(file: File) -> Self {
        FastaInput::Reader(Box::new(file))
    }
}

/// Lazy line iterator over a FASTA input. Single pass; a fresh
/// [`FastaInput`] is required to reprocess.
pub struct LineSource {
    lines: io::Lines<BufReader<Box<dyn Read>>>,
}

impl fmt::Debug for LineSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineSource").finish_non_exhaustive()
    }
}

impl Iterator for LineSource {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next()
    }
}
