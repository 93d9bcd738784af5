//! Lazy FASTA entry reader.
//!
//! Drives the line source and header parser, accumulating multi-line
//! sequence bodies and yielding one [`FastaEntry`] per header encountered.
//! Entries come out in header order, each one complete before it is handed
//! to the consumer. The reader is single pass; a fresh reader is required to
//! reprocess an input.

use crate::error::{FastaError, Result};
use crate::header::parse_header;
use crate::input::{FastaInput, LineSource};
use crate::models::FastaEntry;
use tracing::{debug, warn};

/// Counters accumulated while reading.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParseStats {
    /// Entries yielded to the consumer
    pub entries_parsed: usize,
    /// Headers whose identifier token was malformed but recoverable
    pub identifiers_recovered: usize,
    /// Headers dropped in skip-errors mode
    pub headers_skipped: usize,
}

/// Iterator over the entries of a FASTA input.
///
/// In the default mode a malformed header (empty identifier token or unknown
/// tag) aborts the remaining parse: the iterator yields the error and then
/// fuses. With [`skip_errors`](FastaReader::skip_errors) enabled, malformed
/// headers are dropped with a warning and their body lines are ignored until
/// the next valid header.
#[derive(Debug)]
pub struct FastaReader {
    lines: LineSource,
    current: Option<FastaEntry>,
    // Hard error held back until the entry open at detection time has been
    // yielded; surfaced on the following pull.
    pending_error: Option<FastaError>,
    skip_errors: bool,
    stats: ParseStats,
    done: bool,
}

impl FastaReader {
    /// Create a reader over the given input. Opens the underlying file (for
    /// path input) eagerly; everything else is deferred until iteration.
    pub fn new(input: impl Into<FastaInput>) -> Result<Self> {
        Ok(Self {
            lines: input.into().into_lines()?,
            current: None,
            pending_error: None,
            skip_errors: false,
            stats: ParseStats::default(),
            done: false,
        })
    }

    /// Drop malformed headers instead of aborting the parse.
    pub fn skip_errors(mut self, skip: bool) -> Self {
        self.skip_errors = skip;
        self
    }

    /// Counters accumulated so far
    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    fn emit(&mut self, entry: FastaEntry) -> Option<Result<FastaEntry>> {
        self.stats.entries_parsed += 1;
        Some(Ok(entry))
    }
}

impl Iterator for FastaReader {
    type Item = Result<FastaEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if let Some(e) = self.pending_error.take() {
            self.done = true;
            return Some(Err(e));
        }

        loop {
            let line = match self.lines.next() {
                None => {
                    self.done = true;
                    let last = self.current.take();
                    debug!(
                        "end of input: {} entries parsed, {} identifiers recovered, {} headers skipped",
                        self.stats.entries_parsed + last.is_some() as usize,
                        self.stats.identifiers_recovered,
                        self.stats.headers_skipped
                    );
                    return last.and_then(|entry| self.emit(entry));
                }
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(FastaError::Io(e)));
                }
                Some(Ok(line)) => line,
            };

            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }

            if line.starts_with('>') {
                match parse_header(line) {
                    Ok(parsed) => {
                        if parsed.identifier_recovered {
                            self.stats.identifiers_recovered += 1;
                        }
                        let previous = self.current.replace(parsed.entry);
                        if let Some(entry) = previous {
                            return self.emit(entry);
                        }
                    }
                    Err(e) if self.skip_errors => {
                        warn!("skipping malformed header: {}", e);
                        self.stats.headers_skipped += 1;
                        // Any previously open entry is still complete.
                        let previous = self.current.take();
                        if let Some(entry) = previous {
                            return self.emit(entry);
                        }
                    }
                    Err(e) => {
                        // The entry open at this point is already complete;
                        // yield it before the error aborts the parse.
                        if let Some(entry) = self.current.take() {
                            self.pending_error = Some(e);
                            return self.emit(entry);
                        }
                        self.done = true;
                        return Some(Err(e));
                    }
                }
            } else if let Some(entry) = self.current.as_mut() {
                entry.protein_sequence.push_str(line);
            }
            // Body lines with no open entry are ignored; not expected in
            // well-formed input.
        }
    }
}

/// Parse an entire input into a vector of entries.
pub fn fasta_to_entries(input: impl Into<FastaInput>) -> Result<Vec<FastaEntry>> {
    FastaReader::new(input)?.collect()
}
