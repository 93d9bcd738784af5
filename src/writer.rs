//! FASTA output writing.
//!
//! Renders entries back to FASTA text, either into an in-memory string or
//! straight to a file. Both targets produce byte-identical content for the
//! same entries.

use crate::error::Result;
use crate::models::FastaEntry;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Render entries to a FASTA string.
pub fn entries_to_fasta(entries: &[FastaEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry.serialize());
    }
    out
}

/// Write entries to a FASTA file.
pub fn write_fasta(entries: &[FastaEntry], path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for entry in entries {
        writer.write_all(entry.serialize().as_bytes())?;
    }
    writer.flush()?;
    debug!("wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}
