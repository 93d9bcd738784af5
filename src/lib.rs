//! FastaFrames
//!
//! A Rust library for working with UniProt FASTA protein sequence files as
//! typed records and Polars DataFrames.
//!
//! This library provides tools for:
//! - Parsing UniProt-style headers (`>db|id|entry` plus `OS=`/`OX=`/`GN=`/
//!   `PE=`/`SV=` tags) into typed [`FastaEntry`] records
//! - Lazy, single-pass iteration over arbitrarily large files
//! - Graceful recovery from malformed identifier tokens, with an optional
//!   skip mode for dropping malformed headers entirely
//! - Converting records to and from a ten-column Polars DataFrame with
//!   automatic column datatype normalization
//! - Serializing records back to byte-compatible FASTA text
//!
//! ```no_run
//! use fastaframes::{FastaReader, entries_to_fasta};
//!
//! # fn main() -> fastaframes::Result<()> {
//! let entries: Vec<_> = FastaReader::new(std::path::Path::new("proteins.fasta"))?
//!     .collect::<fastaframes::Result<_>>()?;
//! let text = entries_to_fasta(&entries);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod frame;
pub mod header;
pub mod input;
pub mod models;
pub mod reader;
pub mod writer;

pub use error::{FastaError, Result};
pub use frame::{df_to_entries, df_to_fasta, entries_to_df, to_df, write_df_to_fasta};
pub use input::FastaInput;
pub use models::{FastaEntry, FastaField};
pub use reader::{fasta_to_entries, FastaReader, ParseStats};
pub use writer::{entries_to_fasta, write_fasta};
