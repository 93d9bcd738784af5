//! DataFrame conversion for FASTA entries.
//!
//! Bridges parsed entries and a Polars [`DataFrame`] with one row per entry
//! and a fixed set of ten columns. On the way in, every column goes through
//! datatype normalization (integer, then float, then text); on the way out,
//! rows are reconstructed into entries regardless of column order.

use crate::error::{FastaError, Result};
use crate::input::FastaInput;
use crate::models::FastaEntry;
use crate::reader::fasta_to_entries;
use crate::writer::{entries_to_fasta, write_fasta};
use polars::prelude::*;
use std::path::Path;
use tracing::debug;

/// Column names of the entry DataFrame, in canonical order.
pub const COLUMNS: [&str; 10] = [
    "db",
    "unique_identifier",
    "entry_name",
    "protein_name",
    "organism_name",
    "organism_identifier",
    "gene_name",
    "protein_existence",
    "sequence_version",
    "protein_sequence",
];

/// Convert entries to a DataFrame with one row per entry.
///
/// Absent optional fields become nulls. Each column is normalized to the
/// narrowest datatype that fits all of its values, so e.g.
/// `organism_identifier` typically comes out as Int64.
pub fn entries_to_df(entries: &[FastaEntry]) -> Result<DataFrame> {
    let string_column = |name: &str, values: Vec<Option<&str>>| -> Result<Column> {
        normalize_column(Series::new(name.into(), values).into_column())
    };

    let columns = vec![
        string_column("db", entries.iter().map(|e| e.db.as_deref()).collect())?,
        string_column(
            "unique_identifier",
            entries
                .iter()
                .map(|e| Some(e.unique_identifier.as_str()))
                .collect(),
        )?,
        string_column(
            "entry_name",
            entries.iter().map(|e| e.entry_name.as_deref()).collect(),
        )?,
        string_column(
            "protein_name",
            entries.iter().map(|e| e.protein_name.as_deref()).collect(),
        )?,
        string_column(
            "organism_name",
            entries.iter().map(|e| e.organism_name.as_deref()).collect(),
        )?,
        string_column(
            "organism_identifier",
            entries
                .iter()
                .map(|e| e.organism_identifier.as_deref())
                .collect(),
        )?,
        string_column(
            "gene_name",
            entries.iter().map(|e| e.gene_name.as_deref()).collect(),
        )?,
        string_column(
            "protein_existence",
            entries
                .iter()
                .map(|e| e.protein_existence.as_deref())
                .collect(),
        )?,
        string_column(
            "sequence_version",
            entries
                .iter()
                .map(|e| e.sequence_version.as_deref())
                .collect(),
        )?,
        string_column(
            "protein_sequence",
            entries
                .iter()
                .map(|e| Some(e.protein_sequence.as_str()))
                .collect(),
        )?,
    ];

    let df = DataFrame::new(columns)?;
    debug!("built DataFrame with {} entries", df.height());
    Ok(df)
}

/// Reconstruct entries from a DataFrame row-wise.
///
/// Requires all ten [`COLUMNS`] to be present by name; their order in the
/// frame does not matter. Numeric columns produced by normalization are cast
/// back to text. Nulls and empty strings both map to absent optional fields.
pub fn df_to_entries(df: &DataFrame) -> Result<Vec<FastaEntry>> {
    let mut cols: Vec<StringChunked> = Vec::with_capacity(COLUMNS.len());
    for name in COLUMNS {
        let column = df
            .column(name)
            .map_err(|_| FastaError::missing_column(name))?;
        let series = column.as_materialized_series().cast(&DataType::String)?;
        cols.push(series.str()?.clone());
    }

    let mut entries = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let value = |col: usize| -> Option<String> {
            cols[col]
                .get(row)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let unique_identifier = value(1).ok_or_else(|| {
            FastaError::invalid_header(format!("row {} has no unique_identifier", row))
        })?;

        entries.push(FastaEntry {
            db: value(0),
            unique_identifier,
            entry_name: value(2),
            protein_name: value(3),
            organism_name: value(4),
            organism_identifier: value(5),
            gene_name: value(6),
            protein_existence: value(7),
            sequence_version: value(8),
            protein_sequence: value(9).unwrap_or_default(),
        });
    }

    Ok(entries)
}

/// Parse any FASTA input straight into a DataFrame.
pub fn to_df(input: impl Into<FastaInput>) -> Result<DataFrame> {
    entries_to_df(&fasta_to_entries(input)?)
}

/// Render a DataFrame of entries to a FASTA string.
pub fn df_to_fasta(df: &DataFrame) -> Result<String> {
    Ok(entries_to_fasta(&df_to_entries(df)?))
}

/// Write a DataFrame of entries to a FASTA file.
pub fn write_df_to_fasta(df: &DataFrame, path: &Path) -> Result<()> {
    write_fasta(&df_to_entries(df)?, path)
}

/// Normalize a column to the narrowest datatype that fits every value:
/// integer first, then float, then text.
///
/// Conversion is column-uniform; a single non-numeric value keeps the whole
/// column as text. Nulls are preserved and do not influence the chosen type.
/// Non-text columns pass through untouched, which makes normalization
/// idempotent. All-null text columns stay text rather than collapsing to an
/// arbitrary numeric type.
pub fn normalize_column(column: Column) -> Result<Column> {
    if column.dtype() != &DataType::String {
        return Ok(column);
    }

    let ca = column.as_materialized_series().str()?.clone();
    if ca.null_count() == ca.len() {
        return Ok(column);
    }
    let name = column.name().clone();

    for target in [DataType::Int64, DataType::Float64, DataType::String] {
        if let Some(series) = convert_values(&ca, name.clone(), &target) {
            return Ok(series.into_column());
        }
    }

    // Text conversion always succeeds; reaching this is internal misuse.
    Err(FastaError::normalization(format!(
        "no common datatype found for column '{}'",
        name
    )))
}

fn convert_values(ca: &StringChunked, name: PlSmallStr, target: &DataType) -> Option<Series> {
    match target {
        DataType::Int64 => {
            let values: Option<Vec<Option<i64>>> = ca
                .into_iter()
                .map(|v| match v {
                    None => Some(None),
                    Some(s) => s.parse::<i64>().ok().map(Some),
                })
                .collect();
            values.map(|v| Series::new(name, v))
        }
        DataType::Float64 => {
            let values: Option<Vec<Option<f64>>> = ca
                .into_iter()
                .map(|v| match v {
                    None => Some(None),
                    Some(s) => s.parse::<f64>().ok().map(Some),
                })
                .collect();
            values.map(|v| Series::new(name, v))
        }
        _ => Some(ca.clone().into_series().with_name(name)),
    }
}
