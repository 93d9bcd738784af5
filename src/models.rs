//! Core data structures for FASTA processing.
//!
//! Defines the parsed entry record and the two-letter header field tags
//! used throughout the library, following the UniProt FASTA header
//! convention `>db|UniqueIdentifier|EntryName PN OS=... OX=... GN=... PE=... SV=...`.

use serde::{Deserialize, Serialize};

/// Optional header fields recognized in a UniProt FASTA description line.
///
/// Each variant corresponds to a two-letter `XX=` tag, except protein name
/// which carries no tag and occupies the free text immediately after the
/// `db|id|entry` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FastaField {
    ProteinName,
    OrganismName,
    OrganismId,
    GeneName,
    ProteinExistence,
    SequenceVersion,
}

impl FastaField {
    /// All fields in canonical serialization order.
    pub const ORDERED: [FastaField; 6] = [
        FastaField::ProteinName,
        FastaField::OrganismName,
        FastaField::OrganismId,
        FastaField::GeneName,
        FastaField::ProteinExistence,
        FastaField::SequenceVersion,
    ];

    /// The two-letter tag code for this field
    pub fn code(&self) -> &'static str {
        match self {
            FastaField::ProteinName => "PN",
            FastaField::OrganismName => "OS",
            FastaField::OrganismId => "OX",
            FastaField::GeneName => "GN",
            FastaField::ProteinExistence => "PE",
            FastaField::SequenceVersion => "SV",
        }
    }

    /// Look up a field from its two-letter tag code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "PN" => Some(FastaField::ProteinName),
            "OS" => Some(FastaField::OrganismName),
            "OX" => Some(FastaField::OrganismId),
            "GN" => Some(FastaField::GeneName),
            "PE" => Some(FastaField::ProteinExistence),
            "SV" => Some(FastaField::SequenceVersion),
            _ => None,
        }
    }
}

/// One parsed protein record: header fields plus the sequence body.
///
/// `unique_identifier` is always present once an entry exists, even when the
/// header's leading token was malformed and identity recovery kicked in.
/// Optional fields hold either a non-empty value or `None`; an empty string
/// is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FastaEntry {
    /// Database source code (e.g. "sp" for Swiss-Prot, "tr" for TrEMBL)
    pub db: Option<String>,

    /// Accession / identity key (e.g. "Q8I6R7")
    pub unique_identifier: String,

    /// Entry name (e.g. "ACN2_ACAGO")
    pub entry_name: Option<String>,

    /// Free-text protein name, untagged in the header
    pub protein_name: Option<String>,

    /// Organism name (`OS=`)
    pub organism_name: Option<String>,

    /// NCBI taxonomy identifier (`OX=`)
    pub organism_identifier: Option<String>,

    /// Gene name (`GN=`)
    pub gene_name: Option<String>,

    /// Protein existence level (`PE=`)
    pub protein_existence: Option<String>,

    /// Sequence version (`SV=`)
    pub sequence_version: Option<String>,

    /// Amino acid sequence, body lines concatenated without separators
    pub protein_sequence: String,
}

impl FastaEntry {
    /// Get an optional field's value by tag
    pub fn field(&self, field: FastaField) -> Option<&str> {
        match field {
            FastaField::ProteinName => self.protein_name.as_deref(),
            FastaField::OrganismName => self.organism_name.as_deref(),
            FastaField::OrganismId => self.organism_identifier.as_deref(),
            FastaField::GeneName => self.gene_name.as_deref(),
            FastaField::ProteinExistence => self.protein_existence.as_deref(),
            FastaField::SequenceVersion => self.sequence_version.as_deref(),
        }
    }

    /// Set an optional field's value by tag. Empty values are stored as absent.
    pub fn set_field(&mut self, field: FastaField, value: Option<String>) {
        let value = value.filter(|v| !v.is_empty());
        match field {
            FastaField::ProteinName => self.protein_name = value,
            FastaField::OrganismName => self.organism_name = value,
            FastaField::OrganismId => self.organism_identifier = value,
            FastaField::GeneName => self.gene_name = value,
            FastaField::ProteinExistence => self.protein_existence = value,
            FastaField::SequenceVersion => self.sequence_version = value,
        }
    }

    /// Serialize this entry back to FASTA text: header line, sequence line,
    /// trailing newline.
    ///
    /// Tags are emitted in the fixed order PN, OS, OX, GN, PE, SV regardless
    /// of their order in the source header; absent fields contribute nothing.
    /// When `db` or `entry_name` is absent (only possible via the
    /// malformed-identifier recovery path) the leading segment is written as
    /// the bare `unique_identifier`, which reproduces the original malformed
    /// token byte for byte.
    pub fn serialize(&self) -> String {
        let mut header = match (&self.db, &self.entry_name) {
            (Some(db), Some(entry_name)) => {
                format!(">{}|{}|{}", db, self.unique_identifier, entry_name)
            }
            _ => format!(">{}", self.unique_identifier),
        };

        for field in FastaField::ORDERED {
            if let Some(value) = self.field(field) {
                header.push(' ');
                header.push_str(field.code());
                header.push('=');
                header.push_str(value);
            }
        }

        format!("{}\n{}\n", header, self.protein_sequence)
    }
}
