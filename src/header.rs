//! UniProt FASTA header parsing.
//!
//! Splits a `>`-prefixed description line into the leading `db|id|entry`
//! triple and the trailing tagged fields, then groups the trailing tokens
//! with a small state machine keyed on two-letter `XX=` tags:
//!
//! `>db|UniqueIdentifier|EntryName ProteinName OS=OrganismName OX=OrganismIdentifier GN=GeneName PE=1 SV=1`
//!
//! The protein name carries no tag; it is whatever free text precedes the
//! first `XX=` token. A tag stays current until the next `XX=` token, which
//! is how embedded spaces in organism and protein names are reassembled.

use crate::error::{FastaError, Result};
use crate::models::{FastaEntry, FastaField};
use std::collections::HashMap;
use tracing::warn;

/// Identity fields extracted from the leading `db|id|entry` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialInfo {
    pub db: Option<String>,
    pub unique_identifier: String,
    pub entry_name: Option<String>,
    /// True when the token did not split into exactly three parts and the
    /// whole token was kept as the unique identifier.
    pub recovered: bool,
}

/// Result of parsing one header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    pub entry: FastaEntry,
    /// True when the leading token was malformed and identity recovery
    /// applied (soft warning, not an error).
    pub identifier_recovered: bool,
}

/// Split a header line into word tokens.
///
/// Trailing whitespace is stripped and one leading `>` removed; the line is
/// then split on single spaces, preserving empty tokens produced by runs of
/// spaces. Token 0 is the identity token and never participates in field
/// grouping.
pub fn tokenize_header(line: &str) -> Vec<&str> {
    let line = line.trim_end();
    let line = line.strip_prefix('>').unwrap_or(line);
    line.split(' ').collect()
}

/// Extract `(db, unique_identifier, entry_name)` from the identity token.
///
/// Exactly three pipe-separated parts is the success path. Any other count
/// (real-world files contain doubled pipes from decoy generators) degrades
/// gracefully: the whole token, pipes and all, becomes the unique identifier
/// and `db`/`entry_name` are absent. An empty token is a hard error; there
/// is no identity to recover.
pub fn extract_initial_info(token: &str) -> Result<InitialInfo> {
    if token.is_empty() {
        return Err(FastaError::invalid_header(
            "header has an empty identifier token",
        ));
    }

    let parts: Vec<&str> = token.split('|').collect();
    if parts.len() == 3 {
        return Ok(InitialInfo {
            db: Some(parts[0]).filter(|s| !s.is_empty()).map(str::to_string),
            unique_identifier: parts[1].to_string(),
            entry_name: Some(parts[2]).filter(|s| !s.is_empty()).map(str::to_string),
            recovered: false,
        });
    }

    warn!(
        "malformed identifier token '{}': expected 3 pipe-separated parts, found {}; \
         keeping the whole token as the unique identifier",
        token,
        parts.len()
    );

    Ok(InitialInfo {
        db: None,
        unique_identifier: token.to_string(),
        entry_name: None,
        recovered: true,
    })
}

/// Group trailing tokens into named fields and store them on the entry.
///
/// State machine with one state variable: the current field, starting at
/// protein name. A token with `=` at byte offset 2 switches the state to the
/// field named by its two-letter prefix and contributes the rest of itself;
/// every other token is collected verbatim under the current field. Tokens
/// per field are rejoined with single spaces. An unrecognized two-letter
/// prefix is a hard error so unanticipated header dialects fail loudly
/// instead of misparsing silently.
pub fn classify_fields(tokens: &[&str], entry: &mut FastaEntry) -> Result<()> {
    let mut current = FastaField::ProteinName;
    let mut collected: HashMap<FastaField, Vec<&str>> = HashMap::new();

    for &token in tokens {
        let mut token = token;
        if is_tag_token(token) {
            let code = &token[..2];
            current = FastaField::from_code(code)
                .ok_or_else(|| FastaError::unexpected_element(code))?;
            token = &token[3..];
        }
        collected.entry(current).or_default().push(token);
    }

    for (field, tokens) in collected {
        entry.set_field(field, Some(tokens.join(" ")));
    }

    Ok(())
}

/// A token switches the field state when its third byte is `=`. Offset 2
/// being `=` guarantees a char boundary, so the prefix slices are safe.
fn is_tag_token(token: &str) -> bool {
    token.as_bytes().get(2) == Some(&b'=')
}

/// Parse one full header line into an entry with an empty sequence.
pub fn parse_header(line: &str) -> Result<ParsedHeader> {
    let tokens = tokenize_header(line);
    let info = extract_initial_info(tokens[0])?;

    let mut entry = FastaEntry {
        db: info.db,
        unique_identifier: info.unique_identifier,
        entry_name: info.entry_name,
        ..Default::default()
    };
    classify_fields(&tokens[1..], &mut entry)?;

    Ok(ParsedHeader {
        entry,
        identifier_recovered: info.recovered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_strips_marker_and_trailing_whitespace() {
        let tokens = tokenize_header(">sp|Q8I6R7|ACN2_ACAGO Acanthoscurrin-2 OS=Acanthoscurria  \n");
        assert_eq!(
            tokens,
            vec!["sp|Q8I6R7|ACN2_ACAGO", "Acanthoscurrin-2", "OS=Acanthoscurria"]
        );
    }

    #[test]
    fn test_tokenize_preserves_embedded_empty_tokens() {
        let tokens = tokenize_header(">sp|A|B Name  OS=Org");
        assert_eq!(tokens, vec!["sp|A|B", "Name", "", "OS=Org"]);
    }

    #[test]
    fn test_initial_info_success() {
        let info = extract_initial_info("sp|Q8I6R7|ACN2_ACAGO").unwrap();
        assert_eq!(info.db.as_deref(), Some("sp"));
        assert_eq!(info.unique_identifier, "Q8I6R7");
        assert_eq!(info.entry_name.as_deref(), Some("ACN2_ACAGO"));
        assert!(!info.recovered);
    }

    #[test]
    fn test_initial_info_recovers_extra_pipe() {
        let info = extract_initial_info("sp|A0A087X1C5||CP2D7_HUMAN").unwrap();
        assert_eq!(info.db, None);
        assert_eq!(info.unique_identifier, "sp|A0A087X1C5||CP2D7_HUMAN");
        assert_eq!(info.entry_name, None);
        assert!(info.recovered);
    }

    #[test]
    fn test_initial_info_recovers_missing_pipes() {
        let info = extract_initial_info("DECOY_12345").unwrap();
        assert_eq!(info.unique_identifier, "DECOY_12345");
        assert!(info.recovered);
    }

    #[test]
    fn test_initial_info_rejects_empty_token() {
        assert!(matches!(
            extract_initial_info("").unwrap_err(),
            FastaError::InvalidHeader { .. }
        ));
    }

    #[test]
    fn test_classify_groups_multi_token_fields() {
        let mut entry = FastaEntry::default();
        let tokens = vec![
            "Acanthoscurrin-2",
            "(Fragment)",
            "OS=Acanthoscurria",
            "gomesiana",
            "OX=115339",
            "GN=acantho2",
            "PE=1",
            "SV=1",
        ];
        classify_fields(&tokens, &mut entry).unwrap();

        assert_eq!(
            entry.protein_name.as_deref(),
            Some("Acanthoscurrin-2 (Fragment)")
        );
        assert_eq!(
            entry.organism_name.as_deref(),
            Some("Acanthoscurria gomesiana")
        );
        assert_eq!(entry.organism_identifier.as_deref(), Some("115339"));
        assert_eq!(entry.gene_name.as_deref(), Some("acantho2"));
        assert_eq!(entry.protein_existence.as_deref(), Some("1"));
        assert_eq!(entry.sequence_version.as_deref(), Some("1"));
    }

    #[test]
    fn test_classify_order_independent_tags() {
        let mut entry = FastaEntry::default();
        classify_fields(&["SV=2", "GN=abc", "OS=Homo", "sapiens"], &mut entry).unwrap();

        assert_eq!(entry.protein_name, None);
        assert_eq!(entry.sequence_version.as_deref(), Some("2"));
        assert_eq!(entry.gene_name.as_deref(), Some("abc"));
        assert_eq!(entry.organism_name.as_deref(), Some("Homo sapiens"));
    }

    #[test]
    fn test_classify_rejects_unknown_tag() {
        let mut entry = FastaEntry::default();
        let err = classify_fields(&["Name", "ZZ=foo"], &mut entry).unwrap_err();
        match err {
            FastaError::UnexpectedElement { tag } => assert_eq!(tag, "ZZ"),
            other => panic!("expected UnexpectedElement, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_empty_value_tag_is_absent() {
        let mut entry = FastaEntry::default();
        classify_fields(&["GN="], &mut entry).unwrap();
        assert_eq!(entry.gene_name, None);
    }

    #[test]
    fn test_classify_empty_token_before_tag_switch_keeps_trailing_space() {
        // A double space before a tag switch is captured as an empty token
        // under the previous field and reappears as a trailing space.
        let mut entry = FastaEntry::default();
        classify_fields(&["Name", "", "OS=Org"], &mut entry).unwrap();
        assert_eq!(entry.protein_name.as_deref(), Some("Name "));
        assert_eq!(entry.organism_name.as_deref(), Some("Org"));
    }

    #[test]
    fn test_parse_header_end_to_end() {
        let parsed = parse_header(
            ">sp|Q8I6R7|ACN2_ACAGO Acanthoscurrin-2 (Fragment) OS=Acanthoscurria gomesiana \
             OX=115339 GN=acantho2 PE=1 SV=1",
        )
        .unwrap();

        let entry = &parsed.entry;
        assert!(!parsed.identifier_recovered);
        assert_eq!(entry.db.as_deref(), Some("sp"));
        assert_eq!(entry.unique_identifier, "Q8I6R7");
        assert_eq!(entry.entry_name.as_deref(), Some("ACN2_ACAGO"));
        assert_eq!(
            entry.protein_name.as_deref(),
            Some("Acanthoscurrin-2 (Fragment)")
        );
        assert_eq!(entry.protein_sequence, "");
    }

    #[test]
    fn test_parse_header_no_optional_fields() {
        let parsed = parse_header(">tr|G3MXS6|G3MXS6_BOVIN").unwrap();
        let entry = &parsed.entry;

        assert_eq!(entry.db.as_deref(), Some("tr"));
        assert_eq!(entry.unique_identifier, "G3MXS6");
        assert_eq!(entry.entry_name.as_deref(), Some("G3MXS6_BOVIN"));
        for field in FastaField::ORDERED {
            assert_eq!(entry.field(field), None);
        }
    }

    #[test]
    fn test_parse_header_bare_marker_is_invalid() {
        assert!(matches!(
            parse_header(">").unwrap_err(),
            FastaError::InvalidHeader { .. }
        ));
    }
}
