//! # Raw Sentence
//!
//! The framed, not yet decoded form of a single NMEA 0183 line.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Coordinate, Error, FormatError};

/// A framed NMEA 0183 sentence: `$<type>,<field1>,...,<fieldN>*<checksum>`.
///
/// The fields are kept in wire order. Omitted optional fields are kept as empty
/// strings, so positions stay aligned with the sentence layout.
///
/// A `RawSentence` is created once by the framer and never mutated. Every typed
/// record embeds the `RawSentence` it was decoded from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSentence {
    pub(crate) sentence_type: String,
    pub(crate) fields: Vec<String>,
    pub(crate) checksum: String,
    pub(crate) raw: String,
}

impl RawSentence {
    /// The type tag, talker included (e.g. `GNGGA`).
    pub fn sentence_type(&self) -> &str {
        &self.sentence_type
    }

    /// The talker id (e.g. `GN`), or `None` for proprietary `P...` sentences.
    pub fn talker(&self) -> Option<&str> {
        if self.sentence_type.starts_with('P') {
            None
        } else {
            self.sentence_type.get(..2)
        }
    }

    /// The sentence formatter without the talker (e.g. `GGA`).
    pub fn formatter(&self) -> &str {
        match self.talker() {
            Some(talker) => &self.sentence_type[talker.len()..],
            None => &self.sentence_type,
        }
    }

    /// All fields after the type tag, in wire order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The two checksum digits as they appear in the sentence.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// The original line.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the field at `index`.
    ///
    /// Indexing beyond the supplied fields is a decode error.
    pub fn field(&self, index: usize) -> Result<&str, Error> {
        self.fields.get(index).map(String::as_str).ok_or_else(|| {
            self.decode_error(FormatError::MissingField {
                index,
                count: self.fields.len(),
            })
        })
    }

    /// Returns the field at `index`, or an empty string if the sentence ends
    /// before it.
    ///
    /// Use this for trailing fields added by later protocol revisions.
    pub fn field_or_empty(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", String::as_str)
    }

    /// Parses the coordinate at `index` and its hemisphere letter at `index + 1`.
    pub fn coordinate(&self, index: usize) -> Result<Coordinate, Error> {
        let value = self.field(index)?;
        let hemisphere = self.field(index + 1)?;

        Coordinate::parse(value, hemisphere).map_err(|e| self.decode_error(e))
    }

    /// Wraps a field error with this sentence's type tag.
    pub fn decode_error(&self, source: FormatError) -> Error {
        Error::Decode {
            sentence_type: self.sentence_type.clone(),
            source,
        }
    }
}

impl AsRef<RawSentence> for RawSentence {
    fn as_ref(&self) -> &RawSentence {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(sentence_type: &str, fields: &[&str]) -> RawSentence {
        RawSentence {
            sentence_type: sentence_type.to_string(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
            checksum: "00".to_string(),
            raw: String::new(),
        }
    }

    #[test]
    fn test_talker_and_formatter() {
        let s = sentence("GNGGA", &[]);
        assert_eq!(s.talker(), Some("GN"));
        assert_eq!(s.formatter(), "GGA");

        let s = sentence("PGRME", &[]);
        assert_eq!(s.talker(), None);
        assert_eq!(s.formatter(), "PGRME");

        let s = sentence("G", &[]);
        assert_eq!(s.talker(), None);
        assert_eq!(s.formatter(), "G");
    }

    #[test]
    fn test_field_access() {
        let s = sentence("GPGLL", &["4916.45", "N", ""]);
        assert_eq!(s.field(0), Ok("4916.45"));
        assert_eq!(s.field(2), Ok(""));
        assert_eq!(s.field_or_empty(7), "");

        let err = s.field(3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "GPGLL decode error: field 3 missing, sentence has 3 fields"
        );
    }

    #[test]
    fn test_coordinate() {
        let s = sentence("GPGLL", &["4916.45", "N", "12311.12", "W"]);
        assert!((s.coordinate(0).unwrap().degrees() - 49.274166).abs() < 1e-5);
        assert!(s.coordinate(2).unwrap().degrees() < 0.0);

        let s = sentence("GPGLL", &["4916.45", "X"]);
        assert_eq!(
            s.coordinate(0).unwrap_err().to_string(),
            "GPGLL decode error: cannot parse [4916.45 X], unknown format"
        );
    }
}
