//! # Error Types
//!
//! This module defines the error types returned by every stage of sentence
//! decoding: framing, checksum validation, dispatch and field decoding.
//!
//! All errors are values. Their [`Display`](std::fmt::Display) output is part of
//! the public contract, since downstream tooling may match on the text.

use thiserror::Error;

/// Coarse classification of an [`Error`].
///
/// Callers processing a stream of mixed sentences usually only care about this
/// classification, e.g. to skip [`ErrorKind::NotImplemented`] and keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The line is not structured as an NMEA 0183 sentence.
    Framing,
    /// The supplied checksum disagrees with the computed one.
    Checksum,
    /// The sentence type tag has no registered decoder.
    NotImplemented,
    /// A field token cannot be parsed under its expected grammar.
    Format,
    /// A field parses but violates a closed enumeration or range.
    Validation,
}

/// Represents all possible errors that can occur while decoding a sentence.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The sentence could not be framed.
    #[error(transparent)]
    Framing(#[from] FramingError),

    /// The checksum of the sentence was corrupt or incorrect.
    ///
    /// Contains both the expected checksum (calculated from the sentence content)
    /// and the checksum found in the sentence.
    #[error("Sentence checksum mismatch [{expected:02X} != {found:02X}]")]
    ChecksumMismatch {
        /// The checksum calculated from the sentence content
        expected: u8,
        /// The checksum found in the sentence
        found: u8,
    },

    /// The sentence type is not recognized by the decoder.
    ///
    /// This is an expected outcome for any unsupported sentence and must not be
    /// treated as fatal when processing a stream.
    #[error("Sentence type '{0}' not implemented")]
    NotImplemented(String),

    /// A field of a specific sentence type could not be parsed.
    #[error("{sentence_type} decode error: {source}")]
    Decode {
        /// Type tag of the sentence being decoded
        sentence_type: String,
        /// The underlying field error
        #[source]
        source: FormatError,
    },

    /// A token could not be parsed outside of any sentence context.
    ///
    /// Decoders always report field failures as [`Error::Decode`]. This
    /// variant is what `?` produces on standalone helpers returning
    /// [`FormatError`], such as [`Coordinate::parse`].
    ///
    /// ```rust
    /// use nmea0183_decoder::{Coordinate, Error};
    ///
    /// fn latitude(value: &str, hemisphere: &str) -> Result<f64, Error> {
    ///     Ok(Coordinate::parse(value, hemisphere)?.degrees())
    /// }
    ///
    /// assert!(matches!(latitude("A", "S"), Err(Error::Format(_))));
    /// ```
    ///
    /// [`Coordinate::parse`]: crate::Coordinate::parse
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A field value is outside of its closed set of allowed values.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Framing(_) => ErrorKind::Framing,
            Error::ChecksumMismatch { .. } => ErrorKind::Checksum,
            Error::NotImplemented(_) => ErrorKind::NotImplemented,
            Error::Decode { .. } | Error::Format(_) => ErrorKind::Format,
            Error::Validation(_) => ErrorKind::Validation,
        }
    }

    /// Returns `true` if the sentence type is simply not supported.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Error::NotImplemented(_))
    }
}

/// Malformed line structure, detected before any field is looked at.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FramingError {
    /// NMEA sentences must be ASCII-only for checksum calculation.
    #[error("Sentence contains non-ASCII characters")]
    NonAscii,

    #[error("Sentence does not start with a '$'")]
    MissingStart,

    #[error("Sentence does not contain single checksum separator")]
    ChecksumDelimiter,

    /// The checksum is not exactly two hexadecimal digits.
    #[error("Sentence checksum must be two hex digits, found '{0}'")]
    InvalidChecksum(String),

    #[error("Sentence has no type tag")]
    MissingType,

    /// The line ending does not match the configured [`LineEndingMode`].
    ///
    /// [`LineEndingMode`]: crate::LineEndingMode
    #[error("Sentence line ending is not allowed, expected {expected}")]
    LineEnding {
        /// Human readable description of the expected ending
        expected: &'static str,
    },
}

/// A token cannot be parsed under its expected grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A DMM coordinate and its hemisphere letter could not be parsed.
    #[error("cannot parse [{value} {hemisphere}], unknown format")]
    Coordinate { value: String, hemisphere: String },

    /// A numeric, time or date field could not be parsed.
    #[error("cannot parse {field} [{value}]")]
    Field { field: &'static str, value: String },

    /// A required field is beyond the end of the field list.
    #[error("field {index} missing, sentence has {count} fields")]
    MissingField { index: usize, count: usize },
}

/// A field parsed lexically but is outside of its closed enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid fix quality [{0}]")]
    FixQuality(String),

    /// An enumerated field holds a value outside of its allowed set.
    #[error("{sentence_type} decode, invalid {field} '{value}'")]
    InvalidValue {
        sentence_type: String,
        field: &'static str,
        value: String,
    },
}
