//! # NMEA 0183 Sentence Framing
//!
//! This module splits a single line of the form `$HHH,D1,D2,...,Dn*CC` into a
//! [`RawSentence`] and validates its checksum.
//!
//! The framer is purely lexical. It does not look at field contents beyond the
//! type tag, which is left to the [dispatcher](crate::dispatch).
//!
//! The parser is configurable to handle variations in:
//! - Line ending requirements (CRLF required, optional or forbidden)

use nom::{
    AsChar, IResult, Parser,
    bytes::complete::{tag, take_till, take_until, take_while_m_n},
    character::complete::char,
    combinator::{all_consuming, eof},
    multi::separated_list1,
    sequence::terminated,
};

use crate::{Error, FramingError, RawSentence, dispatch, sentences::NmeaSentence};

/// Defines how the parser should handle CRLF line endings.
///
/// NMEA 0183 sentences are terminated by a carriage return and line feed
/// (`\r\n`) on the wire, but most line readers strip them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineEndingMode {
    /// CRLF line ending is required and must be present.
    ///
    /// Use this mode when the input comes straight from a serial port or a log
    /// file that keeps its line terminators.
    Required,

    #[default]
    /// CRLF line ending is stripped if present.
    Optional,

    /// CRLF line ending is forbidden and must not be present.
    ///
    /// Use this mode when the line terminator has already been removed and its
    /// presence indicates a framing problem upstream.
    Forbidden,
}

/// A configurable NMEA 0183 sentence parser.
///
/// The parser frames a line, validates its checksum and dispatches it to the
/// decoder registered for its type tag. It holds no state besides its
/// configuration, so one instance can be shared between threads.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{LineEndingMode, Nmea0183Parser, NmeaSentence};
///
/// let parser = Nmea0183Parser::new().line_ending_mode(LineEndingMode::Required);
///
/// let sentence = parser
///     .parse("$GNGGA,203415.000,6325.6138,N,01021.4290,E,1,8,2.42,72.5,M,41.5,M,,*7C\r\n")
///     .unwrap();
/// assert!(matches!(sentence, NmeaSentence::GGA(_)));
///
/// // Missing CRLF
/// assert!(
///     parser
///         .parse("$GNGGA,203415.000,6325.6138,N,01021.4290,E,1,8,2.42,72.5,M,41.5,M,,*7C")
///         .is_err()
/// );
/// ```
#[must_use]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Nmea0183Parser {
    /// Line ending mode for the parser.
    line_ending_mode: LineEndingMode,
}

impl Nmea0183Parser {
    /// Creates a new parser with default settings.
    ///
    /// The default settings are:
    /// - Line ending mode: [`LineEndingMode::Optional`]
    pub fn new() -> Self {
        Nmea0183Parser {
            line_ending_mode: LineEndingMode::Optional,
        }
    }

    /// Sets the line ending mode for the parser.
    pub fn line_ending_mode(mut self, mode: LineEndingMode) -> Self {
        self.line_ending_mode = mode;
        self
    }

    /// Frames a line into a [`RawSentence`] without validating its checksum.
    pub fn frame(&self, line: &str) -> Result<RawSentence, FramingError> {
        frame(line, self.line_ending_mode)
    }

    /// Frames, validates and decodes a single line.
    ///
    /// The checksum is verified before any field is decoded, so a corrupted
    /// sentence never reaches a type-specific decoder.
    pub fn parse(&self, line: &str) -> Result<NmeaSentence, Error> {
        let sentence = self.frame(line)?;
        verify_checksum(&sentence)?;

        log::trace!(
            "framed {} sentence with {} fields",
            sentence.sentence_type(),
            sentence.fields().len()
        );

        dispatch::decode(sentence)
    }
}

/// Splits a line into its type tag, fields and checksum digits.
///
/// The line must start with `$`, contain exactly one `*` and end with two
/// hexadecimal checksum digits. Fields are split on `,` only, so empty fields
/// are kept as empty strings.
pub fn frame(line: &str, line_ending_mode: LineEndingMode) -> Result<RawSentence, FramingError> {
    if !line.is_ascii() {
        return Err(FramingError::NonAscii);
    }

    let body = strip_line_ending(line, line_ending_mode)?;

    let (body, _) = start(body).map_err(|_| FramingError::MissingStart)?;
    if body.matches('*').count() != 1 {
        return Err(FramingError::ChecksumDelimiter);
    }

    let (digits, content) = content(body).map_err(|_| FramingError::ChecksumDelimiter)?;
    let (_, digits) =
        checksum_digits(digits).map_err(|_| FramingError::InvalidChecksum(digits.to_string()))?;

    let (_, tokens) = fields(content).map_err(|_| FramingError::MissingType)?;
    let mut tokens = tokens.into_iter();
    let sentence_type = match tokens.next() {
        Some(sentence_type) if !sentence_type.is_empty() => sentence_type,
        _ => return Err(FramingError::MissingType),
    };

    Ok(RawSentence {
        sentence_type: sentence_type.to_string(),
        fields: tokens.map(str::to_string).collect(),
        checksum: digits.to_string(),
        raw: line.to_string(),
    })
}

/// Recomputes the checksum of a framed sentence and compares it with the
/// supplied digits.
pub fn verify_checksum(sentence: &RawSentence) -> Result<(), Error> {
    let data = sentence
        .raw()
        .strip_prefix('$')
        .and_then(|body| body.split_once('*'))
        .map(|(data, _)| data)
        .ok_or(FramingError::ChecksumDelimiter)?;

    let found = u8::from_str_radix(sentence.checksum(), 16)
        .map_err(|_| FramingError::InvalidChecksum(sentence.checksum().to_string()))?;
    let expected = checksum(data);

    if expected != found {
        log::debug!(
            "{} checksum mismatch, calculated {} but sentence carries {}",
            sentence.sentence_type(),
            format_checksum(expected),
            sentence.checksum()
        );
        return Err(Error::ChecksumMismatch { expected, found });
    }

    Ok(())
}

/// Calculates the NMEA 0183 checksum for the given sentence content.
///
/// The checksum is the XOR of every byte between the `$` prefix and the `*`
/// delimiter, both excluded.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::checksum;
///
/// assert_eq!(checksum("GPXTE,A,A,4.07,L,N"), 0x6D);
/// ```
pub fn checksum(data: &str) -> u8 {
    data.as_bytes()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::format_checksum;
///
/// assert_eq!(format_checksum(0x7C), "7C");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

fn strip_line_ending(line: &str, mode: LineEndingMode) -> Result<&str, FramingError> {
    let terminated_line: IResult<&str, &str> =
        terminated(take_until("\r\n"), (tag("\r\n"), eof)).parse(line);

    let data = match (mode, terminated_line) {
        (LineEndingMode::Forbidden, Ok(_)) | (LineEndingMode::Required, Err(_)) => {
            return Err(mode.line_ending_error());
        }
        (_, Ok((_, data))) => data,
        (_, Err(_)) => line,
    };

    // a lone CR or LF is never a valid terminator
    if data.ends_with(['\r', '\n']) {
        return Err(mode.line_ending_error());
    }

    Ok(data)
}

impl LineEndingMode {
    fn line_ending_error(self) -> FramingError {
        let expected = match self {
            LineEndingMode::Required => "\\r\\n",
            LineEndingMode::Optional => "\\r\\n or no line ending",
            LineEndingMode::Forbidden => "no line ending",
        };

        FramingError::LineEnding { expected }
    }
}

fn start(i: &str) -> IResult<&str, char> {
    char('$').parse(i)
}

fn content(i: &str) -> IResult<&str, &str> {
    terminated(take_until("*"), char('*')).parse(i)
}

fn checksum_digits(i: &str) -> IResult<&str, &str> {
    all_consuming(take_while_m_n(2, 2, AsChar::is_hex_digit)).parse(i)
}

fn fields(i: &str) -> IResult<&str, Vec<&str>> {
    all_consuming(separated_list1(char(','), take_till(|c| c == ','))).parse(i)
}
