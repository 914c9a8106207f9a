//! # NMEA 0183 Decoder
//!
//! This library decodes single NMEA 0183 sentences of the form
//! `$HHH,D1,D2,...,Dn*CC` into typed, validated records.
//!
//! Decoding runs in four stages, each of which can fail with an [`Error`]:
//!
//! 1. Framing splits the line into a [`RawSentence`].
//! 2. The checksum is recomputed and compared with the supplied digits.
//! 3. The type tag selects a decoder from a fixed [registry](dispatch).
//! 4. The decoder turns the fields into a record such as [`GGA`] or [`RMC`].
//!
//! A tag without a decoder fails with [`Error::NotImplemented`]. Stream
//! consumers should skip those sentences and keep going.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_decoder::{NmeaSentence, parse};
//!
//! let sentence = parse("$GNRMC,220516,A,5133.82,N,00042.24,W,173.8,231.8,130694,004.2,W*6E")
//!     .unwrap();
//!
//! if let NmeaSentence::RMC(rmc) = sentence {
//!     assert_eq!(rmc.speed, 173.8);
//!     assert_eq!(rmc.variation, -4.2);
//!     assert!(rmc.longitude.degrees() < 0.0);
//! }
//!
//! let error = parse("$GPXTE,A,A,4.07,L,N*6D").unwrap_err();
//! assert!(error.is_not_implemented());
//! assert_eq!(error.to_string(), "Sentence type 'GPXTE' not implemented");
//! ```
//!
//! Decoders for new sentence types can be written with `#[derive(Decode)]`:
//!
//! ```rust
//! use nmea0183_decoder::{Coordinate, Decode, LineEndingMode, RawSentence, frame};
//!
//! /// WPL - Waypoint Location
//! #[derive(Debug, Decode)]
//! struct WPL {
//!     #[nmea(sentence)]
//!     sentence: RawSentence,
//!     #[nmea(coordinate = 0)]
//!     latitude: Coordinate,
//!     #[nmea(coordinate = 2)]
//!     longitude: Coordinate,
//!     #[nmea(index = 4)]
//!     name: String,
//! }
//!
//! let sentence = frame("$GPWPL,4917.16,N,12310.64,W,003*65", LineEndingMode::Optional).unwrap();
//! let wpl = WPL::decode(sentence).unwrap();
//! assert_eq!(wpl.name, "003");
//! ```

mod coordinate;
pub mod dispatch;
pub mod error;
mod field;
mod framing;
mod sentence;
pub mod sentences;

pub use coordinate::{Coordinate, Hemisphere};
pub use error::{Error, ErrorKind, FormatError, FramingError, ValidationError};
pub use field::{Decode, FromField, Measurement};
pub use framing::{
    LineEndingMode, Nmea0183Parser, checksum, format_checksum, frame, verify_checksum,
};
pub use nmea0183_decoder_derive::Decode;
pub use sentence::RawSentence;
pub use sentences::{GGA, GLL, GSA, GSV, NmeaSentence, RMC, VTG, ZDA};

/// Frames, validates and decodes a single line with the default
/// [`Nmea0183Parser`].
///
/// A trailing `\r\n` is accepted and kept in [`RawSentence::raw`].
pub fn parse(line: &str) -> Result<NmeaSentence, Error> {
    Nmea0183Parser::default().parse(line)
}

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
