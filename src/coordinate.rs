//! # Coordinates
//!
//! Conversion of the `ddmm.mmmm` / `dddmm.mmmm` position fields used throughout
//! NMEA 0183 into signed decimal degrees.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::FormatError;

/// Hemisphere letter accompanying a latitude, longitude or variation field.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    /// N
    North,
    /// S
    South,
    /// E
    East,
    /// W
    West,
}

impl Hemisphere {
    /// Parses a single hemisphere letter.
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "N" => Some(Hemisphere::North),
            "S" => Some(Hemisphere::South),
            "E" => Some(Hemisphere::East),
            "W" => Some(Hemisphere::West),
            _ => None,
        }
    }

    /// `-1.0` for south and west, `1.0` otherwise.
    pub fn sign(self) -> f64 {
        match self {
            Hemisphere::South | Hemisphere::West => -1.0,
            Hemisphere::North | Hemisphere::East => 1.0,
        }
    }
}

/// A latitude or longitude in decimal degrees.
///
/// South and west are negative. The raw degrees and minutes are not kept, the
/// original tokens remain available in the sentence fields.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Coordinate(f64);

impl Coordinate {
    /// Parses a degrees-and-decimal-minutes token and its hemisphere letter.
    ///
    /// The last two whole digits before the decimal point, together with the
    /// fraction, are minutes; every digit before them is degrees.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_decoder::Coordinate;
    ///
    /// let latitude = Coordinate::parse("5133.82", "N").unwrap();
    /// assert!((latitude.degrees() - 51.563667).abs() < 1e-6);
    ///
    /// let longitude = Coordinate::parse("00042.24", "W").unwrap();
    /// assert!(longitude.degrees() < 0.0);
    ///
    /// let error = Coordinate::parse("A", "S").unwrap_err();
    /// assert_eq!(error.to_string(), "cannot parse [A S], unknown format");
    /// ```
    pub fn parse(value: &str, hemisphere: &str) -> Result<Self, FormatError> {
        let unknown_format = || FormatError::Coordinate {
            value: value.to_string(),
            hemisphere: hemisphere.to_string(),
        };

        let hemisphere = Hemisphere::from_letter(hemisphere).ok_or_else(unknown_format)?;
        let dmm = value
            .parse::<f64>()
            .ok()
            .filter(|dmm| dmm.is_finite() && dmm.is_sign_positive())
            .ok_or_else(unknown_format)?;

        let degrees = (dmm / 100.0).trunc();
        let minutes = dmm - degrees * 100.0;

        Ok(Coordinate(hemisphere.sign() * (degrees + minutes / 60.0)))
    }

    /// The signed decimal degrees.
    pub fn degrees(self) -> f64 {
        self.0
    }
}

impl From<Coordinate> for f64 {
    fn from(value: Coordinate) -> Self {
        value.0
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_parse() {
        let cases = [
            ("6325.6138", "N", 63.426897),
            ("01021.4290", "E", 10.357150),
            ("3356.4650", "S", -33.941083),
            ("15124.5567", "E", 151.409278),
            ("5133.82", "N", 51.563667),
            ("00042.24", "W", -0.704),
            ("0000.000", "N", 0.0),
            ("9000.000", "S", -90.0),
            ("18000.000", "W", -180.0),
            ("4404", "N", 44.066667),
            ("12.5", "E", 0.208333),
        ];

        for (value, hemisphere, expected) in cases {
            let coordinate = Coordinate::parse(value, hemisphere).unwrap();
            assert_close(coordinate.degrees(), expected);
        }
    }

    #[test]
    fn test_sign() {
        for value in ["4807.038", "01131.000", "0.5"] {
            assert!(Coordinate::parse(value, "N").unwrap().degrees() >= 0.0);
            assert!(Coordinate::parse(value, "E").unwrap().degrees() >= 0.0);
            assert!(Coordinate::parse(value, "S").unwrap().degrees() < 0.0);
            assert!(Coordinate::parse(value, "W").unwrap().degrees() < 0.0);
        }
    }

    #[test]
    fn test_parse_errors() {
        let cases = [
            ("A", "S"),
            ("A", "E"),
            ("", ""),
            ("4807.038", ""),
            ("4807.038", "X"),
            ("4807.038", "n"),
            ("-4807.038", "N"),
            ("inf", "N"),
            ("NaN", "E"),
        ];

        for (value, hemisphere) in cases {
            let result = Coordinate::parse(value, hemisphere);
            assert_eq!(
                result,
                Err(FormatError::Coordinate {
                    value: value.to_string(),
                    hemisphere: hemisphere.to_string(),
                }),
                "Failed: {value:?} {hemisphere:?}"
            );
        }

        assert_eq!(
            Coordinate::parse("A", "S").unwrap_err().to_string(),
            "cannot parse [A S], unknown format"
        );
    }

    #[test]
    fn test_display() {
        let coordinate = Coordinate::parse("00042.24", "W").unwrap();
        assert_eq!(coordinate.to_string(), "-0.704000");
    }
}
