//! # Field Decoding
//!
//! Positional decoding of individual sentence fields into typed values.
//!
//! Every decoder reads its fields through [`FromField`], which turns the token at
//! a given position of a [`RawSentence`] into a value and reports failures
//! prefixed with the sentence type. Whole records implement [`Decode`], either
//! by hand or with `#[derive(Decode)]`.

use std::str::FromStr;

use nom::{
    AsChar, IResult, Parser,
    bytes::complete::take_while_m_n,
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res, opt},
    sequence::preceded,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, FormatError, RawSentence};

/// Decodes a complete typed record from a framed sentence.
///
/// Implementations must not assume trailing fields exist: every access goes
/// through [`RawSentence::field`] or [`FromField`], which report missing fields
/// as errors.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{Decode, Error, FromField, RawSentence};
///
/// struct Heading {
///     sentence: RawSentence,
///     degrees: Option<f32>,
/// }
///
/// impl Decode for Heading {
///     fn decode(sentence: RawSentence) -> Result<Self, Error> {
///         let degrees = Option::<f32>::from_field(&sentence, 0, "degrees")?;
///         Ok(Heading { sentence, degrees })
///     }
/// }
/// ```
pub trait Decode: Sized {
    /// Decodes `sentence` into `Self`, keeping `sentence` inside the record.
    fn decode(sentence: RawSentence) -> Result<Self, Error>;
}

/// Trait for values decoded from a single sentence position.
///
/// `name` is the field name used in error messages.
pub trait FromField: Sized {
    /// Decodes the field at `index`. A missing field is an error.
    fn from_field(sentence: &RawSentence, index: usize, name: &'static str)
    -> Result<Self, Error>;

    /// Decodes the field at `index`, or returns the default value if the
    /// sentence ends before it.
    ///
    /// Use this for trailing fields that older receivers do not emit.
    fn from_trailing_field(
        sentence: &RawSentence,
        index: usize,
        name: &'static str,
    ) -> Result<Self, Error>
    where
        Self: Default,
    {
        if index < sentence.fields().len() {
            Self::from_field(sentence, index, name)
        } else {
            Ok(Self::default())
        }
    }
}

impl FromField for String {
    fn from_field(sentence: &RawSentence, index: usize, _: &'static str) -> Result<Self, Error> {
        sentence.field(index).map(str::to_string)
    }
}

/// Parses an optional numeric token. Empty tokens are `None`.
fn parse_number<T: FromStr>(
    sentence: &RawSentence,
    index: usize,
    name: &'static str,
) -> Result<Option<T>, Error> {
    let token = sentence.field(index)?;
    if token.is_empty() {
        return Ok(None);
    }

    token.parse().map(Some).map_err(|_| {
        sentence.decode_error(FormatError::Field {
            field: name,
            value: token.to_string(),
        })
    })
}

macro_rules! impl_number_field {
    ($($t:ty),*) => ($(
        impl FromField for Option<$t> {
            fn from_field(sentence: &RawSentence, index: usize, name: &'static str) -> Result<Self, Error> {
                parse_number(sentence, index, name)
            }
        }

        impl FromField for $t {
            fn from_field(sentence: &RawSentence, index: usize, name: &'static str) -> Result<Self, Error> {
                parse_number(sentence, index, name)?.ok_or_else(|| {
                    sentence.decode_error(FormatError::Field {
                        field: name,
                        value: String::new(),
                    })
                })
            }
        }
    )*)
}

impl_number_field!(i8, u8, u16, u32, f32, f64);

/// A numeric field kept both as its original token and as a parsed value.
///
/// `value` is `None` when the token is empty.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement<T> {
    /// The token exactly as it appears in the sentence
    pub raw: String,
    /// The parsed value
    pub value: Option<T>,
}

impl<T> Default for Measurement<T> {
    fn default() -> Self {
        Measurement {
            raw: String::new(),
            value: None,
        }
    }
}

impl<T> FromField for Measurement<T>
where
    Option<T>: FromField,
{
    fn from_field(sentence: &RawSentence, index: usize, name: &'static str) -> Result<Self, Error> {
        Ok(Measurement {
            raw: sentence.field(index)?.to_string(),
            value: Option::<T>::from_field(sentence, index, name)?,
        })
    }
}

impl FromField for Option<time::Time> {
    fn from_field(sentence: &RawSentence, index: usize, name: &'static str) -> Result<Self, Error> {
        let token = sentence.field(index)?;
        if token.is_empty() {
            return Ok(None);
        }

        parse_time(token).map(Some).ok_or_else(|| {
            sentence.decode_error(FormatError::Field {
                field: name,
                value: token.to_string(),
            })
        })
    }
}

impl FromField for Option<time::Date> {
    fn from_field(sentence: &RawSentence, index: usize, name: &'static str) -> Result<Self, Error> {
        let token = sentence.field(index)?;
        if token.is_empty() {
            return Ok(None);
        }

        parse_date(token).map(Some).ok_or_else(|| {
            sentence.decode_error(FormatError::Field {
                field: name,
                value: token.to_string(),
            })
        })
    }
}

fn two_digits(i: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, AsChar::is_dec_digit), str::parse::<u8>).parse(i)
}

fn hhmmss(i: &str) -> IResult<&str, (u8, u8, u8, Option<&str>)> {
    all_consuming((
        two_digits,
        two_digits,
        two_digits,
        opt(preceded(char('.'), digit1)),
    ))
    .parse(i)
}

/// Parses `hhmmss` with an optional fraction of a second (`hhmmss.sss`).
fn parse_time(token: &str) -> Option<time::Time> {
    let (_, (hour, minute, second, fraction)) = hhmmss(token).ok()?;

    let nanosecond = match fraction {
        Some(fraction) => {
            let digits = &fraction[..fraction.len().min(9)];
            let scale = 10u32.pow(9 - digits.len() as u32);
            digits.parse::<u32>().ok()? * scale
        }
        None => 0,
    };

    time::Time::from_hms_nano(hour, minute, second, nanosecond).ok()
}

/// Parses a `ddmmyy` date. Years 83 to 99 are 19xx, all others 20xx.
fn parse_date(token: &str) -> Option<time::Date> {
    let (_, (day, month, year)) = all_consuming((two_digits, two_digits, two_digits))
        .parse(token)
        .ok()?;

    let year = match year {
        83..=99 => 1900 + year as i32,
        _ => 2000 + year as i32,
    };
    let month = time::Month::try_from(month).ok()?;

    time::Date::from_calendar_date(year, month, day).ok()
}
