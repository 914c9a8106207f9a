#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea0183_decoder, Decode, Error, FormatError, FromField, RawSentence,
};

/// ZDA - Time & Date - UTC, day, month, year and local time zone
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
///
/// ```text
///         1         2  3  4    5  6
///         |         |  |  |    |  |
///  $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Decode)]
pub struct ZDA {
    #[nmea(sentence)]
    /// The framed sentence
    pub sentence: RawSentence,
    #[nmea(index = 0)]
    /// Time in UTC
    pub time: Option<time::Time>,
    #[nmea(with = date_full_year)]
    /// Date in UTC, from the day, month and four digit year fields
    pub date: Option<time::Date>,
    #[nmea(with = utc_offset)]
    /// Local zone description, offset from UTC
    pub utc_offset: Option<time::UtcOffset>,
}

/// The UTC instant in the local zone, if all three parts are present.
impl From<ZDA> for Option<time::OffsetDateTime> {
    fn from(value: ZDA) -> Self {
        let (Some(time), Some(date), Some(utc_offset)) = (value.time, value.date, value.utc_offset)
        else {
            return None;
        };

        time::OffsetDateTime::new_utc(date, time).checked_to_offset(utc_offset)
    }
}

fn date_full_year(sentence: &RawSentence) -> Result<Option<time::Date>, Error> {
    let day = Option::<u8>::from_field(sentence, 1, "day")?;
    let month = Option::<u8>::from_field(sentence, 2, "month")?;
    let year = Option::<u16>::from_field(sentence, 3, "year")?;

    let (day, month, year) = match (day, month, year) {
        (None, None, None) => return Ok(None),
        (Some(day), Some(month), Some(year)) => (day, month, year),
        _ => return Err(invalid_date(sentence)),
    };

    let month = time::Month::try_from(month).map_err(|_| invalid_date(sentence))?;
    time::Date::from_calendar_date(year as i32, month, day)
        .map(Some)
        .map_err(|_| invalid_date(sentence))
}

fn invalid_date(sentence: &RawSentence) -> Error {
    sentence.decode_error(FormatError::Field {
        field: "date",
        value: sentence
            .fields()
            .get(1..4)
            .map(|fields| fields.join(","))
            .unwrap_or_default(),
    })
}

/// Local zone hours (field 5, may be negative) and minutes (field 6).
fn utc_offset(sentence: &RawSentence) -> Result<Option<time::UtcOffset>, Error> {
    let hours_token = sentence.field(4)?;
    let hours = Option::<i8>::from_field(sentence, 4, "zone hours")?;
    let minutes = Option::<u8>::from_field(sentence, 5, "zone minutes")?;

    let (hours, minutes) = match (hours, minutes) {
        (None, None) => return Ok(None),
        (hours, minutes) => (hours.unwrap_or_default(), minutes.unwrap_or_default()),
    };

    let minutes = i8::try_from(minutes).unwrap_or(i8::MAX);
    let minutes = if hours_token.starts_with('-') { -minutes } else { minutes };

    time::UtcOffset::from_hms(hours, minutes, 0)
        .map(Some)
        .map_err(|_| {
            sentence.decode_error(FormatError::Field {
                field: "zone",
                value: format!("{},{}", hours_token, sentence.field_or_empty(5)),
            })
        })
}
