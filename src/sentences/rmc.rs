#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Coordinate, Decode, Error, FromField, Hemisphere, RawSentence,
    sentences::{FaaMode, NavStatus, Validity, invalid_value},
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///                                                            12
///         1         2 3       4 5        6  7   8   9    10 11|  13
///         |         | |       | |        |  |   |   |    |  | |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m,s*hh<CR><LF>
/// ```
///
/// Fields 12 (FAA mode, NMEA 2.3) and 13 (navigation status, NMEA 4.1) are
/// decoded when present.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct RMC {
    /// The framed sentence
    pub sentence: RawSentence,
    /// Time of fix, as sent
    pub time: String,
    /// Time of fix in UTC
    pub fix_time: Option<time::Time>,
    /// Status
    pub validity: Validity,
    /// Latitude, south negative
    pub latitude: Coordinate,
    /// Longitude, west negative
    pub longitude: Coordinate,
    /// Speed over ground in knots, zero when omitted
    pub speed: f64,
    /// Track made good in degrees true, zero when omitted
    pub course: f64,
    /// Date of fix, as sent
    pub date: String,
    /// Date of fix in UTC
    pub fix_date: Option<time::Date>,
    /// Magnetic variation in degrees, west negative, zero when omitted
    pub variation: f64,
    /// FAA mode indicator
    pub faa_mode: Option<FaaMode>,
    /// Navigation status
    pub nav_status: Option<NavStatus>,
}

impl Decode for RMC {
    fn decode(sentence: RawSentence) -> Result<Self, Error> {
        let time = String::from_field(&sentence, 0, "time")?;
        let fix_time = Option::<time::Time>::from_field(&sentence, 0, "time")?;
        let validity = Validity::from_field(&sentence, 1, "validity")?;
        let latitude = sentence.coordinate(2)?;
        let longitude = sentence.coordinate(4)?;
        let speed = zero_if_empty(&sentence, 6, "speed")?;
        let course = zero_if_empty(&sentence, 7, "course")?;
        let date = String::from_field(&sentence, 8, "date")?;
        let fix_date = Option::<time::Date>::from_field(&sentence, 8, "date")?;
        let variation = magnetic_variation(&sentence)?;
        let faa_mode = Option::<FaaMode>::from_trailing_field(&sentence, 11, "faa_mode")?;
        let nav_status = Option::<NavStatus>::from_trailing_field(&sentence, 12, "nav_status")?;

        Ok(RMC {
            sentence,
            time,
            fix_time,
            validity,
            latitude,
            longitude,
            speed,
            course,
            date,
            fix_date,
            variation,
            faa_mode,
            nav_status,
        })
    }
}

fn zero_if_empty(sentence: &RawSentence, index: usize, name: &'static str) -> Result<f64, Error> {
    Option::<f64>::from_field(sentence, index, name).map(Option::unwrap_or_default)
}

/// Magnitude at field 9, negated when the direction at field 10 is `W`.
/// The direction must be `E`, `W` or empty.
fn magnetic_variation(sentence: &RawSentence) -> Result<f64, Error> {
    let magnitude = zero_if_empty(sentence, 9, "variation")?;

    match sentence.field(10)? {
        "" => Ok(magnitude),
        token => match Hemisphere::from_letter(token) {
            Some(Hemisphere::East) => Ok(magnitude),
            Some(Hemisphere::West) => Ok(-magnitude),
            _ => Err(invalid_value(sentence, "variation direction", token)),
        },
    }
}
