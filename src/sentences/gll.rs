#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea0183_decoder, Coordinate, Decode, RawSentence,
    sentences::{FaaMode, Validity},
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Decode)]
pub struct GLL {
    #[nmea(sentence)]
    /// The framed sentence
    pub sentence: RawSentence,
    #[nmea(coordinate = 0)]
    pub latitude: Coordinate,
    #[nmea(coordinate = 2)]
    pub longitude: Coordinate,
    #[nmea(index = 4)]
    pub time: String,
    #[nmea(index = 4)]
    pub fix_time: Option<time::Time>,
    #[nmea(index = 5)]
    /// Status, `V` means the position is not usable
    pub status: Validity,
    #[nmea(index = 6, optional)]
    /// FAA mode indicator, NMEA 2.3 and later
    pub faa_mode: Option<FaaMode>,
}
