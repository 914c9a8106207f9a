#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea0183_decoder, Coordinate, Decode, Measurement, RawSentence,
    sentences::FixQuality,
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
///
/// Fields are decoded in wire order: a bad position is reported before a bad
/// fix quality.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Decode)]
pub struct GGA {
    #[nmea(sentence)]
    /// The framed sentence
    pub sentence: RawSentence,
    #[nmea(index = 0)]
    /// Time of fix, as sent
    pub time: String,
    #[nmea(index = 0)]
    /// Time of fix in UTC
    pub fix_time: Option<time::Time>,
    #[nmea(coordinate = 1)]
    /// Latitude, south negative
    pub latitude: Coordinate,
    #[nmea(coordinate = 3)]
    /// Longitude, west negative
    pub longitude: Coordinate,
    #[nmea(index = 5)]
    /// GPS Quality Indicator
    pub fix_quality: FixQuality,
    #[nmea(index = 6)]
    /// Number of satellites in use
    pub satellites: Measurement<u8>,
    #[nmea(index = 7)]
    /// Horizontal Dilution of Precision
    pub hdop: Measurement<f32>,
    #[nmea(index = 8)]
    /// Altitude above/below mean sea level (geoid) in meters
    pub altitude: Measurement<f64>,
    #[nmea(index = 10)]
    /// Geoidal separation in meters, negative when the geoid is below the
    /// WGS-84 ellipsoid
    pub separation: Measurement<f64>,
    #[nmea(index = 12)]
    /// Age of differential GPS data in seconds, empty when DGPS is not used
    pub dgps_age: Measurement<f32>,
    #[nmea(index = 13)]
    /// Differential reference station ID
    pub dgps_station: Measurement<u16>,
}
