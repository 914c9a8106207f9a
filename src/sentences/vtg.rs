#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Decode, RawSentence, sentences::FaaMode};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8 9
///          |  |  |  |  |  |  |  | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
///
/// The unit letters at 2, 4, 6 and 8 are fixed and not checked.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Decode)]
pub struct VTG {
    #[nmea(sentence)]
    /// The framed sentence
    pub sentence: RawSentence,
    #[nmea(index = 0)]
    /// Course over ground, degrees true
    pub true_track: Option<f32>,
    #[nmea(index = 2)]
    /// Course over ground, degrees magnetic
    pub magnetic_track: Option<f32>,
    #[nmea(index = 4)]
    /// Speed over ground in knots
    pub speed_knots: Option<f32>,
    #[nmea(index = 6)]
    /// Speed over ground in kilometers per hour
    pub speed_kmh: Option<f32>,
    #[nmea(index = 8, optional)]
    pub faa_mode: Option<FaaMode>,
}
