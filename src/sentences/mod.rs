//! # Sentence Records
//!
//! Typed records for every supported sentence type, the field enumerations they
//! use, and the [`NmeaSentence`] union returned by [`parse`](crate::parse).

mod gga;
mod gll;
mod gsa;
mod gsv;
mod rmc;
mod vtg;
mod zda;

pub use gga::GGA;
pub use gll::GLL;
pub use gsa::GSA;
pub use gsv::GSV;
pub use rmc::RMC;
pub use vtg::VTG;
pub use zda::ZDA;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, FromField, RawSentence, ValidationError};

/// A decoded sentence of any supported type.
///
/// Each variant wraps the record of one sentence type; the talker is not part
/// of the variant, so `GPGGA` and `GNGGA` both decode to [`NmeaSentence::GGA`].
/// The embedded [`RawSentence`] is available through [`NmeaSentence::raw`].
///
/// ## Example
///
/// ```rust
/// use nmea0183_decoder::{NmeaSentence, parse};
///
/// let sentence = parse("$GPZDA,160012.71,11,03,2004,-1,00*7D").unwrap();
/// match &sentence {
///     NmeaSentence::ZDA(zda) => assert_eq!(zda.date.map(|d| d.year()), Some(2004)),
///     _ => unreachable!(),
/// }
/// assert_eq!(sentence.raw().sentence_type(), "GPZDA");
/// ```
///
/// ## Supported Sentence Types
///
/// | Variant      | Sentence Type                                           |
/// |--------------|---------------------------------------------------------|
/// | GGA([`GGA`]) | Global Positioning System Fix Data                      |
/// | GLL([`GLL`]) | Geographic Position - Latitude/Longitude                |
/// | GSA([`GSA`]) | GPS DOP and active satellites                           |
/// | GSV([`GSV`]) | Satellites in View                                      |
/// | RMC([`RMC`]) | Recommended Minimum Navigation Information              |
/// | VTG([`VTG`]) | Track made good and Ground speed                        |
/// | ZDA([`ZDA`]) | Time & Date - UTC, day, month, year and local time zone |
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum NmeaSentence {
    /// Global Positioning System Fix Data
    GGA(GGA),
    /// Geographic Position - Latitude/Longitude
    GLL(GLL),
    /// GPS DOP and active satellites
    GSA(GSA),
    /// Satellites in View
    GSV(GSV),
    /// Recommended Minimum Navigation Information
    RMC(RMC),
    /// Track made good and Ground speed
    VTG(VTG),
    /// Time & Date - UTC, day, month, year and local time zone
    ZDA(ZDA),
}

impl NmeaSentence {
    /// The framed sentence the record was decoded from.
    pub fn raw(&self) -> &RawSentence {
        match self {
            NmeaSentence::GGA(s) => &s.sentence,
            NmeaSentence::GLL(s) => &s.sentence,
            NmeaSentence::GSA(s) => &s.sentence,
            NmeaSentence::GSV(s) => &s.sentence,
            NmeaSentence::RMC(s) => &s.sentence,
            NmeaSentence::VTG(s) => &s.sentence,
            NmeaSentence::ZDA(s) => &s.sentence,
        }
    }
}

macro_rules! impl_from_record {
    ($($variant:ident),*) => ($(
        impl From<$variant> for NmeaSentence {
            fn from(value: $variant) -> Self {
                NmeaSentence::$variant(value)
            }
        }
    )*)
}

impl_from_record!(GGA, GLL, GSA, GSV, RMC, VTG, ZDA);

impl AsRef<RawSentence> for NmeaSentence {
    fn as_ref(&self) -> &RawSentence {
        self.raw()
    }
}

fn invalid_value(sentence: &RawSentence, field: &'static str, token: &str) -> Error {
    ValidationError::InvalidValue {
        sentence_type: sentence.sentence_type().to_string(),
        field,
        value: token.to_string(),
    }
    .into()
}

macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $token:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Parses the single-token wire representation.
            pub fn from_token(token: &str) -> Option<Self> {
                match token {
                    $($token => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// The wire representation.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)*
                }
            }
        }

        impl FromField for $name {
            fn from_field(sentence: &RawSentence, index: usize, name: &'static str) -> Result<Self, Error> {
                let token = sentence.field(index)?;
                Self::from_token(token).ok_or_else(|| invalid_value(sentence, name, token))
            }
        }

        impl FromField for Option<$name> {
            fn from_field(sentence: &RawSentence, index: usize, name: &'static str) -> Result<Self, Error> {
                if sentence.field(index)?.is_empty() {
                    return Ok(None);
                }
                $name::from_field(sentence, index, name).map(Some)
            }
        }
    };
}

field_enum! {
    /// Data validity flag
    pub enum Validity {
        /// A - Valid
        "A" => Valid,
        /// V - Void, navigation receiver warning
        "V" => Void,
    }
}

field_enum! {
    /// FAA Mode Indicator
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_sentence_mixes_and_nmea_variations>
    pub enum FaaMode {
        /// A - Autonomous mode
        "A" => Autonomous,
        /// C - Quectel Querk, "Caution"
        "C" => Caution,
        /// D - Differential Mode
        "D" => Differential,
        /// E - Estimated (dead-reckoning) mode
        "E" => Estimated,
        /// F - RTK Float mode
        "F" => FloatRtk,
        /// M - Manual Input Mode
        "M" => Manual,
        /// N - Data Not Valid
        "N" => DataNotValid,
        /// P - Precise
        "P" => Precise,
        /// R - RTK Integer mode
        "R" => FixedRtk,
        /// S - Simulated Mode
        "S" => Simulator,
        /// U - Quectel Querk, "Unsafe"
        "U" => Unsafe,
    }
}

field_enum! {
    /// Navigation Status
    pub enum NavStatus {
        /// A - Autonomous mode
        "A" => Autonomous,
        /// D - Differential Mode
        "D" => Differential,
        /// E - Estimated (dead-reckoning) mode
        "E" => Estimated,
        /// M - Manual Input Mode
        "M" => Manual,
        /// N - Not Valid
        "N" => NotValid,
        /// S - Simulated Mode
        "S" => Simulator,
        /// V - Valid
        "V" => Valid,
    }
}

field_enum! {
    /// Selection Mode
    pub enum SelectionMode {
        /// A - Automatic, 2D/3D
        "A" => Automatic,
        /// M - Manual, forced to operate in 2D or 3D
        "M" => Manual,
    }
}

field_enum! {
    /// Fix Mode
    pub enum FixMode {
        /// 1 - No fix
        "1" => NoFix,
        /// 2 - 2D Fix
        "2" => Fix2D,
        /// 3 - 3D Fix
        "3" => Fix3D,
    }
}

field_enum! {
    /// NMEA 4.11 System ID
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_nmea_4_11_system_id_and_signal_id>
    pub enum SystemId {
        /// 1 - GPS (GP)
        "1" => Gps,
        /// 2 - GLONASS (GL)
        "2" => Glonass,
        /// 3 - Galileo (GA)
        "3" => Galileo,
        /// 4 - BeiDou (GB/BD)
        "4" => Beidou,
        /// 5 - QZSS (GQ)
        "5" => Qzss,
        /// 6 - NavIC (GI)
        "6" => Navic,
    }
}

/// Quality of the GPS fix
///
/// The set is closed: any other token fails with
/// [`ValidationError::FixQuality`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixQuality {
    /// 0 - Fix not available
    NoFix,
    /// 1 - GPS fix
    GPS,
    /// 2 - Differential GPS fix
    DGPS,
    /// 3 - PPS fix
    PPS,
    /// 4 - Real Time Kinematic
    RTK,
    /// 5 - Float RTK
    FloatRTK,
}

impl FixQuality {
    /// Parses the single-token wire representation.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "0" => Some(FixQuality::NoFix),
            "1" => Some(FixQuality::GPS),
            "2" => Some(FixQuality::DGPS),
            "3" => Some(FixQuality::PPS),
            "4" => Some(FixQuality::RTK),
            "5" => Some(FixQuality::FloatRTK),
            _ => None,
        }
    }

    /// The wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FixQuality::NoFix => "0",
            FixQuality::GPS => "1",
            FixQuality::DGPS => "2",
            FixQuality::PPS => "3",
            FixQuality::RTK => "4",
            FixQuality::FloatRTK => "5",
        }
    }
}

impl FromField for FixQuality {
    fn from_field(sentence: &RawSentence, index: usize, _: &'static str) -> Result<Self, Error> {
        let token = sentence.field(index)?;
        Self::from_token(token).ok_or_else(|| ValidationError::FixQuality(token.to_string()).into())
    }
}

/// Satellite information used in [`GSV`] sentences
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Satellite {
    /// Satellite PRN number
    pub prn: u8,
    /// Elevation in degrees, 90 maximum
    pub elevation: Option<u8>,
    /// Azimuth in degrees true, 000 to 359
    pub azimuth: Option<u16>,
    /// SNR (C/No) 00-99 dB-Hz, empty when not tracking
    pub snr: Option<u8>,
}

impl Satellite {
    /// Decodes the four fields starting at `index`. `None` if the PRN is empty.
    pub(crate) fn from_fields(sentence: &RawSentence, index: usize) -> Result<Option<Self>, Error> {
        let Some(prn) = Option::<u8>::from_field(sentence, index, "prn")? else {
            return Ok(None);
        };

        Ok(Some(Satellite {
            prn,
            elevation: Option::<u8>::from_trailing_field(sentence, index + 1, "elevation")?,
            azimuth: Option::<u16>::from_trailing_field(sentence, index + 2, "azimuth")?,
            snr: Option::<u8>::from_trailing_field(sentence, index + 3, "snr")?,
        }))
    }
}
