#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Decode, Error, FromField, RawSentence,
    sentences::{FixMode, SelectionMode, SystemId},
};

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                        15  16  17  18
///         | | |                         |   |   |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,x.x,h*hh<CR><LF>
/// ```
///
/// Field 18 (system ID) only appears in NMEA 4.11 sentences.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSA {
    /// The framed sentence
    pub sentence: RawSentence,
    /// Selection mode
    pub selection_mode: SelectionMode,
    /// Fix mode
    pub fix_mode: FixMode,
    /// PRN numbers of the satellites used in the fix, empty slots skipped
    pub fix_sats_prn: heapless::Vec<u8, 12>,
    /// Position Dilution of Precision
    pub pdop: Option<f32>,
    /// Horizontal Dilution of Precision
    pub hdop: Option<f32>,
    /// Vertical Dilution of Precision
    pub vdop: Option<f32>,
    /// System ID of the GNSS system used for the fix
    pub system_id: Option<SystemId>,
}

impl Decode for GSA {
    fn decode(sentence: RawSentence) -> Result<Self, Error> {
        let selection_mode = SelectionMode::from_field(&sentence, 0, "selection mode")?;
        let fix_mode = FixMode::from_field(&sentence, 1, "fix mode")?;

        let prns = (2..14)
            .map(|index| Option::<u8>::from_field(&sentence, index, "prn"))
            .collect::<Result<heapless::Vec<_, 12>, _>>()?;

        let pdop = Option::<f32>::from_field(&sentence, 14, "pdop")?;
        let hdop = Option::<f32>::from_field(&sentence, 15, "hdop")?;
        let vdop = Option::<f32>::from_field(&sentence, 16, "vdop")?;
        let system_id = Option::<SystemId>::from_trailing_field(&sentence, 17, "system id")?;

        Ok(GSA {
            sentence,
            selection_mode,
            fix_mode,
            fix_sats_prn: prns.into_iter().flatten().collect(),
            pdop,
            hdop,
            vdop,
            system_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LineEndingMode, framing::frame};

    fn decode(line: &str) -> Result<GSA, Error> {
        GSA::decode(frame(line, LineEndingMode::Optional).unwrap())
    }

    #[test]
    fn test_gsa_decoding() {
        let gsa = decode("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*00").unwrap();

        assert_eq!(gsa.selection_mode, SelectionMode::Automatic);
        assert_eq!(gsa.fix_mode, FixMode::Fix3D);
        assert_eq!(gsa.fix_sats_prn.as_slice(), &[4, 5, 9, 12, 24]);
        assert_eq!(gsa.pdop, Some(2.5));
        assert_eq!(gsa.hdop, Some(1.3));
        assert_eq!(gsa.vdop, Some(2.1));
        assert_eq!(gsa.system_id, None);

        let gsa = decode("$GNGSA,M,1,,,,,,,,,,,,,,,,3*00").unwrap();
        assert_eq!(gsa.selection_mode, SelectionMode::Manual);
        assert_eq!(gsa.fix_mode, FixMode::NoFix);
        assert!(gsa.fix_sats_prn.is_empty());
        assert_eq!(gsa.pdop, None);
        assert_eq!(gsa.system_id, Some(SystemId::Galileo));
    }

    #[test]
    fn test_gsa_errors() {
        let cases = [
            "$GPGSA,X,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*00",
            "$GPGSA,A,4,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*00",
            "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3*00",
            "$GPGSA,A,3,04,05,,09,12,,,999,,,,,2.5,1.3,2.1*00",
            "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1,9*00",
        ];

        for &input in &cases {
            let result = decode(input);
            assert!(result.is_err(), "Failed: {input:?}\n\t{result:?}");
        }

        let err = decode("$GPGSA,A,4,,,,,,,,,,,,,,,*00").unwrap_err();
        assert_eq!(err.to_string(), "GPGSA decode, invalid fix mode '4'");
    }
}
