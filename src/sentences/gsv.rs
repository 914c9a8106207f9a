#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Decode, Error, FormatError, FromField, RawSentence, sentences::Satellite};

/// GSV - Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh<CR><LF>
/// ```
///
/// Fields 4 to 7 repeat for up to four satellites. An NMEA 4.11 signal ID may
/// follow the last complete group. A last group of two or three fields is
/// decoded with its missing fields empty.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSV {
    /// The framed sentence
    pub sentence: RawSentence,
    /// Total number of GSV sentences to be transmitted in this group
    pub total_messages: u8,
    /// Sentence number of this GSV message within current group
    pub message_number: u8,
    /// Total number of satellites in view
    pub satellites_in_view: u8,
    /// Satellite information
    pub satellites: heapless::Vec<Satellite, 4>,
    /// Signal ID of the GNSS system used for the fix
    pub signal_id: Option<u8>,
}

const FIRST_SATELLITE: usize = 3;
const SATELLITE_FIELDS: usize = 4;

impl Decode for GSV {
    fn decode(sentence: RawSentence) -> Result<Self, Error> {
        let total_messages = u8::from_field(&sentence, 0, "total messages")?;
        let message_number = u8::from_field(&sentence, 1, "message number")?;
        let satellites_in_view = u8::from_field(&sentence, 2, "satellites in view")?;

        // A single field after the complete groups is the signal ID, two or
        // three leftover fields are a final group cut short.
        let rest = sentence.fields().len().saturating_sub(FIRST_SATELLITE);
        let (complete, leftover) = (rest / SATELLITE_FIELDS, rest % SATELLITE_FIELDS);
        let groups = complete + usize::from(leftover > 1);
        if groups > 4 {
            return Err(sentence.decode_error(FormatError::Field {
                field: "satellites",
                value: groups.to_string(),
            }));
        }

        let mut satellites = heapless::Vec::new();
        for group in 0..groups {
            let index = FIRST_SATELLITE + group * SATELLITE_FIELDS;
            if let Some(satellite) = Satellite::from_fields(&sentence, index)? {
                // at most four groups fit
                let _ = satellites.push(satellite);
            }
        }

        let signal_id = if leftover == 1 {
            let signal_index = FIRST_SATELLITE + complete * SATELLITE_FIELDS;
            match sentence.field(signal_index)? {
                "" => None,
                token => Some(u8::from_str_radix(token, 16).map_err(|_| {
                    sentence.decode_error(FormatError::Field {
                        field: "signal id",
                        value: token.to_string(),
                    })
                })?),
            }
        } else {
            None
        };

        Ok(GSV {
            sentence,
            total_messages,
            message_number,
            satellites_in_view,
            satellites,
            signal_id,
        })
    }
}
