//! # Type Dispatch
//!
//! The registry mapping sentence type tags to their decoders.
//!
//! The registry is built on first use and never changes afterwards, so
//! decoding from several threads at once needs no locking. Lookup is an exact
//! match on the full tag, talker included.

use std::{collections::HashMap, sync::LazyLock};

use crate::{
    Decode, Error, RawSentence,
    sentences::{GGA, GLL, GSA, GSV, NmeaSentence, RMC, VTG, ZDA},
};

/// A decoder turning a framed sentence into a [`NmeaSentence`].
pub type Decoder = fn(RawSentence) -> Result<NmeaSentence, Error>;

fn decode_as<T>(sentence: RawSentence) -> Result<NmeaSentence, Error>
where
    T: Decode + Into<NmeaSentence>,
{
    T::decode(sentence).map(Into::into)
}

static DECODERS: LazyLock<HashMap<&'static str, Decoder>> = LazyLock::new(|| {
    let entries: [(&'static str, Decoder); 16] = [
        ("GPGGA", decode_as::<GGA>),
        ("GNGGA", decode_as::<GGA>),
        ("GPRMC", decode_as::<RMC>),
        ("GNRMC", decode_as::<RMC>),
        ("GPGLL", decode_as::<GLL>),
        ("GNGLL", decode_as::<GLL>),
        ("GPVTG", decode_as::<VTG>),
        ("GNVTG", decode_as::<VTG>),
        ("GPZDA", decode_as::<ZDA>),
        ("GNZDA", decode_as::<ZDA>),
        ("GPGSA", decode_as::<GSA>),
        ("GNGSA", decode_as::<GSA>),
        ("GPGSV", decode_as::<GSV>),
        ("GLGSV", decode_as::<GSV>),
        ("GAGSV", decode_as::<GSV>),
        ("GBGSV", decode_as::<GSV>),
    ];

    entries.into_iter().collect()
});

/// Decodes `sentence` with the decoder registered for its type tag.
///
/// An unregistered tag fails with [`Error::NotImplemented`]. That is an
/// expected outcome when reading a mixed stream, not a fault.
pub fn decode(sentence: RawSentence) -> Result<NmeaSentence, Error> {
    match DECODERS.get(sentence.sentence_type()) {
        Some(decoder) => decoder(sentence),
        None => {
            log::debug!("no decoder registered for {}", sentence.sentence_type());
            Err(Error::NotImplemented(sentence.sentence_type().to_string()))
        }
    }
}

/// Returns `true` if a decoder is registered for `sentence_type`.
pub fn is_supported(sentence_type: &str) -> bool {
    DECODERS.contains_key(sentence_type)
}

/// All registered type tags, sorted.
pub fn supported_types() -> Vec<&'static str> {
    let mut types: Vec<_> = DECODERS.keys().copied().collect();
    types.sort_unstable();
    types
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, LineEndingMode, framing::frame};

    fn sentence(line: &str) -> RawSentence {
        frame(line, LineEndingMode::Optional).unwrap()
    }

    #[test]
    fn test_supported_types() {
        let types = supported_types();
        assert_eq!(types.len(), 16);
        assert_eq!(types.first(), Some(&"GAGSV"));

        for tag in ["GPGGA", "GNGGA", "GPRMC", "GNRMC", "GLGSV", "GNZDA"] {
            assert!(is_supported(tag), "Failed: {tag:?}");
        }

        for tag in ["GPXTE", "gpgga", "GGA", "GPGGA ", "", "PGRME"] {
            assert!(!is_supported(tag), "Failed: {tag:?}");
        }
    }

    #[test]
    fn test_dispatch() {
        let result = decode(sentence("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*00"));
        assert!(matches!(result, Ok(NmeaSentence::VTG(_))), "{result:?}");

        let result = decode(sentence("$GLGSV,1,1,00*00"));
        assert!(matches!(result, Ok(NmeaSentence::GSV(_))), "{result:?}");

        let result = decode(sentence("$GNZDA,,,,,,*00"));
        assert!(matches!(result, Ok(NmeaSentence::ZDA(_))), "{result:?}");
    }

    #[test]
    fn test_not_implemented() {
        let cases = [
            "$GPXTE,A,A,4.07,L,N*00",
            "$GPGGA2,1*00",
            "$PGRME,15.0,M,45.0,M,25.0,M*00",
            "$GQGSV,1,1,00*00",
        ];

        for &input in &cases {
            let err = decode(sentence(input)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::NotImplemented, "Failed: {input:?}");
        }

        let err = decode(sentence("$GPXTE,A,A,4.07,L,N*6D")).unwrap_err();
        assert_eq!(err, Error::NotImplemented("GPXTE".to_string()));
    }
}
