use crate::{
    Error, ErrorKind, LineEndingMode, Nmea0183Parser, NmeaSentence, checksum, format_checksum,
    parse, sentences::FixQuality,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

/// Frames `body` as a sentence with a correct checksum.
fn with_checksum(body: &str) -> String {
    format!("${body}*{}", format_checksum(checksum(body)))
}

#[test]
fn test_gga_fix() {
    let line = "$GNGGA,203415.000,6325.6138,N,01021.4290,E,1,8,2.42,72.5,M,41.5,M,,*7C";

    let Ok(NmeaSentence::GGA(gga)) = parse(line) else {
        panic!("expected GGA");
    };

    assert_eq!(gga.fix_quality, FixQuality::GPS);
    assert_close(gga.latitude.degrees(), 63.4269);
    assert_close(gga.longitude.degrees(), 10.3572);
    assert!(gga.longitude.degrees() > 0.0);
    assert_eq!(gga.altitude.raw, "72.5");
}

#[test]
fn test_gga_bad_latitude() {
    let err = parse("$GNGGA,034225.077,A,S,15124.5567,E,1,03,9.7,-25.0,M,21.0,M,,0000*24")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "GNGGA decode error: cannot parse [A S], unknown format"
    );
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn test_gga_bad_longitude() {
    let err = parse("$GNGGA,034225.077,3356.4650,S,A,E,1,03,9.7,-25.0,M,21.0,M,,0000*12")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "GNGGA decode error: cannot parse [A E], unknown format"
    );
}

#[test]
fn test_gga_bad_fix_quality() {
    let err = parse("$GNGGA,034225.077,3356.4650,S,15124.5567,E,10,03,9.7,-25.0,M,21.0,M,,0000*7F")
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid fix quality [10]");
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn test_fix_quality_independent_of_other_fields() {
    let others = [
        "034225.077,3356.4650,S,15124.5567,E,{q},03,9.7,-25.0,M,21.0,M,,0000",
        ",0000.000,N,00000.000,W,{q},,,,M,,M,,",
        "220516,9000.0,S,18000.0,W,{q},12,99.9,100000,M,-99,M,1.5,1023",
    ];

    for template in others {
        for quality in ["0", "1", "2", "3", "4", "5"] {
            let line = with_checksum(&format!("GPGGA,{}", template.replace("{q}", quality)));
            let result = parse(&line);
            assert!(
                matches!(result, Ok(NmeaSentence::GGA(_))),
                "Failed: {line:?}\n\t{result:?}"
            );
        }

        for quality in ["6", "7", "8", "10", "", "x"] {
            let line = with_checksum(&format!("GPGGA,{}", template.replace("{q}", quality)));
            let result = parse(&line);
            assert_eq!(
                result.map_err(|e| e.to_string()).err(),
                Some(format!("Invalid fix quality [{quality}]")),
                "Failed: {line:?}"
            );
        }
    }
}

#[test]
fn test_rmc() {
    let line = "$GNRMC,220516,A,5133.82,N,00042.24,W,173.8,231.8,130694,004.2,W*6E";

    let Ok(NmeaSentence::RMC(rmc)) = parse(line) else {
        panic!("expected RMC");
    };

    assert_eq!(rmc.speed, 173.8);
    assert_eq!(rmc.course, 231.8);
    assert_eq!(rmc.variation, -4.2);
    assert!(rmc.longitude.degrees() < 0.0);

    let line = "$GNRMC,142754.0,A,4302.539570,N,07920.379823,W,0.0,,070617,0.0,E,A*21";

    let Ok(NmeaSentence::RMC(rmc)) = parse(line) else {
        panic!("expected RMC");
    };

    assert_eq!(rmc.speed, 0.0);
    assert_eq!(rmc.course, 0.0);
    assert_eq!(rmc.variation, 0.0);
    assert_eq!(rmc.date, "070617");

    let line = "$GPRMC,220516,A,5133.82,N,00042.24,W,173.8,231.8,130694,004.2,W*70";
    assert!(matches!(parse(line), Ok(NmeaSentence::RMC(_))));
}

#[test]
fn test_rmc_bad_validity() {
    let err = parse("$GNRMC,220516,D,5133.82,N,00042.24,W,173.8,231.8,130694,004.2,W*6B")
        .unwrap_err();
    assert_eq!(err.to_string(), "GNRMC decode, invalid validity 'D'");

    for validity in ["", "a", "v", "X", "AV"] {
        let line = with_checksum(&format!(
            "GNRMC,220516,{validity},5133.82,N,00042.24,W,173.8,231.8,130694,004.2,W"
        ));
        let err = parse(&line).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation, "Failed: {validity:?}");
    }
}

#[test]
fn test_not_implemented() {
    let err = parse("$GPXTE,A,A,4.07,L,N*6D").unwrap_err();
    assert_eq!(err.to_string(), "Sentence type 'GPXTE' not implemented");
    assert!(err.is_not_implemented());

    let cases = [
        "GPXTE,A,A,4.07,L,N",
        "GPGGAX,203415.000",
        "PGRME,15.0,M,45.0,M,25.0,M",
        "GPHDT,274.07,T",
        "GNGGA2",
    ];

    for &body in &cases {
        let err = parse(&with_checksum(body)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotImplemented, "Failed: {body:?}");
    }
}

#[test]
fn test_checksum_mismatch() {
    let lines = [
        "$GNGGA,203415.000,6325.6138,N,01021.4290,E,1,8,2.42,72.5,M,41.5,M,,*7C",
        "$GNGGA,034225.077,A,S,15124.5567,E,1,03,9.7,-25.0,M,21.0,M,,0000*24",
        "$GNGGA,034225.077,3356.4650,S,15124.5567,E,10,03,9.7,-25.0,M,21.0,M,,0000*7F",
        "$GNRMC,220516,D,5133.82,N,00042.24,W,173.8,231.8,130694,004.2,W*6B",
        "$GPXTE,A,A,4.07,L,N*6D",
    ];

    for line in lines {
        let (body, digits) = line.split_once('*').unwrap();
        let supplied = u8::from_str_radix(digits, 16).unwrap();

        for wrong in [supplied ^ 0x01, supplied ^ 0x80, supplied.wrapping_add(0x11)] {
            let corrupt = format!("{body}*{}", format_checksum(wrong));
            let err = parse(&corrupt).unwrap_err();
            assert_eq!(
                err,
                Error::ChecksumMismatch {
                    expected: supplied,
                    found: wrong
                },
                "Failed: {corrupt:?}"
            );
        }
    }
}

#[test]
fn test_raw_echo() {
    let lines = [
        "$GNGGA,203415.000,6325.6138,N,01021.4290,E,1,8,2.42,72.5,M,41.5,M,,*7C",
        "$GNRMC,220516,A,5133.82,N,00042.24,W,173.8,231.8,130694,004.2,W*6E",
        "$GNRMC,142754.0,A,4302.539570,N,07920.379823,W,0.0,,070617,0.0,E,A*21",
        "$GPZDA,160012.71,11,03,2004,-1,00*7D",
    ];

    for line in lines {
        let sentence = parse(line).unwrap();
        let raw = sentence.raw();

        let (body, digits) = line.split_once('*').unwrap();
        let mut tokens = body.trim_start_matches('$').split(',');

        assert_eq!(raw.raw(), line);
        assert_eq!(raw.checksum(), digits);
        assert_eq!(Some(raw.sentence_type()), tokens.next());
        assert!(raw.fields().iter().map(String::as_str).eq(tokens));
    }
}

#[test]
fn test_line_endings() {
    let line = "$GNGGA,203415.000,6325.6138,N,01021.4290,E,1,8,2.42,72.5,M,41.5,M,,*7C\r\n";

    let sentence = parse(line).unwrap();
    assert_eq!(sentence.raw().raw(), line);

    let strict = Nmea0183Parser::new().line_ending_mode(LineEndingMode::Forbidden);
    let err = strict.parse(line).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Framing);

    let required = Nmea0183Parser::new().line_ending_mode(LineEndingMode::Required);
    assert!(required.parse(line).is_ok());
    assert!(required.parse(line.trim_end()).is_err());
}

#[test]
fn test_framing_errors() {
    let cases = [
        "",
        "GNGGA,203415.000*00",
        "$GNGGA,203415.000",
        "$GNGGA,203415.000*7C*7C",
        "$GNGGA,203415.000*7",
        "$*00",
    ];

    for &input in &cases {
        let err = parse(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Framing, "Failed: {input:?}\n\t{err:?}");
    }
}

#[test]
fn test_concurrent_parsing() {
    let lines = [
        "$GNGGA,203415.000,6325.6138,N,01021.4290,E,1,8,2.42,72.5,M,41.5,M,,*7C",
        "$GNRMC,220516,A,5133.82,N,00042.24,W,173.8,231.8,130694,004.2,W*6E",
        "$GPXTE,A,A,4.07,L,N*6D",
    ];

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    lines
                        .iter()
                        .map(|line| parse(line).map(|s| s.raw().sentence_type().to_string()))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            let results = handle.join().unwrap();
            assert_eq!(results[0].as_deref(), Ok("GNGGA"));
            assert_eq!(results[1].as_deref(), Ok("GNRMC"));
            assert!(results[2].as_ref().is_err_and(Error::is_not_implemented));
        }
    });
}

#[cfg(feature = "serde")]
#[test]
fn test_serde() {
    let sentence =
        parse("$GNGGA,203415.000,6325.6138,N,01021.4290,E,1,8,2.42,72.5,M,41.5,M,,*7C").unwrap();

    let json = serde_json::to_value(&sentence).unwrap();
    assert_eq!(json["GGA"]["fixQuality"], "GPS");
    assert_eq!(json["GGA"]["altitude"]["raw"], "72.5");
    assert_eq!(json["GGA"]["sentence"]["sentenceType"], "GNGGA");

    let decoded: NmeaSentence = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, sentence);
}
