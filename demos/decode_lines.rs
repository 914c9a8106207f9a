//! Decodes NMEA 0183 sentences read line by line from stdin.
//!
//! ```text
//! RUST_LOG=debug cargo run --example decode_lines < track.nmea
//! ```

use std::io::{self, BufRead};

use nmea0183_decoder::{Error, Nmea0183Parser, NmeaSentence};

fn describe(sentence: &NmeaSentence) -> String {
    match sentence {
        NmeaSentence::GGA(gga) => format!(
            "fix {:?} at {}, {} with {} satellites",
            gga.fix_quality, gga.latitude, gga.longitude, gga.satellites.raw
        ),
        NmeaSentence::RMC(rmc) => format!(
            "{:?} position {}, {} moving {} kn on {} deg",
            rmc.validity, rmc.latitude, rmc.longitude, rmc.speed, rmc.course
        ),
        NmeaSentence::GLL(gll) => format!("position {}, {}", gll.latitude, gll.longitude),
        NmeaSentence::VTG(vtg) => format!("track {:?} speed {:?} kn", vtg.true_track, vtg.speed_knots),
        NmeaSentence::ZDA(zda) => format!("date {:?} time {:?}", zda.date, zda.time),
        NmeaSentence::GSA(gsa) => format!("{:?} using {:?}", gsa.fix_mode, gsa.fix_sats_prn),
        NmeaSentence::GSV(gsv) => format!(
            "{} satellites in view, message {}/{}",
            gsv.satellites_in_view, gsv.message_number, gsv.total_messages
        ),
    }
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let parser = Nmea0183Parser::new();
    let (mut decoded, mut skipped, mut failed) = (0usize, 0usize, 0usize);

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parser.parse(line.trim_end()) {
            Ok(sentence) => {
                decoded += 1;
                log::info!("{}: {}", sentence.raw().sentence_type(), describe(&sentence));
            }
            Err(Error::NotImplemented(sentence_type)) => {
                skipped += 1;
                log::debug!("skipping {sentence_type}");
            }
            Err(err) => {
                failed += 1;
                log::warn!("{err} in {line:?}");
            }
        }
    }

    log::info!("{decoded} decoded, {skipped} skipped, {failed} failed");
    Ok(())
}
