//! # Derive macro for positional NMEA 0183 sentence decoders
//!
//! `nmea0183-decoder-derive` derives the `Decode` trait of [`nmea0183-decoder`]
//! for record structs whose fields each come from a fixed sentence position.
//!
//! ```rust,ignore
//! #[derive(Decode)]
//! pub struct GLL {
//!     #[nmea(sentence)]
//!     pub sentence: RawSentence,
//!     #[nmea(coordinate = 0)]
//!     pub latitude: Coordinate,
//!     #[nmea(coordinate = 2)]
//!     pub longitude: Coordinate,
//!     #[nmea(index = 4)]
//!     pub time: String,
//!     #[nmea(index = 6, optional)]
//!     pub faa_mode: Option<FaaMode>,
//! }
//! ```
//!
//! Fields are decoded in declaration order, so the first failing field decides
//! the reported error.
//!
//! [`nmea0183-decoder`]: ../nmea0183_decoder/index.html

use generate::generate_decode_impl;
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod generate;
mod meta;

#[proc_macro_derive(Decode, attributes(nmea))]
pub fn derive_decode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_decode_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
