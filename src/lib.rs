//! Datum-line codec for vCard-style text records.
//!
//! A datum line is `FIELDNAME;attr=value;...:value`: a field name, optional
//! semicolon-delimited attributes, and a typed value, all subject to
//! backslash escaping, quoting, and 75-code-point line folding. This crate
//! converts between that text form and [`Datum`] values and assembles
//! [`VCard`] records.
//!
//! Folded physical lines must be reconstructed into logical lines before
//! parsing; unfolding is the caller's concern. The escaping and quoting edge
//! cases of the format are preserved as-is rather than corrected toward a
//! stricter reading of RFC 6350.
//!
//! ## Parsing
//!
//! ```rust
//! use vcardenc::{KindTable, Value, parse_datum_line};
//!
//! let kinds = KindTable::vcard4();
//! let datum =
//!     parse_datum_line("N:Gump;Forrest;;;", |f, a, v| kinds.guess(f, a, v)).unwrap();
//! assert_eq!(datum.field_name, "N");
//! assert_eq!(
//!     datum.value,
//!     Value::SemicolonList(vec![
//!         "Gump".into(),
//!         "Forrest".into(),
//!         String::new(),
//!         String::new(),
//!         String::new(),
//!     ])
//! );
//! ```
//!
//! ## Encoding
//!
//! ```rust
//! use vcardenc::{AttrMap, Datum, VCard};
//!
//! let mut card = VCard::new();
//! card.push(Datum::text("FN", AttrMap::new(), "Forrest Gump"));
//! let output = card.encode(None).unwrap();
//! assert!(output.starts_with("BEGIN:VCARD\nVERSION:4.0\n"));
//! assert!(output.ends_with("END:VCARD"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`Datum`, `Value`, `VCard`, `KindTable`)
//! - [`parse`] - Scanner, attribute parser, and datum line decoding
//! - [`build`] - Escaping, folding, and datum/record encoding

pub mod build;
pub mod core;
pub mod error;
pub mod parse;

pub use build::{
    DatumEncoder, EncoderOverrides, FOLD_WIDTH, encode_datum, escape, escape_param, escaped_join,
    fold_line,
};
pub use self::core::{AttrMap, Datum, KindTable, VCard, Value, ValueKind};
pub use error::{Error, Result};
pub use parse::{
    Terminator, parse_attrs, parse_datum_line, scan_value, split_field_name, split_structured,
};
