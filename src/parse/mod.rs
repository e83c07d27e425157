//! Parsing of pre-unfolded datum lines.
//!
//! Everything here assumes folded physical lines have already been
//! reconstructed into logical lines.

pub mod line;
pub mod scanner;

pub use line::{parse_attrs, parse_datum_line, split_field_name};
pub use scanner::{Terminator, scan_value, split_structured};
