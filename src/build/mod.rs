//! Encoding of datum entries into folded line text.

pub mod encode;
pub mod escape;
pub mod fold;

pub use encode::{DatumEncoder, EncoderOverrides, encode_datum};
pub use escape::{escape, escape_param, escaped_join};
pub use fold::{FOLD_WIDTH, fold_line};
