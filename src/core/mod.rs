//! Core types: datum entries, value kinds, kind guessing, and records.

pub mod card;
pub mod datum;
pub mod kind;

pub use card::VCard;
pub use datum::{AttrMap, Datum, Value, ValueKind};
pub use kind::KindTable;
