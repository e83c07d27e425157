//! Record assembly and encoding.

use serde::{Deserialize, Serialize};

use crate::build::encode::{EncoderOverrides, encode_datum};
use crate::core::datum::Datum;
use crate::error::Result;

/// Field names synthesized by the record encoder and never stored.
const PSEUDO_FIELDS: [&str; 3] = ["BEGIN", "VERSION", "END"];

fn is_pseudo_field(name: &str) -> bool {
    PSEUDO_FIELDS.iter().any(|f| name.eq_ignore_ascii_case(f))
}

/// An ordered collection of datum entries for one contact.
///
/// `BEGIN`/`VERSION`/`END` pseudo-entries are dropped on construction; the
/// encoder synthesizes them. This makes no guarantee of output validity for
/// arbitrary data; vCard 4.0 framing is emitted regardless of what the
/// entries claim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VCard {
    data: Vec<Datum>,
}

impl VCard {
    /// Creates an empty card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a card from datum entries, dropping pseudo-entries.
    #[must_use]
    pub fn from_data(data: impl IntoIterator<Item = Datum>) -> Self {
        let mut card = Self::new();
        for datum in data {
            card.push(datum);
        }
        card
    }

    /// Appends a datum. `BEGIN`/`VERSION`/`END` entries are silently dropped.
    pub fn push(&mut self, datum: Datum) {
        if !is_pseudo_field(&datum.field_name) {
            self.data.push(datum);
        }
    }

    /// Returns the stored entries in order.
    #[must_use]
    pub fn data(&self) -> &[Datum] {
        &self.data
    }

    /// Encodes the card: `BEGIN:VCARD` and `VERSION:4.0` lines, every stored
    /// entry in order, then a closing `END:VCARD` with no trailing newline.
    ///
    /// ## Errors
    /// Returns the first datum encoding failure; no partial output is
    /// produced.
    #[tracing::instrument(skip_all, fields(data_len = self.data.len()))]
    pub fn encode(&self, overrides: Option<&EncoderOverrides>) -> Result<String> {
        let mut output = String::from("BEGIN:VCARD\nVERSION:4.0\n");
        for datum in &self.data {
            // Pseudo-entries cannot normally get here, but stay defensive
            // about deserialized cards.
            if is_pseudo_field(&datum.field_name) {
                continue;
            }
            output.push_str(&encode_datum(datum, overrides)?);
        }
        output.push_str("END:VCARD");
        tracing::trace!(len = output.len(), "encoded card");
        Ok(output)
    }
}
