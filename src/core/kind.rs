//! Field-name based value kind guessing.

use crate::core::datum::{AttrMap, ValueKind};

/// Field names with known value kinds, used to pick a kind while decoding.
///
/// This is an explicit configuration value rather than a process-wide table:
/// callers build (or extend) a table and hand its [`guess`](Self::guess) to
/// [`parse_datum_line`](crate::parse::parse_datum_line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindTable {
    /// Field names whose values split on `;`.
    pub semicolon_structured: Vec<String>,
    /// Field names whose values split on `,`.
    pub comma_structured: Vec<String>,
    /// Field names whose values are base64 binary.
    pub binary: Vec<String>,
}

impl KindTable {
    /// The field names with well-known kinds in vCard 4.0.
    #[must_use]
    pub fn vcard4() -> Self {
        Self {
            semicolon_structured: vec!["ADR".into(), "N".into()],
            comma_structured: vec!["NICKNAME".into()],
            binary: Vec::new(),
        }
    }

    /// Guesses the value kind for a field.
    ///
    /// Matching is exact (the vCard 4.0 entries are upper-case). Unknown
    /// fields fall back to [`ValueKind::PlainText`].
    // TODO: honor VALUE= type hints in attrs to disambiguate fields that can
    // carry URI, data-URI, or raw base64 payloads.
    #[must_use]
    pub fn guess(&self, field_name: &str, _attrs: &AttrMap, _raw_value: &str) -> ValueKind {
        if self.semicolon_structured.iter().any(|f| f == field_name) {
            return ValueKind::SemicolonList;
        }
        if self.comma_structured.iter().any(|f| f == field_name) {
            return ValueKind::CommaList;
        }
        if self.binary.iter().any(|f| f == field_name) {
            return ValueKind::Binary;
        }
        ValueKind::PlainText
    }
}

impl Default for KindTable {
    fn default() -> Self {
        Self::vcard4()
    }
}
