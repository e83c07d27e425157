//! Datum types: one logical `NAME;attrs:value` entry.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Attributes attached to a datum between the field name and its value.
///
/// Keys are unique and each key maps to an ordered, non-empty list of decoded
/// values. Input order is not preserved; encoding sorts attributes for
/// deterministic output.
pub type AttrMap = HashMap<String, Vec<String>>;

/// The kind of a datum value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueKind {
    /// Free text following the colon.
    PlainText,
    /// Comma-delimited list of sub-values.
    CommaList,
    /// Semicolon-delimited list of sub-values.
    SemicolonList,
    /// Binary data, carried on the line as standard base64.
    Binary,
}

/// A datum value payload.
///
/// The payload shape and its kind are one and the same, so a payload that
/// does not match its kind cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    /// Free text, stored decoded.
    PlainText(String),
    /// Ordered comma-list elements, stored decoded.
    CommaList(Vec<String>),
    /// Ordered semicolon-list elements, stored decoded.
    SemicolonList(Vec<String>),
    /// Raw bytes.
    Binary(Vec<u8>),
}

impl Value {
    /// Returns the kind tag for this payload.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::PlainText(_) => ValueKind::PlainText,
            Self::CommaList(_) => ValueKind::CommaList,
            Self::SemicolonList(_) => ValueKind::SemicolonList,
            Self::Binary(_) => ValueKind::Binary,
        }
    }

    /// Returns the value as text if applicable.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::PlainText(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as list elements if applicable.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::CommaList(v) | Self::SemicolonList(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the value as raw bytes if applicable.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(b) => Some(b),
            _ => None,
        }
    }
}

/// A single logical key/value entry in a vCard.
///
/// For `BEGIN:VCARD`, the field name is `BEGIN` and the value is `VCARD`.
/// A datum is built once, by parsing or by a constructor, and is not mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datum {
    /// Field name. Identity is case-insensitive; encoding upper-cases it.
    pub field_name: String,

    /// Attributes between the field name and the value.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attrs: AttrMap,

    /// The typed value payload.
    pub value: Value,
}

impl Datum {
    /// Shortcut for a plain-text datum.
    #[must_use]
    pub fn text(
        field_name: impl Into<String>,
        attrs: AttrMap,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            attrs,
            value: Value::PlainText(value.into()),
        }
    }

    /// A date datum, encoded as plain text in `YYYYMMDD` form.
    #[must_use]
    pub fn date(field_name: impl Into<String>, attrs: AttrMap, date: NaiveDate) -> Self {
        Self::text(field_name, attrs, date.format("%Y%m%d").to_string())
    }

    /// Shortcut for a comma-list datum.
    #[must_use]
    pub fn comma_list(
        field_name: impl Into<String>,
        attrs: AttrMap,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            attrs,
            value: Value::CommaList(values.into_iter().map(Into::into).collect()),
        }
    }

    /// Shortcut for a semicolon-list datum.
    #[must_use]
    pub fn semicolon_list(
        field_name: impl Into<String>,
        attrs: AttrMap,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            attrs,
            value: Value::SemicolonList(values.into_iter().map(Into::into).collect()),
        }
    }

    /// Shortcut for a binary datum.
    #[must_use]
    pub fn binary(field_name: impl Into<String>, attrs: AttrMap, bytes: Vec<u8>) -> Self {
        Self {
            field_name: field_name.into(),
            attrs,
            value: Value::Binary(bytes),
        }
    }

    /// Returns the kind of this datum's value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }
}
