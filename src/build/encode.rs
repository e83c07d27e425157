//! Datum encoding.

use std::collections::HashMap;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::build::escape::{escape, escaped_join};
use crate::build::fold::fold_line;
use crate::core::datum::{Datum, Value};
use crate::error::Result;

/// An encoder override for one field name.
///
/// Some fields need special-case rendering; an entry in the override table
/// fully replaces the default encoding for its field.
pub type DatumEncoder = Box<dyn Fn(&Datum) -> Result<String>>;

/// Override table keyed by field name, consulted before default encoding.
///
/// Lookup uses the datum's stored field name as-is, before upper-casing.
pub type EncoderOverrides = HashMap<String, DatumEncoder>;

/// Encodes one datum into folded line text ending in a newline.
///
/// Attributes are escaped and sorted by descending escaped name; the
/// ordering is cosmetic but keeps output deterministic. The value rendering
/// follows the payload kind, with list elements escaped individually before
/// joining and binary data emitted as standard base64 with no line breaks.
///
/// ## Errors
/// Returns an error only if an override encoder for the field rejects the
/// datum.
pub fn encode_datum(datum: &Datum, overrides: Option<&EncoderOverrides>) -> Result<String> {
    if let Some(special) = overrides.and_then(|rules| rules.get(&datum.field_name)) {
        return special(datum);
    }

    let mut buf = datum.field_name.to_uppercase();

    let mut attrs: Vec<(String, String)> = datum
        .attrs
        .iter()
        .map(|(name, values)| (escape(name), escaped_join(values, ',')))
        .collect();
    attrs.sort_by(|a, b| b.0.cmp(&a.0));
    for (name, value) in attrs {
        buf.push(';');
        buf.push_str(&name);
        buf.push('=');
        buf.push_str(&value);
    }

    buf.push(':');
    match &datum.value {
        Value::PlainText(text) => buf.push_str(&escape(text)),
        Value::SemicolonList(items) => buf.push_str(&escaped_join(items, ';')),
        Value::CommaList(items) => buf.push_str(&escaped_join(items, ',')),
        Value::Binary(bytes) => buf.push_str(&STANDARD.encode(bytes)),
    }

    Ok(fold_line(&buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::datum::AttrMap;
    use crate::error::Error;

    #[test]
    fn field_name_is_upper_cased() {
        let datum = Datum::text("email", AttrMap::new(), "someone@example.com");
        assert_eq!(
            encode_datum(&datum, None).unwrap(),
            "EMAIL:someone@example.com\n"
        );
    }

    #[test]
    fn attrs_sort_descending_by_name() {
        let mut attrs = AttrMap::new();
        attrs.insert("VALUE".into(), vec!["uri".into()]);
        attrs.insert("TYPE".into(), vec!["home".into(), "voice".into()]);
        let datum = Datum::text("TEL", attrs, "+1-111-555-1212");
        assert_eq!(
            encode_datum(&datum, None).unwrap(),
            "TEL;VALUE=uri;TYPE=home,voice:+1-111-555-1212\n"
        );
    }

    #[test]
    fn plain_text_value_is_escaped() {
        let datum = Datum::text("NOTE", AttrMap::new(), "semi;colon\nnext");
        assert_eq!(
            encode_datum(&datum, None).unwrap(),
            "NOTE:semi\\;colon\\nnext\n"
        );
    }

    #[test]
    fn semicolon_list_joins_escaped_elements() {
        let datum = Datum::semicolon_list("N", AttrMap::new(), ["Gump", "Forrest", "", "", ""]);
        assert_eq!(encode_datum(&datum, None).unwrap(), "N:Gump;Forrest;;;\n");
    }

    #[test]
    fn comma_list_joins_with_commas() {
        let datum = Datum::comma_list("NICKNAME", AttrMap::new(), ["For", "Rest"]);
        assert_eq!(encode_datum(&datum, None).unwrap(), "NICKNAME:For,Rest\n");
    }

    #[test]
    fn binary_value_is_base64() {
        let datum = Datum::binary("PHOTO", AttrMap::new(), b"hello".to_vec());
        assert_eq!(encode_datum(&datum, None).unwrap(), "PHOTO:aGVsbG8=\n");
    }

    #[test]
    fn long_output_is_folded() {
        let datum = Datum::text("NOTE", AttrMap::new(), "X".repeat(100));
        let out = encode_datum(&datum, None).unwrap();
        assert!(out.contains("\n "));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn override_replaces_default_rendering() {
        let mut rules = EncoderOverrides::new();
        rules.insert(
            "X-CUSTOM".into(),
            Box::new(|datum: &Datum| Ok(format!("{}:handled\n", datum.field_name))),
        );
        let datum = Datum::text("X-CUSTOM", AttrMap::new(), "ignored");
        assert_eq!(
            encode_datum(&datum, Some(&rules)).unwrap(),
            "X-CUSTOM:handled\n"
        );
    }

    #[test]
    fn override_failure_propagates() {
        let mut rules = EncoderOverrides::new();
        rules.insert(
            "X-BAD".into(),
            Box::new(|datum: &Datum| {
                Err(Error::Override {
                    field: datum.field_name.clone(),
                    reason: "unsupported".into(),
                })
            }),
        );
        let datum = Datum::text("X-BAD", AttrMap::new(), "v");
        let err = encode_datum(&datum, Some(&rules)).unwrap_err();
        assert!(matches!(err, Error::Override { .. }));
    }

    #[test]
    fn override_lookup_is_case_sensitive() {
        let mut rules = EncoderOverrides::new();
        rules.insert(
            "x-custom".into(),
            Box::new(|_: &Datum| Ok("never\n".into())),
        );
        let datum = Datum::text("X-CUSTOM", AttrMap::new(), "v");
        assert_eq!(encode_datum(&datum, Some(&rules)).unwrap(), "X-CUSTOM:v\n");
    }
}
