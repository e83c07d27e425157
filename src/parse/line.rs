//! Datum line parsing: field name, attributes, and value dispatch.
//!
//! Lines handed to these functions must already be unfolded; reconstructing
//! folded physical lines into one logical line is the caller's job.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::core::datum::{AttrMap, Datum, Value, ValueKind};
use crate::error::{Error, Result};
use crate::parse::scanner::{Terminator, scan_value, split_structured};

/// Splits the field name from the rest of the line.
///
/// The name ends at the first `:` or `;`, whichever comes first; the
/// remainder keeps the delimiter so [`parse_attrs`] can branch on it.
///
/// ## Errors
/// [`Error::MissingValueDelimiter`] if the line has no `:` at all. A `;`
/// with no later `:` is never sufficient.
pub fn split_field_name(line: &str) -> Result<(&str, &str)> {
    let colon = line.find(':').ok_or(Error::MissingValueDelimiter)?;
    let split_at = match line.find(';') {
        Some(semicolon) if semicolon < colon => semicolon,
        _ => colon,
    };
    Ok((&line[..split_at], &line[split_at..]))
}

/// Parses `;name=value` attributes up to the `:` that introduces the value.
///
/// Returns the attribute map and the remaining, still-encoded value text.
/// Attribute values may be quoted or bare; a bare value ends at `;` or `:`,
/// and every decoded value is re-split on commas into the attribute's value
/// list. Duplicate attribute names overwrite.
///
/// ## Errors
/// [`Error::MissingAttributeSection`] if the text starts with neither `;`
/// nor `:`; [`Error::UnterminatedQuotedValue`] for an unclosed quote;
/// [`Error::MalformedAttribute`] for a missing `=`, an empty value list, or
/// an attribute not followed by `;` or `:`.
pub fn parse_attrs(text: &str) -> Result<(AttrMap, &str)> {
    let mut attrs = AttrMap::new();
    if let Some(value) = text.strip_prefix(':') {
        return Ok((attrs, value));
    }
    let Some(mut line) = text.strip_prefix(';') else {
        return Err(Error::MissingAttributeSection);
    };

    loop {
        let eq = line.find('=').ok_or(Error::MalformedAttribute)?;
        let name = &line[..eq];
        line = &line[eq + 1..];

        let (raw_value, rest) = if let Some(quoted) = line.strip_prefix('"') {
            scan_value(quoted, &['"'], Terminator::Closing)?
        } else {
            scan_value(line, &[';', ':'], Terminator::Delimiting)?
        };
        line = rest;
        if raw_value.is_empty() {
            return Err(Error::MalformedAttribute);
        }

        let mut values = Vec::new();
        let mut raw = raw_value.as_str();
        while !raw.is_empty() {
            let (value, remainder) = scan_value(raw, &[','], Terminator::Delimiting)
                .map_err(|_| Error::MalformedAttribute)?;
            if value.is_empty() {
                break;
            }
            raw = remainder.strip_prefix(',').unwrap_or(remainder);
            values.push(value);
        }
        if values.is_empty() {
            return Err(Error::MalformedAttribute);
        }
        attrs.insert(name.to_string(), values);

        match line.chars().next() {
            Some(':') => return Ok((attrs, &line[1..])),
            Some(';') => line = &line[1..],
            _ => return Err(Error::MalformedAttribute),
        }
    }
}

/// Parses one unfolded datum line into a [`Datum`].
///
/// `guess_kind` chooses the value kind from the field name, attributes, and
/// raw value text; [`KindTable::guess`](crate::core::KindTable::guess) is
/// the usual choice.
///
/// ## Errors
/// Propagates the first field-name, attribute, structured-value, or base64
/// failure; no partial datum is produced.
#[tracing::instrument(skip_all, fields(line_len = line.len()))]
pub fn parse_datum_line<F>(line: &str, guess_kind: F) -> Result<Datum>
where
    F: FnOnce(&str, &AttrMap, &str) -> ValueKind,
{
    let (field_name, rest) = split_field_name(line)?;
    let (attrs, raw_value) = parse_attrs(rest)?;
    let kind = guess_kind(field_name, &attrs, raw_value);
    tracing::trace!(field_name, ?kind, "split datum line");

    let value = match kind {
        ValueKind::PlainText => {
            // No terminators: a full unescaping pass over the value.
            let (text, _) = scan_value(raw_value, &[], Terminator::Delimiting)?;
            Value::PlainText(text)
        }
        ValueKind::CommaList => Value::CommaList(split_structured(raw_value, ',')?),
        ValueKind::SemicolonList => Value::SemicolonList(split_structured(raw_value, ';')?),
        ValueKind::Binary => Value::Binary(STANDARD.decode(raw_value)?),
    };

    Ok(Datum {
        field_name: field_name.to_string(),
        attrs,
        value,
    })
}
