//! Escape-aware value scanning.
//!
//! One scanning primitive backs quoted attribute values, bare attribute
//! values, structured value lists, and plain-text unescaping; the callers
//! differ only in the terminator set and [`Terminator`] mode.

use crate::error::{Error, Result};

/// How the scanner treats the terminator it finds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// The terminator closes the value: it is required, it is consumed, and
    /// the remainder starts after it. Reaching end of input without one is
    /// an error.
    Closing,
    /// The terminator delimits the value: it is left as the first character
    /// of the remainder so the caller can tell "more elements follow" from
    /// "list just ended". Reaching end of input without one yields the whole
    /// input as the value and an empty remainder.
    Delimiting,
}

/// Scans a prefix of `line` up to an unescaped terminator.
///
/// Operates on code points, never bytes, so escaping and terminators cannot
/// split a multi-byte character. A backslash escapes the following
/// character, which is emitted literally except for the letter `n`, which
/// decodes to a real newline. A dangling trailing backslash is dropped.
///
/// Returns the decoded value and the unconsumed remainder.
///
/// ## Errors
/// [`Error::UnterminatedQuotedValue`] in [`Terminator::Closing`] mode when
/// no unescaped terminator exists.
pub fn scan_value<'a>(
    line: &'a str,
    terminators: &[char],
    mode: Terminator,
) -> Result<(String, &'a str)> {
    let mut parsed = String::with_capacity(line.len());
    let mut escaped = false;

    for (i, c) in line.char_indices() {
        if escaped {
            parsed.push(if c == 'n' { '\n' } else { c });
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
            continue;
        }
        if terminators.contains(&c) {
            let rest = match mode {
                Terminator::Closing => &line[i + c.len_utf8()..],
                Terminator::Delimiting => &line[i..],
            };
            return Ok((parsed, rest));
        }
        parsed.push(c);
    }

    match mode {
        Terminator::Closing => Err(Error::UnterminatedQuotedValue),
        Terminator::Delimiting => Ok((parsed, "")),
    }
}

/// Splits raw value text on an unescaped delimiter into decoded elements.
///
/// Empty elements are kept: leading and trailing delimiters yield empty
/// strings, and the final unterminated element is accepted as-is.
///
/// ## Errors
/// [`Error::MalformedStructuredValue`] if an element fails to scan.
pub fn split_structured(value: &str, delimiter: char) -> Result<Vec<String>> {
    let mut elements = Vec::new();
    let mut rest = value;

    loop {
        let (element, remainder) = scan_value(rest, &[delimiter], Terminator::Delimiting)
            .map_err(|_| Error::MalformedStructuredValue)?;
        elements.push(element);
        if remainder.is_empty() {
            break;
        }
        // The remainder starts with the delimiter; drop it.
        rest = &remainder[delimiter.len_utf8()..];
    }

    Ok(elements)
}
