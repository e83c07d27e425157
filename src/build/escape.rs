//! Escaping for values and attribute parameters.
//!
//! The exact inverse of the scanner's unescaping. Plain-text escaping
//! deliberately leaves `:` and `,` alone; only structured and attribute
//! values get per-element comma/semicolon treatment before joining. Existing
//! output depends on that asymmetry.

/// Escapes a plain string for placement in a datum line.
///
/// `\` becomes `\\`, CRLF collapses to a bare LF, LF becomes the
/// two-character newline escape, and `;` becomes `\;`. `:` and `,` are left
/// alone.
#[must_use]
pub fn escape(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    s.replace('\\', "\\\\")
        .replace("\r\n", "\n")
        .replace('\n', "\\n")
        .replace(';', "\\;")
}

/// Escapes each element and joins them with `delimiter`.
#[must_use]
pub fn escaped_join(values: &[String], delimiter: char) -> String {
    let escaped: Vec<String> = values.iter().map(|v| escape(v)).collect();
    escaped.join(&delimiter.to_string())
}

/// Escapes an attribute parameter value.
///
/// A value longer than two characters that is already wrapped in a matching
/// pair of quotes keeps its quoting and has interior quotes escaped; anything
/// else goes through [`escape`].
#[must_use]
pub fn escape_param(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let mut chars = s.chars();
    let first = chars.next();
    let last = chars.next_back();
    if s.chars().count() > 2 && first == Some('"') && last == Some('"') {
        return escape_quoted(s);
    }
    escape(s)
}

/// Re-quotes an already-quoted parameter value, escaping interior quotes.
///
/// Inputs shorter than three characters pass through untouched. The trimmed
/// interior also excludes the character just before the closing quote.
fn escape_quoted(s: &str) -> String {
    let count = s.chars().count();
    if count < 3 {
        return s.to_string();
    }
    let interior: String = s.chars().skip(1).take(count - 3).collect();
    format!("\"{}\"", interior.replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_backslash_first() {
        assert_eq!(escape("a\\b"), "a\\\\b");
    }

    #[test]
    fn escapes_newline_and_semicolon_once_each() {
        let out = escape("back\\slash;semi\nnewline");
        assert_eq!(out, "back\\\\slash\\;semi\\nnewline");
    }

    #[test]
    fn crlf_collapses_before_newline_escape() {
        assert_eq!(escape("a\r\nb"), "a\\nb");
    }

    #[test]
    fn colon_and_comma_stay_put() {
        assert_eq!(escape("a:b,c"), "a:b,c");
    }

    #[test]
    fn empty_string_unchanged() {
        assert_eq!(escape(""), "");
    }

    #[test]
    fn join_escapes_each_element() {
        let values = vec!["a;b".to_string(), "c".to_string()];
        assert_eq!(escaped_join(&values, ';'), "a\\;b;c");
        assert_eq!(escaped_join(&values, ','), "a\\;b,c");
    }

    #[test]
    fn param_unquoted_goes_through_escape() {
        assert_eq!(escape_param("plain;x"), "plain\\;x");
    }

    #[test]
    fn param_quoted_trims_one_extra_char() {
        // The interior loses the character before the closing quote.
        assert_eq!(escape_param("\"abc\""), "\"ab\"");
    }

    #[test]
    fn param_quoted_escapes_interior_quotes() {
        assert_eq!(escape_param("\"a\"bc\""), "\"a\\\"b\"");
    }

    #[test]
    fn param_short_strings_unchanged() {
        assert_eq!(escape_param("\"\""), "\"\"");
        assert_eq!(escape_quoted("ab"), "ab");
    }
}
