//! Error types for datum parsing and encoding.

use thiserror::Error;

/// Result type for vcardenc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// An error produced while parsing or encoding a datum line.
///
/// Every variant is a deterministic outcome of malformed input or a rejected
/// encode; none are transient, and nothing is logged. Callers get the error
/// back immediately with no local recovery.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// No `:` was found anywhere in the line.
    #[error("could not find a colon while parsing a datum line")]
    MissingValueDelimiter,

    /// A closing quote or terminator was required but never found.
    #[error("failed to parse the end of a quoted value")]
    UnterminatedQuotedValue,

    /// A structured value element failed to parse.
    #[error("failed to extract next value from structured value list")]
    MalformedStructuredValue,

    /// The text after the field name started with neither `;` nor `:`.
    #[error("attribute section suggested by non-immediate colon, but leading semicolon not found")]
    MissingAttributeSection,

    /// An attribute was missing its `=`, decoded to an empty value list, or
    /// was not followed by `;` or `:`.
    #[error("attribute appears malformed")]
    MalformedAttribute,

    /// A binary value was not valid standard base64.
    #[error("invalid base64 in binary value")]
    InvalidBinary(#[from] base64::DecodeError),

    /// A field-specific override encoder rejected the datum.
    #[error("override encoder rejected field {field}: {reason}")]
    Override {
        /// Field name the override was registered for.
        field: String,
        /// Reason reported by the override.
        reason: String,
    },
}
