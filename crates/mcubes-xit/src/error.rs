//! Errors of the `.xit` serializer.

use mcubes_core::McError;
use thiserror::Error;

/// Failure while reading or writing a `.xit` file.
#[derive(Error, Debug)]
pub enum XitError {
    /// An expected start tag never appeared.
    #[error("missing start tag: <{0}>")]
    MissingStartTag(String),

    /// An expected end tag never appeared.
    #[error("missing end tag: </{0}>")]
    MissingEndTag(String),

    /// Element text did not hold the expected number(s).
    #[error("{context}: expected a number, found '{text}'")]
    NonNumeric { context: String, text: String },

    /// An index in the file lies outside its declared range.
    #[error("{context}: illegal index {value}")]
    IndexOutOfRange { context: String, value: i64 },

    /// The `version` element names no supported version.
    #[error("unknown .xit version: {0}")]
    UnknownVersion(String),

    /// The polytope dimension is not 3.
    #[error("polytope dimension in .xit file is {0}; this library only reads dimension 3")]
    BadPolyDimension(i64),

    /// The simplex dimension is neither 2 nor 3.
    #[error("simplex dimension in .xit file is {0}; expected 2 or 3")]
    BadSimplexDimension(i64),

    /// Malformed document structure.
    #[error("{0}")]
    Malformed(String),

    /// Error from the underlying XML parser.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure raised by the table being populated.
    #[error(transparent)]
    Table(#[from] McError),
}

/// A specialized Result type for `.xit` operations.
pub type XitResult<T> = std::result::Result<T, XitError>;
