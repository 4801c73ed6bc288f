//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent wrapper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent wrapper for [`csfstuff_csf::error::Error`]
    #[error(transparent)]
    #[diagnostic(transparent)]
    CsfError(#[from] csfstuff_csf::error::Error),

    /// A label line carries a comment
    #[error("line {line}: labels must not contain comments, got {content:?}")]
    #[diagnostic(help("labels may contain characters that look like comment markers, so `//` is not allowed in them"))]
    CommentInLabel {
        /// 1-based line number
        line: usize,
        /// The offending line
        content: String,
    },

    /// A label line holds nothing but whitespace
    #[error("line {line}: labels must not be empty")]
    EmptyLabel {
        /// 1-based line number
        line: usize,
    },

    /// A string line is not a single double quoted span
    #[error("line {line}: expected a double quoted string, got {content:?}")]
    MalformedString {
        /// 1-based line number
        line: usize,
        /// The offending line
        content: String,
    },

    /// A string contains an escape sequence other than `\n`, `\\` and `\"`
    #[error("line {line}: unknown escape sequence {sequence:?}")]
    UnknownEscape {
        /// 1-based line number
        line: usize,
        /// The offending sequence, including the backslash
        sequence: String,
    },

    /// A string is not followed by `END`
    #[error("line {line}: END expected, got {content:?}")]
    MissingTerminator {
        /// 1-based line number
        line: usize,
        /// The offending line
        content: String,
    },

    /// The file ends inside an entry
    #[error("line {line}: unexpected end of file inside entry {label:?}")]
    UnterminatedEntry {
        /// 1-based line number of the entry's label
        line: usize,
        /// Label of the incomplete entry
        label: String,
    },

    /// The same label appears twice in one source
    #[error("duplicate entry found, label is {label}")]
    #[diagnostic(help("every label may appear only once per file"))]
    DuplicateLabel {
        /// The repeated label
        label: String,
    },

    /// A label can not be written in a way the reader reads back
    #[error("label {0:?} can not be stored in a STR file")]
    InvalidLabel(String),

    /// A string passed through unescaped contains a line break
    #[error("string of {0:?} contains a raw line break")]
    InvalidText(String),
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
