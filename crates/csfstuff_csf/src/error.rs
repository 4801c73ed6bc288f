//! Error types that can be emitted from this library
//!

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent wrapper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent wrapper for [`binrw::Error`]
    ///
    /// Bad magic numbers and records cut short by the end of the file surface here,
    /// together with the byte position they were found at.
    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    /// Transparent wrapper for [`widestring::error::Utf16Error`]
    #[error(transparent)]
    UTF16Error(#[from] widestring::error::Utf16Error),

    /// Only version 3 containers can be read
    #[error("unsupported CSF format version {version}, only version 3 is supported")]
    UnsupportedVersion {
        /// Version found in the header
        version: u32,
    },

    /// A label owns more than one string
    #[error("label at offset {offset:#x} has {count} string pairs, only 1 is supported")]
    UnsupportedStringPairs {
        /// Byte offset of the label record
        offset: u64,
        /// Number of string pairs declared by the label
        count: u32,
    },

    /// The same label appears twice in one container or source
    #[error("duplicate entry found, label is {label}")]
    #[diagnostic(help("every label may appear only once per file"))]
    DuplicateLabel {
        /// The repeated label
        label: String,
    },

    /// The container metadata could not be parsed
    #[error("invalid CSF metadata {value:?}")]
    InvalidMetadata {
        /// The offending document
        value: String,
        /// Why it was rejected
        #[source]
        source: serde_json::Error,
    },

    /// Transparent wrapper for [`serde_json::Error`] raised by side documents
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    /// Labels are stored one byte per character
    #[error("label {label:?} contains {character:?}, only characters up to U+00FF can be stored")]
    #[diagnostic(help("CSF labels are single byte text"))]
    WideLabel {
        /// The offending label
        label: String,
        /// The first character that does not fit in a byte
        character: char,
    },

    /// A label or string is too long to be described by a 32 bit length
    #[error("{what} of {label:?} is too long to be stored")]
    RecordTooLarge {
        /// Label of the record
        label: String,
        /// Which part of the record overflowed
        what: &'static str,
    },
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
