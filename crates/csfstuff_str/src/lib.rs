//! This library handles reading, writing and merging **STR** files, the human editable form of the
//! CSF string tables handled by [`csfstuff_csf`].
//!
//! # STR Format Documentation
//!
//! A STR file is UTF-8 text holding one entry per label:
//!
//! ```text
//! TXT_POWER_DRAIN
//! "Power = %d\nDrain = %d"
//! END
//!
//! // Comments and blank lines may appear between entries
//! TXT_STAND_BY
//! "Please Stand By..."
//! END
//! ```
//!
//! - **Label line**: the label, surrounding whitespace is ignored. It may not contain `//`.
//! - **String line**: the string in double quotes, with `\n`, `\\` and `\"` escape sequences.
//! - **Terminator line**: `END`, optionally followed by a comment.
//!
//! Entries are written with a single blank line between them. The metadata of a CSF file travels
//! as a first entry labelled [`csfstuff_csf::METADATA_LABEL`].
//!

pub mod error;
pub mod escape;
pub mod grammar;
pub mod merge;
pub mod read;
pub mod write;

pub use merge::{merge_entries, StrMerger};
pub use read::StrReader;
pub use write::{write_entries, StrWriter};

/// How strings are converted between their quoted form and [`csfstuff_csf::Entry::text`]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum EscapeMode {
    /// Strings are unescaped when read and escaped when written
    #[default]
    Escape,

    /// Strings keep their escape sequences, as when merging STR files into another STR file
    PassThrough,
}
