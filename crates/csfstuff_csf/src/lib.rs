//! # CSF Format Documentation
//!
//! This crate provides utilities to read and create the **CSF** string tables used by the
//! *Command & Conquer* games of the *Red Alert 2* era. A CSF file maps labels to UTF-16 strings,
//! optionally attaching a block of opaque "extra data" to each label. CSF files are typically
//! identified with the `.csf` extension.
//!
//! ## File Structure
//!
//! A CSF file consists of a header followed by one record per label.
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Magic number           | 4 bytes: " FSC", "CSF " reversed                           |
//! | 0x0004         | Version                | 4 bytes: Fixed value 3                                     |
//! | 0x0008         | Label Count            | 4 bytes: Number of labels in the file                      |
//! | 0x000C         | String Count           | 4 bytes: Number of strings, equal to the label count       |
//! | 0x0010         | Reserved               | 4 bytes: Unused by the games                               |
//! | 0x0014         | Language Code          | 4 bytes: Language of the strings                           |
//!
//! ### Label Record
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Magic number           | 4 bytes: " LBL"                                         |
//! | 0x0004         | String Pairs           | 4 bytes: Number of strings for this label, always 1     |
//! | 0x0008         | Length                 | 4 bytes: Number of bytes in the label                   |
//! | 0x000C         | Data                   | (Length) bytes: the label                               |
//!
//! ### String Record
//!
//! Directly follows its label record.
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Magic number           | 4 bytes: " RTS", or "WRTS" when extra data follows      |
//! | 0x0004         | Length                 | 4 bytes: Number of UTF-16 code units in the string      |
//! | 0x0008         | Data                   | (Length * 2) bytes: UTF-16 with every bit inverted      |
//!
//! For "WRTS" strings a 4 byte length and that many bytes of extra data follow.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.csf`
//! - **Endianness**: Little-endian for all multi-byte integers
//! - Only version 3 with a single string per label is supported
//!

pub mod entry;
pub mod error;
pub mod metadata;
pub mod read;
mod serde;
pub mod types;
pub mod write;

pub use entry::{Entry, ExtraData};
pub use metadata::{embed_metadata, split_metadata, Metadata, MetadataSource, METADATA_LABEL};
pub use read::CsfReader;
pub use write::{write_entries, CsfWriter};
