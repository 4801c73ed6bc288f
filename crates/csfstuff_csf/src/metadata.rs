//! Container wide fields and how they travel through a list of entries.
//!
//! The text format has no header, so the metadata of a container is stored as a JSON document in
//! the first entry of a STR file, under the reserved label [`METADATA_LABEL`]:
//!
//! ```text
//! CSFSTUFF:META
//! "{\"lang_code\":0,\"unused\":0}"
//! END
//! ```

use std::io::{Read, Write};

use derive_more::derive::{Constructor, Display};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    entry::Entry,
    error::{Error, Result},
    types::CsfHeader,
};

/// Label of the entry carrying the metadata in a list of entries
pub const METADATA_LABEL: &str = "CSFSTUFF:META";

/// Fields of a CSF header which do not describe its records
#[derive(
    Constructor, Display, Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq,
)]
#[display("language code {language_code}, reserved {reserved:#x}")]
pub struct Metadata {
    /// Language of the strings in the container
    #[serde(rename = "lang_code")]
    pub language_code: u32,

    /// Unused by the games, preserved as is
    #[serde(rename = "unused")]
    pub reserved: u32,
}

impl From<&CsfHeader> for Metadata {
    fn from(header: &CsfHeader) -> Self {
        Self::new(header.language_code, header.reserved)
    }
}

impl Metadata {
    /// Parse the single line JSON form
    pub fn from_json(value: &str) -> Result<Self> {
        serde_json::from_str(value).map_err(|source| Error::InvalidMetadata {
            value: value.to_string(),
            source,
        })
    }

    /// Single line JSON form, as embedded into entries
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Read a metadata document
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut value = String::new();
        reader.read_to_string(&mut value)?;
        Self::from_json(&value)
    }

    /// Write a pretty printed metadata document
    pub fn to_writer<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    /// The reserved entry carrying this metadata
    pub fn to_entry(&self) -> Result<Entry> {
        Ok(Entry::new(METADATA_LABEL, self.to_json()?))
    }
}

/// Where the metadata for a list of entries came from
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MetadataSource {
    /// The entries carried their metadata
    Embedded(Metadata),

    /// No metadata was present, defaults apply
    Default,
}

impl MetadataSource {
    /// The metadata to use
    pub fn metadata(&self) -> Metadata {
        match self {
            MetadataSource::Embedded(metadata) => *metadata,
            MetadataSource::Default => Metadata::default(),
        }
    }

    /// Whether the defaults were used
    pub fn is_default(&self) -> bool {
        matches!(self, MetadataSource::Default)
    }
}

/// Prepend the reserved metadata entry to a list of entries
pub fn embed_metadata(metadata: &Metadata, entries: Vec<Entry>) -> Result<Vec<Entry>> {
    let mut result = Vec::with_capacity(entries.len() + 1);
    result.push(metadata.to_entry()?);
    result.extend(entries);
    Ok(result)
}

/// Remove the reserved metadata entry from the front of a list of entries.
///
/// The entry is only recognised in first position, without it [`MetadataSource::Default`] is
/// returned and the entries are left untouched.
pub fn split_metadata(mut entries: Vec<Entry>) -> Result<(MetadataSource, Vec<Entry>)> {
    match entries.first() {
        Some(first) if first.label == METADATA_LABEL => {
            let metadata = Metadata::from_json(&first.text)?;
            entries.remove(0);
            Ok((MetadataSource::Embedded(metadata), entries))
        }
        _ => {
            debug!("no {} entry in first position", METADATA_LABEL);
            Ok((MetadataSource::Default, entries))
        }
    }
}
