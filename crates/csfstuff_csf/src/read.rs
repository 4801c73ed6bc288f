//! Types for reading CSF files
//!

use binrw::BinRead;
use byteorder::{LittleEndian, ReadBytesExt};
use indexmap::{map::Entry as MapEntry, IndexMap};
use std::io::{self, Read, Seek};
use tracing::{debug, instrument};
use widestring::U16Str;

use crate::{
    entry::{Entry, ExtraData},
    error::{Error, Result},
    metadata::Metadata,
    types::{
        bytes_to_string, flip_code_unit, CsfHeader, LabelHeader, StringHeader, StringKind,
        CSF_VERSION,
    },
};

/// Read exactly `length` bytes without trusting `length` for the allocation
fn read_bytes<R: Read>(reader: &mut R, length: u64) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    reader.by_ref().take(length).read_to_end(&mut data)?;
    if (data.len() as u64) < length {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(data)
}

/// CSF file reader
///
/// Reads every record of the container up front, keeping them in the order they were stored.
///
/// ```no_run
/// use std::io::prelude::*;
///
/// fn list_entries(reader: impl Read + Seek) -> csfstuff_csf::error::Result<()> {
///     let csf = csfstuff_csf::CsfReader::new(reader)?;
///
///     for entry in csf.entries() {
///         println!("{}: {}", &entry.label, &entry.text);
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CsfReader {
    header: CsfHeader,
    entries: IndexMap<String, Entry>,
}

impl CsfReader {
    /// Read a CSF file and parse its entries.
    #[instrument(skip(reader), err)]
    pub fn new<R: Read + Seek>(mut reader: R) -> Result<CsfReader> {
        let header = CsfHeader::read(&mut reader)?;
        if header.version != CSF_VERSION {
            return Err(Error::UnsupportedVersion {
                version: header.version,
            });
        }
        debug!(
            "{} labels, {} strings, language code {}",
            header.labels, header.strings, header.language_code
        );

        let mut entries = IndexMap::new();
        for _ in 0..header.labels {
            let entry = Self::read_entry(&mut reader)?;
            match entries.entry(entry.label.clone()) {
                MapEntry::Occupied(_) => return Err(Error::DuplicateLabel { label: entry.label }),
                MapEntry::Vacant(slot) => {
                    slot.insert(entry);
                }
            }
        }

        Ok(CsfReader { header, entries })
    }

    fn read_entry<R: Read + Seek>(reader: &mut R) -> Result<Entry> {
        let offset = reader.stream_position()?;
        let label_header = LabelHeader::read(reader)?;
        if label_header.string_pairs != 1 {
            return Err(Error::UnsupportedStringPairs {
                offset,
                count: label_header.string_pairs,
            });
        }

        let label = bytes_to_string(&read_bytes(reader, label_header.length.into())?);

        let string_header = StringHeader::read(reader)?;
        let units = read_bytes(reader, u64::from(string_header.length) * 2)?
            .chunks_exact(2)
            .map(|c| flip_code_unit(u16::from_le_bytes([c[0], c[1]])))
            .collect::<Vec<_>>();
        let text = U16Str::from_slice(&units).to_string()?;

        let extra_data = match string_header.kind {
            StringKind::Plain => None,
            StringKind::WithExtraData => {
                let length = reader.read_u32::<LittleEndian>()?;
                Some(read_bytes(reader, length.into())?)
            }
        };

        Ok(Entry {
            label,
            text,
            extra_data,
        })
    }

    /// Number of entries contained in this CSF.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this CSF contains no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The header as it was read
    pub fn header(&self) -> &CsfHeader {
        &self.header
    }

    /// Container wide fields of this file
    pub fn metadata(&self) -> Metadata {
        Metadata::from(&self.header)
    }

    /// Iterate the entries in the order they were stored
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    /// Try to get an entry from this file by its label
    pub fn by_label(&self, label: impl AsRef<str>) -> Option<&Entry> {
        self.entries.get(label.as_ref())
    }

    /// Non-empty extra data of all entries, keyed by label
    pub fn extra_data(&self) -> ExtraData {
        ExtraData::from_entries(self.entries())
    }

    /// Take the entries in the order they were stored
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries.into_values().collect()
    }
}
