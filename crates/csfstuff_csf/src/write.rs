//! Types for writing CSF files
//!

use binrw::BinWrite;
use byteorder::{LittleEndian, WriteBytesExt};
use std::collections::HashSet;
use std::io::{Cursor, Seek, Write};
use tracing::{instrument, trace};
use widestring::U16String;

use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::metadata::Metadata;
use crate::types::{
    flip_code_unit, string_to_bytes, CsfHeader, LabelHeader, StringHeader, StringKind,
};

/// CSF file generator
///
/// Records are buffered until [`CsfWriter::finish`], where the header with the final counts is
/// written ahead of them.
///
/// ```
/// # fn doit() -> csfstuff_csf::error::Result<()>
/// # {
/// use csfstuff_csf::{CsfWriter, Entry, Metadata};
///
/// // We use a buffer here, though you'd normally use a `File`
/// let mut csf = CsfWriter::new(std::io::Cursor::new(Vec::new()), Metadata::default());
///
/// csf.add_entry(&Entry::new("TXT_HELLO", "Hi"))?;
///
/// let data = csf.finish()?.into_inner();
/// assert_eq!(data.len(), 24 + 12 + 9 + 8 + 4);
/// # Ok(())
/// # }
/// # doit().unwrap();
/// ```
pub struct CsfWriter<W: Write + Seek> {
    inner: W,
    header: CsfHeader,
    records: Cursor<Vec<u8>>,
    labels: HashSet<String>,
}

impl<W: Write + Seek> CsfWriter<W> {
    /// Initializes the container with the given metadata
    pub fn new(inner: W, metadata: Metadata) -> CsfWriter<W> {
        CsfWriter {
            inner,
            header: CsfHeader {
                reserved: metadata.reserved,
                language_code: metadata.language_code,
                ..Default::default()
            },
            records: Cursor::new(Vec::new()),
            labels: HashSet::new(),
        }
    }

    /// Number of entries added so far
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether no entry was added yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append an entry, using its extra data if it carries any
    #[instrument(skip_all, fields(label = %entry.label), err)]
    pub fn add_entry(&mut self, entry: &Entry) -> Result<()> {
        if self.labels.contains(&entry.label) {
            return Err(Error::DuplicateLabel {
                label: entry.label.clone(),
            });
        }

        let Some(label) = string_to_bytes(&entry.label) else {
            let wide = entry.label.chars().find(|&c| u8::try_from(c).is_err());
            return Err(Error::WideLabel {
                label: entry.label.clone(),
                character: wide.unwrap_or(char::REPLACEMENT_CHARACTER),
            });
        };
        LabelHeader {
            length: Self::length(entry, "label", label.len())?,
            ..Default::default()
        }
        .write(&mut self.records)?;
        self.records.write_all(&label)?;

        let units = U16String::from_str(&entry.text).into_vec();
        StringHeader {
            kind: match entry.extra_data {
                Some(_) => StringKind::WithExtraData,
                None => StringKind::Plain,
            },
            length: Self::length(entry, "text", units.len())?,
        }
        .write(&mut self.records)?;
        for unit in units {
            self.records
                .write_u16::<LittleEndian>(flip_code_unit(unit))?;
        }

        if let Some(data) = entry.extra_data() {
            self.records
                .write_u32::<LittleEndian>(Self::length(entry, "extra data", data.len())?)?;
            self.records.write_all(data)?;
        }

        trace!("added {} bytes of records", self.records.position());
        self.labels.insert(entry.label.clone());

        Ok(())
    }

    fn length(entry: &Entry, what: &'static str, length: usize) -> Result<u32> {
        u32::try_from(length).map_err(|_| Error::RecordTooLarge {
            label: entry.label.clone(),
            what,
        })
    }

    /// Write the header and all records
    ///
    /// This will return the writer, but one should normally not append any data to the end of the file.
    #[instrument(skip(self), err)]
    pub fn finish(mut self) -> Result<W> {
        let count = u32::try_from(self.labels.len()).map_err(|_| Error::RecordTooLarge {
            label: String::new(),
            what: "label count",
        })?;
        self.header.labels = count;
        self.header.strings = count;

        self.header.write(&mut self.inner)?;
        self.inner.write_all(self.records.get_ref())?;
        self.inner.flush()?;

        Ok(self.inner)
    }
}

/// Write a complete container from a list of entries
pub fn write_entries<'a, W: Write + Seek>(
    inner: W,
    metadata: Metadata,
    entries: impl IntoIterator<Item = &'a Entry>,
) -> Result<W> {
    let mut csf = CsfWriter::new(inner, metadata);
    for entry in entries {
        csf.add_entry(entry)?;
    }
    csf.finish()
}
