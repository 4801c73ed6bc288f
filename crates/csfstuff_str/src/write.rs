//! Types for writing STR files
//!

use csfstuff_csf::Entry;
use std::io::Write;
use tracing::{instrument, warn};

use crate::{
    error::{Error, Result},
    escape::escape,
    grammar::{self, COMMENT, TERMINATOR},
    EscapeMode,
};

/// STR file generator
///
/// Entries are separated by a single blank line, with none before the first or after the last.
///
/// ```
/// # fn doit() -> csfstuff_str::error::Result<()>
/// # {
/// use csfstuff_csf::Entry;
/// use csfstuff_str::{EscapeMode, StrWriter};
///
/// let mut out = StrWriter::new(Vec::new(), EscapeMode::Escape);
/// out.write_entry(&Entry::new("TXT_STAND_BY", "Please Stand By..."))?;
/// out.write_entry(&Entry::new("TXT_QUOTE", "\"Hi\""))?;
///
/// assert_eq!(
///     String::from_utf8(out.finish()?).unwrap(),
///     "TXT_STAND_BY\n\"Please Stand By...\"\nEND\n\nTXT_QUOTE\n\"\\\"Hi\\\"\"\nEND\n"
/// );
/// # Ok(())
/// # }
/// # doit().unwrap();
/// ```
pub struct StrWriter<W: Write> {
    inner: W,
    escaping: EscapeMode,
    wrote_entry: bool,
}

impl<W: Write> StrWriter<W> {
    /// Create a writer handling escape sequences as requested
    pub fn new(inner: W, escaping: EscapeMode) -> StrWriter<W> {
        StrWriter {
            inner,
            escaping,
            wrote_entry: false,
        }
    }

    /// Append an entry
    #[instrument(skip_all, fields(label = %entry.label), err)]
    pub fn write_entry(&mut self, entry: &Entry) -> Result<()> {
        let label = entry.label.as_str();
        if label.trim().is_empty() || label.contains(['\n', '\r']) || label.contains(COMMENT) {
            return Err(Error::InvalidLabel(entry.label.clone()));
        }
        if grammar::label(label) != Ok(label) {
            warn!("surrounding whitespace of label {:?} will be lost", label);
        }

        let text = match self.escaping {
            EscapeMode::Escape => escape(&entry.text),
            EscapeMode::PassThrough => {
                if entry.text.contains(['\n', '\r']) {
                    return Err(Error::InvalidText(entry.label.clone()));
                }
                entry.text.clone()
            }
        };

        if self.wrote_entry {
            writeln!(self.inner)?;
        }
        writeln!(self.inner, "{}", label)?;
        writeln!(self.inner, "\"{}\"", text)?;
        writeln!(self.inner, "{}", TERMINATOR)?;
        self.wrote_entry = true;

        Ok(())
    }

    /// Flush and return the underlying writer
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Write a complete STR file from a list of entries
pub fn write_entries<'a, W: Write>(
    inner: W,
    escaping: EscapeMode,
    entries: impl IntoIterator<Item = &'a Entry>,
) -> Result<W> {
    let mut out = StrWriter::new(inner, escaping);
    for entry in entries {
        out.write_entry(entry)?;
    }
    out.finish()
}
