//! Types for reading STR files
//!

use csfstuff_csf::Entry;
use std::io::Read;
use tracing::{debug, instrument};

use crate::{
    error::{Error, Result},
    escape::unescape,
    grammar::{self, LabelError},
    EscapeMode,
};

enum State {
    SeekLabel,
    ReadString { label: String, line: usize },
    ReadEnd { label: String, line: usize, text: String },
}

/// STR file reader
///
/// ```
/// # fn doit() -> csfstuff_str::error::Result<()>
/// # {
/// use csfstuff_str::StrReader;
///
/// let entries = StrReader::default().parse("TXT_POWER_DRAIN\n\"Power = %d\\nDrain = %d\"\nEND\n")?;
///
/// assert_eq!(entries[0].label, "TXT_POWER_DRAIN");
/// assert_eq!(entries[0].text, "Power = %d\nDrain = %d");
/// # Ok(())
/// # }
/// # doit().unwrap();
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct StrReader {
    escaping: EscapeMode,
}

impl StrReader {
    /// Create a reader handling escape sequences as requested
    pub fn new(escaping: EscapeMode) -> Self {
        Self { escaping }
    }

    /// Read all entries of a STR file
    pub fn read<R: Read>(&self, mut reader: R) -> Result<Vec<Entry>> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        self.parse(&input)
    }

    /// Parse all entries of a STR document
    #[instrument(skip_all, fields(escaping = ?self.escaping), err)]
    pub fn parse(&self, input: &str) -> Result<Vec<Entry>> {
        let mut result = Vec::new();
        let mut state = State::SeekLabel;

        for (index, content) in input.lines().enumerate() {
            let line = index + 1;
            state = match state {
                State::SeekLabel => {
                    if grammar::is_blank_or_comment(content) {
                        State::SeekLabel
                    } else {
                        let label = grammar::label(content).map_err(|e| match e {
                            LabelError::Empty => Error::EmptyLabel { line },
                            LabelError::Comment => Error::CommentInLabel {
                                line,
                                content: content.to_string(),
                            },
                        })?;
                        State::ReadString {
                            label: label.to_string(),
                            line,
                        }
                    }
                }
                State::ReadString { label, line: start } => {
                    let quoted =
                        grammar::quoted(content).ok_or_else(|| Error::MalformedString {
                            line,
                            content: content.to_string(),
                        })?;
                    State::ReadEnd {
                        label,
                        line: start,
                        text: self.decode(quoted, line)?,
                    }
                }
                State::ReadEnd { label, text, .. } => {
                    if !grammar::is_terminator(content) {
                        return Err(Error::MissingTerminator {
                            line,
                            content: content.to_string(),
                        });
                    }
                    result.push(Entry::new(label, text));
                    State::SeekLabel
                }
            };
        }

        match state {
            State::SeekLabel => {
                debug!("read {} entries", result.len());
                Ok(result)
            }
            State::ReadString { label, line } | State::ReadEnd { label, line, .. } => {
                Err(Error::UnterminatedEntry { line, label })
            }
        }
    }

    fn decode(&self, quoted: &str, line: usize) -> Result<String> {
        let unescaped = unescape(quoted).map_err(|e| Error::UnknownEscape {
            line,
            sequence: e.sequence,
        })?;

        Ok(match self.escaping {
            EscapeMode::Escape => unescaped,
            EscapeMode::PassThrough => quoted.to_string(),
        })
    }
}
