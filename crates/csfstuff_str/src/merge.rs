//! Merging of several STR files into one.
//!
//! Sources are merged in order of increasing priority. A label keeps the position where it was
//! first seen, while its string comes from the last source defining it.

use csfstuff_csf::Entry;
use indexmap::{map::Entry as MapEntry, IndexMap};
use std::collections::HashSet;
use tracing::{debug, instrument};

use crate::error::{Error, Result};

/// Accumulates sources into one list of entries
///
/// ```
/// # fn doit() -> csfstuff_str::error::Result<()>
/// # {
/// use csfstuff_csf::Entry;
/// use csfstuff_str::StrMerger;
///
/// let mut merger = StrMerger::new();
/// merger.merge(vec![Entry::new("X", "1"), Entry::new("Y", "2")])?;
/// merger.merge(vec![Entry::new("Y", "3"), Entry::new("Z", "4")])?;
///
/// let merged = merger.finish();
/// assert_eq!(merged, vec![Entry::new("X", "1"), Entry::new("Y", "3"), Entry::new("Z", "4")]);
/// # Ok(())
/// # }
/// # doit().unwrap();
/// ```
#[derive(Debug, Default, Clone)]
pub struct StrMerger {
    entries: IndexMap<String, Entry>,
    sources: usize,
}

impl StrMerger {
    /// Start with no entries
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries merged so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry was merged yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Merge a source on top of everything merged before.
    ///
    /// New labels are appended, known labels get their string replaced in place. Nothing but the
    /// string is taken over from a known label. The source is rejected as a whole if it defines a
    /// label twice.
    #[instrument(skip_all, fields(source = self.sources, entries = source.len()), err)]
    pub fn merge(&mut self, source: Vec<Entry>) -> Result<()> {
        let mut labels = HashSet::with_capacity(source.len());
        for entry in &source {
            if !labels.insert(entry.label.as_str()) {
                return Err(Error::DuplicateLabel {
                    label: entry.label.clone(),
                });
            }
        }

        let (mut added, mut replaced) = (0, 0);
        for entry in source {
            match self.entries.entry(entry.label.clone()) {
                MapEntry::Occupied(mut existing) => {
                    existing.get_mut().text = entry.text;
                    replaced += 1;
                }
                MapEntry::Vacant(slot) => {
                    slot.insert(entry);
                    added += 1;
                }
            }
        }
        debug!("added {} entries, replaced {} entries", added, replaced);
        self.sources += 1;

        Ok(())
    }

    /// The merged entries in order of first appearance
    pub fn finish(self) -> Vec<Entry> {
        self.entries.into_values().collect()
    }
}

/// Merge sources ordered from lowest to highest priority
pub fn merge_entries(sources: impl IntoIterator<Item = Vec<Entry>>) -> Result<Vec<Entry>> {
    let mut merger = StrMerger::new();
    for source in sources {
        merger.merge(source)?;
    }
    Ok(merger.finish())
}

#[cfg(test)]
mod test {
    use csfstuff_csf::Entry;
    use pretty_assertions::assert_eq;

    use crate::error::{Error, Result};
    use crate::merge::{merge_entries, StrMerger};

    fn source(pairs: &[(&str, &str)]) -> Vec<Entry> {
        pairs.iter().map(|(l, t)| Entry::new(*l, *t)).collect()
    }

    #[test]
    fn single_source_is_a_copy() -> Result<()> {
        let a = source(&[("B", "2"), ("A", "1"), ("C", "3")]);
        assert_eq!(merge_entries([a.clone()])?, a);
        Ok(())
    }

    #[test]
    fn later_sources_win_first_position_stays() -> Result<()> {
        let merged = merge_entries([
            source(&[("X", "1"), ("Y", "2")]),
            source(&[("Z", "4"), ("X", "5")]),
            source(&[("Y", "3"), ("W", "6")]),
        ])?;

        assert_eq!(
            merged,
            source(&[("X", "5"), ("Y", "3"), ("Z", "4"), ("W", "6")])
        );
        Ok(())
    }

    #[test]
    fn only_text_is_replaced() -> Result<()> {
        let mut merger = StrMerger::new();
        merger.merge(vec![Entry::new("A", "old").with_extra_data(b"wave".to_vec())])?;
        merger.merge(vec![Entry::new("A", "new")])?;

        assert_eq!(
            merger.finish(),
            vec![Entry::new("A", "new").with_extra_data(b"wave".to_vec())]
        );
        Ok(())
    }

    #[test]
    fn duplicates_within_a_source() -> Result<()> {
        let mut merger = StrMerger::new();
        merger.merge(source(&[("X", "1")]))?;

        let result = merger.merge(source(&[("Y", "1"), ("X", "2"), ("Y", "3")]));
        assert!(matches!(result, Err(Error::DuplicateLabel { label }) if label == "Y"));

        // The rejected source left nothing behind
        assert_eq!(merger.finish(), source(&[("X", "1")]));
        Ok(())
    }

    #[test]
    fn duplicates_in_first_source() {
        assert!(matches!(
            merge_entries([source(&[("X", "1"), ("X", "2")])]),
            Err(Error::DuplicateLabel { .. })
        ));
    }
}
