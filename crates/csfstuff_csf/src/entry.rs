//! The in-memory record shared by the binary and text formats.

use derive_more::derive::{Constructor, Deref, IntoIterator};
use indexmap::IndexMap;
use tracing::warn;

/// One localized string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    /// Unique identifier of the string
    pub label: String,

    /// The string itself, unescaped
    pub text: String,

    /// Opaque bytes attached to the label by the binary format
    pub extra_data: Option<Vec<u8>>,
}

impl Entry {
    /// Create an entry without extra data
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
            extra_data: None,
        }
    }

    /// Attach extra data to this entry
    pub fn with_extra_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.extra_data = Some(data.into());
        self
    }

    /// Extra data attached to this entry, if any
    pub fn extra_data(&self) -> Option<&[u8]> {
        self.extra_data.as_deref()
    }
}

/// Extra data of a list of entries, keyed by label
///
/// This is the side document form of [`Entry::extra_data`], used where the data has no other place
/// to live (for instance next to a STR file). Order follows the entries it was collected from.
#[derive(Constructor, Clone, Debug, Default, PartialEq, Eq, Deref, IntoIterator)]
#[into_iterator(owned, ref)]
pub struct ExtraData(IndexMap<String, Vec<u8>>);

impl ExtraData {
    /// Collect the non-empty extra data of the given entries
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Self {
        Self::new(
            entries
                .into_iter()
                .filter_map(|e| match e.extra_data() {
                    Some(data) if !data.is_empty() => Some((e.label.clone(), data.to_vec())),
                    _ => None,
                })
                .collect(),
        )
    }

    /// Set the extra data for a label, returning the previous value
    pub fn insert(
        &mut self,
        label: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) -> Option<Vec<u8>> {
        self.0.insert(label.into(), data.into())
    }

    /// Attach the data to the entries with a matching label.
    ///
    /// Extra data already present on an entry is replaced. Labels without a matching entry are
    /// reported and otherwise ignored.
    pub fn attach(&self, entries: &mut [Entry]) {
        let mut used = 0;
        for entry in entries.iter_mut() {
            if let Some(data) = self.0.get(&entry.label) {
                entry.extra_data = Some(data.clone());
                used += 1;
            }
        }

        if used < self.0.len() {
            for label in self.0.keys() {
                if !entries.iter().any(|e| &e.label == label) {
                    warn!("ignoring extra data for unknown label {}", label);
                }
            }
        }
    }
}
