//! Document form of [`ExtraData`].
//!
//! The document is a JSON object of label to string. Extra data is raw bytes, so every byte is
//! stored as the character with the same code point, keeping ASCII data readable while any byte
//! sequence survives the round trip.

use std::{
    fmt,
    io::{Read, Write},
};

use indexmap::IndexMap;
use serde::{
    de::{self, MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Serialize,
};

use crate::{
    entry::ExtraData,
    error::Result,
    types::{bytes_to_string, string_to_bytes},
};

impl Serialize for ExtraData {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, &bytes_to_string(v))?;
        }
        map.end()
    }
}

struct ExtraDataVisitor {}

impl ExtraDataVisitor {
    fn new() -> Self {
        ExtraDataVisitor {}
    }
}

impl<'de> Visitor<'de> for ExtraDataVisitor {
    type Value = IndexMap<String, Vec<u8>>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of label to extra data string")
    }

    fn visit_map<M>(self, mut access: M) -> core::result::Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut map = IndexMap::with_capacity(access.size_hint().unwrap_or(0));

        while let Some((key, value)) = access.next_entry::<String, String>()? {
            let data = string_to_bytes(&value).ok_or_else(|| {
                de::Error::invalid_value(
                    de::Unexpected::Str(&value),
                    &"a string of characters up to U+00FF",
                )
            })?;

            map.insert(key, data);
        }

        Ok(map)
    }
}

impl<'de> Deserialize<'de> for ExtraData {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(ExtraData::new(
            deserializer.deserialize_map(ExtraDataVisitor::new())?,
        ))
    }
}

impl ExtraData {
    /// Read an extra data document
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Write a pretty printed extra data document
    pub fn to_writer<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
