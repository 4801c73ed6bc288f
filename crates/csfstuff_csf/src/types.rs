//! Base types for structure of CSF file.

use binrw::{BinRead, BinWrite};

/// The only container version this crate understands
pub const CSF_VERSION: u32 = 3;

/// Size in bytes of [`CsfHeader`] including its magic
pub const CSF_HEADER_SIZE: u64 = 24;

/// CSF file header
///
/// Defines the header of the CSF file which always starts with " FSC" ("CSF " reversed).
/// All data is stored in little endian format
#[derive(BinRead, BinWrite, Debug, Copy, Clone, PartialEq, Eq)]
#[brw(magic = b" FSC", little)]
pub struct CsfHeader {
    /// Format version of the container
    pub version: u32,

    /// The number of labels stored in the file
    pub labels: u32,

    /// The number of strings stored in the file
    pub strings: u32,

    /// Unused by the games, preserved as is
    pub reserved: u32,

    /// Language of the strings in this file
    pub language_code: u32,
}

impl Default for CsfHeader {
    fn default() -> Self {
        Self {
            version: CSF_VERSION,
            labels: Default::default(),
            strings: Default::default(),
            reserved: Default::default(),
            language_code: Default::default(),
        }
    }
}

/// Label record header
///
/// Precedes the raw bytes of a label, followed by its string pairs.
#[derive(BinRead, BinWrite, Debug, Copy, Clone, PartialEq, Eq)]
#[brw(magic = b" LBL", little)]
pub struct LabelHeader {
    /// The number of strings owned by this label
    pub string_pairs: u32,

    /// The length of the label in bytes
    pub length: u32,
}

impl Default for LabelHeader {
    fn default() -> Self {
        Self {
            string_pairs: 1,
            length: Default::default(),
        }
    }
}

/// Identifies whether a string record is followed by extra data
#[derive(BinRead, BinWrite, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum StringKind {
    /// " RTS", a plain string
    #[default]
    #[brw(magic = b" RTS")]
    Plain,

    /// "WRTS", a string followed by a length prefixed block of extra data
    #[brw(magic = b"WRTS")]
    WithExtraData,
}

/// String record header
///
/// Followed by `length` bit flipped UTF-16 code units.
#[derive(BinRead, BinWrite, Debug, Copy, Clone, Default, PartialEq, Eq)]
#[brw(little)]
pub struct StringHeader {
    /// Whether extra data follows the string
    pub kind: StringKind,

    /// The number of UTF-16 code units in the string
    pub length: u32,
}

/// Reverses the storage convention of string code units.
///
/// Every code unit is stored with all of its bits flipped; applying this twice yields the input.
pub const fn flip_code_unit(unit: u16) -> u16 {
    !unit
}

/// Single byte text, every byte being the character with the same code point
pub fn bytes_to_string(data: &[u8]) -> String {
    data.iter().copied().map(char::from).collect()
}

/// Inverse of [`bytes_to_string`], `None` if a character is above U+00FF
pub fn string_to_bytes(value: &str) -> Option<Vec<u8>> {
    value.chars().map(|c| u8::try_from(c).ok()).collect()
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use binrw::BinRead;
    use binrw::BinWrite;
    use pretty_assertions::assert_eq;

    use crate::error::Result;
    use crate::types::{
        bytes_to_string, flip_code_unit, string_to_bytes, CsfHeader, LabelHeader, StringHeader,
        StringKind,
    };

    #[test]
    fn read_header() -> Result<()> {
        #[rustfmt::skip]
        let mut input = Cursor::new(vec![
            0x20, 0x46, 0x53, 0x43,
            0x03, 0x00, 0x00, 0x00,
            0x02, 0x00, 0x00, 0x00,
            0x02, 0x00, 0x00, 0x00,
            0xEF, 0xBE, 0xAD, 0xDE,
            0x09, 0x00, 0x00, 0x00,
        ]);

        let expected = CsfHeader {
            labels: 2,
            strings: 2,
            reserved: 0xDEADBEEF,
            language_code: 9,
            ..Default::default()
        };

        assert_eq!(CsfHeader::read(&mut input)?, expected);

        Ok(())
    }

    #[test]
    fn read_header_bad_magic() {
        #[rustfmt::skip]
        let mut input = Cursor::new(vec![
            0x43, 0x53, 0x46, 0x20,
            0x03, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ]);

        assert!(matches!(
            CsfHeader::read(&mut input),
            Err(binrw::Error::BadMagic { pos: 0, .. })
        ));
    }

    #[test]
    fn write_header() -> Result<()> {
        #[rustfmt::skip]
        let expected: Vec<u8> = vec![
            0x20, 0x46, 0x53, 0x43,
            0x03, 0x00, 0x00, 0x00,
            0x01, 0x00, 0x00, 0x00,
            0x01, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ];

        let header = CsfHeader {
            labels: 1,
            strings: 1,
            ..Default::default()
        };

        let mut actual = Vec::new();
        header.write(&mut Cursor::new(&mut actual))?;

        assert_eq!(actual.len() as u64, super::CSF_HEADER_SIZE);
        assert_eq!(actual, expected);

        Ok(())
    }

    #[test]
    fn read_label_header() -> Result<()> {
        #[rustfmt::skip]
        let mut input = Cursor::new(vec![
            0x20, 0x4C, 0x42, 0x4C,
            0x01, 0x00, 0x00, 0x00,
            0x09, 0x00, 0x00, 0x00,
        ]);

        let expected = LabelHeader {
            string_pairs: 1,
            length: 9,
        };

        assert_eq!(LabelHeader::read(&mut input)?, expected);

        Ok(())
    }

    #[test]
    fn read_string_headers() -> Result<()> {
        #[rustfmt::skip]
        let mut input = Cursor::new(vec![
            0x20, 0x52, 0x54, 0x53,
            0x02, 0x00, 0x00, 0x00,
            0x57, 0x52, 0x54, 0x53,
            0x05, 0x00, 0x00, 0x00,
        ]);

        assert_eq!(
            StringHeader::read(&mut input)?,
            StringHeader {
                kind: StringKind::Plain,
                length: 2
            }
        );
        assert_eq!(
            StringHeader::read(&mut input)?,
            StringHeader {
                kind: StringKind::WithExtraData,
                length: 5
            }
        );

        Ok(())
    }

    #[test]
    fn read_string_header_unknown_magic() {
        #[rustfmt::skip]
        let mut input = Cursor::new(vec![
            0x58, 0x52, 0x54, 0x53,
            0x02, 0x00, 0x00, 0x00,
        ]);

        assert!(StringHeader::read(&mut input).is_err());
    }

    #[test]
    fn write_string_header() -> Result<()> {
        #[rustfmt::skip]
        let expected = vec![
            0x57, 0x52, 0x54, 0x53,
            0x0B, 0x00, 0x00, 0x00,
        ];

        let header = StringHeader {
            kind: StringKind::WithExtraData,
            length: 11,
        };

        let mut actual = Vec::new();
        header.write(&mut Cursor::new(&mut actual))?;

        assert_eq!(actual, expected);

        Ok(())
    }

    #[test]
    fn flip_is_self_inverse() {
        for unit in 0..=u16::MAX {
            assert_eq!(flip_code_unit(flip_code_unit(unit)), unit);
        }
        assert_eq!(flip_code_unit(0x0000), 0xFFFF);
        assert_eq!(flip_code_unit(0xFFFF), 0x0000);
        assert_eq!(flip_code_unit(u16::from(b'H')), 0xFFB7);
    }

    #[test]
    fn single_byte_text() {
        let data: Vec<u8> = (0..=u8::MAX).collect();
        let text = bytes_to_string(&data);
        assert_eq!(text.chars().count(), 256);
        assert_eq!(string_to_bytes(&text), Some(data));

        assert_eq!(bytes_to_string(b"TXT_H\xC9LLO"), "TXT_H\u{c9}LLO");
        assert_eq!(string_to_bytes("\u{100}"), None);
        assert_eq!(string_to_bytes("TXT_€"), None);
    }
}
