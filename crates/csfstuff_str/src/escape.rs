//! Escaping of strings inside their double quotes.
//!
//! | Sequence | Character |
//! |----------|-----------|
//! | `\n`     | newline   |
//! | `\\`     | backslash |
//! | `\"`     | quote     |

use winnow::combinator::{alt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::take_till;

enum Fragment<'s> {
    Literal(&'s str),
    Escaped(char),
}

fn escaped_char(input: &mut &str) -> PResult<char> {
    alt(('n'.value('\n'), '\\'.value('\\'), '"'.value('"'))).parse_next(input)
}

fn fragment<'s>(input: &mut &'s str) -> PResult<Fragment<'s>> {
    alt((
        take_till(1.., '\\').map(Fragment::Literal),
        preceded('\\', escaped_char).map(Fragment::Escaped),
    ))
    .parse_next(input)
}

fn unescaped(input: &mut &str) -> PResult<String> {
    repeat(0.., fragment)
        .fold(String::new, |mut acc, fragment| {
            match fragment {
                Fragment::Literal(s) => acc.push_str(s),
                Fragment::Escaped(c) => acc.push(c),
            }
            acc
        })
        .parse_next(input)
}

/// Escape sequence that could not be decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEscape {
    /// Byte offset of the backslash
    pub offset: usize,

    /// The backslash and the character following it, if any
    pub sequence: String,
}

/// Escape backslashes, quotes and newlines
pub fn escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            c => result.push(c),
        }
    }
    result
}

/// Decode the escape sequences of a quoted string
pub fn unescape(content: &str) -> Result<String, UnknownEscape> {
    unescaped.parse(content).map_err(|e| {
        let offset = e.offset();
        UnknownEscape {
            offset,
            sequence: content[offset..].chars().take(2).collect(),
        }
    })
}
