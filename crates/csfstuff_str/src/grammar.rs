//! Recognisers for the individual lines of a STR file.
//!
//! An entry spans three lines, entries are separated by lines that are blank or only hold a
//! comment:
//!
//! ```text
//! // comment
//! TXT_POWER_DRAIN
//! "Power = %d\nDrain = %d"
//! END
//! ```

use winnow::combinator::{eof, opt, preceded, rest};
use winnow::prelude::*;
use winnow::token::take_while;

/// Token closing an entry
pub const TERMINATOR: &str = "END";

/// Marker starting a comment
pub const COMMENT: &str = "//";

/// Whitespace as understood by [`str::trim`], so that lines are skipped and trimmed alike
fn whitespace<'s>(input: &mut &'s str) -> PResult<&'s str> {
    take_while(0.., char::is_whitespace).parse_next(input)
}

fn comment<'s>(input: &mut &'s str) -> PResult<&'s str> {
    preceded(COMMENT, rest).parse_next(input)
}

/// Optional whitespace and comment up to the end of the line
fn trailer(input: &mut &str) -> PResult<()> {
    (whitespace, opt(comment), eof).void().parse_next(input)
}

fn terminator(input: &mut &str) -> PResult<()> {
    (whitespace, TERMINATOR, trailer).void().parse_next(input)
}

/// Whether the line may be skipped while looking for a label
pub fn is_blank_or_comment(line: &str) -> bool {
    trailer.parse(line).is_ok()
}

/// Whether the line closes an entry
pub fn is_terminator(line: &str) -> bool {
    terminator.parse(line).is_ok()
}

/// Why a line can not be read as a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelError {
    /// Nothing but whitespace
    Empty,
    /// The line contains a comment marker
    Comment,
}

/// The label on a label line
pub fn label(line: &str) -> Result<&str, LabelError> {
    let label = line.trim_matches(char::is_whitespace);
    if label.is_empty() {
        Err(LabelError::Empty)
    } else if label.contains(COMMENT) {
        Err(LabelError::Comment)
    } else {
        Ok(label)
    }
}

/// The content between the first and the last double quote of a string line.
///
/// Only whitespace may surround the quotes.
pub fn quoted(line: &str) -> Option<&str> {
    let quoted = line.trim_matches(char::is_whitespace);
    if quoted.len() >= 2 && quoted.starts_with('"') && quoted.ends_with('"') {
        Some(&quoted[1..quoted.len() - 1])
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use crate::grammar::{is_blank_or_comment, is_terminator, label, quoted, LabelError};

    #[test]
    fn blank_or_comment_lines() {
        assert!(is_blank_or_comment(""));
        assert!(is_blank_or_comment("   \t"));
        assert!(is_blank_or_comment("// a comment"));
        assert!(is_blank_or_comment("\t  //"));
        assert!(!is_blank_or_comment("TXT_LABEL"));
        assert!(!is_blank_or_comment("/ not a comment"));
        assert!(!is_blank_or_comment("\"\""));
    }

    #[test]
    fn unicode_whitespace_lines() {
        for line in ["\u{c}", "\u{a0}", " \u{3000}\t", "\u{a0}// comment"] {
            assert!(is_blank_or_comment(line), "{:?} not skipped", line);
            assert_eq!(label(line).ok(), None);
        }
        assert!(is_terminator("\u{a0}END\u{c}"));
        assert_eq!(label("\u{a0}GUI:Ok\u{c}"), Ok("GUI:Ok"));
    }

    #[test]
    fn terminator_lines() {
        assert!(is_terminator("END"));
        assert!(is_terminator("  END  "));
        assert!(is_terminator("END // done"));
        assert!(is_terminator("\tEND//done"));
        assert!(!is_terminator("END x"));
        assert!(!is_terminator("ENDING"));
        assert!(!is_terminator("end"));
        assert!(!is_terminator(""));
    }

    #[test]
    fn label_lines() {
        assert_eq!(label("  GUI:Ok \t"), Ok("GUI:Ok"));
        assert_eq!(label("Name:Tanya"), Ok("Name:Tanya"));
        assert_eq!(label("TXT_A // comment"), Err(LabelError::Comment));
        assert_eq!(label("http://label"), Err(LabelError::Comment));
        assert_eq!(label("\u{c}"), Err(LabelError::Empty));
        assert_eq!(label(" \u{a0} "), Err(LabelError::Empty));
    }

    #[test]
    fn string_lines() {
        assert_eq!(quoted("\"Hi\""), Some("Hi"));
        assert_eq!(quoted("  \"\"  "), Some(""));
        assert_eq!(quoted("\"a \\\"b\\\" c\""), Some("a \\\"b\\\" c"));
        assert_eq!(quoted("\"a\" // comment"), None);
        assert_eq!(quoted("\""), None);
        assert_eq!(quoted("Hi"), None);
        assert_eq!(quoted("\"Hi"), None);
        assert_eq!(quoted(""), None);
    }
}
