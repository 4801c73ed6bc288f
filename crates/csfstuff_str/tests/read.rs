use std::fs::File;
use std::path::PathBuf;

use csfstuff_csf::{split_metadata, Entry, Metadata, MetadataSource};
use csfstuff_str::error::{Error, Result};
use csfstuff_str::{EscapeMode, StrReader};
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

fn resource(name: &str) -> PathBuf {
    PathBuf::from(format!(
        "{}/resources/{}",
        env!("CARGO_MANIFEST_DIR"),
        name
    ))
}

#[traced_test]
#[test]
fn parse_str() -> Result<()> {
    let entries = StrReader::default().read(File::open(resource("a.str"))?)?;

    assert_eq!(
        entries,
        vec![
            Entry::new("Name:Tanya", "This will be overwritten"),
            Entry::new("GUI:Stay", "This will stay as is."),
            Entry::new("TXT_POWER_DRAIN", "Power = %d\nDrain = %d"),
        ]
    );

    Ok(())
}

#[traced_test]
#[test]
fn parse_str_with_whitespace_and_comments() -> Result<()> {
    let entries = StrReader::default().read(File::open(resource("c.str"))?)?;

    assert_eq!(
        entries,
        vec![
            Entry::new(
                "Name:CyborgCommando",
                "Nod Cyborg Commando, newly created by another merge"
            ),
            Entry::new("TXT_POWER_DRAIN", "Power: %d \"MW\"\\n"),
        ]
    );

    Ok(())
}

#[traced_test]
#[test]
fn parse_str_pass_through() -> Result<()> {
    let entries = StrReader::new(EscapeMode::PassThrough).read(File::open(resource("c.str"))?)?;

    assert_eq!(entries[1].text, "Power: %d \\\"MW\\\"\\\\n");

    Ok(())
}

#[traced_test]
#[test]
fn parse_str_with_metadata() -> Result<()> {
    let entries = StrReader::default().read(File::open(resource("crlf.str"))?)?;
    let (source, entries) = split_metadata(entries)?;

    assert_eq!(
        source,
        MetadataSource::Embedded(Metadata::new(7, 0x12345678))
    );
    assert_eq!(entries, vec![Entry::new("GUI:Ok", "OK")]);

    Ok(())
}

#[test]
fn empty_input() -> Result<()> {
    assert!(StrReader::default().parse("")?.is_empty());
    assert!(StrReader::default().parse("\n  \n// nothing here\n")?.is_empty());
    Ok(())
}

#[test]
fn missing_terminator() {
    let result = StrReader::default().parse("A\n\"a\"\nEND\n\nB\n\"b\"\nB_END\n");
    assert!(matches!(
        result,
        Err(Error::MissingTerminator { line: 7, content }) if content == "B_END"
    ));
}

#[test]
fn terminator_with_trailing_content() {
    let result = StrReader::default().parse("A\n\"a\"\nEND A\n");
    assert!(matches!(result, Err(Error::MissingTerminator { line: 3, .. })));
}

#[test]
fn unterminated_entry() {
    let result = StrReader::default().parse("A\n\"a\"\nEND\n\nB\n\"b\"\n");
    assert!(matches!(
        result,
        Err(Error::UnterminatedEntry { line: 5, label }) if label == "B"
    ));

    let result = StrReader::default().parse("A\n");
    assert!(matches!(result, Err(Error::UnterminatedEntry { line: 1, .. })));
}

#[test]
fn malformed_strings() {
    for input in [
        "A\nno quotes\nEND\n",
        "A\n\"open\nEND\n",
        "A\n\"a\" // comment\nEND\n",
        "A\n\nEND\n",
        "A\n// comment\nEND\n",
    ] {
        assert!(
            matches!(
                StrReader::default().parse(input),
                Err(Error::MalformedString { line: 2, .. })
            ),
            "accepted {:?}",
            input
        );
    }
}

#[test]
fn unknown_escape() {
    for escaping in [EscapeMode::Escape, EscapeMode::PassThrough] {
        let result = StrReader::new(escaping).parse("A\n\"tab\\there\"\nEND\n");
        assert!(matches!(
            result,
            Err(Error::UnknownEscape { line: 2, sequence }) if sequence == "\\t"
        ));
    }
}

#[test]
fn comment_in_label() {
    let result = StrReader::default().parse("\nA // label\n\"a\"\nEND\n");
    assert!(matches!(result, Err(Error::CommentInLabel { line: 2, .. })));
}

#[test]
fn unicode_whitespace_separators() -> Result<()> {
    let input = "A\n\"a\"\nEND\n\u{c}\n\u{a0}\u{a0}\n\u{a0}B\u{a0}\n\"b\"\nEND\n";
    let entries = StrReader::default().parse(input)?;

    assert_eq!(entries, vec![Entry::new("A", "a"), Entry::new("B", "b")]);
    assert!(entries.iter().all(|e| !e.label.is_empty()));

    Ok(())
}
