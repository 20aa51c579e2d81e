use srtedit::host::{DirEgress, Egress};
use srtedit::session::Session;

use pretty_assertions::assert_eq;

const INPUT: &str = "1\n00:00:01,000 --> 00:00:02,000\nHello\n\n2\n00:00:03,000 --> 00:00:04,000\nWorld";

#[test]
fn load_edit_generate_save() {
    let mut session = Session::new();
    session.load("movie.srt", INPUT);
    session.edit("1", "Hi");
    session.edit("2", "World");

    let export = session.generate().unwrap();
    let dir = tempfile::tempdir().unwrap();
    DirEgress::new(dir.path())
        .save(&export.file_name, &export.contents)
        .unwrap();

    let written = std::fs::read_to_string(dir.path().join("movie_edit.srt")).unwrap();
    assert_eq!(
        written,
        "1\n00:00:01,000 --> 00:00:02,000\nHi\n\n2\n00:00:03,000 --> 00:00:04,000\nWorld"
    );
}

#[test]
fn duplicate_ids_collapse_on_export() {
    let mut session = Session::new();
    session.load("dup.srt", "1\na\nfirst\n\n2\nb\nmiddle\n\n1\nc\nlast");

    assert_eq!(
        session.generate().unwrap().contents,
        "1\nc\nlast\n\n2\nb\nmiddle"
    );
}

#[test]
fn multi_line_text_is_truncated_on_export() {
    let mut session = Session::new();
    session.load("multi.srt", "1\nt\nline one\nline two\n\n2\nu\nx");

    assert_eq!(session.generate().unwrap().contents, "1\nt\nline one\n\n2\nu\nx");
}
