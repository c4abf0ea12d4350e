//! Tests for lexicon loading and lookup.

use std::io::Write;

use polarity::{LexiconStore, PolarityError};

fn write_lexicon(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{contents}").expect("write lexicon");
    file
}

#[test]
fn loads_tab_separated_entries() {
    let file = write_lexicon("good\t1.9\nbad\t-2.5\n");
    let lexicon = LexiconStore::from_path(file.path()).unwrap();
    assert_eq!(lexicon.len(), 2);
    assert_eq!(lexicon.lookup("good"), Some(1.9));
    assert_eq!(lexicon.lookup("bad"), Some(-2.5));
}

#[test]
fn lookup_is_case_insensitive() {
    let file = write_lexicon("good\t1.9\n");
    let lexicon = LexiconStore::from_path(file.path()).unwrap();
    assert_eq!(lexicon.lookup("GOOD"), Some(1.9));
    assert_eq!(lexicon.lookup("GoOd"), Some(1.9));
}

#[test]
fn unknown_word_is_not_an_error() {
    let file = write_lexicon("good\t1.9\n");
    let lexicon = LexiconStore::from_path(file.path()).unwrap();
    assert_eq!(lexicon.lookup("unmapped"), None);
}

#[test]
fn extra_metadata_columns_are_ignored() {
    // VADER-style rows carry stddev and raw rating columns after the valence.
    let file = write_lexicon("good\t1.9\t0.91\t[2, 2, 1, 2, 2]\n");
    let lexicon = LexiconStore::from_path(file.path()).unwrap();
    assert_eq!(lexicon.lookup("good"), Some(1.9));
}

#[test]
fn diacritics_are_preserved() {
    let file = write_lexicon("na\u{00ef}ve\t-0.5\n");
    let lexicon = LexiconStore::from_path(file.path()).unwrap();
    assert_eq!(lexicon.lookup("na\u{00ef}ve"), Some(-0.5));
}

#[test]
fn missing_file_is_unreadable_error() {
    let err = LexiconStore::from_path("/nonexistent/lexicon.txt").unwrap_err();
    assert!(matches!(err, PolarityError::LexiconUnreadable { .. }));
}

#[test]
fn malformed_line_is_an_error_with_position() {
    let file = write_lexicon("good\t1.9\nnot a pair\n");
    let err = LexiconStore::from_path(file.path()).unwrap_err();
    match err {
        PolarityError::LexiconMalformed { line, content } => {
            assert_eq!(line, 2);
            assert_eq!(content, "not a pair");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_numeric_valence_is_malformed() {
    let file = write_lexicon("good\thigh\n");
    let err = LexiconStore::from_path(file.path()).unwrap_err();
    assert!(matches!(err, PolarityError::LexiconMalformed { line: 1, .. }));
}

#[test]
fn empty_file_is_an_error() {
    let file = write_lexicon("\n\n");
    let err = LexiconStore::from_path(file.path()).unwrap_err();
    assert!(matches!(err, PolarityError::LexiconEmpty));
}

#[test]
fn embedded_lexicon_loads() {
    let lexicon = LexiconStore::embedded().unwrap();
    assert!(lexicon.len() > 100);
    assert!(lexicon.lookup("love").is_some());
    assert!(lexicon.lookup("worst").is_some());
}
