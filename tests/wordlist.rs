use std::io::Write;

use rungs::{load_word_text, normalize_input, solve, LadderError, SolveStatus};
use tempfile::NamedTempFile;

#[test]
fn loads_and_solves_from_a_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "hot, dot").unwrap();
    writeln!(file, "dog lot").unwrap();
    writeln!(file, "log cog").unwrap();

    let text = load_word_text(file.path()).unwrap();
    let norm = normalize_input("hit", "cog", &text);
    let sol = solve(&norm.begin, &norm.end, &norm.words);
    assert_eq!(sol.status, SolveStatus::Found);
    assert_eq!(sol.paths.len(), 2);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_word_text(dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, LadderError::Io(_)));
}

#[test]
fn blank_file_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "   \n\t").unwrap();
    let err = load_word_text(file.path()).unwrap_err();
    assert!(matches!(err, LadderError::InvalidInput(_)));
}
