use aoc_search::input::{parse_numbers, read_lines, read_numbers, read_sections};
use aoc_search::Error;
use std::io::Write;
use tempfile::NamedTempFile;

fn input_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_read_lines() {
    let file = input_file("  abc  \n\tdef\r\n\n");

    let trimmed = read_lines(file.path(), false).unwrap();
    assert_eq!(trimmed, vec!["abc", "def", ""]);

    let preserved = read_lines(file.path(), true).unwrap();
    assert_eq!(preserved, vec!["  abc", "\tdef", ""]);
}

#[test]
fn test_read_sections() {
    let file = input_file("a\nb\n\nc\n\n\nd\ne\n");
    let sections = read_sections(file.path()).unwrap();
    assert_eq!(sections.len(), 3);
    assert_eq!(sections[0], vec!["a", "b"]);
    assert_eq!(sections[1], vec!["c"]);
    assert_eq!(sections[2], vec!["", "d", "e"]);
}

#[test]
fn test_read_numbers() {
    let file = input_file("12\n-7\n\n 40 \n");
    assert_eq!(read_numbers(file.path()).unwrap(), vec![12, -7, 40]);

    let bad = input_file("1\n2\nthree\n");
    match read_numbers(bad.path()) {
        Err(Error::InvalidNumber { line, text }) => {
            assert_eq!(line, 3);
            assert_eq!(text, "three");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_missing_file() {
    let err = read_lines("/definitely/not/here.txt", false).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("/definitely/not/here.txt"));
}

#[test]
fn test_parse_numbers() {
    assert_eq!(parse_numbers("Disc #1 has 13 positions; at time=0, it is at position -11."), vec![1, 13, 0, -11]);
    assert_eq!(parse_numbers("x=5-3"), vec![5, -3]);
    assert_eq!(parse_numbers("--8 - 2"), vec![-8, 2]);
    assert_eq!(parse_numbers("no digits"), Vec::<i64>::new());
    assert_eq!(parse_numbers("007"), vec![7]);
}

#[test]
fn test_parse_numbers_out_of_range() {
    assert_eq!(parse_numbers("id 99999999999999999999 x"), Vec::<i64>::new());
    assert_eq!(parse_numbers("-9223372036854775808"), vec![i64::MIN]);
    assert_eq!(
        parse_numbers("9223372036854775807 9223372036854775808 -3"),
        vec![i64::MAX, -3]
    );
}
