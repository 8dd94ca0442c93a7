//! Line-oriented puzzle input readers

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::{Error, Result};

fn read_to_string(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;
    debug!("read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Every line of the file.
///
/// With `preserve_leading` only trailing whitespace is stripped, which keeps
/// indentation-sensitive input (pictures, diagrams) intact. Otherwise each
/// line is trimmed on both ends.
pub fn read_lines<P: AsRef<Path>>(path: P, preserve_leading: bool) -> Result<Vec<String>> {
    let content = read_to_string(path.as_ref())?;
    Ok(content
        .lines()
        .map(|line| {
            if preserve_leading {
                line.trim_end().to_string()
            } else {
                line.trim().to_string()
            }
        })
        .collect())
}

/// Blank-line separated blocks, each as its list of lines
pub fn read_sections<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let content = read_to_string(path.as_ref())?;
    let content = content.replace("\r\n", "\n");
    Ok(content
        .trim()
        .split("\n\n")
        .map(|section| section.lines().map(str::to_string).collect())
        .collect())
}

/// One integer per non-empty line
pub fn read_numbers<P: AsRef<Path>>(path: P) -> Result<Vec<i64>> {
    read_lines(path, false)?
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(index, line)| {
            line.parse().map_err(|_| Error::InvalidNumber {
                line: index + 1,
                text: line.clone(),
            })
        })
        .collect()
}

/// All signed integers appearing anywhere in `text`, in order.
///
/// A token is a run of ASCII digits, negative when a `-` sits directly in
/// front of it. Tokens that do not fit in an `i64` are skipped.
pub fn parse_numbers(text: &str) -> Vec<i64> {
    let bytes = text.as_bytes();
    let mut numbers = Vec::new();
    let mut index = 0;

    while index < bytes.len() {
        if !bytes[index].is_ascii_digit() {
            index += 1;
            continue;
        }

        let start = if index > 0 && bytes[index - 1] == b'-' {
            index - 1
        } else {
            index
        };
        let mut end = index;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }

        // Both ends sit next to ASCII bytes, so the slice is on char boundaries
        let token = &text[start..end];
        match token.parse() {
            Ok(number) => numbers.push(number),
            Err(_) => warn!("skipping out of range number {}", token),
        }
        index = end;
    }

    numbers
}
