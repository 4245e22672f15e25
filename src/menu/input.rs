//! Selection input handling.
//!
//! One line of input is one selection attempt. Lines are read as raw bytes so
//! that invalid UTF-8 is reported as malformed input instead of an IO error.

use std::io::{self, BufRead};

/// Classification of one selection line against a menu with `item_count` entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// `0`: leave the current menu
    Exit,
    /// 1-based entry number within range
    Item(usize),
    /// A number outside `0..=item_count`
    OutOfRange(i32),
    /// Not a number
    Malformed,
    /// Only whitespace
    Blank,
}

/// Classify a selection line
pub fn parse_selection(line: &str, item_count: usize) -> Selection {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Selection::Blank;
    }

    // Selections are C-style `int`s; anything wider is not a number
    let Ok(choice) = trimmed.parse::<i32>() else {
        return Selection::Malformed;
    };

    if choice == 0 {
        return Selection::Exit;
    }

    match usize::try_from(choice) {
        Ok(n) if n <= item_count => Selection::Item(n),
        _ => Selection::OutOfRange(choice),
    }
}

/// Read one line without its terminator. Returns `None` at end of input.
pub(crate) fn read_line(input: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
