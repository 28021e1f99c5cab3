//! Line parser for quiz files.
//!
//! # Format
//! One question per line:
//! ```text
//! 答：2 _Which is a systems language?(1)Ruby(2)Rust(3)PHP(4)Perl
//! ```
//! The prefix `答：` is followed by the correct option (1-4), the `" _"`
//! separator, the question text and the four options introduced by the
//! markers `(1)` to `(4)`.

use crate::error::{ParseError, Result};
use crate::types::{QuizRecord, OPTION_COUNT};

/// Leading token of every quiz line.
pub const PREFIX: &str = "答：";

/// Token between the answer digit and the question text.
pub const SEPARATOR: &str = " _";

/// Option markers in the order they must appear.
pub const OPTION_MARKERS: [&str; OPTION_COUNT] = ["(1)", "(2)", "(3)", "(4)"];

const BOM: char = '\u{feff}';

/// Parse a whole document, one record per line.
///
/// Stops at the first invalid line. A byte-order mark at the start of the
/// document is ignored.
pub fn parse(content: &str) -> Result<Vec<QuizRecord>> {
    strip_bom(content)
        .lines()
        .enumerate()
        .map(|(idx, line)| parse_line(line, idx + 1))
        .collect()
}

/// Remove a leading UTF-8 byte-order mark, if any.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}

/// Parse a single line. `line_number` is 1-based and only used for errors.
pub fn parse_line(line: &str, line_number: usize) -> Result<QuizRecord> {
    let fail = |make: fn(usize, String) -> ParseError| make(line_number, line.to_string());

    let body = line
        .strip_prefix(PREFIX)
        .ok_or_else(|| fail(|line, content| ParseError::MissingPrefix { line, content }))?;

    let first = body.chars().next();
    let digit = first
        .and_then(answer_digit)
        .ok_or_else(|| fail(|line, content| ParseError::InvalidAnswerDigit { line, content }))?;
    if !(1..=OPTION_COUNT as u32).contains(&digit) {
        return Err(ParseError::AnswerOutOfRange {
            line: line_number,
            content: line.to_string(),
            digit,
        });
    }

    let digit_len = first.map_or(0, char::len_utf8);
    if !body[digit_len..].contains(SEPARATOR) {
        return Err(fail(|line, content| ParseError::MissingSeparator { line, content }));
    }

    // digit + the two separator characters
    let rest = body.char_indices().nth(3).map_or("", |(idx, _)| &body[idx..]);

    let mut positions = [0usize; OPTION_COUNT];
    for (slot, marker) in positions.iter_mut().zip(OPTION_MARKERS) {
        *slot = rest.find(marker).ok_or_else(|| ParseError::IncompleteOptions {
            line: line_number,
            content: line.to_string(),
            marker,
        })?;
    }

    if positions.windows(2).any(|pair| pair[0] > pair[1]) {
        return Err(fail(|line, content| ParseError::OutOfOrderOptions { line, content }));
    }

    Ok(extract(rest, &positions, digit as u8))
}

/// Slice question and options out of `rest` using the marker positions.
///
/// Markers cannot overlap each other, so every option slice is well formed.
/// Value of an ASCII or full-width (`０`..`９`) decimal digit.
fn answer_digit(c: char) -> Option<u32> {
    c.to_digit(10).or_else(|| {
        ('０'..='９')
            .contains(&c)
            .then(|| c as u32 - '０' as u32)
    })
}

fn extract(rest: &str, positions: &[usize; OPTION_COUNT], correct: u8) -> QuizRecord {
    let question = rest[..positions[0]].trim().to_string();

    let options = std::array::from_fn(|idx| {
        let start = positions[idx] + OPTION_MARKERS[idx].len();
        let end = positions.get(idx + 1).copied().unwrap_or(rest.len());
        rest[start..end].trim().to_string()
    });

    QuizRecord {
        question,
        options,
        correct,
    }
}
