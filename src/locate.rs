/// A 1-based line/column position in a text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

/// Map a character offset to a line/column for display.
///
/// Walks the first `offset` characters counting line breaks, the same
/// way the path scanner tracks positions. Offsets past the end of the
/// text clamp to the last position. Column is clamped to 1 so an offset
/// sitting right after a line break still lands on the new line.
///
/// ```
/// use scry_json::locate::{locate, Location};
///
/// assert_eq!(locate("abc\ndef", 5), Location { line: 2, column: 1 });
/// ```
pub fn locate(text: &str, offset: usize) -> Location {
    let mut line = 1;
    let mut column = 0;
    for c in text.chars().take(offset) {
        if c == '\n' {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }
    }
    Location { line, column: column.max(1) }
}

/// Map serde_json's 1-based line/column error position to a character
/// offset for [`crate::ScryError`].
///
/// serde_json counts `column` in bytes from the start of the line, so
/// the conversion resolves the byte position first and then counts the
/// characters before it. Positions past the end of the text land at
/// the end.
pub fn offset_at(text: &str, line: usize, column: usize) -> usize {
    let mut line_start = 0;
    let mut current = 1;
    while current < line {
        match text[line_start..].find('\n') {
            Some(i) => {
                line_start += i + 1;
                current += 1;
            }
            None => {
                line_start = text.len();
                break;
            }
        }
    }
    let target = (line_start + column.saturating_sub(1)).min(text.len());
    text.char_indices().take_while(|&(i, _)| i < target).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_second_line() {
        assert_eq!(locate("abc\ndef", 5), Location { line: 2, column: 1 });
        assert_eq!(locate("abc\ndef", 6), Location { line: 2, column: 2 });
    }

    #[test]
    fn test_locate_start_of_text() {
        assert_eq!(locate("abc", 0), Location { line: 1, column: 1 });
    }

    #[test]
    fn test_locate_right_after_line_break() {
        // Offset 4 points at the first character of line 2.
        assert_eq!(locate("abc\ndef", 4), Location { line: 2, column: 1 });
    }

    #[test]
    fn test_locate_clamps_past_end() {
        assert_eq!(locate("abc", 100), Location { line: 1, column: 3 });
        assert_eq!(locate("abc\n", 100), Location { line: 2, column: 1 });
    }

    #[test]
    fn test_locate_empty_text() {
        assert_eq!(locate("", 0), Location { line: 1, column: 1 });
        assert_eq!(locate("", 7), Location { line: 1, column: 1 });
    }

    #[test]
    fn test_locate_counts_characters_not_bytes() {
        // 'é' is two bytes but one character.
        assert_eq!(locate("é\nx", 2), Location { line: 2, column: 1 });
    }

    #[test]
    fn test_offset_at_round_trips() {
        let text = "first\nsecond\nthird";
        let offset = offset_at(text, 2, 4);
        assert_eq!(offset, 9);
        assert_eq!(locate(text, offset), Location { line: 2, column: 3 });
    }

    #[test]
    fn test_offset_at_first_line() {
        assert_eq!(offset_at("abc", 1, 1), 0);
        assert_eq!(offset_at("abc", 1, 3), 2);
    }

    #[test]
    fn test_offset_at_clamps_past_end() {
        assert_eq!(offset_at("ab", 5, 1), 2);
        assert_eq!(offset_at("ab", 1, 99), 2);
    }

    #[test]
    fn test_offset_at_counts_byte_columns() {
        // serde_json columns are byte counts; 'é' is two bytes but one character.
        assert_eq!(offset_at("héé: x", 1, 7), 4);
        assert_eq!(offset_at("a\nbé é", 2, 5), 5);
    }
}
