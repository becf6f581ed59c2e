//! Discrete cursor motion over a text.
//!
//! Pure helpers for the navigation commands a host drives with the keyboard:
//! single steps, word skips, and line jumps. All of them take and return
//! [`CursorIndex`] values in the post-character convention and never leave
//! the valid range `[-1, len - 1]`, so stepping left at the start of the
//! line stays put instead of walking off the text.

use unicode_segmentation::UnicodeSegmentation;

use crate::resolver::CursorIndex;

/// Move one boundary to the left, clamped at the start of the text.
pub fn step_left(index: CursorIndex, text: &str) -> CursorIndex {
    CursorIndex::new(index.value() - 1).clamp_for(text.chars().count())
}

/// Move one boundary to the right, clamped at the end of the text.
pub fn step_right(index: CursorIndex, text: &str) -> CursorIndex {
    CursorIndex::new(index.value() + 1).clamp_for(text.chars().count())
}

/// The boundary before the first character.
pub fn line_start() -> CursorIndex {
    CursorIndex::BEFORE_FIRST
}

/// The boundary after the last character.
pub fn line_end(text: &str) -> CursorIndex {
    CursorIndex::after_last(text.chars().count())
}

/// Move to the boundary just before the start of the previous word.
///
/// A word is a segment containing at least one alphanumeric character, per
/// Unicode word segmentation. With no word start left of the cursor this
/// lands on the start of the line.
pub fn word_left(index: CursorIndex, text: &str) -> CursorIndex {
    let len = text.chars().count();
    let boundary = (index.clamp_for(len).value() + 1) as usize;

    word_segments(text)
        .iter()
        .rev()
        .find(|(start, _)| *start < boundary)
        .map(|(start, _)| CursorIndex::new(*start as i32 - 1))
        .unwrap_or(CursorIndex::BEFORE_FIRST)
}

/// Move to the boundary at the end of the next word.
///
/// With no word end right of the cursor this lands on the end of the line.
pub fn word_right(index: CursorIndex, text: &str) -> CursorIndex {
    let len = text.chars().count();
    let boundary = (index.clamp_for(len).value() + 1) as usize;

    word_segments(text)
        .iter()
        .find(|(_, end)| *end > boundary)
        .map(|(_, end)| CursorIndex::new(*end as i32 - 1))
        .unwrap_or_else(|| CursorIndex::after_last(len))
}

/// Word segments as `(start, end)` character positions, in text order.
fn word_segments(text: &str) -> Vec<(usize, usize)> {
    let mut segments = Vec::new();
    let mut char_pos = 0;

    for (_, segment) in text.split_word_bound_indices() {
        let char_len = segment.chars().count();
        if segment.chars().any(char::is_alphanumeric) {
            segments.push((char_pos, char_pos + char_len));
        }
        char_pos += char_len;
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_move_one_boundary_and_clamp() {
        let text = "  tomato  ";
        let end = line_end(text);
        assert_eq!(end, CursorIndex::new(9));

        let left_twice = step_left(step_left(end, text), text);
        assert_eq!(left_twice, CursorIndex::new(7));

        let back = step_right(step_right(left_twice, text), text);
        assert_eq!(back, end);

        // Clamped at both extremes.
        assert_eq!(step_right(end, text), end);
        assert_eq!(
            step_left(CursorIndex::BEFORE_FIRST, text),
            CursorIndex::BEFORE_FIRST
        );
    }

    #[test]
    fn left_step_at_line_start_stays_clamped() {
        let text = "  x  ";
        let at_start = line_start();
        assert_eq!(step_left(at_start, text), CursorIndex::BEFORE_FIRST);
    }

    #[test]
    fn word_left_walks_word_starts() {
        // Character positions: "this" at 2..6, "is" at 7..9, "a" at 10..11,
        // "tomato" at 12..18.
        let text = "  this is a tomato  ";
        let mut index = line_end(text);
        assert_eq!(index, CursorIndex::new(19));

        index = word_left(index, text);
        assert_eq!(index, CursorIndex::new(11));
        index = word_left(index, text);
        assert_eq!(index, CursorIndex::new(9));
        index = word_left(index, text);
        assert_eq!(index, CursorIndex::new(6));
        index = word_left(index, text);
        assert_eq!(index, CursorIndex::new(1));
        index = word_left(index, text);
        assert_eq!(index, CursorIndex::BEFORE_FIRST);
    }

    #[test]
    fn word_right_walks_word_ends() {
        let text = "  this is a tomato  ";
        let mut index = CursorIndex::BEFORE_FIRST;

        index = word_right(index, text);
        assert_eq!(index, CursorIndex::new(5));
        index = word_right(index, text);
        assert_eq!(index, CursorIndex::new(8));
        index = word_right(index, text);
        assert_eq!(index, CursorIndex::new(10));
        index = word_right(index, text);
        assert_eq!(index, CursorIndex::new(17));
        index = word_right(index, text);
        assert_eq!(index, CursorIndex::new(19));
    }

    #[test]
    fn word_motion_on_empty_text() {
        assert_eq!(word_left(CursorIndex::new(3), ""), CursorIndex::BEFORE_FIRST);
        assert_eq!(word_right(CursorIndex::new(-5), ""), CursorIndex::BEFORE_FIRST);
    }

    #[test]
    fn line_jumps() {
        let text = "  x  ";
        assert_eq!(line_start(), CursorIndex::BEFORE_FIRST);
        assert_eq!(line_end(text), CursorIndex::new(4));
        assert_eq!(line_end(""), CursorIndex::BEFORE_FIRST);
    }
}
