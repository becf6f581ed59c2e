//! Whitespace normalization for the measurement substrate.
//!
//! Rendering substrates collapse leading and trailing spaces, which would
//! silently shorten the glyph run and shift every character index. Before
//! measuring, a single leading and/or trailing ASCII space is rewritten to a
//! no-break space (U+00A0), which measures like a space but survives the
//! substrate. Interior whitespace is left alone.

/// The non-collapsing replacement for a boundary space.
pub const NO_BREAK_SPACE: char = '\u{00A0}';

/// Rewrite a leading and/or trailing space so the substrate cannot trim it.
///
/// Each replaced space maps to exactly one replacement character, so the
/// character count and the 1:1 index correspondence with the input are
/// preserved. The function is idempotent.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    let count = text.chars().count();

    for (i, ch) in text.chars().enumerate() {
        if ch == ' ' && (i == 0 || i == count - 1) {
            out.push(NO_BREAK_SPACE);
        } else {
            out.push(ch);
        }
    }

    out
}
