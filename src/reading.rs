use std::ops::Range;

// @module: Reading range computation
//
// All offsets in this module are character (Unicode scalar) offsets, the
// same unit the reading session stores its position in.

// @returns: Number of characters in text
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Clamp a stored position into `[0, len]`
pub fn clamp_position(position: i64, len: usize) -> usize {
    if position <= 0 {
        0
    } else {
        usize::try_from(position).map_or(len, |p| p.min(len))
    }
}

/// Compute which part of `text` should be read next
///
/// - With `resume_from_last_point` the range runs from `position` to the end.
/// - Otherwise the user's `selection` is used, if there is one.
/// - When that range is empty the whole text is read.
///
/// Out-of-range positions and selections are clamped, so a stale position
/// paired with a shorter text never panics; at worst it falls back to reading
/// the whole text.
pub fn reading_range(
    text: &str,
    position: i64,
    resume_from_last_point: bool,
    selection: Option<Range<usize>>,
) -> Range<usize> {
    let len = char_len(text);

    let range = if resume_from_last_point {
        clamp_position(position, len)..len
    } else {
        match selection {
            Some(sel) => {
                let start = sel.start.min(len);
                let end = sel.end.clamp(start, len);
                start..end
            }
            None => 0..0,
        }
    };

    if range.is_empty() { 0..len } else { range }
}

/// Slice `text` by a character range
pub fn slice_chars(text: &str, range: Range<usize>) -> &str {
    let start = byte_offset(text, range.start);
    let end = byte_offset(text, range.end.max(range.start));
    &text[start..end]
}

// @returns: Byte offset of the char at char_index, or text.len() past the end
fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map_or(text.len(), |(byte, _)| byte)
}

/// Character offsets at which a word starts
pub fn word_starts(text: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut in_word = false;

    for (index, ch) in text.chars().enumerate() {
        if ch.is_whitespace() {
            in_word = false;
        } else if !in_word {
            starts.push(index);
            in_word = true;
        }
    }

    starts
}

/// Character range of the word starting at `start`
pub fn word_at(text: &str, start: usize) -> Range<usize> {
    let length = text
        .chars()
        .skip(start)
        .take_while(|c| !c.is_whitespace())
        .count();
    start..start + length
}
