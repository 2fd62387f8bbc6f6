/*!
 * Tests for reading range computation
 */

use easyread::reading::{char_len, clamp_position, reading_range, slice_chars, word_at, word_starts};
use easyread::session::ReadingSession;

/// Test the range for a session resumed in the middle of the text
#[test]
fn test_readingRange_withResumedSession_shouldReadRemainder() {
    let session = ReadingSession::new("one two three", 4, true);

    let range = reading_range(session.text_or_empty(), session.position, true, None);

    assert_eq!(slice_chars(session.text_or_empty(), range), "two three");
}

/// Test that a stale position never panics and reads the whole text
#[test]
fn test_readingRange_withStalePosition_shouldReadWholeText() {
    let text = "short";

    let range = reading_range(text, 9999, true, None);

    assert_eq!(range, 0..5);
}

/// Test that a selection beyond the text is clamped
#[test]
fn test_readingRange_withSelectionPastEnd_shouldClamp() {
    let text = "abcdef";

    let range = reading_range(text, 0, false, Some(3..100));

    assert_eq!(range, 3..6);
}

/// Test that an empty selection reads everything
#[test]
fn test_readingRange_withEmptySelection_shouldReadWholeText() {
    let text = "abcdef";

    let range = reading_range(text, 0, false, Some(2..2));

    assert_eq!(range, 0..6);
}

/// Test that offsets count characters rather than bytes
#[test]
fn test_readingRange_withAccentedText_shouldCountCharacters() {
    let text = "città è bella";

    let range = reading_range(text, 8, true, None);

    assert_eq!(char_len(text), 13);
    assert_eq!(slice_chars(text, range), "bella");
}

/// Test clamping of extreme positions
#[test]
fn test_clampPosition_withExtremeValues_shouldStayInBounds() {
    assert_eq!(clamp_position(i64::MIN, 10), 0);
    assert_eq!(clamp_position(i64::MAX, 10), 10);
    assert_eq!(clamp_position(7, 10), 7);
}

/// Test that word starts line up with word ranges
#[test]
fn test_wordStarts_withSentence_shouldMatchWords() {
    let text = "  Hello,  brave new\nworld";

    let words: Vec<&str> = word_starts(text)
        .into_iter()
        .map(|start| slice_chars(text, word_at(text, start)))
        .collect();

    assert_eq!(words, vec!["Hello,", "brave", "new", "world"]);
}

/// Test slicing with an inverted range
#[test]
fn test_sliceChars_withInvertedRange_shouldBeEmpty() {
    #[allow(clippy::reversed_empty_ranges)]
    let range = 4..2;
    assert_eq!(slice_chars("abcdef", range), "");
}
