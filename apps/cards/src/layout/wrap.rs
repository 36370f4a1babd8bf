//! Greedy word-wrap on a character budget.
//!
//! Words are packed onto a line while they fit. A hyphenated word such as
//! `play-action` may break after its hyphen. A fragment longer than the whole
//! line fills whatever is left of the current line and continues on the next.
//! Runs of whitespace collapse to a single space.

/// A piece of a word that may start a new line, and whether a space separates
/// it from the previous piece.
struct Fragment<'a> {
    text: &'a str,
    spaced: bool,
}

/// Splits `word` after each hyphen that sits between letters, with at least
/// two letters before it (`Touch-down` breaks, `x-ray` and `A--B` do not).
fn hyphen_fragments(word: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let mut fragments = Vec::new();
    let mut start = 0;

    for i in 2..chars.len().saturating_sub(1) {
        let (offset, c) = chars[i];
        if c == '-'
            && chars[i - 1].1.is_alphabetic()
            && chars[i - 2].1.is_alphabetic()
            && chars[i + 1].1.is_alphabetic()
        {
            let end = offset + c.len_utf8();
            fragments.push(&word[start..end]);
            start = end;
        }
    }
    fragments.push(&word[start..]);
    fragments
}

/// Wraps `text` into lines of at most `width` characters.
///
/// An empty (or all-whitespace) string returns no lines. A `width` of 0 is
/// treated as 1.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let fragments = text.split_whitespace().flat_map(|word| {
        hyphen_fragments(word)
            .into_iter()
            .enumerate()
            .map(|(i, text)| Fragment { text, spaced: i == 0 })
    });

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for fragment in fragments {
        let mut rest = fragment.text;
        let mut spaced = fragment.spaced;

        while !rest.is_empty() {
            let sep = usize::from(spaced && current_len > 0);
            let len = rest.chars().count();

            if current_len + sep + len <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(rest);
                current_len += sep + len;
                break;
            }

            if len > width {
                // fill the rest of this line with the head of the fragment
                let room = width.saturating_sub(current_len + sep);
                if room > 0 {
                    let split = rest.char_indices().nth(room).map_or(rest.len(), |(at, _)| at);
                    if sep == 1 {
                        current.push(' ');
                    }
                    current.push_str(&rest[..split]);
                    current_len += sep + room;
                    rest = &rest[split..];
                }
            }

            lines.push(std::mem::take(&mut current));
            current_len = 0;
            spaced = false;
        }
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_empty_returns_no_lines() {
        assert!(wrap_words("", 10).is_empty());
        assert!(wrap_words("   \t ", 10).is_empty());
    }

    #[test]
    fn test_wrap_short_text_single_line() {
        assert_eq!(wrap_words("Coin toss", 20), vec!["Coin toss"]);
    }

    #[test]
    fn test_wrap_breaks_at_word_boundaries() {
        let lines = wrap_words("the quick brown fox jumps over", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps over"]);
    }

    #[test]
    fn test_wrap_exact_fit_stays_on_line() {
        assert_eq!(wrap_words("abcd efgh", 9), vec!["abcd efgh"]);
        assert_eq!(wrap_words("abcd efgh", 8), vec!["abcd", "efgh"]);
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        assert_eq!(wrap_words("  a \n  b\tc  ", 20), vec!["a b c"]);
    }

    #[test]
    fn test_wrap_long_word_is_split() {
        let lines = wrap_words("abcdefghijklmnopqrstuvwxyz", 8);
        assert_eq!(lines, vec!["abcdefgh", "ijklmnop", "qrstuvwx", "yz"]);
    }

    #[test]
    fn test_wrap_long_word_fills_remaining_line() {
        let lines = wrap_words("go abcdefghij ok", 8);
        assert_eq!(lines, vec!["go abcde", "fghij ok"]);
    }

    // ── hyphens ─────────────────────────────────────────────────────────────

    #[test]
    fn test_wrap_breaks_after_hyphens() {
        let lines = wrap_words("Touchdown-celebration-dance", 16);
        assert_eq!(lines, vec!["Touchdown-", "celebration-", "dance"]);
    }

    #[test]
    fn test_wrap_hyphenated_pieces_share_a_line() {
        let lines = wrap_words("Two-point conversion attempt", 12);
        assert_eq!(lines, vec!["Two-point", "conversion", "attempt"]);
        let lines = wrap_words("Coach wears a half-zip", 12);
        assert_eq!(lines, vec!["Coach wears", "a half-zip"]);
        let lines = wrap_words("Coach wears a half-zip", 9);
        assert_eq!(lines, vec!["Coach", "wears a", "half-zip"]);
    }

    #[test]
    fn test_wrap_hyphen_break_rejoins_without_space() {
        let lines = wrap_words("Play-action pass", 8);
        assert_eq!(lines, vec!["Play-", "action", "pass"]);
        assert_eq!(lines.concat(), "Play-actionpass");
    }

    #[test]
    fn test_hyphen_fragments_need_letters_on_both_sides() {
        assert_eq!(hyphen_fragments("Touch-down"), vec!["Touch-", "down"]);
        assert_eq!(hyphen_fragments("x-ray"), vec!["x-ray"]);
        assert_eq!(hyphen_fragments("49-ers"), vec!["49-ers"]);
        assert_eq!(hyphen_fragments("end--zone"), vec!["end--zone"]);
        assert_eq!(hyphen_fragments("trailing-"), vec!["trailing-"]);
        assert_eq!(hyphen_fragments("-lead"), vec!["-lead"]);
    }

    #[test]
    fn test_wrap_no_line_exceeds_width() {
        let text = "Referee throws a challenge flag on a disputed catch in the end zone";
        for width in 1..30 {
            for line in wrap_words(text, width) {
                assert!(
                    line.chars().count() <= width,
                    "line {line:?} longer than {width}"
                );
            }
        }
    }

    #[test]
    fn test_wrap_preserves_words_in_order() {
        let text = "one two three four five six";
        let joined = wrap_words(text, 9).join(" ");
        assert_eq!(joined, text);
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        assert_eq!(wrap_words("été été", 7), vec!["été été"]);
    }

    #[test]
    fn test_wrap_zero_width_treated_as_one() {
        assert_eq!(wrap_words("ab", 0), vec!["a", "b"]);
    }
}
