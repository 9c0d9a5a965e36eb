use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Byte offset of the next grapheme boundary after `byte_offset`.
/// Returns None if already at the end of the string.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    match s[byte_offset..].grapheme_indices(true).nth(1) {
        Some((i, _)) => Some(byte_offset + i),
        None => Some(s.len()),
    }
}

/// Byte offset of the previous grapheme boundary before `byte_offset`.
/// Returns None if already at the start of the string.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .last()
        .map(|(i, _)| i)
}

/// Display column (terminal cells) of `byte_offset` within `s`.
pub fn byte_offset_to_display_col(s: &str, byte_offset: usize) -> usize {
    let clamped = byte_offset.min(s.len());
    display_width(&s[..clamped])
}

/// Truncate `s` to at most `max_cells` terminal cells, appending `…` when
/// anything was cut off.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let gw = UnicodeWidthStr::width(g);
        if width + gw > budget {
            break;
        }
        width += gw;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_boundaries() {
        assert_eq!(next_grapheme_boundary("abc", 0), Some(1));
        assert_eq!(next_grapheme_boundary("abc", 2), Some(3));
        assert_eq!(next_grapheme_boundary("abc", 3), None);
        assert_eq!(prev_grapheme_boundary("abc", 3), Some(2));
        assert_eq!(prev_grapheme_boundary("abc", 1), Some(0));
        assert_eq!(prev_grapheme_boundary("abc", 0), None);
    }

    #[test]
    fn multibyte_boundaries() {
        // "héllo": é is two bytes
        let s = "h\u{e9}llo";
        assert_eq!(next_grapheme_boundary(s, 1), Some(3));
        assert_eq!(prev_grapheme_boundary(s, 3), Some(1));
    }

    #[test]
    fn combining_mark_is_one_grapheme() {
        // "e" + combining acute accent
        let s = "e\u{301}x";
        assert_eq!(next_grapheme_boundary(s, 0), Some(3));
        assert_eq!(prev_grapheme_boundary(s, 3), Some(0));
    }

    #[test]
    fn display_col_counts_wide_chars() {
        assert_eq!(byte_offset_to_display_col("ab", 1), 1);
        // CJK characters are two cells wide
        assert_eq!(byte_offset_to_display_col("\u{4e2d}\u{6587}", 3), 2);
        assert_eq!(byte_offset_to_display_col("\u{4e2d}\u{6587}", 6), 4);
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 4), "hel\u{2026}");
        assert_eq!(truncate_to_width("hello", 1), "\u{2026}");
        assert_eq!(truncate_to_width("hello", 0), "");
    }
}
