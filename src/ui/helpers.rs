//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components: cursor positioning, width-aware cell fitting, and search match
//! highlighting with proper ANSI escape sequence management.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses the ANSI escape sequence `\x1b[{row};{col}H`. Coordinates are
/// 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Truncates text to `width` characters, replacing the last kept character
/// with "…" when the text overflows. No padding is added.
#[must_use]
pub fn truncate_text(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= width {
        return chars.into_iter().collect();
    }

    let mut out: String = chars[..width - 1].iter().collect();
    out.push('…');
    out
}

/// Fits text into a fixed-width cell.
///
/// Truncates via [`truncate_text`] and right-pads with spaces to exactly
/// `width`. Operates on characters, not bytes, so multi-byte names do not
/// split.
#[must_use]
pub fn fit_cell(text: &str, width: usize) -> String {
    let mut out = truncate_text(text, width);
    let len = out.chars().count();
    out.push_str(&" ".repeat(width.saturating_sub(len)));
    out
}

/// Number of characters the text occupies inside a cell of the given width.
///
/// This is `min(chars, width)`; used by callers that style a cell in segments
/// and need to know how much padding remains.
#[must_use]
pub fn cell_len(text: &str, width: usize) -> usize {
    text.chars().count().min(width)
}

/// Renders text with highlighted character ranges for search matches.
///
/// Splits the text into highlighted and normal sections based on the provided
/// character ranges. Highlighted sections use the match highlight colors
/// unless the row is selected, in which case selection colors take
/// precedence and highlighting is skipped entirely.
///
/// Ranges use character indices (not bytes), end exclusive, and may extend
/// past the (possibly truncated) text; out-of-range portions are clipped.
///
/// # Output
///
/// Prints to stdout using ANSI escape sequences:
/// - Normal sections: whatever style the caller set beforehand
/// - Highlighted sections: `match_highlight_fg` + `match_highlight_bg`
/// - After each highlight the caller-provided `restore` sequence is emitted
///   so surrounding styling resumes
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, restore: &str) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{restore}");

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_cell_pads_short_text() {
        assert_eq!(fit_cell("abc", 5), "abc  ");
        assert_eq!(fit_cell("", 3), "   ");
    }

    #[test]
    fn fit_cell_truncates_with_ellipsis() {
        assert_eq!(fit_cell("abcdefgh", 5), "abcd…");
        assert_eq!(fit_cell("abcde", 5), "abcde");
    }

    #[test]
    fn fit_cell_is_char_aware() {
        assert_eq!(fit_cell("日本語のテキスト", 4), "日本語…");
        assert_eq!(fit_cell("日本", 4), "日本  ");
    }

    #[test]
    fn fit_cell_zero_width_is_empty() {
        assert_eq!(fit_cell("abc", 0), "");
    }

    #[test]
    fn cell_len_clamps_to_width() {
        assert_eq!(cell_len("abc", 10), 3);
        assert_eq!(cell_len("abcdefgh", 4), 4);
    }
}
