//! Pagination bar component renderer.
//!
//! This module renders the pagination strip under the table: the current
//! rows-per-page choice, the visible record range, and the page position.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

/// Renders the pagination bar at the specified row.
///
/// Layout:
///
/// ```text
///  Rows: 30   1-30 of 312   Page 1/11
/// ```
///
/// The rows-per-page value and the page position use the accent color; the
/// rest of the bar is dimmed. The line is padded to the terminal width.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_pagination(row: usize, info: &PaginationInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let range = if info.total == 0 {
        "0 of 0".to_string()
    } else {
        format!("{}-{} of {}", info.first, info.last, info.total)
    };
    let page = format!("Page {}/{}", info.page + 1, info.page_count);

    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(" Rows: ");
    print!(
        "{}{}{}",
        Theme::fg(&theme.colors.accent_fg),
        info.rows_label,
        Theme::fg(&theme.colors.text_dim)
    );
    print!("   {range}   ");
    print!(
        "{}{}{}",
        Theme::fg(&theme.colors.accent_fg),
        page,
        Theme::fg(&theme.colors.text_dim)
    );

    let text_len = " Rows: ".len() + info.rows_label.len() + 3 + range.len() + 3 + page.len();
    print!("{}", " ".repeat(cols.saturating_sub(text_len)));

    print!("{}", Theme::reset());
    row + 1
}
