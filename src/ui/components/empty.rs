//! Empty state component renderer.
//!
//! This module renders the message displayed when no table rows are
//! available: either the dataset has not loaded yet, or nothing passes the
//! current filters.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message.
///
/// Displays a centered two-line message. The message uses the
/// `empty_state_fg` theme color and the subtitle uses `text_dim` with dim
/// styling. The message is positioned at row 6, the subtitle at row 7.
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, cols: usize) {
    let msg_len = empty.message.chars().count();
    let msg_padding = cols.saturating_sub(msg_len) / 2;

    position_cursor(6, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{}", empty.message);
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let sub_len = empty.subtitle.chars().count();
    let sub_padding = cols.saturating_sub(sub_len) / 2;

    position_cursor(7, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{}", empty.subtitle);
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());
}
