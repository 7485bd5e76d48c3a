//! Footer component renderer.
//!
//! This module renders the footer help bar with centered keybinding hints.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at the specified row.
///
/// Displays keybinding hints centered horizontally with dimmed styling. Pads
/// the line to fill the entire terminal width; hints longer than the terminal
/// are truncated to prevent layout corruption on narrow panes.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = &footer.keybindings;

    let text_len = help_text.chars().count().min(cols);
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{}", help_text.chars().take(text_len).collect::<String>());
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}
