//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with record counts and build target
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search input box (border, query text)
//! - [`table`]: Evility table with columns and row styling
//! - [`pagination`]: Rows-per-page, record range, and page position bar
//! - [`empty`]: Empty state message for no rows
//!
//! # Layout Modes
//!
//! The module provides two high-level layout functions:
//!
//! - [`render_normal_mode`]: Header + Table + Pagination + Footer
//! - [`render_search_mode`]: Header + `SearchBar` + Table + Pagination + Footer

mod empty;
mod footer;
mod header;
mod pagination;
mod search;
mod table;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, UiViewModel};

use footer::render_footer;
use header::render_header;
use pagination::render_pagination;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/table, table/footer).
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the detail line for the cursor row at the specified row.
///
/// Shows exclusivity, scroll restriction, and notes for the selected record,
/// dimmed and left-aligned. Truncated to the terminal width.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_detail(row: usize, detail: &str, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", Theme::italic());

    let text: String = detail.chars().take(cols.saturating_sub(1)).collect();
    print!(" {text}");
    print!(
        "{}",
        " ".repeat(cols.saturating_sub(text.chars().count() + 1))
    );

    print!("{}", Theme::reset());
    row + 1
}

/// Renders the normal mode layout (no search bar).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Table Headers]
/// [Table Rows]
/// [Blank padding to fill screen]
/// [Detail line, when present]
/// [Pagination]
/// [Border]
/// [Footer]
/// ```
pub fn render_normal_mode(vm: &UiViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_table_headers(current_row, theme, cols, vm.show_numbers);
    let _current_row = render_table_rows(current_row, &vm.rows, theme, cols, vm.show_numbers);

    render_bottom_chrome(vm, theme, cols, rows);
}

/// Renders the search mode layout (with search bar).
///
/// Same as normal mode with a 3-line search box between the header border
/// and the table headers.
pub fn render_search_mode(
    vm: &UiViewModel,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, search, theme, cols);
    current_row = render_table_headers(current_row, theme, cols, vm.show_numbers);
    let _current_row = render_table_rows(current_row, &vm.rows, theme, cols, vm.show_numbers);

    render_bottom_chrome(vm, theme, cols, rows);
}

/// Renders the fixed bottom chrome: detail, pagination, border, footer.
fn render_bottom_chrome(vm: &UiViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let pagination_row = border_row.saturating_sub(1);
    let detail_row = pagination_row.saturating_sub(1);

    if let Some(detail) = &vm.detail {
        render_detail(detail_row, detail, theme, cols);
    }
    render_pagination(pagination_row, &vm.pagination, theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
