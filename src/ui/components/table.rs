//! Table component renderer.
//!
//! This module renders the evility list as a multi-column table with optional
//! ordinal numbers, flag-derived row styling, and search match highlighting.
//!
//! # Columns
//!
//! ```text
//! No. | NAME | CATEGORY | DESCRIPTION | COST | TYPE | SOURCE
//! ```
//!
//! The No. column is present only when ordinals are enabled. NAME, CATEGORY,
//! COST, and TYPE have fixed widths; DESCRIPTION and SOURCE split the
//! remaining terminal width.
//!
//! # Row Styling Precedence
//!
//! 1. Selection colors (cursor row)
//! 2. Locked rows: dimmed + struck through
//! 3. Enemy-only rows: tinted background, bold name in the enemy color
//! 4. Rows exclusive to the current build target: highlighted background
//! 5. Normal text color
//!
//! DLC names are italic and unique TYPE cells underlined on top of the above.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayRow;

/// Width of the ordinal column (when shown).
const NUMBER_WIDTH: usize = 4;
/// Width of the NAME column.
const NAME_WIDTH: usize = 24;
/// Width of the CATEGORY column.
const CATEGORY_WIDTH: usize = 10;
/// Width of the COST column.
const COST_WIDTH: usize = 4;
/// Width of the TYPE column.
const KIND_WIDTH: usize = 7;

/// Marker glyph for evilities fixed to a character.
const FIXED_MARKER: char = '†';
/// Marker glyph for evilities that cannot become scrolls.
const NO_SCROLL_MARKER: char = '‡';

/// Per-column character widths for the current terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Ordinal column width, 0 when hidden.
    pub number: usize,
    pub name: usize,
    pub category: usize,
    pub description: usize,
    pub cost: usize,
    pub kind: usize,
    pub source: usize,
}

impl ColumnLayout {
    /// Computes column widths for a terminal `cols` wide.
    ///
    /// Fixed columns keep their width; DESCRIPTION gets three fifths of the
    /// remaining space and SOURCE the rest. One space separates columns.
    #[must_use]
    pub fn fit(cols: usize, show_numbers: bool) -> Self {
        let number = if show_numbers { NUMBER_WIDTH } else { 0 };
        let gaps = if show_numbers { 6 } else { 5 };
        let fixed = number + NAME_WIDTH + CATEGORY_WIDTH + COST_WIDTH + KIND_WIDTH;

        let flex = cols.saturating_sub(fixed + gaps);
        let description = flex * 3 / 5;
        let source = flex - description;

        Self {
            number,
            name: NAME_WIDTH,
            category: CATEGORY_WIDTH,
            description,
            cost: COST_WIDTH,
            kind: KIND_WIDTH,
            source,
        }
    }

    /// Total characters a row occupies, including separators.
    #[must_use]
    pub fn total(&self) -> usize {
        let gaps = if self.number > 0 { 6 } else { 5 };
        self.number + self.name + self.category + self.description + self.cost + self.kind
            + self.source
            + gaps
    }
}

/// Renders the table column headers at the specified row.
///
/// Displays the column names with bold styling and theme colors.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize, show_numbers: bool) -> usize {
    let layout = ColumnLayout::fit(cols, show_numbers);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));

    if layout.number > 0 {
        print!("{} ", helpers::fit_cell("No.", layout.number));
    }
    print!("{} ", helpers::fit_cell("NAME", layout.name));
    print!("{} ", helpers::fit_cell("CATEGORY", layout.category));
    print!("{} ", helpers::fit_cell("DESCRIPTION", layout.description));
    print!("{} ", helpers::fit_cell("COST", layout.cost));
    print!("{} ", helpers::fit_cell("TYPE", layout.kind));
    print!("{}", helpers::fit_cell("SOURCE", layout.source));

    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_table_rows(
    row: usize,
    items: &[DisplayRow],
    theme: &Theme,
    cols: usize,
    show_numbers: bool,
) -> usize {
    let layout = ColumnLayout::fit(cols, show_numbers);
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols, &layout);
    }
    current_row
}

/// Base style sequence for a row, derived from its emphasis flags.
///
/// Returned as a string so highlight rendering can restore it after each
/// highlighted segment.
fn row_style(item: &DisplayRow, theme: &Theme) -> String {
    if item.is_selected {
        let mut style = format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        );
        if item.locked {
            style.push_str(Theme::strike());
        }
        return style;
    }

    if item.locked {
        return format!(
            "{}{}{}",
            Theme::fg(&theme.colors.locked_fg),
            Theme::dim(),
            Theme::strike()
        );
    }

    if item.enemy_only {
        return format!(
            "{}{}",
            Theme::bg(&theme.colors.enemy_row_bg),
            Theme::fg(&theme.colors.text_normal)
        );
    }

    if item.exclusive {
        return format!(
            "{}{}",
            Theme::bg(&theme.colors.exclusive_row_bg),
            Theme::fg(&theme.colors.text_normal)
        );
    }

    Theme::fg(&theme.colors.text_normal)
}

/// Renders a single table row at the specified row position.
///
/// The row is padded to the terminal width so background colors cover the
/// whole line.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_table_row(
    row: usize,
    item: &DisplayRow,
    theme: &Theme,
    cols: usize,
    layout: &ColumnLayout,
) -> usize {
    position_cursor(row, 1);

    let base = row_style(item, theme);
    print!("{base}");

    if layout.number > 0 {
        let label = match item.ordinal {
            Some(0) | None => "-".to_string(),
            Some(n) => n.to_string(),
        };
        print!("{:>width$} ", label, width = layout.number);
    }

    render_name_cell(item, theme, layout, &base);

    print!("{} ", helpers::fit_cell(&item.category, layout.category));
    print!(
        "{} ",
        helpers::fit_cell(&item.description, layout.description)
    );
    print!("{:>width$} ", item.cost, width = layout.cost);

    render_kind_cell(item, theme, layout, &base);

    print!("{}", helpers::fit_cell(&item.source, layout.source));

    let padding = cols.saturating_sub(layout.total());
    print!("{}", " ".repeat(padding));

    print!("{}", Theme::reset());
    row + 1
}

/// Renders the NAME cell with emphasis, markers, and match highlighting.
///
/// Names are always bold; enemy-only names use the enemy color and DLC names
/// are italic. Fixed and non-scrollable records get trailing marker glyphs in
/// the accent color. Match highlighting is skipped on the cursor row so it
/// never fights the selection background.
fn render_name_cell(item: &DisplayRow, theme: &Theme, layout: &ColumnLayout, base: &str) {
    let marker_count = usize::from(item.fixed_owner.is_some()) + usize::from(item.not_scrollable);
    let text_width = layout.name.saturating_sub(marker_count);
    let display_name = helpers::truncate_text(&item.name, text_width);

    let mut name_style = String::from(Theme::bold());
    if !item.is_selected && !item.locked {
        if item.enemy_only {
            name_style.push_str(&Theme::fg(&theme.colors.enemy_fg));
        } else if item.dlc {
            name_style.push_str(&Theme::fg(&theme.colors.dlc_fg));
        }
    }
    if item.dlc {
        name_style.push_str(Theme::italic());
    }

    print!("{name_style}");

    let restore = format!("{base}{name_style}");
    if item.is_selected {
        print!("{display_name}");
    } else {
        helpers::render_highlighted_text(&display_name, &item.highlight_ranges, theme, &restore);
    }

    // Italic and bold must not bleed into the markers or the next cell.
    print!("{}{base}", Theme::reset());

    if item.fixed_owner.is_some() {
        if item.is_selected || item.locked {
            print!("{FIXED_MARKER}");
        } else {
            print!(
                "{}{FIXED_MARKER}{}{base}",
                Theme::fg(&theme.colors.accent_fg),
                Theme::reset()
            );
        }
    }
    if item.not_scrollable {
        if item.is_selected || item.locked {
            print!("{NO_SCROLL_MARKER}");
        } else {
            print!(
                "{}{NO_SCROLL_MARKER}{}{base}",
                Theme::fg(&theme.colors.accent_fg),
                Theme::reset()
            );
        }
    }

    let used = helpers::cell_len(&display_name, layout.name) + marker_count;
    print!("{} ", " ".repeat(layout.name.saturating_sub(used)));
}

/// Renders the TYPE cell; unique records are underlined in the unique color.
fn render_kind_cell(item: &DisplayRow, theme: &Theme, layout: &ColumnLayout, base: &str) {
    if item.unique && !item.is_selected && !item.locked {
        print!(
            "{}{}{}{}{base} ",
            Theme::fg(&theme.colors.unique_fg),
            Theme::underline(),
            helpers::fit_cell(&item.kind, layout.kind),
            Theme::reset()
        );
    } else {
        print!("{} ", helpers::fit_cell(&item.kind, layout.kind));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_accounts_for_number_column() {
        let with_numbers = ColumnLayout::fit(120, true);
        let without = ColumnLayout::fit(120, false);

        assert_eq!(with_numbers.number, NUMBER_WIDTH);
        assert_eq!(without.number, 0);
        assert!(without.description >= with_numbers.description);
        assert_eq!(with_numbers.total(), 120);
        assert_eq!(without.total(), 120);
    }

    #[test]
    fn layout_survives_narrow_terminals() {
        let layout = ColumnLayout::fit(20, true);
        assert_eq!(layout.description, 0);
        assert_eq!(layout.source, 0);
        // Fixed columns keep their widths; the row renderer pads/truncates.
        assert_eq!(layout.name, NAME_WIDTH);
    }

    #[test]
    fn flex_split_favors_description() {
        let layout = ColumnLayout::fit(160, true);
        assert!(layout.description > layout.source);
        assert_eq!(layout.total(), 160);
    }
}
