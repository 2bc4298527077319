//! Table component renderer.
//!
//! Renders the car list as a fixed-column table: NAME, BRAND, FUEL, TYPE,
//! SEATS, and a right-aligned PRICE, plus an ADDED column in the wishlist
//! view. Supports selection highlighting, search match highlighting on the
//! name, and a `*` wishlist membership indicator.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CarRow;

/// Display width of the NAME column (including the indicator).
const NAME_WIDTH: usize = 22;
/// Display width of the BRAND column.
const BRAND_WIDTH: usize = 14;
/// Display width of the FUEL column.
const FUEL_WIDTH: usize = 10;
/// Display width of the TYPE column.
const BODY_WIDTH: usize = 12;
/// Display width of the SEATS column.
const SEATS_WIDTH: usize = 6;
/// Display width of the right-aligned PRICE column.
const PRICE_WIDTH: usize = 12;

/// Renders the table column headers at the specified row.
///
/// Returns the next available row.
pub fn render_table_headers(row: usize, theme: &Theme, with_added: bool) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{:<NAME_WIDTH$} {:<BRAND_WIDTH$} {:<FUEL_WIDTH$} {:<BODY_WIDTH$} {:<SEATS_WIDTH$} {:>PRICE_WIDTH$}",
        "NAME", "BRAND", "FUEL", "TYPE", "SEATS", "PRICE"
    );
    if with_added {
        print!("  ADDED");
    }
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// Returns the next available row.
pub fn render_table_rows(row: usize, rows_data: &[CarRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in rows_data {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single car row.
///
/// Styling precedence:
/// 1. Selection colors (full-row background)
/// 2. Search match highlights on the name (unless selected)
/// 3. Per-column colors (price, dimmed ADDED)
///
/// The line is padded to the full terminal width so the selection background
/// covers the whole row.
fn render_table_row(row: usize, item: &CarRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let mut used = 0;

    if item.in_wishlist {
        print!("{}", Theme::fg(&theme.colors.wishlist_fg));
        print!("* ");
        if item.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        used += 2;
    }

    if item.name_highlights.is_empty() {
        print!("{}", item.name);
    } else {
        helpers::render_highlighted_text(&item.name, &item.name_highlights, theme, item.is_selected);
    }
    used += item.name.chars().count();
    print!("{}", " ".repeat(NAME_WIDTH.saturating_sub(used) + 1));

    print!("{:<BRAND_WIDTH$} ", clip(&item.brand, BRAND_WIDTH));
    print!("{:<FUEL_WIDTH$} ", clip(&item.fuel, FUEL_WIDTH));
    print!("{:<BODY_WIDTH$} ", clip(&item.body, BODY_WIDTH));
    print!("{:<SEATS_WIDTH$} ", item.seats_text);

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.price_fg));
    }
    print!("{:>PRICE_WIDTH$}", item.price_text);
    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let mut line_len =
        NAME_WIDTH + 1 + BRAND_WIDTH + 1 + FUEL_WIDTH + 1 + BODY_WIDTH + 1 + SEATS_WIDTH + 1 + PRICE_WIDTH;

    if let Some(added) = &item.added_ago {
        if !item.is_selected {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("  {added}");
        line_len += 2 + added.chars().count();
    }

    print!("{}", " ".repeat(cols.saturating_sub(line_len)));
    print!("{}", Theme::reset());
    row + 1
}

/// Truncates a value to its column width, marking the cut with `…`.
fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let kept: String = value.chars().take(width.saturating_sub(1)).collect();
        format!("{kept}\u{2026}")
    }
}
