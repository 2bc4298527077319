//! Facet option strip renderer.
//!
//! Renders one line listing the selectable values of both facets, with the
//! active selection bracketed. The options come from the full dataset, so
//! the strip never shrinks while other filters are applied.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FacetBarInfo;

/// Renders the facet option strip at the specified row.
///
/// Example: `Fuel: [any] petrol diesel electric   Body: [SUV] sedan`.
/// Truncated to the terminal width. Returns the next available row.
pub fn render_facet_bar(row: usize, facets: &FacetBarInfo, theme: &Theme, cols: usize) -> usize {
    let line = format!(" {}   {}", facets.fuel, facets.body);
    let shown: String = line.chars().take(cols).collect();

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{shown}");
    print!("{}", " ".repeat(cols.saturating_sub(shown.chars().count())));
    print!("{}", Theme::reset());
    row + 1
}
