//! Composable UI component renderers.
//!
//! Each component renders one part of the interface; this module provides
//! the layout functions that stitch them together.
//!
//! # Components
//!
//! - [`header`]: title bar with counts and active selections
//! - [`facets`]: facet option strip with the selection bracketed
//! - [`footer`]: keybinding hints
//! - [`search`]: search input box
//! - [`table`]: car list with NAME/BRAND/FUEL/TYPE/SEATS/PRICE columns
//! - [`pagination`]: centered page strip sized to the total page count
//! - [`modal`]: detail overlay drawn on top of the active view
//! - [`empty`]: centered message for loading/empty/placeholder states
//!
//! # Layout Modes
//!
//! - [`render_normal_mode`]: header + facets + table + pagination + footer
//! - [`render_search_mode`]: the same with the search bar inserted

mod empty;
mod facets;
mod footer;
mod header;
mod modal;
mod pagination;
mod search;
mod table;

pub use empty::render_empty_state;
pub use modal::render_detail_overlay;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, UIViewModel};

use facets::render_facet_bar;
use footer::render_footer;
use header::render_header;
use pagination::render_pagination;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// Returns the next available row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the normal mode layout (no search bar).
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Table Headers]
/// [Table Rows]
/// [Blank padding]
/// [Pagination]
/// [Border]
/// [Footer]
/// ```
pub fn render_normal_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Row 1 stays blank.

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(facets) = &vm.facet_bar {
        current_row = render_facet_bar(current_row, facets, theme, cols);
    }
    let with_added = vm.rows.iter().any(|r| r.added_ago.is_some());
    current_row = render_table_headers(current_row, theme, with_added);
    let _current_row = render_table_rows(current_row, &vm.rows, theme, cols);

    render_bottom_chrome(vm, theme, cols, rows);
}

/// Renders the search mode layout (with the 3-line search bar).
pub fn render_search_mode(
    vm: &UIViewModel,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2; // Row 1 stays blank.

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, search, theme, cols);
    if let Some(facets) = &vm.facet_bar {
        current_row = render_facet_bar(current_row, facets, theme, cols);
    }
    let with_added = vm.rows.iter().any(|r| r.added_ago.is_some());
    current_row = render_table_headers(current_row, theme, with_added);
    let _current_row = render_table_rows(current_row, &vm.rows, theme, cols);

    render_bottom_chrome(vm, theme, cols, rows);
}

/// Renders the pagination strip, bottom border, and footer anchored to the
/// last terminal rows.
fn render_bottom_chrome(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let pagination_row = border_row.saturating_sub(1);

    if let Some(pagination) = &vm.pagination {
        render_pagination(pagination_row, pagination, theme, cols);
    }
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
