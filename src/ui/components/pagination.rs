//! Pagination bar component renderer.
//!
//! Renders a centered page strip sized to the total page count, with the
//! current page emphasized. Long page ranges are windowed around the current
//! page so the strip always fits.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

/// Maximum number of page entries shown at once.
const MAX_VISIBLE_PAGES: usize = 9;

/// Renders the pagination strip at the specified row.
///
/// Example output for page 3 of 7: `‹  1 2 [3] 4 5 6 7  ›`. The `‹`/`›`
/// markers are dimmed when no previous/next page exists. Returns the next
/// available row.
pub fn render_pagination(row: usize, info: &PaginationInfo, theme: &Theme, cols: usize) -> usize {
    let (first, last) = visible_range(info.current, info.total);

    let mut strip = String::new();
    strip.push_str(if info.current > 1 { "\u{2039}  " } else { "   " });
    for page in first..=last {
        if page == info.current {
            strip.push_str(&format!("[{page}] "));
        } else {
            strip.push_str(&format!("{page} "));
        }
    }
    strip.push_str(if info.current < info.total { " \u{203a}" } else { "  " });

    let strip_len = strip.chars().count().min(cols);
    let padding = (cols.saturating_sub(strip_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{strip}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + strip_len)));
    print!("{}", Theme::reset());
    row + 1
}

/// Computes the inclusive `(first, last)` page window around the current
/// page.
fn visible_range(current: usize, total: usize) -> (usize, usize) {
    if total <= MAX_VISIBLE_PAGES {
        return (1, total);
    }

    let half = MAX_VISIBLE_PAGES / 2;
    let first = current.saturating_sub(half).max(1);
    let last = (first + MAX_VISIBLE_PAGES - 1).min(total);
    let first = last.saturating_sub(MAX_VISIBLE_PAGES - 1).max(1);
    (first, last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_ranges_show_every_page() {
        assert_eq!(visible_range(1, 3), (1, 3));
        assert_eq!(visible_range(3, 3), (1, 3));
        assert_eq!(visible_range(5, 9), (1, 9));
    }

    #[test]
    fn long_ranges_window_around_current() {
        assert_eq!(visible_range(1, 20), (1, 9));
        assert_eq!(visible_range(10, 20), (6, 14));
        assert_eq!(visible_range(20, 20), (12, 20));
    }
}
