//! Shared rendering utilities.
//!
//! Low-level helpers used across the UI components: cursor positioning,
//! search-match highlighting with ANSI sequences, and price formatting.

use crate::ui::theme::Theme;

/// Positions the cursor at a 1-indexed row and column via `\x1b[{row};{col}H`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Formats a price in integer units with digit grouping (1500000 → "1,500,000").
#[must_use]
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Renders text with highlighted character ranges for search matches.
///
/// Ranges are `(start, end)` character indices with exclusive end. Match
/// highlighting is suppressed on selected rows, where the selection
/// background takes precedence.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        if start > current_pos {
            let normal_section: String = chars[current_pos..start.min(chars.len())].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start.min(chars.len())..end.min(chars.len())]
            .iter()
            .collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());

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
    fn price_grouping() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(999), "999");
        assert_eq!(format_price(1_000), "1,000");
        assert_eq!(format_price(500_000), "500,000");
        assert_eq!(format_price(1_500_000), "1,500,000");
        assert_eq!(format_price(1_234_567_890), "1,234,567,890");
    }
}
