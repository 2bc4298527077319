//! Empty state component renderer.
//!
//! Renders the centered two-line message used for the loading state, the
//! "No cars found." state, the empty wishlist, and the detail-route
//! placeholder.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message.
///
/// Both lines are horizontally centered, the primary message at row 6 in the
/// `empty_state_fg` color and the subtitle at row 7 dimmed.
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, cols: usize) {
    let msg_len = empty.message.chars().count();
    let msg_padding = (cols.saturating_sub(msg_len)) / 2;

    position_cursor(6, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{}", empty.message);
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let sub_len = empty.subtitle.chars().count();
    let sub_padding = (cols.saturating_sub(sub_len)) / 2;

    position_cursor(7, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{}", empty.subtitle);
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());
}
