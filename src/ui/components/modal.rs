//! Detail overlay component renderer.
//!
//! Renders the car-detail overlay: a centered, bordered box drawn on top of
//! whatever view is underneath. The overlay is the canonical detail surface
//! of the plugin.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailInfo;

/// Preferred overlay width; shrinks on narrow terminals.
const OVERLAY_WIDTH: usize = 58;

/// Renders the detail overlay centered in the terminal.
///
/// Layout:
///
/// ```text
/// ┌─ Car Details ──────────────┐
/// │ Name: ...                  │
/// │ ...                        │
/// │ * on wishlist              │
/// │                            │
/// │ ESC: close  w: wishlist    │
/// └────────────────────────────┘
/// ```
///
/// Content lines are clipped to the inner width; the box is positioned over
/// the underlying view without clearing the rest of the screen.
pub fn render_detail_overlay(detail: &DetailInfo, theme: &Theme, rows: usize, cols: usize) {
    let width = OVERLAY_WIDTH.min(cols.saturating_sub(4)).max(20);
    let inner = width - 2;

    let mut body: Vec<String> = detail.lines.clone();
    if detail.in_wishlist {
        body.push(String::new());
        body.push("* on wishlist".to_string());
    }

    let height = body.len() + 4;
    let top = (rows.saturating_sub(height)) / 2 + 1;
    let left = (cols.saturating_sub(width)) / 2 + 1;

    let border = Theme::fg(&theme.colors.modal_border);

    // Top border with the title embedded.
    position_cursor(top, left);
    let title = &detail.title;
    let title_len = title.chars().count().min(inner.saturating_sub(2));
    print!("{border}┌─{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print!("{}", clip(title, title_len));
    print!("{}{border}{}┐", Theme::reset(), "─".repeat(inner.saturating_sub(1 + title_len)));
    print!("{}", Theme::reset());

    for (i, line) in body.iter().enumerate() {
        position_cursor(top + 1 + i, left);
        print!("{border}│{}", Theme::reset());
        let color = if line.starts_with('*') {
            Theme::fg(&theme.colors.wishlist_fg)
        } else {
            Theme::fg(&theme.colors.text_normal)
        };
        let text = clip(line, inner.saturating_sub(2));
        print!("{color} {text}");
        print!("{}", " ".repeat(inner.saturating_sub(1 + text.chars().count())));
        print!("{border}│{}", Theme::reset());
    }

    // Blank spacer and dimmed hint line.
    let hint = "ESC: close  w: wishlist toggle";
    position_cursor(top + 1 + body.len(), left);
    print!("{border}│{}{}", Theme::reset(), " ".repeat(inner));
    print!("{border}│{}", Theme::reset());
    position_cursor(top + 2 + body.len(), left);
    let hint_text = clip(hint, inner.saturating_sub(2));
    print!("{border}│{}{} {hint_text}", Theme::reset(), Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(inner.saturating_sub(1 + hint_text.chars().count())));
    print!("{border}│{}", Theme::reset());

    position_cursor(top + 3 + body.len(), left);
    print!("{border}└{}┘{}", "─".repeat(inner), Theme::reset());
}

/// Clips a line to the given display width.
fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let kept: String = value.chars().take(width.saturating_sub(1)).collect();
        format!("{kept}\u{2026}")
    }
}
