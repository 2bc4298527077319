//! View model types representing renderable UI state.
//!
//! Immutable view models computed from application state, following the MVVM
//! pattern the rest of the UI layer is built around. They carry display-ready
//! data only (formatted prices, precomputed highlight ranges, overlay lines)
//! and no business logic.

/// Complete UI view model for one render pass.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Table rows for the active view, already windowed to the terminal.
    pub rows: Vec<CarRow>,

    /// Index of the selected row within `rows`.
    pub selected_index: usize,

    /// Header information (title, counts, active selections).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Facet option strip, present in the inventory view once data loaded.
    pub facet_bar: Option<FacetBarInfo>,

    /// Pagination state, present when the inventory spans multiple pages.
    pub pagination: Option<PaginationInfo>,

    /// Empty or loading state message (when no rows are available).
    pub empty_state: Option<EmptyState>,

    /// Search bar state (when in search mode).
    pub search_bar: Option<SearchBarInfo>,

    /// Detail overlay content (when a car is open).
    pub detail: Option<DetailInfo>,
}

/// Display information for a single car row.
#[derive(Debug, Clone)]
pub struct CarRow {
    /// Display name, already truncated to the column width.
    pub name: String,

    /// Manufacturer name.
    pub brand: String,

    /// Fuel facet value.
    pub fuel: String,

    /// Body facet value.
    pub body: String,

    /// Seat count as display text.
    pub seats_text: String,

    /// Price with digit grouping.
    pub price_text: String,

    /// "added Xm ago" text, present only in the wishlist view.
    pub added_ago: Option<String>,

    /// Whether this row is under the cursor.
    pub is_selected: bool,

    /// Whether this car is on the wishlist (drives the `*` indicator).
    pub in_wishlist: bool,

    /// Character ranges of search matches in `name`, `(start, end)`
    /// exclusive end.
    pub name_highlights: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Facet option strip state.
///
/// Lists every selectable value per facet, derived from the full dataset,
/// with the active selection bracketed. Display-ready strings, e.g.
/// `Fuel: [any] petrol diesel electric`.
#[derive(Debug, Clone)]
pub struct FacetBarInfo {
    /// Fuel facet line.
    pub fuel: String,

    /// Body facet line.
    pub body: String,
}

/// Pagination bar state.
#[derive(Debug, Clone)]
pub struct PaginationInfo {
    /// Requested page, 1-based.
    pub current: usize,

    /// Total number of pages in the filtered result.
    pub total: usize,
}

/// Empty or loading state message.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g. "No cars found.").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}

/// Detail overlay content.
#[derive(Debug, Clone)]
pub struct DetailInfo {
    /// Overlay title.
    pub title: String,

    /// Pre-formatted "Label: value" lines, top to bottom.
    pub lines: Vec<String>,

    /// Whether the shown car is on the wishlist.
    pub in_wishlist: bool,
}
