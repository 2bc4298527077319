//! Input and view mode state types for the application.
//!
//! These enums control which keybindings are active, how typed characters are
//! interpreted, and which list the table shows. The detail overlay is not a
//! mode: it is an `Option<CarRecord>` on the state, because it layers on top
//! of whichever view is active.

/// Focus state within search mode.
///
/// Determines whether keystrokes edit the query or navigate the filtered
/// results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    Typing,

    /// User is navigating through filtered results with the query kept.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (move), h/l (page), / (search), Enter
    /// (details), w (wishlist toggle), f/b (facets), s (sort), v/i (views),
    /// d (theme), q (quit).
    Normal,

    /// Active search mode with a [`SearchFocus`] variant.
    Search(SearchFocus),
}

/// Which list the table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// The fetched inventory, filtered/sorted/paged by the derived view.
    Inventory,

    /// The persisted wishlist, in insertion order, unpaged.
    Wishlist,
}
