//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin. It owns the fetched inventory, the current filter state, the
//! cached derived view, the wishlist, and all transient UI state (selection,
//! modes, open detail overlay, theme). View models are computed on demand
//! from state snapshots.
//!
//! # Architecture
//!
//! All mutation flows through the event handler; after each accepted
//! mutation the handler calls [`AppState::recompute_view`], which re-runs the
//! pure derived-view engine and clamps the selection. There is no implicit
//! reactivity: recomputation is an explicit call.

use crate::app::modes::{InputMode, ViewMode};
use crate::app::view::{compute_view, DerivedView, FilterState};
use crate::domain::{CarRecord, Wishlist};
use crate::ui::helpers::format_price;
use crate::ui::theme::{Theme, ThemeFlag};
use crate::ui::viewmodel::{
    CarRow, DetailInfo, EmptyState, FacetBarInfo, FooterInfo, HeaderInfo, PaginationInfo,
    SearchBarInfo, UIViewModel,
};

/// Default number of cars per page, matching the data source's page layout.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Fixed display width of the NAME column.
const NAME_COLUMN_WIDTH: usize = 22;

/// Central application state container.
///
/// Holds the immutable-after-fetch inventory plus every piece of transient UI
/// state. Mutated only by the event handler in response to user intents and
/// system events.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Full inventory from the fetch, dataset order, never mutated.
    pub cars: Vec<CarRecord>,

    /// Whether the initial fetch is still in flight.
    pub loading: bool,

    /// Current search/facet/sort/page selections.
    pub filters: FilterState,

    /// Cached result of the last [`compute_view`] run.
    ///
    /// Refreshed by [`recompute_view`](Self::recompute_view) after every
    /// accepted mutation; used for rendering and selection bounds.
    pub view: DerivedView,

    /// Cars per page handed to the derived-view engine.
    pub page_size: usize,

    /// Persisted, order-preserving, duplicate-free retained cars.
    pub wishlist: Wishlist,

    /// Zero-based cursor within the rows of the active view.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Which list the table shows.
    pub view_mode: ViewMode,

    /// Car shown in the detail overlay, if open.
    pub detail: Option<CarRecord>,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Which built-in palette is active; persisted on toggle.
    pub theme_flag: ThemeFlag,

    /// Identifier from the `detail_id` configuration key, if set.
    ///
    /// When present the plugin renders only the placeholder detail screen;
    /// the overlay opened from the list is the canonical detail surface.
    pub route_car_id: Option<String>,
}

impl AppState {
    /// Creates a new application state with an initial inventory and theme.
    ///
    /// Starts in loading state with session defaults: empty search, no facet
    /// selections, unsorted, page 1, inventory view.
    #[must_use]
    pub fn new(cars: Vec<CarRecord>, theme: Theme) -> Self {
        let mut state = Self {
            cars,
            loading: true,
            filters: FilterState::new(),
            view: DerivedView::default(),
            page_size: DEFAULT_PAGE_SIZE,
            wishlist: Wishlist::default(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            view_mode: ViewMode::Inventory,
            detail: None,
            theme,
            theme_flag: ThemeFlag::Dark,
            route_car_id: None,
        };
        state.recompute_view();
        state
    }

    /// Re-runs the derived-view engine against the current filters.
    ///
    /// Called by the event handler after every accepted mutation that can
    /// change the visible page. Clamps the selection cursor to the new row
    /// count.
    pub fn recompute_view(&mut self) {
        self.view = compute_view(&self.cars, &self.filters, self.page_size);
        self.clamp_selection();
    }

    /// Number of rows in the active view.
    #[must_use]
    pub fn row_count(&self) -> usize {
        match self.view_mode {
            ViewMode::Inventory => self.view.visible.len(),
            ViewMode::Wishlist => self.wishlist.len(),
        }
    }

    /// Moves the cursor down one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let count = self.row_count();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }

    /// Moves the cursor up one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let count = self.row_count();
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the car under the cursor, if any.
    #[must_use]
    pub fn selected_car(&self) -> Option<&CarRecord> {
        match self.view_mode {
            ViewMode::Inventory => self.view.visible.get(self.selected_index),
            ViewMode::Wishlist => self
                .wishlist
                .entries()
                .get(self.selected_index)
                .map(|entry| &entry.car),
        }
    }

    /// Clamps the cursor to the active view's row count.
    pub fn clamp_selection(&mut self) {
        let count = self.row_count();
        if count == 0 {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(count - 1);
        }
    }

    /// Computes a renderable view model from current state and terminal size.
    ///
    /// Handles the loading state, empty states, windowing of rows to the
    /// available height, substring match highlighting, pagination, and the
    /// optional detail overlay.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UIViewModel {
        if self.loading {
            return UIViewModel {
                rows: vec![],
                selected_index: 0,
                header: self.compute_header(),
                footer: self.compute_footer(),
                facet_bar: None,
                pagination: None,
                empty_state: Some(EmptyState {
                    message: "Loading inventory...".to_string(),
                    subtitle: "Fetching cars from the configured endpoint".to_string(),
                }),
                search_bar: None,
                detail: None,
            };
        }

        let total = self.row_count();
        if total == 0 {
            // While the search bar is open an empty result renders as an
            // empty table under the query, not as the full-screen message.
            let empty_state = if matches!(self.input_mode, InputMode::Search(_)) {
                None
            } else {
                Some(self.compute_empty_state())
            };
            return UIViewModel {
                rows: vec![],
                selected_index: 0,
                header: self.compute_header(),
                footer: self.compute_footer(),
                facet_bar: self.compute_facet_bar(),
                pagination: self.compute_pagination(),
                empty_state,
                search_bar: self.compute_search_bar(),
                detail: self.compute_detail(),
            };
        }

        let available_rows = self.calculate_available_rows(rows).max(1);

        // Window the rows around the cursor so long lists stay visible on
        // short terminals, keeping the window pinned at the edges.
        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(total);
        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && total >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_rows: Vec<CarRow> = (visible_start..visible_end)
            .map(|idx| self.compute_row(idx))
            .collect();

        UIViewModel {
            rows: display_rows,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header: self.compute_header(),
            footer: self.compute_footer(),
            facet_bar: self.compute_facet_bar(),
            pagination: self.compute_pagination(),
            empty_state: None,
            search_bar: self.compute_search_bar(),
            detail: self.compute_detail(),
        }
    }

    /// Builds the display row for the item at `idx` in the active view.
    fn compute_row(&self, idx: usize) -> CarRow {
        let (car, added_ago) = match self.view_mode {
            ViewMode::Inventory => (&self.view.visible[idx], None),
            ViewMode::Wishlist => {
                let entry = &self.wishlist.entries()[idx];
                (&entry.car, Some(entry.added_ago()))
            }
        };

        let name = if car.name.chars().count() > NAME_COLUMN_WIDTH - 2 {
            let truncated: String = car.name.chars().take(NAME_COLUMN_WIDTH - 5).collect();
            format!("{truncated}...")
        } else {
            car.name.clone()
        };

        let name_highlights = if self.filters.search.is_empty() {
            vec![]
        } else {
            match_ranges(&name, &self.filters.search)
        };

        CarRow {
            name,
            brand: car.brand.clone(),
            fuel: car.fuel.clone(),
            body: car.body.clone(),
            seats_text: car.seats.to_string(),
            price_text: format_price(car.price),
            added_ago,
            is_selected: idx == self.selected_index,
            in_wishlist: self.wishlist.contains(car.id),
            name_highlights,
        }
    }

    /// Header line: view name, counts, and any active facet/sort selections.
    fn compute_header(&self) -> HeaderInfo {
        let title = match self.view_mode {
            ViewMode::Inventory => {
                let mut title = format!(" Car Finder · Inventory ({}) ", self.view.visible.len());
                if let Some(fuel) = &self.filters.fuel {
                    title.push_str(&format!("· fuel={fuel} "));
                }
                if let Some(body) = &self.filters.body {
                    title.push_str(&format!("· body={body} "));
                }
                if self.filters.sort != crate::app::view::SortMode::Unsorted {
                    title.push_str(&format!("· {} ", self.filters.sort.label()));
                }
                title
            }
            ViewMode::Wishlist => format!(" Car Finder · Wishlist ({}) ", self.wishlist.len()),
        };
        HeaderInfo { title }
    }

    /// Footer keybinding hints for the current mode combination.
    fn compute_footer(&self) -> FooterInfo {
        use crate::app::modes::SearchFocus;

        let keybindings = if self.detail.is_some() {
            "ESC/Enter: close  w: wishlist toggle".to_string()
        } else {
            match (self.input_mode, self.view_mode) {
                (InputMode::Search(SearchFocus::Typing), _) => {
                    "ESC: exit search  Enter: details  Ctrl+n/p: navigate  Type to filter"
                        .to_string()
                }
                (InputMode::Search(SearchFocus::Navigating), _) => {
                    "ESC: exit search  /: edit query  j/k or Ctrl+n/p: navigate  Enter: details"
                        .to_string()
                }
                (InputMode::Normal, ViewMode::Inventory) => {
                    "j/k: move  h/l: page  /: search  f: fuel  b: body  s: sort  w: save  Enter: details  v: wishlist  d: theme  q: quit"
                        .to_string()
                }
                (InputMode::Normal, ViewMode::Wishlist) => {
                    "j/k: move  w: remove  Enter: details  i: inventory  d: theme  q: quit"
                        .to_string()
                }
            }
        };

        FooterInfo { keybindings }
    }

    /// Facet option strip for the inventory view.
    ///
    /// Options always come from the full dataset (the derived view
    /// guarantees they never shrink under other filters); the active
    /// selection is bracketed, with "any" first.
    fn compute_facet_bar(&self) -> Option<FacetBarInfo> {
        if self.view_mode != ViewMode::Inventory
            || (self.view.fuel_types.is_empty() && self.view.body_types.is_empty())
        {
            return None;
        }

        fn facet_line(label: &str, options: &[String], selected: Option<&String>) -> String {
            let mut line = format!("{label}: ");
            if selected.is_none() {
                line.push_str("[any]");
            } else {
                line.push_str("any");
            }
            for option in options {
                if Some(option) == selected {
                    line.push_str(&format!(" [{option}]"));
                } else {
                    line.push_str(&format!(" {option}"));
                }
            }
            line
        }

        Some(FacetBarInfo {
            fuel: facet_line("Fuel", &self.view.fuel_types, self.filters.fuel.as_ref()),
            body: facet_line("Body", &self.view.body_types, self.filters.body.as_ref()),
        })
    }

    /// Pagination info, shown in inventory view when more than one page
    /// exists.
    fn compute_pagination(&self) -> Option<PaginationInfo> {
        if self.view_mode != ViewMode::Inventory || self.view.total_pages <= 1 {
            return None;
        }
        Some(PaginationInfo {
            current: self.filters.page,
            total: self.view.total_pages,
        })
    }

    /// Search bar state if in search mode.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.filters.search.clone(),
            })
        } else {
            None
        }
    }

    /// Detail overlay content if a car is open.
    fn compute_detail(&self) -> Option<DetailInfo> {
        self.detail.as_ref().map(|car| DetailInfo {
            title: " Car Details ".to_string(),
            lines: vec![
                format!("Name: {}", car.name),
                format!("Brand: {}", car.brand),
                format!("Fuel Type: {}", car.fuel),
                format!("Car Type: {}", car.body),
                format!("Seats: {}", car.seats),
                format!("Price: {}", format_price(car.price)),
                format!("Description: {}", car.description_or_default()),
            ],
            in_wishlist: self.wishlist.contains(car.id),
        })
    }

    /// Empty-state message for the active view.
    fn compute_empty_state(&self) -> EmptyState {
        match self.view_mode {
            ViewMode::Inventory => EmptyState {
                message: "No cars found.".to_string(),
                subtitle: if self.cars.is_empty() {
                    "The inventory endpoint returned no data".to_string()
                } else {
                    "Try clearing the search or facet filters".to_string()
                },
            },
            ViewMode::Wishlist => EmptyState {
                message: "Your wishlist is empty.".to_string(),
                subtitle: "Press 'w' on a car in the inventory to save it".to_string(),
            },
        }
    }

    /// Rows left for the table after subtracting UI chrome.
    ///
    /// Normal layout reserves 8 rows (blank line, header, two borders,
    /// facet strip, column header, pagination, footer); search mode adds
    /// the 3-line search box.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(8),
            InputMode::Search(_) => total_rows.saturating_sub(11),
        }
    }
}

/// Character ranges of non-overlapping, case-insensitive occurrences of
/// `query` in `text`.
///
/// Ranges are `(start, end)` with exclusive end, in character indices, and
/// feed the table's match highlighting.
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }

    let hay: Vec<char> = text.to_lowercase().chars().collect();
    let needle: Vec<char> = query.to_lowercase().chars().collect();
    if needle.len() > hay.len() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= hay.len() {
        if hay[i..i + needle.len()] == needle[..] {
            ranges.push((i, i + needle.len()));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CarRecord;

    fn car(id: u64, name: &str, price: u64) -> CarRecord {
        CarRecord {
            id,
            name: name.to_string(),
            brand: "Tata".to_string(),
            fuel: "petrol".to_string(),
            body: "SUV".to_string(),
            seats: 5,
            price,
            image: String::new(),
            description: None,
        }
    }

    fn loaded_state(cars: Vec<CarRecord>) -> AppState {
        let mut state = AppState::new(cars, Theme::default());
        state.loading = false;
        state.recompute_view();
        state
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut state = loaded_state(vec![car(1, "Alto", 1), car(2, "Nexon", 2)]);

        state.move_selection_down();
        assert_eq!(state.selected_index, 1);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
        state.move_selection_up();
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn recompute_clamps_selection_to_shrunken_view() {
        let mut state = loaded_state(vec![car(1, "Alto", 1), car(2, "Nexon", 2)]);
        state.selected_index = 1;

        state.filters.search = "alto".to_string();
        state.recompute_view();
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected_car().unwrap().name, "Alto");
    }

    #[test]
    fn loading_state_produces_loading_viewmodel() {
        let state = AppState::new(vec![], Theme::default());
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.unwrap().message, "Loading inventory...");
    }

    #[test]
    fn pagination_shown_only_when_multiple_pages() {
        let few = loaded_state(vec![car(1, "Alto", 1)]);
        assert!(few.compute_viewmodel(24, 80).pagination.is_none());

        let many = loaded_state((0..25).map(|i| car(i, &format!("Car{i}"), i)).collect());
        let pagination = many.compute_viewmodel(40, 80).pagination.unwrap();
        assert_eq!(pagination.current, 1);
        assert_eq!(pagination.total, 3);
    }

    #[test]
    fn wishlist_view_rows_carry_added_ago() {
        let mut state = loaded_state(vec![car(1, "Alto", 1)]);
        state.wishlist.add(car(1, "Alto", 1));
        state.view_mode = ViewMode::Wishlist;
        state.clamp_selection();

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.rows.len(), 1);
        assert!(vm.rows[0].added_ago.is_some());
        assert!(vm.rows[0].in_wishlist);
    }

    #[test]
    fn detail_overlay_lines_include_description_fallback() {
        let mut state = loaded_state(vec![car(1, "Alto", 500_000)]);
        state.detail = Some(state.cars[0].clone());

        let vm = state.compute_viewmodel(24, 80);
        let detail = vm.detail.unwrap();
        assert!(detail
            .lines
            .iter()
            .any(|line| line == "Description: No description available."));
    }

    #[test]
    fn facet_bar_lists_options_and_brackets_selection() {
        let mut state = loaded_state(vec![car(1, "Alto", 1), car(2, "Nexon", 2)]);
        state.cars[1].fuel = "diesel".to_string();
        state.recompute_view();

        let bar = state.compute_viewmodel(24, 80).facet_bar.unwrap();
        assert_eq!(bar.fuel, "Fuel: [any] petrol diesel");

        state.filters.fuel = Some("diesel".to_string());
        state.recompute_view();
        let bar = state.compute_viewmodel(24, 80).facet_bar.unwrap();
        // The option list stays complete even though only diesel matches.
        assert_eq!(bar.fuel, "Fuel: any petrol [diesel]");
    }

    #[test]
    fn match_ranges_finds_case_insensitive_occurrences() {
        assert_eq!(match_ranges("Nexon EV", "nexon"), vec![(0, 5)]);
        assert_eq!(match_ranges("aAaA", "aa"), vec![(0, 2), (2, 4)]);
        assert!(match_ranges("Alto", "nexon").is_empty());
        assert!(match_ranges("Alto", "").is_empty());
    }
}
