//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user intents,
//! fetch completions, and worker responses, translating them into state
//! changes and action sequences.
//!
//! # Page-reset contract
//!
//! The page resets to 1 whenever the search text or either facet selection
//! changes; it is deliberately preserved when only the sort mode changes.
//! Both halves of that rule are observable behavior and covered by tests.
//!
//! # Data flow
//!
//! ```text
//! User input / fetch / worker → Event → handle_event → state mutation
//!                                        │
//!                                        └→ (should_render, Vec<Action>)
//! ```

use crate::app::modes::{InputMode, SearchFocus, ViewMode};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::CarRecord;
use crate::ui::theme::Theme;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, fetch completion, or worker responses.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves the cursor down one row (wraps to top).
    KeyDown,
    /// Moves the cursor up one row (wraps to bottom).
    KeyUp,
    /// Advances to the next page of results.
    NextPage,
    /// Goes back to the previous page of results.
    PrevPage,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Opens the detail overlay for the car under the cursor.
    ShowDetail,
    /// Closes the detail overlay.
    CloseDetail,
    /// Adds the targeted car to the wishlist, or removes it if present.
    ToggleWishlist,
    /// Advances the fuel facet selection to the next option (then back to any).
    CycleFuelFilter,
    /// Advances the body facet selection to the next option (then back to any).
    CycleBodyFilter,
    /// Advances the sort mode; the page is intentionally not reset.
    CycleSort,
    /// Enters search mode with typing focus, clearing the query.
    SearchMode,
    /// Focuses the search input field (from navigating focus).
    FocusSearchBar,
    /// Focuses the filtered results (from typing focus).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character of the search query.
    Backspace,
    /// Clears the search query and returns to normal mode.
    Escape,
    /// Switches the table to the inventory view.
    ShowInventory,
    /// Switches the table to the wishlist view.
    ShowWishlist,
    /// Flips the dark/light theme and persists the flag.
    ToggleTheme,

    /// The one-shot inventory fetch succeeded.
    InventoryLoaded {
        /// Decoded car records, dataset order.
        cars: Vec<CarRecord>,
    },

    /// The one-shot inventory fetch failed (network, status, or decode).
    ///
    /// Recovered locally: the loading flag clears and the dataset stays
    /// empty. Surfaced only via the log, never as a user-facing message.
    FetchFailed {
        /// Error description for the log.
        error: String,
    },

    /// Wraps a response from the background storage worker.
    WorkerResponse(WorkerResponse),
}

/// Returns the facet value following `current` in `options`.
///
/// Cycle order: no selection → each option in order → no selection. A
/// current value missing from the options (stale selection) wraps to no
/// selection.
fn next_facet(current: Option<&String>, options: &[String]) -> Option<String> {
    match current {
        None => options.first().cloned(),
        Some(value) => options
            .iter()
            .position(|option| option == value)
            .and_then(|idx| options.get(idx + 1))
            .cloned(),
    }
}

/// Processes an event, mutates application state, and returns the render
/// flag plus actions to execute.
///
/// # Errors
///
/// Returns errors from state mutation; the current handlers are total, so
/// the `Result` exists for parity with effectful handlers behind the same
/// call site.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::NextPage => {
            if state.view_mode != ViewMode::Inventory
                || state.filters.page >= state.view.total_pages
            {
                return Ok((false, vec![]));
            }
            state.filters.page += 1;
            state.recompute_view();
            Ok((true, vec![]))
        }
        Event::PrevPage => {
            if state.view_mode != ViewMode::Inventory || state.filters.page <= 1 {
                return Ok((false, vec![]));
            }
            state.filters.page -= 1;
            state.recompute_view();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::ShowDetail => {
            let Some(car) = state.selected_car().cloned() else {
                tracing::debug!("no car selected");
                if matches!(state.input_mode, InputMode::Search(_)) {
                    state.input_mode = InputMode::Normal;
                    state.filters.search = String::new();
                    state.filters.page = 1;
                    state.recompute_view();
                    return Ok((true, vec![]));
                }
                return Ok((false, vec![]));
            };

            tracing::debug!(car_id = car.id, car_name = %car.name, "opening detail overlay");
            state.detail = Some(car);
            Ok((true, vec![]))
        }
        Event::CloseDetail => {
            state.detail = None;
            Ok((true, vec![]))
        }
        Event::ToggleWishlist => {
            // The overlay car wins over the cursor so the toggle applies to
            // what the user is looking at.
            let Some(car) = state.detail.clone().or_else(|| state.selected_car().cloned()) else {
                return Ok((false, vec![]));
            };

            let changed = if state.wishlist.contains(car.id) {
                tracing::debug!(car_id = car.id, "removing car from wishlist");
                state.wishlist.remove(car.id)
            } else {
                tracing::debug!(car_id = car.id, "adding car to wishlist");
                state.wishlist.add(car)
            };

            if !changed {
                return Ok((false, vec![]));
            }

            if state.view_mode == ViewMode::Wishlist {
                state.clamp_selection();
            }

            // Full snapshot after every accepted mutation; last write wins.
            let snapshot = state.wishlist.entries().to_vec();
            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::save_wishlist(snapshot))],
            ))
        }
        Event::CycleFuelFilter => {
            if state.view.fuel_types.is_empty() {
                return Ok((false, vec![]));
            }
            state.filters.fuel = next_facet(state.filters.fuel.as_ref(), &state.view.fuel_types);
            state.filters.page = 1;
            state.recompute_view();
            Ok((true, vec![]))
        }
        Event::CycleBodyFilter => {
            if state.view.body_types.is_empty() {
                return Ok((false, vec![]));
            }
            state.filters.body = next_facet(state.filters.body.as_ref(), &state.view.body_types);
            state.filters.page = 1;
            state.recompute_view();
            Ok((true, vec![]))
        }
        Event::CycleSort => {
            state.filters.sort = state.filters.sort.cycled();
            // Sort-only change: the page is preserved by contract.
            state.recompute_view();
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.filters.search = String::new();
            state.filters.page = 1;
            state.recompute_view();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.filters.search.is_empty() {
                state.input_mode = InputMode::Normal;
                state.recompute_view();
                return Ok((true, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.filters.search, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.filters.search = String::new();
            state.filters.page = 1;
            state.recompute_view();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            state.filters.search.push(*c);
            state.filters.page = 1;
            state.recompute_view();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            state.filters.search.pop();
            state.filters.page = 1;
            state.recompute_view();
            Ok((true, vec![]))
        }
        Event::Escape => {
            state.input_mode = InputMode::Normal;
            state.filters.search = String::new();
            state.filters.page = 1;
            state.recompute_view();
            Ok((true, vec![]))
        }
        Event::ShowInventory => {
            state.view_mode = ViewMode::Inventory;
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::ShowWishlist => {
            state.view_mode = ViewMode::Wishlist;
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::ToggleTheme => {
            state.theme_flag = state.theme_flag.toggled();
            state.theme = Theme::from_flag(state.theme_flag);
            tracing::debug!(flag = state.theme_flag.as_str(), "theme toggled");
            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::save_theme(
                    state.theme_flag.as_str().to_string(),
                ))],
            ))
        }
        Event::InventoryLoaded { cars } => {
            tracing::debug!(car_count = cars.len(), "inventory loaded");
            state.cars.clone_from(cars);
            state.loading = false;
            state.recompute_view();
            Ok((true, vec![]))
        }
        Event::FetchFailed { error } => {
            tracing::error!(error = %error, "inventory fetch failed, falling back to empty dataset");
            state.loading = false;
            state.recompute_view();
            Ok((true, vec![]))
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::WishlistLoaded { entries } => {
                tracing::debug!(entry_count = entries.len(), "wishlist loaded from storage");
                state.wishlist = crate::domain::Wishlist::from_entries(entries.clone());
                if state.view_mode == ViewMode::Wishlist {
                    state.clamp_selection();
                }
                Ok((true, vec![]))
            }
            WorkerResponse::WishlistSaved { count } => {
                tracing::debug!(entry_count = count, "wishlist snapshot written");
                Ok((false, vec![]))
            }
            WorkerResponse::ThemeLoaded { flag } => {
                let Some(flag) = flag.as_deref().and_then(crate::ui::theme::ThemeFlag::parse)
                else {
                    return Ok((false, vec![]));
                };
                if flag == state.theme_flag {
                    return Ok((false, vec![]));
                }
                state.theme_flag = flag;
                state.theme = Theme::from_flag(flag);
                Ok((true, vec![]))
            }
            WorkerResponse::ThemeSaved { flag } => {
                tracing::debug!(flag = %flag, "theme flag written");
                Ok((false, vec![]))
            }
            WorkerResponse::Error { message } => {
                tracing::error!("worker error: {}", message);
                Ok((false, vec![]))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::view::SortMode;
    use crate::ui::theme::Theme;

    fn car(id: u64, name: &str, fuel: &str, body: &str, price: u64) -> CarRecord {
        CarRecord {
            id,
            name: name.to_string(),
            brand: "Tata".to_string(),
            fuel: fuel.to_string(),
            body: body.to_string(),
            seats: 5,
            price,
            image: String::new(),
            description: None,
        }
    }

    fn fleet(count: u64) -> Vec<CarRecord> {
        (0..count)
            .map(|i| car(i, &format!("Car{i}"), "petrol", "sedan", 100 + i))
            .collect()
    }

    fn loaded_state(cars: Vec<CarRecord>) -> AppState {
        let mut state = AppState::new(vec![], Theme::default());
        handle_event(&mut state, &Event::InventoryLoaded { cars }).unwrap();
        state
    }

    #[test]
    fn inventory_loaded_clears_loading_and_computes_facets() {
        let state = loaded_state(vec![
            car(1, "Alto", "petrol", "hatchback", 500_000),
            car(2, "Nexon", "diesel", "SUV", 900_000),
        ]);
        assert!(!state.loading);
        assert_eq!(state.view.fuel_types, vec!["petrol", "diesel"]);
        assert_eq!(state.view.body_types, vec!["hatchback", "SUV"]);
    }

    #[test]
    fn fetch_failure_leaves_empty_dataset() {
        let mut state = AppState::new(vec![], Theme::default());
        let (render, actions) = handle_event(
            &mut state,
            &Event::FetchFailed {
                error: "status 500".to_string(),
            },
        )
        .unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(!state.loading);
        assert!(state.cars.is_empty());
        assert_eq!(state.view.total_pages, 0);
    }

    #[test]
    fn typing_search_resets_page_to_one() {
        let mut state = loaded_state(fleet(25));
        handle_event(&mut state, &Event::NextPage).unwrap();
        assert_eq!(state.filters.page, 2);

        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::NextPage).unwrap();
        handle_event(&mut state, &Event::Char('c')).unwrap();
        assert_eq!(state.filters.page, 1);
    }

    #[test]
    fn facet_change_resets_page_to_one() {
        let mut state = loaded_state(fleet(25));
        handle_event(&mut state, &Event::NextPage).unwrap();
        assert_eq!(state.filters.page, 2);

        handle_event(&mut state, &Event::CycleFuelFilter).unwrap();
        assert_eq!(state.filters.page, 1);
        assert_eq!(state.filters.fuel.as_deref(), Some("petrol"));
    }

    #[test]
    fn sort_change_preserves_page() {
        let mut state = loaded_state(fleet(25));
        handle_event(&mut state, &Event::NextPage).unwrap();
        assert_eq!(state.filters.page, 2);

        handle_event(&mut state, &Event::CycleSort).unwrap();
        assert_eq!(state.filters.sort, SortMode::PriceLowToHigh);
        assert_eq!(state.filters.page, 2);
    }

    #[test]
    fn facet_cycle_wraps_back_to_any() {
        let mut state = loaded_state(vec![
            car(1, "Alto", "petrol", "hatchback", 1),
            car(2, "Nexon", "diesel", "SUV", 2),
        ]);

        handle_event(&mut state, &Event::CycleFuelFilter).unwrap();
        assert_eq!(state.filters.fuel.as_deref(), Some("petrol"));
        handle_event(&mut state, &Event::CycleFuelFilter).unwrap();
        assert_eq!(state.filters.fuel.as_deref(), Some("diesel"));
        handle_event(&mut state, &Event::CycleFuelFilter).unwrap();
        assert_eq!(state.filters.fuel, None);
    }

    #[test]
    fn page_navigation_respects_bounds() {
        let mut state = loaded_state(fleet(25));

        let (render, _) = handle_event(&mut state, &Event::PrevPage).unwrap();
        assert!(!render);
        assert_eq!(state.filters.page, 1);

        handle_event(&mut state, &Event::NextPage).unwrap();
        handle_event(&mut state, &Event::NextPage).unwrap();
        assert_eq!(state.filters.page, 3);

        let (render, _) = handle_event(&mut state, &Event::NextPage).unwrap();
        assert!(!render);
        assert_eq!(state.filters.page, 3);
    }

    #[test]
    fn wishlist_toggle_emits_full_snapshot() {
        let mut state = loaded_state(vec![car(1, "Alto", "petrol", "hatchback", 1)]);

        let (_, actions) = handle_event(&mut state, &Event::ToggleWishlist).unwrap();
        assert!(state.wishlist.contains(1));
        match &actions[..] {
            [Action::PostToWorker(WorkerMessage::SaveWishlist { entries, .. })] => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].car.id, 1);
            }
            other => panic!("unexpected actions: {other:?}"),
        }

        let (_, actions) = handle_event(&mut state, &Event::ToggleWishlist).unwrap();
        assert!(!state.wishlist.contains(1));
        match &actions[..] {
            [Action::PostToWorker(WorkerMessage::SaveWishlist { entries, .. })] => {
                assert!(entries.is_empty());
            }
            other => panic!("unexpected actions: {other:?}"),
        }
    }

    #[test]
    fn wishlist_toggle_targets_open_detail_overlay() {
        let mut state = loaded_state(vec![
            car(1, "Alto", "petrol", "hatchback", 1),
            car(2, "Nexon", "diesel", "SUV", 2),
        ]);
        state.detail = Some(state.cars[1].clone());

        handle_event(&mut state, &Event::ToggleWishlist).unwrap();
        assert!(state.wishlist.contains(2));
        assert!(!state.wishlist.contains(1));
    }

    #[test]
    fn show_detail_opens_selected_car() {
        let mut state = loaded_state(vec![car(1, "Alto", "petrol", "hatchback", 1)]);

        handle_event(&mut state, &Event::ShowDetail).unwrap();
        assert_eq!(state.detail.as_ref().unwrap().id, 1);

        handle_event(&mut state, &Event::CloseDetail).unwrap();
        assert!(state.detail.is_none());
    }

    #[test]
    fn theme_toggle_flips_flag_and_persists() {
        let mut state = loaded_state(vec![]);
        assert_eq!(state.theme_flag, crate::ui::theme::ThemeFlag::Dark);

        let (_, actions) = handle_event(&mut state, &Event::ToggleTheme).unwrap();
        assert_eq!(state.theme_flag, crate::ui::theme::ThemeFlag::Light);
        match &actions[..] {
            [Action::PostToWorker(WorkerMessage::SaveTheme { flag, .. })] => {
                assert_eq!(flag, "light");
            }
            other => panic!("unexpected actions: {other:?}"),
        }
    }

    #[test]
    fn stored_theme_flag_applies_on_load() {
        let mut state = loaded_state(vec![]);
        let (render, _) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::ThemeLoaded {
                flag: Some("light".to_string()),
            }),
        )
        .unwrap();
        assert!(render);
        assert_eq!(state.theme.name, "light");

        // Unknown flag values are ignored.
        let (render, _) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::ThemeLoaded {
                flag: Some("sepia".to_string()),
            }),
        )
        .unwrap();
        assert!(!render);
        assert_eq!(state.theme.name, "light");
    }
}
