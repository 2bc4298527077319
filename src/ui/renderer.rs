//! Top-level rendering coordinator.
//!
//! Computes the view model from application state and delegates to the
//! component renderers. Handles the special screens (route placeholder,
//! loading/empty states) and draws the detail overlay last so it sits on top
//! of the active view.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, UIViewModel};

/// Renders the plugin UI to stdout.
///
/// Does not clear the screen or manage cursor visibility; Zellij owns the
/// pane lifecycle.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    if let Some(id) = &state.route_car_id {
        // The parameterized detail route renders only a placeholder; the
        // overlay opened from the list is the canonical detail surface.
        let placeholder = EmptyState {
            message: "Car Details Page".to_string(),
            subtitle: format!("Showing details for car ID: {id}"),
        };
        components::render_empty_state(&placeholder, &state.theme, cols);
        return;
    }

    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Renders a view model with mode-specific layout.
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(empty) = &vm.empty_state {
        components::render_empty_state(empty, theme, cols);
    } else if let Some(search) = &vm.search_bar {
        components::render_search_mode(vm, search, theme, cols, rows);
    } else {
        components::render_normal_mode(vm, theme, cols, rows);
    }

    if let Some(detail) = &vm.detail {
        components::render_detail_overlay(detail, theme, rows, cols);
    }
}
