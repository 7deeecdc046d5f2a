//! The event reducer.
//!
//! [`SelectionState`] changes exclusively through [`reduce`], one user event
//! at a time.

use quake_map_dashboard_models::{DashboardEvent, SelectionState};

/// Applies `event` to `state`, returning the next state.
#[must_use]
pub fn reduce(mut state: SelectionState, event: DashboardEvent) -> SelectionState {
    match event {
        DashboardEvent::SelectYear { year } => state.select_year(year),
        DashboardEvent::ShowAllYears => state.clear_year(),
        DashboardEvent::SelectRegion { region } => state.select_region(region),
        DashboardEvent::ToggleBoundaries { show } => state.show_boundaries = show,
    }
    state
}
