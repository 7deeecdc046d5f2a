#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Selection state, user events and the rendered dashboard view.
//!
//! [`SelectionState`] is the only thing carried between renders. It changes
//! one [`DashboardEvent`] at a time; each render produces a
//! [`DashboardView`].

use quake_map_charts_models::{BarChart, Choropleth, MiniMap, PieChart, PointMap};
use quake_map_quake_models::ALL_REGIONS;
use serde::{Deserialize, Serialize};

/// The user's current filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    /// Selected year, or `None` for all years.
    pub selected_year: Option<i32>,
    /// Selected region for the pie, or [`ALL_REGIONS`].
    pub selected_region: String,
    /// Whether the plate-boundary overlay is requested.
    pub show_boundaries: bool,
    /// Bar-chart selection context. Bumped by "show all years" so that
    /// clicks made against an older context can be recognized as stale.
    pub version: u64,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            selected_year: None,
            selected_region: ALL_REGIONS.to_string(),
            show_boundaries: false,
            version: 0,
        }
    }
}

impl SelectionState {
    /// Selected year, `None` meaning all years.
    #[must_use]
    pub const fn current_year(&self) -> Option<i32> {
        self.selected_year
    }

    /// Selected region.
    #[must_use]
    pub fn current_region(&self) -> &str {
        &self.selected_region
    }

    /// Selects a single year.
    pub const fn select_year(&mut self, year: i32) {
        self.selected_year = Some(year);
    }

    /// Returns to all years and opens a fresh bar-chart selection context.
    pub const fn clear_year(&mut self) {
        self.selected_year = None;
        self.version += 1;
    }

    /// Selects the pie region.
    pub fn select_region(&mut self, region: impl Into<String>) {
        self.selected_region = region.into();
    }

    /// Whether a bar click made in context `version` is outdated.
    #[must_use]
    pub const fn is_stale(&self, version: u64) -> bool {
        version < self.version
    }
}

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardEvent {
    /// A bar of the yearly chart was clicked.
    SelectYear {
        /// Year of the clicked bar.
        year: i32,
    },
    /// The "Show all years" button was pressed.
    ShowAllYears,
    /// A region was picked in the dropdown.
    SelectRegion {
        /// The picked option.
        region: String,
    },
    /// The boundary overlay checkbox changed.
    ToggleBoundaries {
        /// New checkbox value.
        show: bool,
    },
}

/// Everything the page shows for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// The selection this view was rendered for.
    pub selection: SelectionState,
    /// "Selected year: ..." line under the bar chart.
    pub caption: String,
    /// Yearly counts over the whole dataset.
    pub bar_chart: BarChart,
    /// Epicenters of the selected year(s).
    pub point_map: PointMap,
    /// Per-region counts of the selected year(s).
    pub choropleth: Choropleth,
    /// Strongest events of the selected year(s).
    pub mini_map: MiniMap,
    /// Region dropdown entries, `"All"` first.
    pub region_options: Vec<String>,
    /// Magnitude distribution for the selected year(s) and region.
    pub pie: PieChart,
    /// Non-fatal problems to show above the charts.
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_without_selection() {
        let state = SelectionState::default();
        assert_eq!(state.current_year(), None);
        assert_eq!(state.current_region(), "All");
        assert!(!state.show_boundaries);
    }

    #[test]
    fn clearing_the_year_opens_a_new_context() {
        let mut state = SelectionState::default();
        state.select_year(2018);
        state.clear_year();
        assert_eq!(state.current_year(), None);
        assert!(state.is_stale(0));
        assert!(!state.is_stale(1));
    }

    #[test]
    fn events_deserialize_from_tagged_json() {
        let event: DashboardEvent =
            serde_json::from_str(r#"{"type":"select_year","year":2015}"#).unwrap();
        assert_eq!(event, DashboardEvent::SelectYear { year: 2015 });
        let event: DashboardEvent = serde_json::from_str(r#"{"type":"show_all_years"}"#).unwrap();
        assert_eq!(event, DashboardEvent::ShowAllYears);
    }

    #[test]
    fn selection_serializes_camel_case() {
        let json = serde_json::to_value(SelectionState::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "selectedYear": null,
                "selectedRegion": "All",
                "showBoundaries": false,
                "version": 0
            })
        );
    }
}
