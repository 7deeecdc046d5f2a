#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Interactive dashboard core.
//!
//! A render is a pure function of the selection state, the loaded table and
//! the overlay outcome. Interactions go through [`reduce`]; nothing else
//! survives between renders.

pub mod selection;
pub mod view;

pub use quake_map_dashboard_models::{DashboardEvent, DashboardView, SelectionState};
pub use selection::reduce;
pub use view::{Overlay, render};
