#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the quake map server.
//!
//! These types are serialized to JSON for the REST API. The chart payloads
//! themselves are the dashboard's view types, embedded unchanged.

use quake_map_dashboard_models::{DashboardEvent, DashboardView};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the server is healthy.
    pub healthy: bool,
    /// Server version.
    pub version: String,
    /// Number of rows in the loaded dataset.
    pub rows: usize,
}

/// A dashboard session and its current render.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSession {
    /// Session ID.
    pub id: Uuid,
    /// Current dashboard view.
    pub view: DashboardView,
}

/// Body of `POST /api/sessions/{id}/events`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEvent {
    /// Selection version the client rendered from. Year clicks from an
    /// older version are rejected.
    #[serde(default)]
    pub version: Option<u64>,
    /// The interaction.
    pub event: DashboardEvent,
}

/// JSON error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message.
    pub error: String,
}

impl ApiError {
    /// Creates an error body.
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Query parameters for the region options endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionQueryParams {
    /// Restrict options to regions present in this year.
    pub year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_body_without_version() {
        let body: ApiEvent =
            serde_json::from_str(r#"{"event":{"type":"select_region","region":"Greece"}}"#)
                .unwrap();
        assert_eq!(body.version, None);
        assert_eq!(
            body.event,
            DashboardEvent::SelectRegion {
                region: "Greece".to_string()
            }
        );
    }

    #[test]
    fn error_body_shape() {
        let json = serde_json::to_value(ApiError::new("Session not found")).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Session not found" }));
    }
}
