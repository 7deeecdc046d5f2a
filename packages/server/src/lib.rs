#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the earthquake dashboard.
//!
//! Loads the earthquake CSV once at startup and serves per-session
//! dashboard renders as JSON chart definitions. Each session keeps its
//! own selection state; every event re-runs the whole pipeline. The plate
//! boundary overlay is fetched lazily (and cached) only for sessions that
//! enable it; a failed fetch becomes a warning in the view.

pub mod config;
mod handlers;
pub mod sessions;

use std::path::PathBuf;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use chrono::TimeDelta;
use quake_map_quake_models::EarthquakeTable;
use quake_map_source::SourceError;
use quake_map_tectonics::{BoundaryFetcher, BoundaryProvider, TectonicsError};
use thiserror::Error;

pub use config::ServerConfig;
use sessions::SessionStore;

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The config file could not be read.
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid.
    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    /// The earthquake dataset could not be loaded.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The boundary fetcher could not be built.
    #[error(transparent)]
    Tectonics(#[from] TectonicsError),

    /// Binding or running the HTTP server failed.
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shared application state.
pub struct AppState {
    /// The loaded dataset. Never mutated.
    pub table: Arc<EarthquakeTable>,
    /// Plate boundary source for the map overlay.
    pub boundaries: Arc<dyn BoundaryProvider>,
    /// URL handed to `boundaries`.
    pub tectonics_url: String,
    /// Live dashboard sessions.
    pub sessions: SessionStore,
}

impl AppState {
    /// Creates state with no sessions.
    #[must_use]
    pub fn new(
        table: Arc<EarthquakeTable>,
        boundaries: Arc<dyn BoundaryProvider>,
        tectonics_url: impl Into<String>,
    ) -> Self {
        Self {
            table,
            boundaries,
            tectonics_url: tectonics_url.into(),
            sessions: SessionStore::default(),
        }
    }

    /// Replaces the session store with one expiring sessions after `idle`.
    #[must_use]
    pub fn with_session_idle(mut self, idle: TimeDelta) -> Self {
        self.sessions = SessionStore::new(idle);
        self
    }
}

/// Registers the `/api` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/regions", web::get().to(handlers::regions))
            .route("/sessions", web::post().to(handlers::create_session))
            .route("/sessions/{id}", web::get().to(handlers::get_session))
            .route("/sessions/{id}", web::delete().to(handlers::delete_session))
            .route("/sessions/{id}/events", web::post().to(handlers::post_event)),
    );
}

/// Starts the dashboard API server.
///
/// Loads the dataset, builds the boundary fetcher and runs the Actix-Web
/// HTTP server until shutdown. The caller provides the async runtime (e.g.
/// via `#[actix_web::main]`).
///
/// # Errors
///
/// * [`ServerError::Source`] if the dataset is missing or unreadable
/// * [`ServerError::Tectonics`] if the HTTP client cannot be built
/// * [`ServerError::Io`] if the server fails to bind or run
#[allow(clippy::future_not_send)]
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    log::info!("Loading earthquake data from {}...", config.data_path.display());
    let table = quake_map_source::datasets().load(&config.data_path)?;
    log::info!("Loaded {} earthquakes", table.len());

    let fetcher = BoundaryFetcher::new(config.fetch_timeout(), config.cache_ttl())?;
    let state = web::Data::new(
        AppState::new(table, Arc::new(fetcher), config.tectonics_url.clone())
            .with_session_idle(config.session_idle()),
    );

    log::info!("Starting server on {}:{}", config.bind_addr, config.port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((config.bind_addr.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use async_trait::async_trait;
    use quake_map_quake_models::EarthquakeRecord;
    use quake_map_tectonics::{BoundaryLine, BoundarySet};
    use serde_json::{Value, json};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Answers every request with a fixed outcome and counts calls.
    struct FakeBoundaries {
        fail: bool,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl BoundaryProvider for FakeBoundaries {
        async fn boundaries(&self, url: &str) -> Result<Arc<BoundarySet>, TectonicsError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(TectonicsError::Status {
                    url: url.to_string(),
                    status: 500,
                });
            }
            Ok(Arc::new(BoundarySet {
                lines: vec![BoundaryLine {
                    name: Some("AF-EU".to_string()),
                    line: vec![(10.0, 36.0), (12.0, 37.0)].into(),
                }],
            }))
        }
    }

    fn quake(year: i32, magnitude: f64, region: &str) -> EarthquakeRecord {
        EarthquakeRecord {
            year,
            magnitude: Some(magnitude),
            latitude: Some(38.0),
            longitude: Some(22.0),
            depth: Some(10.0),
            stations_used: Some(30),
            region: Some(region.to_string()),
        }
    }

    fn state(fail: bool) -> (web::Data<AppState>, Arc<FakeBoundaries>) {
        let table = EarthquakeTable::new(vec![
            quake(2018, 5.2, "Greece"),
            quake(2018, 6.1, "Turkey"),
            quake(2019, 5.5, "Italy"),
        ]);
        let provider = Arc::new(FakeBoundaries {
            fail,
            calls: AtomicUsize::new(0),
        });
        let state = AppState::new(
            Arc::new(table),
            Arc::clone(&provider) as Arc<dyn BoundaryProvider>,
            "http://plates.test/boundaries.json",
        );
        (web::Data::new(state), provider)
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(App::new().app_data($state.clone()).configure(configure)).await
        };
    }

    #[actix_web::test]
    async fn health_reports_row_count() {
        let (state, _) = state(false);
        let app = app!(state);
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["healthy"], json!(true));
        assert_eq!(body["rows"], json!(3));
    }

    #[actix_web::test]
    async fn session_lifecycle() {
        let (state, provider) = state(false);
        let app = app!(state);

        let req = test::TestRequest::post().uri("/api/sessions").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        let id = created["id"].as_str().unwrap().to_string();
        assert_eq!(created["view"]["caption"], json!("Selected year: all years"));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{id}/events"))
            .set_json(json!({ "version": 0, "event": { "type": "select_year", "year": 2018 } }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["view"]["caption"], json!("Selected year: 2018"));
        assert_eq!(body["view"]["pointMap"]["points"].as_array().unwrap().len(), 2);

        let req = test::TestRequest::get()
            .uri(&format!("/api/sessions/{id}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["view"]["selection"]["selectedYear"], json!(2018));
    }

    #[actix_web::test]
    async fn stale_year_click_conflicts() {
        let (state, _) = state(false);
        let (id, _) = state.sessions.create();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{id}/events"))
            .set_json(json!({ "version": 0, "event": { "type": "show_all_years" } }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{id}/events"))
            .set_json(json!({ "version": 0, "event": { "type": "select_year", "year": 2019 } }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("Stale"));
    }

    #[actix_web::test]
    async fn unknown_session_is_not_found() {
        let (state, _) = state(false);
        let app = app!(state);
        let req = test::TestRequest::get()
            .uri(&format!("/api/sessions/{}", uuid::Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn deleted_session_is_not_found() {
        let (state, _) = state(false);
        let (id, _) = state.sessions.create();
        let app = app!(state);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/sessions/{id}"))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NO_CONTENT
        );

        let req = test::TestRequest::get()
            .uri(&format!("/api/sessions/{id}"))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );

        let req = test::TestRequest::delete()
            .uri(&format!("/api/sessions/{id}"))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn expired_session_is_not_found() {
        let (state, _) = state(false);
        let state = web::Data::new(
            AppState::new(
                Arc::clone(&state.table),
                Arc::clone(&state.boundaries),
                state.tectonics_url.clone(),
            )
            .with_session_idle(TimeDelta::zero()),
        );
        let (id, _) = state.sessions.create();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{id}/events"))
            .set_json(json!({ "event": { "type": "show_all_years" } }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn overlay_is_drawn_when_enabled() {
        let (state, provider) = state(false);
        let (id, _) = state.sessions.create();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{id}/events"))
            .set_json(json!({ "event": { "type": "toggle_boundaries", "show": true } }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["view"]["pointMap"]["overlays"].as_array().unwrap().len(), 1);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn overlay_failure_is_a_warning() {
        let (state, _) = state(true);
        let (id, _) = state.sessions.create();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{id}/events"))
            .set_json(json!({ "event": { "type": "toggle_boundaries", "show": true } }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let view = &body["view"];
        assert!(view["pointMap"]["overlays"].as_array().unwrap().is_empty());
        assert_eq!(view["pointMap"]["points"].as_array().unwrap().len(), 3);
        assert_eq!(view["warnings"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn regions_for_year() {
        let (state, _) = state(false);
        let app = app!(state);
        let req = test::TestRequest::get()
            .uri("/api/regions?year=2018")
            .to_request();
        let body: Vec<String> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, vec!["All", "Greece", "Turkey"]);
    }
}
