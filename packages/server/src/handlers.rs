//! HTTP handler functions for the quake map API.

use actix_web::{HttpResponse, web};
use quake_map_analytics::{filter_by_year, region_options};
use quake_map_dashboard::{DashboardView, Overlay, SelectionState, render};
use quake_map_server_models::{ApiError, ApiEvent, ApiHealth, ApiSession, RegionQueryParams};
use uuid::Uuid;

use crate::AppState;
use crate::sessions::SessionError;

/// `GET /api/health`
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        rows: state.table.len(),
    })
}

/// `POST /api/sessions`
///
/// Starts a new session with no year selected and all regions.
pub async fn create_session(state: web::Data<AppState>) -> HttpResponse {
    let (id, selection) = state.sessions.create();
    let view = render_selection(&state, &selection).await;
    HttpResponse::Created().json(ApiSession { id, view })
}

/// `GET /api/sessions/{id}`
pub async fn get_session(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    let id = path.into_inner();
    let Some(selection) = state.sessions.get(id) else {
        return session_error(&SessionError::NotFound(id));
    };
    let view = render_selection(&state, &selection).await;
    HttpResponse::Ok().json(ApiSession { id, view })
}

/// `POST /api/sessions/{id}/events`
///
/// Applies one interaction and returns the re-rendered dashboard.
pub async fn post_event(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<ApiEvent>,
) -> HttpResponse {
    let id = path.into_inner();
    let ApiEvent { version, event } = body.into_inner();
    log::debug!("Session {id}: {event:?} (version {version:?})");

    match state.sessions.apply(id, version, event) {
        Ok(selection) => {
            let view = render_selection(&state, &selection).await;
            HttpResponse::Ok().json(ApiSession { id, view })
        }
        Err(e) => session_error(&e),
    }
}

/// `DELETE /api/sessions/{id}`
///
/// Ends a session; later requests for it return 404.
pub async fn delete_session(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    let id = path.into_inner();
    if state.sessions.remove(id) {
        log::debug!("Deleted session {id}");
        HttpResponse::NoContent().finish()
    } else {
        session_error(&SessionError::NotFound(id))
    }
}

/// `GET /api/regions`
///
/// Region dropdown options, optionally restricted to one year.
pub async fn regions(
    state: web::Data<AppState>,
    params: web::Query<RegionQueryParams>,
) -> HttpResponse {
    let subset = filter_by_year(&state.table, params.year);
    HttpResponse::Ok().json(region_options(&subset))
}

async fn render_selection(state: &AppState, selection: &SelectionState) -> DashboardView {
    let overlay = if selection.show_boundaries {
        match state.boundaries.boundaries(&state.tectonics_url).await {
            Ok(set) => Overlay::Loaded(set),
            Err(e) => {
                log::warn!("Tectonic boundary fetch failed: {e}");
                Overlay::Failed(e.to_string())
            }
        }
    } else {
        Overlay::Hidden
    };

    render(selection, &state.table, &overlay)
}

fn session_error(error: &SessionError) -> HttpResponse {
    let body = ApiError::new(error.to_string());
    match error {
        SessionError::NotFound(_) => HttpResponse::NotFound().json(body),
        SessionError::Stale { .. } => HttpResponse::Conflict().json(body),
    }
}
