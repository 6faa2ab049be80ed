//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post, put},
};
use serde::de::DeserializeOwned;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::booking::PassengerDetails;
use crate::catalog::{LOCATIONS, Location, SHUTTLE_TYPES, ShuttleType};
use crate::search::SearchParams;
use crate::service::{ServiceError, Snapshot};
use crate::session::SessionError;
use crate::workflow::WorkflowError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/locations", get(list_locations))
        .route("/api/shuttle-types", get(list_shuttle_types))
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/:id", get(get_session))
        .route("/api/sessions/:id/search", post(search))
        .route("/api/sessions/:id/select", post(select_result))
        .route("/api/sessions/:id/passenger", put(update_passenger))
        .route("/api/sessions/:id/confirm", post(confirm))
        .route("/api/sessions/:id/cancel", post(cancel))
        .route("/api/sessions/:id/reset", post(reset))
        .route(
            "/api/sessions/:id/suggestions/destinations",
            post(suggest_destinations),
        )
        .route(
            "/api/sessions/:id/suggestions/destinations/select",
            post(select_destination),
        )
        .route(
            "/api/sessions/:id/suggestions/travel-plan",
            post(suggest_travel_plan),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with search form.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let template = IndexTemplate::new(state.service.ai_disabled_reason());
    render(&template)
}

async fn list_locations() -> Json<&'static [Location]> {
    Json(LOCATIONS)
}

async fn list_shuttle_types() -> Json<&'static [ShuttleType]> {
    Json(SHUTTLE_TYPES)
}

/// Start a new booking session.
async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionView>) {
    let snapshot = state.service.create_session().await;
    (StatusCode::CREATED, Json(view(&state, &snapshot)))
}

/// Current session state, as a page or as JSON.
async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let snapshot = state.service.snapshot(&id).await?;

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template =
            SessionTemplate::from_snapshot(&snapshot, state.service.ai_disabled_reason());
        Ok(render(&template)?.into_response())
    } else {
        Ok(Json(view(&state, &snapshot)).into_response())
    }
}

/// Search for shuttles; responds once the offers are in.
async fn search(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<SessionView>, AppError> {
    let params: SearchParams = parse_json(&body)?;
    let snapshot = state.service.search(&id, params).await?;
    Ok(Json(view(&state, &snapshot)))
}

async fn select_result(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<SessionView>, AppError> {
    let req: SelectRequest = parse_json(&body)?;
    let snapshot = state.service.select(&id, &req.result_id).await?;
    Ok(Json(view(&state, &snapshot)))
}

async fn update_passenger(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<SessionView>, AppError> {
    let details: PassengerDetails = parse_json(&body)?;
    let snapshot = state.service.update_passenger(&id, details).await?;
    Ok(Json(view(&state, &snapshot)))
}

/// Validate the passenger and submit the booking.
async fn confirm(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, AppError> {
    let snapshot = state.service.confirm(&id).await?;
    Ok(Json(view(&state, &snapshot)))
}

async fn cancel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, AppError> {
    let snapshot = state.service.cancel(&id).await?;
    Ok(Json(view(&state, &snapshot)))
}

async fn reset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, AppError> {
    let snapshot = state.service.start_new_search(&id).await?;
    Ok(Json(view(&state, &snapshot)))
}

async fn suggest_destinations(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<SessionView>, AppError> {
    let req: DestinationRequest = parse_json(&body)?;
    let snapshot = state.service.suggest_destinations(&id, &req.origin).await?;
    Ok(Json(view(&state, &snapshot)))
}

async fn select_destination(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<SuggestionSelectResponse>, AppError> {
    let req: SuggestionSelectRequest = parse_json(&body)?;
    let location = state.service.select_suggestion(&id, &req.name).await?;
    Ok(Json(SuggestionSelectResponse {
        location: location.copied(),
    }))
}

async fn suggest_travel_plan(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, AppError> {
    let snapshot = state.service.suggest_travel_plan(&id).await?;
    Ok(Json(view(&state, &snapshot)))
}

fn view(state: &AppState, snapshot: &Snapshot) -> SessionView {
    SessionView::from_snapshot(snapshot, state.service.ai_disabled_reason())
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Parse a JSON body, logging it on failure.
fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(body), "invalid JSON body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Unprocessable { message: String },
    Internal { message: String },
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        let message = e.to_string();
        match e {
            ServiceError::Session(SessionError::Invalid(_) | SessionError::NotFound(_)) => {
                AppError::NotFound { message }
            }
            ServiceError::Workflow(WorkflowError::Passenger(_)) => {
                AppError::Unprocessable { message }
            }
            ServiceError::Workflow(_) => AppError::BadRequest { message },
            ServiceError::Task(_) => AppError::Internal { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(status = status.as_u16(), %message, "request failed");
        } else {
            warn!(status = status.as_u16(), %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
