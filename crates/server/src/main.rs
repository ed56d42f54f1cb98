// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use clap::Parser;
use salon_desk::{FilterCriteria, RequestTypeFilter};
use salon_desk_api::{
    AggregatedRequestsResponse, ApiError, BucketedRequestsResponse, FormSchemaResponse,
    ReplaceFormSchemaRequest, SubmitBookingRequest, SubmitBookingResponse,
    SubmitConsultationRequest, SubmitConsultationResponse, UpdateBookingStatusRequest,
    UpdateConsultationStatusRequest, UpdateStatusResponse, UsageSummaryResponse,
    aggregate_requests, bucketed_requests, get_form_schema, get_usage_summary,
    replace_form_schema, set_booking_status, set_consultation_status, submit_booking_request,
    submit_consultation,
};
use salon_desk_domain::PriorityTable;
use salon_desk_persistence::{Persistence, PersistenceError};
use salon_desk_usage::{LogOnlyDispatch, NotificationDispatch};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

/// SalonDesk Server - HTTP server for the salon request dashboard and intake forms
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The persistence layer, wrapped in a Mutex for safe concurrent access.
    persistence: Arc<Mutex<Persistence>>,
    /// The notification seam. Log-only unless a provider is wired in.
    dispatch: Arc<dyn NotificationDispatch + Send + Sync>,
}

/// Query parameters for the unified request queue.
#[derive(Debug, Deserialize)]
struct RequestsQuery {
    /// Case-insensitive search term.
    search: Option<String>,
    /// Request type filter: `all`, `bookings`, or `consultations`.
    #[serde(rename = "type")]
    request_type: Option<String>,
    /// Literal status filter in the item's own vocabulary.
    status: Option<String>,
}

impl RequestsQuery {
    fn into_criteria(self) -> FilterCriteria {
        FilterCriteria {
            search_term: self.search,
            request_type: self
                .request_type
                .as_deref()
                .map(RequestTypeFilter::parse)
                .unwrap_or_default(),
            status: self.status,
        }
    }
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: err.to_string(),
            },
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

/// Handler for GET `/salons/{salon_id}/requests`.
///
/// Returns the merged booking/consultation queue in priority order,
/// with optional search, type, and status filters.
async fn handle_get_requests(
    AxumState(app_state): AxumState<AppState>,
    Path(salon_id): Path<String>,
    Query(query): Query<RequestsQuery>,
) -> Result<Json<AggregatedRequestsResponse>, HttpError> {
    let criteria: FilterCriteria = query.into_criteria();

    let mut persistence = app_state.persistence.lock().await;
    let response: AggregatedRequestsResponse = aggregate_requests(
        &mut persistence,
        &salon_id,
        &criteria,
        &PriorityTable::default(),
    )?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/salons/{salon_id}/requests/buckets`.
///
/// Returns the dashboard bucket view. Buckets overlap by design.
async fn handle_get_buckets(
    AxumState(app_state): AxumState<AppState>,
    Path(salon_id): Path<String>,
) -> Result<Json<BucketedRequestsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: BucketedRequestsResponse = bucketed_requests(
        &mut persistence,
        &salon_id,
        &PriorityTable::default(),
        Utc::now(),
    )?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/salons/{salon_id}/booking-requests`.
///
/// Public intake endpoint for booking requests.
async fn handle_submit_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(salon_id): Path<String>,
    Json(req): Json<SubmitBookingRequest>,
) -> Result<Json<SubmitBookingResponse>, HttpError> {
    info!(salon_id = %salon_id, "Handling booking request submission");

    let mut persistence = app_state.persistence.lock().await;
    let response: SubmitBookingResponse =
        submit_booking_request(&mut persistence, &*app_state.dispatch, &salon_id, req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/salons/{salon_id}/consultations`.
///
/// Public intake endpoint for virtual consultation submissions.
async fn handle_submit_consultation(
    AxumState(app_state): AxumState<AppState>,
    Path(salon_id): Path<String>,
    Json(req): Json<SubmitConsultationRequest>,
) -> Result<Json<SubmitConsultationResponse>, HttpError> {
    info!(salon_id = %salon_id, "Handling consultation submission");

    let mut persistence = app_state.persistence.lock().await;
    let response: SubmitConsultationResponse =
        submit_consultation(&mut persistence, &*app_state.dispatch, &salon_id, req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/salons/{salon_id}/booking-requests/{id}/status`.
async fn handle_set_booking_status(
    AxumState(app_state): AxumState<AppState>,
    Path((salon_id, booking_id)): Path<(String, String)>,
    Json(req): Json<UpdateBookingStatusRequest>,
) -> Result<Json<UpdateStatusResponse>, HttpError> {
    info!(
        salon_id = %salon_id,
        booking_id = %booking_id,
        status = %req.status,
        "Handling booking status change"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: UpdateStatusResponse =
        set_booking_status(&mut persistence, &salon_id, &booking_id, req.status)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/salons/{salon_id}/consultations/{id}/status`.
async fn handle_set_consultation_status(
    AxumState(app_state): AxumState<AppState>,
    Path((salon_id, consultation_id)): Path<(String, String)>,
    Json(req): Json<UpdateConsultationStatusRequest>,
) -> Result<Json<UpdateStatusResponse>, HttpError> {
    info!(
        salon_id = %salon_id,
        consultation_id = %consultation_id,
        status = %req.status,
        "Handling consultation status change"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: UpdateStatusResponse =
        set_consultation_status(&mut persistence, &salon_id, &consultation_id, req.status)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/salons/{salon_id}/form-schema`.
async fn handle_get_form_schema(
    AxumState(app_state): AxumState<AppState>,
    Path(salon_id): Path<String>,
) -> Result<Json<FormSchemaResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: FormSchemaResponse = get_form_schema(&mut persistence, &salon_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for PUT `/salons/{salon_id}/form-schema`.
///
/// Replaces the salon's consultation form schema wholesale after
/// validation.
async fn handle_replace_form_schema(
    AxumState(app_state): AxumState<AppState>,
    Path(salon_id): Path<String>,
    Json(req): Json<ReplaceFormSchemaRequest>,
) -> Result<Json<FormSchemaResponse>, HttpError> {
    info!(
        salon_id = %salon_id,
        field_count = req.fields.len(),
        "Handling form schema replacement"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: FormSchemaResponse = replace_form_schema(&mut persistence, &salon_id, req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/salons/{salon_id}/usage`.
async fn handle_get_usage(
    AxumState(app_state): AxumState<AppState>,
    Path(salon_id): Path<String>,
) -> Result<Json<UsageSummaryResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: UsageSummaryResponse = get_usage_summary(&mut persistence, &salon_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/salons/{salon_id}/requests", get(handle_get_requests))
        .route(
            "/salons/{salon_id}/requests/buckets",
            get(handle_get_buckets),
        )
        .route(
            "/salons/{salon_id}/booking-requests",
            post(handle_submit_booking),
        )
        .route(
            "/salons/{salon_id}/consultations",
            post(handle_submit_consultation),
        )
        .route(
            "/salons/{salon_id}/booking-requests/{id}/status",
            post(handle_set_booking_status),
        )
        .route(
            "/salons/{salon_id}/consultations/{id}/status",
            post(handle_set_consultation_status),
        )
        .route(
            "/salons/{salon_id}/form-schema",
            get(handle_get_form_schema).put(handle_replace_form_schema),
        )
        .route("/salons/{salon_id}/usage", get(handle_get_usage))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing SalonDesk Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        dispatch: Arc::new(LogOnlyDispatch),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
