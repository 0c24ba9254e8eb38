//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification.

use crate::web::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use chrono::Utc;
use internhub_core::{
    export_csv, DashboardStats, DepartmentFilter, DirectoryQuery, InternDraft, InternRecord,
    PerformanceBand, SubmitError, View, EXPORT_FILENAME, KNOWN_DEPARTMENTS,
};
use internhub_core::domain::{MAX_RATING, MIN_RATING};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use utoipa::{IntoParams, OpenApi, ToSchema};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        health_handler,
        dashboard_handler,
        list_interns_handler,
        get_intern_handler,
        export_interns_handler,
        create_intern_handler,
        add_form_handler,
        list_departments_handler,
    ),
    components(
        schemas(
            InternRecordResponse,
            CreateInternRequest,
            CreateInternResponse,
            DashboardResponse,
            DepartmentCountResponse,
            PerformanceResponse,
            AddFormResponse,
        )
    ),
    tags(
        (name = "InternHub API", description = "Intern performance records: dashboard, directory and submission.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

/// One stored intern record.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InternRecordResponse {
    id: String,
    name: String,
    duration: String,
    department: String,
    reporting_manager: String,
    projects_completed: u32,
    rating: u8,
    comment: String,
    ai_summary: Option<String>,
    /// Milliseconds since the Unix epoch.
    created_at: i64,
}

impl From<&InternRecord> for InternRecordResponse {
    fn from(record: &InternRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            duration: record.duration.clone(),
            department: record.department.clone(),
            reporting_manager: record.reporting_manager.clone(),
            projects_completed: record.projects_completed,
            rating: record.rating,
            comment: record.comment.clone(),
            ai_summary: record.ai_summary.clone(),
            created_at: record.created_at,
        }
    }
}

/// The add-form payload.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInternRequest {
    name: String,
    duration: String,
    department: String,
    reporting_manager: String,
    #[serde(default)]
    projects_completed: u32,
    rating: u8,
    comment: String,
}

impl From<CreateInternRequest> for InternDraft {
    fn from(req: CreateInternRequest) -> Self {
        InternDraft {
            name: req.name,
            duration: req.duration,
            department: req.department,
            reporting_manager: req.reporting_manager,
            projects_completed: req.projects_completed,
            rating: req.rating,
            comment: req.comment,
        }
    }
}

/// The response payload sent after a record has been enriched and stored.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInternResponse {
    record: InternRecordResponse,
    /// `generated`, `empty` or `failed`.
    summary_status: String,
    /// Route of the view the client should switch to.
    next_view: String,
}

#[derive(Serialize, ToSchema)]
pub struct DepartmentCountResponse {
    department: String,
    count: usize,
}

#[derive(Serialize, ToSchema)]
pub struct PerformanceResponse {
    label: String,
    count: usize,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    total_count: usize,
    average_rating: f64,
    total_projects: u64,
    department_count: usize,
    department_distribution: Vec<DepartmentCountResponse>,
    /// Exceeds, Meeting and Below, in that order.
    performance: Vec<PerformanceResponse>,
}

impl From<DashboardStats> for DashboardResponse {
    fn from(stats: DashboardStats) -> Self {
        let buckets = stats.performance;
        let performance = [
            (PerformanceBand::Exceeds, buckets.exceeds),
            (PerformanceBand::Meeting, buckets.meeting),
            (PerformanceBand::Below, buckets.below),
        ]
        .into_iter()
        .map(|(band, count)| PerformanceResponse {
            label: band.label().to_string(),
            count,
        })
        .collect();

        Self {
            total_count: stats.total_count,
            average_rating: stats.average_rating,
            total_projects: stats.total_projects,
            department_count: stats.department_count,
            department_distribution: stats
                .department_distribution
                .into_iter()
                .map(|d| DepartmentCountResponse {
                    department: d.department,
                    count: d.count,
                })
                .collect(),
            performance,
        }
    }
}

/// What the add form needs to render its inputs.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddFormResponse {
    departments: Vec<String>,
    min_rating: u8,
    max_rating: u8,
}

/// Directory search parameters.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DirectoryParams {
    /// Case-insensitive text matched against name and reporting manager.
    search: Option<String>,
    /// Exact department name, or `All`.
    department: Option<String>,
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = String))
)]
pub async fn health_handler() -> &'static str {
    "ok"
}

/// Aggregate statistics over every stored record.
#[utoipa::path(
    get,
    path = "/dashboard",
    responses((status = 200, description = "Dashboard statistics", body = DashboardResponse))
)]
pub async fn dashboard_handler(State(app_state): State<Arc<AppState>>) -> Json<DashboardResponse> {
    let snapshot = app_state.store.snapshot();
    Json(DashboardStats::compute(&snapshot).into())
}

/// Search and filter the directory, newest first.
#[utoipa::path(
    get,
    path = "/interns",
    params(DirectoryParams),
    responses((status = 200, description = "Matching records", body = [InternRecordResponse]))
)]
pub async fn list_interns_handler(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<DirectoryParams>,
) -> Json<Vec<InternRecordResponse>> {
    let query = DirectoryQuery::new(
        params.search.as_deref().unwrap_or_default(),
        DepartmentFilter::parse(params.department.as_deref().unwrap_or_default()),
    );
    let snapshot = app_state.store.snapshot();
    Json(
        query
            .filter(&snapshot)
            .into_iter()
            .map(InternRecordResponse::from)
            .collect(),
    )
}

/// Fetch a single record for the detail view.
#[utoipa::path(
    get,
    path = "/interns/{id}",
    params(("id" = String, Path, description = "The record id.")),
    responses(
        (status = 200, description = "The record", body = InternRecordResponse),
        (status = 404, description = "No record with that id")
    )
)]
pub async fn get_intern_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<InternRecordResponse>, (StatusCode, String)> {
    app_state
        .store
        .get(&id)
        .map(|record| Json(InternRecordResponse::from(&record)))
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("Record '{}' not found", id)))
}

/// Download every record as CSV, regardless of any directory filter.
#[utoipa::path(
    get,
    path = "/interns/export",
    responses((status = 200, description = "CSV export", body = String, content_type = "text/csv"))
)]
pub async fn export_interns_handler(State(app_state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = app_state.store.snapshot();
    info!("Exporting {} records", snapshot.len());
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILENAME),
            ),
        ],
        export_csv(&snapshot),
    )
}

/// Submit a new record.
///
/// The summary is generated before the record is stored, so this call waits on
/// the summarization service. A failed summary still stores the record.
#[utoipa::path(
    post,
    path = "/interns",
    request_body = CreateInternRequest,
    responses(
        (status = 201, description = "Record stored", body = CreateInternResponse),
        (status = 409, description = "Another submission is in progress"),
        (status = 422, description = "A required field is missing or the rating is out of range")
    )
)]
pub async fn create_intern_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<CreateInternRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let submission = app_state
        .submitter
        .submit(
            req.into(),
            app_state.summarizer.as_ref(),
            &app_state.store,
            Utc::now(),
        )
        .await
        .map_err(|e| {
            warn!("Rejected submission: {}", e);
            let status = match e {
                SubmitError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
                SubmitError::Busy => StatusCode::CONFLICT,
            };
            (status, e.to_string())
        })?;

    let response = CreateInternResponse {
        record: InternRecordResponse::from(&submission.record),
        summary_status: submission.outcome.status().to_string(),
        next_view: View::after_submission().route().to_string(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// Inputs for the add form.
#[utoipa::path(
    get,
    path = "/interns/new",
    responses((status = 200, description = "Form affordances", body = AddFormResponse))
)]
pub async fn add_form_handler() -> Json<AddFormResponse> {
    Json(AddFormResponse {
        departments: known_departments(),
        min_rating: MIN_RATING,
        max_rating: MAX_RATING,
    })
}

/// Department names suggested by the add form. Any other name is accepted.
#[utoipa::path(
    get,
    path = "/departments",
    responses((status = 200, description = "Suggested departments", body = [String]))
)]
pub async fn list_departments_handler() -> Json<Vec<String>> {
    Json(known_departments())
}

fn known_departments() -> Vec<String> {
    KNOWN_DEPARTMENTS.iter().map(|d| d.to_string()).collect()
}
