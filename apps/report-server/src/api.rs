//! API handlers for the report server
//!
//! Provides REST endpoints for:
//! - Report type listing
//! - Report content generation from metrics
//! - PDF rendering of (possibly edited) report content

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{header, HeaderName},
    response::{IntoResponse, Response},
    Json,
};
use report_content::ReportFormatter;
use report_pdf::ReportRenderer;
use serde::{Deserialize, Serialize};
use shared_types::{Catalog, Locale, RenderRequest, ReportMetrics, ReportType};
use tracing::{debug, info};

use crate::error::ServerError;
use crate::state::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "report-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Deserialize)]
pub struct LocaleQuery {
    pub locale: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTypeInfo {
    pub report_type: ReportType,
    pub title: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTypesResponse {
    pub success: bool,
    pub locale: Locale,
    pub report_types: Vec<ReportTypeInfo>,
    pub count: usize,
}

/// Handler: GET /api/report-types
pub async fn handle_list_report_types(
    State(state): State<AppState>,
    Query(query): Query<LocaleQuery>,
) -> Json<ReportTypesResponse> {
    let locale = state.locale_for(query.locale.as_deref());
    let catalog = Catalog::new(locale);
    let formatter = ReportFormatter::new(&catalog);

    let report_types: Vec<ReportTypeInfo> = ReportType::ALL
        .into_iter()
        .map(|report_type| ReportTypeInfo {
            report_type,
            title: formatter.title(report_type),
        })
        .collect();
    let count = report_types.len();

    Json(ReportTypesResponse {
        success: true,
        locale,
        report_types,
        count,
    })
}

/// Content request body
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentApiRequest {
    /// One of "compliance", "progress", "performance", "risk"
    pub report_type: String,

    /// Loosely-shaped metrics; missing or malformed fields are defaulted
    #[serde(default)]
    pub metrics: serde_json::Value,

    pub locale: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentApiResponse {
    pub success: bool,
    pub report_type: ReportType,
    pub locale: Locale,
    pub title: String,
    pub content: String,
}

/// Handler: POST /api/reports/content
pub async fn handle_generate_content(
    State(state): State<AppState>,
    payload: Result<Json<ContentApiRequest>, JsonRejection>,
) -> Result<Json<ContentApiResponse>, ServerError> {
    let Json(req) = payload?;
    let report_type: ReportType = req.report_type.parse().map_err(ServerError::InvalidRequest)?;
    let locale = state.locale_for(req.locale.as_deref());
    info!(
        "Content request: type={}, locale={}",
        report_type,
        locale.code()
    );
    debug!("Metrics: {}", req.metrics);

    let metrics = ReportMetrics::from_value(report_type, req.metrics);
    let catalog = Catalog::new(locale);
    let report = ReportFormatter::new(&catalog).format(&metrics);

    Ok(Json(ContentApiResponse {
        success: true,
        report_type,
        locale,
        content: report.to_text(),
        title: report.title,
    }))
}

/// Render request body
#[derive(Deserialize)]
pub struct RenderApiRequest {
    #[serde(flatten)]
    pub request: RenderRequest,

    #[serde(default)]
    pub locale: Option<String>,
}

/// Handler: POST /api/reports/render
///
/// Responds with the PDF itself. A second render of the same report number
/// while one is outstanding is refused with 409.
pub async fn handle_render_report(
    State(state): State<AppState>,
    payload: Result<Json<RenderApiRequest>, JsonRejection>,
) -> Result<Response, ServerError> {
    let Json(req) = payload?;
    let locale = state.locale_for(req.locale.as_deref());
    let request = req.request;
    info!(
        "Render request: report={}, locale={}, content_lines={}",
        request.report_number,
        locale.code(),
        request.content.lines().count()
    );

    let guard = state
        .gate
        .try_begin(&request.report_number)
        .ok_or_else(|| ServerError::AlreadyGenerating(request.report_number.clone()))?;
    let geometry = state.geometry;

    let rendered = tokio::task::spawn_blocking(move || {
        let _guard = guard;
        let catalog = Catalog::new(locale);
        ReportRenderer::new(geometry, &catalog).render(&request)
    })
    .await
    .map_err(|e| ServerError::Internal(format!("Render task failed: {}", e)))??;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        header_safe_filename(&rendered.filename)
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
            (
                HeaderName::from_static("x-page-count"),
                rendered.page_count.to_string(),
            ),
        ],
        rendered.bytes,
    )
        .into_response())
}

/// ASCII-only form of a filename for the Content-Disposition header
pub fn header_safe_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| if c.is_ascii_graphic() { c } else { '_' })
        .collect()
}
