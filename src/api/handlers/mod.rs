use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use briefing_core::models::*;
use briefing_core::{RepositoryError, ValidationError};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use super::AppState;
use crate::export::{render_report, report_file_name};
use crate::extraction::ExtractionError;

// ============================================================
// Error Handling
// ============================================================

type ApiError = (StatusCode, String);

fn repository_error(e: RepositoryError) -> ApiError {
    tracing::warn!("Repository error: {}", e);
    let status = match e {
        RepositoryError::NotFound(_) => StatusCode::NOT_FOUND,
        RepositoryError::DuplicateId(_) => StatusCode::CONFLICT,
    };
    (status, e.to_string())
}

fn validation_error(e: ValidationError) -> ApiError {
    tracing::warn!("Validation error: {}", e);
    (StatusCode::BAD_REQUEST, e.to_string())
}

fn not_found() -> ApiError {
    (StatusCode::NOT_FOUND, "Briefing not found".to_string())
}

/// Extraction failures keep the JSON error shape the upload form expects.
fn extraction_error(e: ExtractionError) -> (StatusCode, Json<Value>) {
    match e {
        ExtractionError::NotConfigured(msg) => {
            tracing::error!("Extraction not configured: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "API key not configured" })),
            )
        }
        ExtractionError::Upstream { status, details } => {
            let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (
                code,
                Json(json!({
                    "error": "API call failed",
                    "details": details,
                    "status": status,
                })),
            )
        }
        ExtractionError::Malformed { raw } => {
            tracing::error!("Failed to parse extraction response: {}", raw);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to parse response",
                    "rawText": raw,
                })),
            )
        }
        ExtractionError::Network(e) => {
            tracing::error!("Extraction request failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error",
                    "message": e.to_string(),
                })),
            )
        }
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

// ============================================================
// Briefings
// ============================================================

/// Sidebar entry for a briefing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefingListItem {
    #[serde(flatten)]
    pub summary: BriefingSummary,
    pub created_at_label: String,
}

pub async fn list_briefings(State(state): State<AppState>) -> Json<Vec<BriefingListItem>> {
    let items = state
        .repository
        .list()
        .iter()
        .map(|doc| BriefingListItem {
            summary: doc.into(),
            created_at_label: doc.created_at_label(),
        })
        .collect();
    Json(items)
}

pub async fn create_briefing(
    State(state): State<AppState>,
    Json(input): Json<BriefingInput>,
) -> Result<(StatusCode, Json<BriefingDocument>), ApiError> {
    let id = Uuid::new_v4();
    let doc = state
        .composer
        .build_document(id, &input, Utc::now())
        .map_err(validation_error)?;

    state
        .repository
        .create(doc.clone())
        .map_err(repository_error)?;
    state.repository.set_current(id).map_err(repository_error)?;

    Ok((StatusCode::CREATED, Json(doc)))
}

pub async fn get_briefing(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BriefingDocument>, ApiError> {
    state.repository.get(id).map(Json).ok_or_else(not_found)
}

/// Regenerate a briefing in place. Identity and creation time are kept.
pub async fn update_briefing(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<BriefingInput>,
) -> Result<Json<BriefingDocument>, ApiError> {
    let existing = state.repository.get(id).ok_or_else(not_found)?;
    let doc = state
        .composer
        .build_document(id, &input, existing.created_at)
        .map_err(validation_error)?;

    state
        .repository
        .update(doc.clone())
        .map_err(repository_error)?;

    Ok(Json(doc))
}

pub async fn delete_briefing(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.repository.delete(id).map_err(repository_error)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn export_briefing(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let doc = state.repository.get(id).ok_or_else(not_found)?;
    let disposition = format!("attachment; filename=\"{}\"", report_file_name(&doc));

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        render_report(&doc),
    ))
}

// ============================================================
// Current Selection
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectBriefingInput {
    pub id: Uuid,
}

pub async fn get_current(
    State(state): State<AppState>,
) -> Result<Json<BriefingDocument>, ApiError> {
    state
        .repository
        .current()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "No briefing selected".to_string()))
}

pub async fn set_current(
    State(state): State<AppState>,
    Json(input): Json<SelectBriefingInput>,
) -> Result<Json<BriefingDocument>, ApiError> {
    state
        .repository
        .set_current(input.id)
        .map_err(repository_error)?;
    state.repository.get(input.id).map(Json).ok_or_else(not_found)
}

pub async fn clear_current(State(state): State<AppState>) -> StatusCode {
    state.repository.clear_current();
    StatusCode::NO_CONTENT
}

// ============================================================
// Keyword Extraction
// ============================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzePdfRequest {
    /// Base64-encoded PDF.
    #[serde(rename = "pdfData", default)]
    pub pdf_data: Option<String>,
}

pub async fn analyze_pdf(
    State(state): State<AppState>,
    Json(request): Json<AnalyzePdfRequest>,
) -> Result<Json<ExtractedKeywords>, (StatusCode, Json<Value>)> {
    let Some(pdf_data) = request.pdf_data.filter(|data| !data.is_empty()) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "No PDF data provided" })),
        ));
    };

    let Some(extractor) = state.extractor.as_ref() else {
        return Err(extraction_error(ExtractionError::NotConfigured(
            "no extractor available".to_string(),
        )));
    };

    let keywords = extractor.extract(&pdf_data).await.map_err(extraction_error)?;
    tracing::info!(main = ?keywords.main(), "Keyword extraction succeeded");
    Ok(Json(keywords))
}
