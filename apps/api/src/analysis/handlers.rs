use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::analysis::aggregate::AnalysisReport;
use crate::analysis::analyze_resume_text;
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::extract::extract_pdf_text;
use crate::models::report::{NewReport, ReportRow};
use crate::state::AppState;

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub resume_id: String,
    #[serde(flatten)]
    pub report: AnalysisReport,
}

/// POST /api/v1/resumes/analyze
///
/// Accepts a multipart PDF upload, extracts its text, runs the risk
/// analysis, and records a report. Anonymous uploads are allowed; a bearer
/// token, when present, attributes the report to its caller.
pub async fn handle_analyze(
    State(state): State<AppState>,
    caller: Option<AuthUser>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut upload: Option<(String, bytes::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field
                .file_name()
                .ok_or_else(|| AppError::Validation("Missing filename".to_string()))?
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            upload = Some((filename, data));
            break;
        }
    }

    let (filename, data) =
        upload.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;

    if !filename.to_lowercase().ends_with(".pdf") {
        return Err(AppError::Validation(
            "Only PDF files are allowed".to_string(),
        ));
    }

    let resume_id = format!(
        "RES-{}",
        &Uuid::new_v4().simple().to_string()[..8].to_uppercase()
    );

    let text = extract_pdf_text(&data)?;
    if text.trim().is_empty() {
        return Err(AppError::Extraction("empty document text".to_string()));
    }

    let report = analyze_resume_text(&text, state.lookup.as_ref()).await;

    state
        .store
        .create_report(NewReport {
            resume_id: resume_id.clone(),
            filename,
            fraud_score: report.analysis.fraud_score as i32,
            risk_level: report.analysis.risk_level.as_str().to_string(),
            decision: report.analysis.decision.as_str().to_string(),
            uploaded_by: caller.map(|c| c.username),
        })
        .await?;

    Ok(Json(AnalyzeResponse {
        status: "SUCCESS",
        timestamp: Utc::now(),
        resume_id,
        report,
    }))
}

/// GET /api/v1/reports
pub async fn handle_list_reports(
    State(state): State<AppState>,
    _caller: AuthUser,
) -> Result<Json<Vec<ReportRow>>, AppError> {
    let reports = state.store.list_reports().await?;
    Ok(Json(reports))
}
