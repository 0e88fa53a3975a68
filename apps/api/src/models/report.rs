use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted analysis outcome. The engine never writes these itself;
/// the analyze handler records one per successful run.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ReportRow {
    pub id: Uuid,
    pub resume_id: String,
    pub filename: String,
    pub fraud_score: i32,
    pub risk_level: String,
    pub decision: String,
    pub uploaded_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields the caller supplies when recording a report.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub resume_id: String,
    pub filename: String,
    pub fraud_score: i32,
    pub risk_level: String,
    pub decision: String,
    pub uploaded_by: Option<String>,
}
