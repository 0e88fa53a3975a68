//! Storage seam — explicit create/read operations behind a trait, injected
//! through `AppState` instead of living in module-level collections.
//!
//! `PgStore` backs the service when `DATABASE_URL` is set; `MemoryStore`
//! covers local runs and tests.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::report::{NewReport, ReportRow};
use crate::models::user::UserRow;

/// Carried in `AppState` as `Arc<dyn Store>`.
#[async_trait]
pub trait Store: Send + Sync {
    async fn create_user(
        &self,
        username: &str,
        password: &str,
        role: &str,
    ) -> Result<UserRow, AppError>;

    async fn find_user(&self, username: &str) -> Result<Option<UserRow>, AppError>;

    async fn create_report(&self, report: NewReport) -> Result<ReportRow, AppError>;

    async fn list_reports(&self) -> Result<Vec<ReportRow>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Postgres store
// ────────────────────────────────────────────────────────────────────────────

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_user(
        &self,
        username: &str,
        password: &str,
        role: &str,
    ) -> Result<UserRow, AppError> {
        let user: UserRow = sqlx::query_as(
            r#"
            INSERT INTO users (id, username, password, role, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(password)
        .bind(role)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_user(&self, username: &str) -> Result<Option<UserRow>, AppError> {
        let user: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn create_report(&self, report: NewReport) -> Result<ReportRow, AppError> {
        let row: ReportRow = sqlx::query_as(
            r#"
            INSERT INTO reports
                (id, resume_id, filename, fraud_score, risk_level, decision,
                 uploaded_by, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&report.resume_id)
        .bind(&report.filename)
        .bind(report.fraud_score)
        .bind(&report.risk_level)
        .bind(&report.decision)
        .bind(&report.uploaded_by)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_reports(&self) -> Result<Vec<ReportRow>, AppError> {
        let rows: Vec<ReportRow> =
            sqlx::query_as("SELECT * FROM reports ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory store
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<UserRow>>,
    reports: RwLock<Vec<ReportRow>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(
        &self,
        username: &str,
        password: &str,
        role: &str,
    ) -> Result<UserRow, AppError> {
        let user = UserRow {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password: password.to_string(),
            role: role.to_string(),
            created_at: Utc::now(),
        };
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn find_user(&self, username: &str) -> Result<Option<UserRow>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn create_report(&self, report: NewReport) -> Result<ReportRow, AppError> {
        let row = ReportRow {
            id: Uuid::new_v4(),
            resume_id: report.resume_id,
            filename: report.filename,
            fraud_score: report.fraud_score,
            risk_level: report.risk_level,
            decision: report.decision,
            uploaded_by: report.uploaded_by,
            created_at: Utc::now(),
        };
        self.reports.write().await.push(row.clone());
        Ok(row)
    }

    async fn list_reports(&self) -> Result<Vec<ReportRow>, AppError> {
        let reports = self.reports.read().await;
        let mut rows = reports.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_report(resume_id: &str, score: i32) -> NewReport {
        NewReport {
            resume_id: resume_id.to_string(),
            filename: "resume.pdf".to_string(),
            fraud_score: score,
            risk_level: "LOW".to_string(),
            decision: "ACCEPT".to_string(),
            uploaded_by: None,
        }
    }

    #[tokio::test]
    async fn test_memory_store_user_roundtrip() {
        let store = MemoryStore::new();
        store.create_user("jane", "pw", "user").await.unwrap();

        let found = store.find_user("jane").await.unwrap().unwrap();
        assert_eq!(found.username, "jane");
        assert_eq!(found.role, "user");
        assert!(store.find_user("john").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_store_lists_reports_newest_first() {
        let store = MemoryStore::new();
        store.create_report(new_report("RES-1", 0)).await.unwrap();
        store.create_report(new_report("RES-2", 95)).await.unwrap();

        let rows = store.list_reports().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].created_at >= rows[1].created_at);
    }
}
