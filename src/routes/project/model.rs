use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::error::ApiError;

/// A project tracks three money figures in its client's currency: what was
/// quoted, what was agreed, and the individual payments received so far.
#[derive(Debug, Serialize, FromRow)]
pub struct Project {
    pub id: i32,
    pub project_name: String,
    pub client_id: i32,
    pub currency_id: i32,
    pub quoted_amount: f64,
    pub deal_amount: f64,
    pub paid_amount: Option<Vec<f64>>,
    pub description: Option<String>,
    pub project_type: Option<String>,
    pub project_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaymentStatus {
    Paid,
    Pending,
}

/// Project plus its derived payment status, as shown in the list screen.
#[derive(Debug, Serialize)]
pub struct ProjectInfo {
    #[serde(flatten)]
    pub project: Project,
    pub payment_status: PaymentStatus,
}

impl From<Project> for ProjectInfo {
    fn from(project: Project) -> Self {
        let payment_status = project.payment_status();
        ProjectInfo {
            project,
            payment_status,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProjectPayload {
    #[serde(default)]
    pub project_name: String,
    pub client_id: i32,
    pub currency_id: i32,
    pub quoted_amount: f64,
    pub deal_amount: f64,
    pub paid_amount: Option<Vec<f64>>,
    pub description: Option<String>,
    pub project_type: Option<String>,
    pub project_note: Option<String>,
}

/// Totals across all projects for the financial report screen.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct ReportSummary {
    pub total_quoted_amount: f64,
    pub total_deal_amount: f64,
    pub total_paid_amount: f64,
    pub total_pending_amount: f64,
}

impl ReportSummary {
    pub fn from_projects(projects: &[Project]) -> Self {
        let mut summary = Self::default();
        for project in projects {
            summary.total_quoted_amount += project.quoted_amount;
            summary.total_deal_amount += project.deal_amount;
            summary.total_paid_amount += project.paid_total();
        }
        summary.total_pending_amount = summary.total_deal_amount - summary.total_paid_amount;
        summary
    }
}

const PROJECT_COLUMNS: &str = "id, project_name, client_id, currency_id, quoted_amount, \
     deal_amount, paid_amount, description, project_type, project_note, created_at, updated_at";

impl Project {
    /// Sum of the payments received; a missing array means nothing was paid.
    pub fn paid_total(&self) -> f64 {
        self.paid_amount.as_deref().unwrap_or(&[]).iter().sum()
    }

    pub fn payment_status(&self) -> PaymentStatus {
        if self.deal_amount > self.paid_total() {
            PaymentStatus::Pending
        } else {
            PaymentStatus::Paid
        }
    }

    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>, ApiError> {
        let projects = sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY id"
        ))
        .fetch_all(pool)
        .await?;

        Ok(projects)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, ApiError> {
        let project = sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(project)
    }

    pub async fn create(pool: &PgPool, req: ProjectPayload) -> Result<Self, ApiError> {
        let project = sqlx::query_as::<_, Project>(
            "INSERT INTO projects (project_name, client_id, currency_id, quoted_amount,
                                   deal_amount, paid_amount, description, project_type, project_note)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id, project_name, client_id, currency_id, quoted_amount,
                       deal_amount, paid_amount, description, project_type, project_note,
                       created_at, updated_at",
        )
        .bind(req.project_name)
        .bind(req.client_id)
        .bind(req.currency_id)
        .bind(req.quoted_amount)
        .bind(req.deal_amount)
        .bind(req.paid_amount)
        .bind(req.description)
        .bind(req.project_type)
        .bind(req.project_note)
        .fetch_one(pool)
        .await?;

        Ok(project)
    }

    pub async fn update(
        pool: &PgPool,
        id: i32,
        req: ProjectPayload,
    ) -> Result<Option<Self>, ApiError> {
        let project = sqlx::query_as::<_, Project>(
            "UPDATE projects
             SET project_name = $1, client_id = $2, currency_id = $3, quoted_amount = $4,
                 deal_amount = $5, paid_amount = $6, description = $7, project_type = $8,
                 project_note = $9, updated_at = NOW()
             WHERE id = $10
             RETURNING id, project_name, client_id, currency_id, quoted_amount,
                       deal_amount, paid_amount, description, project_type, project_note,
                       created_at, updated_at",
        )
        .bind(req.project_name)
        .bind(req.client_id)
        .bind(req.currency_id)
        .bind(req.quoted_amount)
        .bind(req.deal_amount)
        .bind(req.paid_amount)
        .bind(req.description)
        .bind(req.project_type)
        .bind(req.project_note)
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(project)
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
