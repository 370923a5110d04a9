use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{CoachingReportSubmission, ReportId};
use crate::evaluation::{EvaluationOutcome, Severity};

/// Stored report: the submission as admitted plus the outcome computed at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub id: ReportId,
    pub submission: CoachingReportSubmission,
    pub outcome: EvaluationOutcome,
    pub submitted_at: DateTime<Utc>,
}

impl ReportRecord {
    pub fn summary_view(&self) -> ReportSummaryView {
        ReportSummaryView {
            report_id: self.id.clone(),
            representative: self.submission.representative.clone(),
            supervisor: self.submission.supervisor.clone(),
            visit_date: self.submission.visit_date,
            title: self.submission.title.clone(),
            total: self.outcome.breakdown.total,
            label: self.outcome.label.clone(),
            severity: self.outcome.severity,
            recommendations: self.outcome.recommendations.clone(),
        }
    }
}

/// Storage abstraction so the service can run against any backend.
pub trait ReportRepository: Send + Sync {
    fn insert(&self, record: ReportRecord) -> Result<ReportRecord, RepositoryError>;
    fn fetch(&self, id: &ReportId) -> Result<Option<ReportRecord>, RepositoryError>;
    fn list_for_representative(
        &self,
        representative: &str,
    ) -> Result<Vec<ReportRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Compact representation returned by the report endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummaryView {
    pub report_id: ReportId,
    pub representative: String,
    pub supervisor: String,
    pub visit_date: NaiveDate,
    pub title: String,
    pub total: f32,
    pub label: String,
    pub severity: Severity,
    pub recommendations: Vec<String>,
}
