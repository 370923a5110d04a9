use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{CoachingReportSubmission, ReportId};
use super::guard::{SubmissionGuard, SubmissionViolation};
use super::repository::{RepositoryError, ReportRecord, ReportRepository};
use crate::config::ReportConfig;
use crate::evaluation::{EvaluationOutcome, RatingSet, ScoringEngine};

/// Service composing the submission guard, scoring engine, and repository.
pub struct CoachingReportService<R> {
    guard: SubmissionGuard,
    repository: Arc<R>,
    engine: ScoringEngine,
}

static REPORT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_report_id() -> ReportId {
    let id = REPORT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ReportId(format!("rpt-{id:06}"))
}

impl<R> CoachingReportService<R>
where
    R: ReportRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: ReportConfig) -> Self {
        Self {
            guard: SubmissionGuard::new(config),
            repository,
            engine: ScoringEngine::default(),
        }
    }

    /// Score an in-progress rating set without storing anything.
    pub fn score(&self, ratings: &RatingSet) -> Result<EvaluationOutcome, ReportServiceError> {
        self.guard.check_ratings(ratings).map_err(|violation| {
            warn!(%violation, "live score request rejected");
            violation
        })?;
        Ok(self.engine.evaluate(ratings))
    }

    /// Validate, score and persist a completed coaching report.
    pub fn submit(
        &self,
        submission: CoachingReportSubmission,
    ) -> Result<ReportRecord, ReportServiceError> {
        let submission = self.guard.admit(submission).map_err(|violation| {
            warn!(%violation, "coaching report rejected");
            violation
        })?;

        let outcome = self.engine.evaluate(&submission.ratings);
        let record = ReportRecord {
            id: next_report_id(),
            submission,
            outcome,
            submitted_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        info!(
            report_id = %stored.id,
            total = stored.outcome.breakdown.total,
            band = ?stored.outcome.band,
            "coaching report stored"
        );
        Ok(stored)
    }

    pub fn get(&self, id: &ReportId) -> Result<ReportRecord, ReportServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Reports for one representative, oldest visit first.
    pub fn history(&self, representative: &str) -> Result<Vec<ReportRecord>, ReportServiceError> {
        let mut records = self
            .repository
            .list_for_representative(representative.trim())?;
        records.sort_by(|a, b| {
            a.submission
                .visit_date
                .cmp(&b.submission.visit_date)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(records)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportServiceError {
    #[error(transparent)]
    Submission(#[from] SubmissionViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
