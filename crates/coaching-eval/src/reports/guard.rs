use super::domain::CoachingReportSubmission;
use crate::config::ReportConfig;
use crate::evaluation::{catalog, RatingSet};

/// Validation errors raised before a report is scored and stored.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmissionViolation {
    #[error("{field} must not be empty")]
    MissingField { field: &'static str },
    #[error("unknown criterion '{0}'")]
    UnknownCriterion(String),
    #[error("rating {rating} for '{criterion}' is outside 0..={max}")]
    RatingOutOfRange {
        criterion: String,
        rating: f32,
        max: u8,
    },
    #[error("rating {rating} for '{criterion}' is not a half-point step")]
    RatingNotHalfStep { criterion: String, rating: f32 },
    #[error("{field} exceeds {limit} characters (found {found})")]
    TextTooLong {
        field: &'static str,
        limit: usize,
        found: usize,
    },
}

/// Guard producing normalized submissions that are safe to persist.
#[derive(Debug, Clone, Default)]
pub struct SubmissionGuard {
    config: ReportConfig,
}

impl SubmissionGuard {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn admit(
        &self,
        mut submission: CoachingReportSubmission,
    ) -> Result<CoachingReportSubmission, SubmissionViolation> {
        submission.representative = submission.representative.trim().to_string();
        submission.supervisor = submission.supervisor.trim().to_string();
        submission.title = submission.title.trim().to_string();

        for (field, value) in [
            ("representative", &submission.representative),
            ("supervisor", &submission.supervisor),
            ("title", &submission.title),
        ] {
            if value.is_empty() {
                return Err(SubmissionViolation::MissingField { field });
            }
        }

        for (field, value) in [
            ("title", &submission.title),
            ("notes", &submission.notes),
            ("recommendation", &submission.recommendation),
        ] {
            let found = value.chars().count();
            if found > self.config.max_text_len {
                return Err(SubmissionViolation::TextTooLong {
                    field,
                    limit: self.config.max_text_len,
                    found,
                });
            }
        }

        self.check_ratings(&submission.ratings)?;

        Ok(submission)
    }

    /// Every rating must name a catalog criterion and sit on the half-point
    /// grid within `0..=max_score`.
    pub fn check_ratings(&self, ratings: &RatingSet) -> Result<(), SubmissionViolation> {
        for (id, rating) in ratings.iter() {
            let criterion = catalog::find(id)
                .ok_or_else(|| SubmissionViolation::UnknownCriterion(id.to_string()))?;

            if !(0.0..=criterion.max_score as f32).contains(&rating) {
                return Err(SubmissionViolation::RatingOutOfRange {
                    criterion: id.to_string(),
                    rating,
                    max: criterion.max_score,
                });
            }

            if (rating * 2.0).fract() != 0.0 {
                return Err(SubmissionViolation::RatingNotHalfStep {
                    criterion: id.to_string(),
                    rating,
                });
            }
        }

        Ok(())
    }
}
