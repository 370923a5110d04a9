//! Coaching report intake: submission validation, scoring at save time,
//! storage, and the HTTP routes the coaching form talks to.

pub mod domain;
pub(crate) mod guard;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{CoachingReportSubmission, ReportId};
pub use guard::{SubmissionGuard, SubmissionViolation};
pub use repository::{RepositoryError, ReportRecord, ReportRepository, ReportSummaryView};
pub use router::{coaching_router, ScoreRequest};
pub use service::{CoachingReportService, ReportServiceError};
