use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::evaluation::RatingSet;

/// Identifier wrapper for stored coaching reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReportId(pub String);

impl std::fmt::Display for ReportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A completed coaching form as sent by the supervisor on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachingReportSubmission {
    /// Medical representative who was coached.
    pub representative: String,
    pub supervisor: String,
    pub visit_date: NaiveDate,
    pub title: String,
    #[serde(default)]
    pub notes: String,
    /// Supervisor's own wording, kept apart from the derived recommendations.
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub ratings: RatingSet,
}
