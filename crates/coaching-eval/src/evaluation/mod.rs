//! Coaching evaluation scoring: criteria catalog, category subtotals, band
//! classification and improvement recommendations.

pub mod catalog;
mod policy;
mod ratings;
mod rules;

#[cfg(test)]
mod tests;

pub use catalog::{Category, EvaluationCriterion};
pub use policy::{classify, derive_recommendations, PerformanceBand, Severity};
pub use ratings::RatingSet;
pub use rules::{compute_breakdown, ScoreBreakdown};

use serde::{Deserialize, Serialize};

/// Stateless evaluator that applies the fixed criteria catalog to a rating set.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine {
    catalog: &'static [EvaluationCriterion],
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(catalog::catalog())
    }
}

impl ScoringEngine {
    pub fn new(catalog: &'static [EvaluationCriterion]) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'static [EvaluationCriterion] {
        self.catalog
    }

    pub fn breakdown(&self, ratings: &RatingSet) -> ScoreBreakdown {
        compute_breakdown(ratings, self.catalog)
    }

    pub fn evaluate(&self, ratings: &RatingSet) -> EvaluationOutcome {
        let breakdown = self.breakdown(ratings);
        let band = classify(breakdown.total);
        let recommendations = derive_recommendations(&breakdown);

        EvaluationOutcome {
            breakdown,
            band,
            label: band.label().to_string(),
            severity: band.severity(),
            recommendations,
        }
    }
}

/// Everything the coaching form displays after a rating changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub breakdown: ScoreBreakdown,
    pub band: PerformanceBand,
    pub label: String,
    pub severity: Severity,
    pub recommendations: Vec<String>,
}

impl EvaluationOutcome {
    pub fn summary(&self) -> String {
        if self.recommendations.is_empty() {
            format!("{} ({:.1}/100)", self.label, self.breakdown.total)
        } else {
            format!(
                "{} ({:.1}/100): {}",
                self.label,
                self.breakdown.total,
                self.recommendations.join("، ")
            )
        }
    }
}
