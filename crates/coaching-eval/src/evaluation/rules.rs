use serde::{Deserialize, Serialize};

use super::catalog::{Category, EvaluationCriterion};
use super::ratings::RatingSet;

/// Category subtotals and grand total derived from a rating set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub planning: f32,
    pub personal_traits: f32,
    pub knowledge: f32,
    pub selling_skills: f32,
    pub total: f32,
}

impl ScoreBreakdown {
    pub fn subtotal(&self, category: Category) -> f32 {
        match category {
            Category::Planning => self.planning,
            Category::PersonalTrait => self.personal_traits,
            Category::Knowledge => self.knowledge,
            Category::SellingSkills => self.selling_skills,
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut f32 {
        match category {
            Category::Planning => &mut self.planning,
            Category::PersonalTrait => &mut self.personal_traits,
            Category::Knowledge => &mut self.knowledge,
            Category::SellingSkills => &mut self.selling_skills,
        }
    }
}

/// Sums ratings per category. Ratings for ids outside the catalog are ignored
/// and values are taken as-is; range checks belong to the submission guard.
pub fn compute_breakdown(ratings: &RatingSet, catalog: &[EvaluationCriterion]) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();

    for criterion in catalog {
        *breakdown.bucket_mut(criterion.category) += ratings.get(criterion.id);
    }

    breakdown.total = breakdown.planning
        + breakdown.personal_traits
        + breakdown.knowledge
        + breakdown.selling_skills;

    breakdown
}
