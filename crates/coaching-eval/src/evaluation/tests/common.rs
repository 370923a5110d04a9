use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::evaluation::catalog::{self, Category};
use crate::evaluation::{RatingSet, ScoreBreakdown, ScoringEngine};

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::default()
}

pub(super) fn perfect_ratings() -> RatingSet {
    catalog::catalog()
        .iter()
        .map(|criterion| (criterion.id, criterion.max_score as f32))
        .collect()
}

/// Every criterion of `category` rated at its maximum, nothing else rated.
pub(super) fn category_maxed(category: Category) -> RatingSet {
    catalog::criteria_in(category)
        .map(|criterion| (criterion.id, criterion.max_score as f32))
        .collect()
}

/// Half-point ratings within each criterion's range, some criteria left unrated.
pub(super) fn random_ratings(rng: &mut StdRng) -> RatingSet {
    let mut ratings = RatingSet::new();
    for criterion in catalog::catalog() {
        if rng.gen_bool(0.2) {
            continue;
        }
        let half_steps = rng.gen_range(0..=criterion.max_score as u32 * 2);
        ratings.rate(criterion.id, half_steps as f32 / 2.0);
    }
    ratings
}

pub(super) fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x00c0_ac4e)
}

pub(super) fn breakdown(
    total: f32,
    selling_skills: f32,
    planning: f32,
    knowledge: f32,
) -> ScoreBreakdown {
    ScoreBreakdown {
        planning,
        personal_traits: 0.0,
        knowledge,
        selling_skills,
        total,
    }
}
