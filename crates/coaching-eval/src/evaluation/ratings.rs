use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Star ratings keyed by criterion id, in half-point steps.
///
/// The set is owned by whoever collects the ratings; scoring only ever reads it.
/// Criteria that were never rated are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingSet {
    ratings: BTreeMap<String, f32>,
}

impl RatingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) the rating for one criterion.
    pub fn rate(&mut self, id: impl Into<String>, rating: f32) {
        self.ratings.insert(id.into(), rating);
    }

    pub fn clear(&mut self, id: &str) -> Option<f32> {
        self.ratings.remove(id)
    }

    /// Rating for `id`, reading unrated criteria as zero.
    pub fn get(&self, id: &str) -> f32 {
        self.ratings.get(id).copied().unwrap_or(0.0)
    }

    pub fn is_rated(&self, id: &str) -> bool {
        self.ratings.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.ratings.iter().map(|(id, rating)| (id.as_str(), *rating))
    }
}

impl<K: Into<String>> FromIterator<(K, f32)> for RatingSet {
    fn from_iter<I: IntoIterator<Item = (K, f32)>>(iter: I) -> Self {
        Self {
            ratings: iter
                .into_iter()
                .map(|(id, rating)| (id.into(), rating))
                .collect(),
        }
    }
}
