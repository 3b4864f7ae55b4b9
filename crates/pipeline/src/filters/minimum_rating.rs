//! Filter to ensure minimum quality threshold.
//!
//! Removes movies with low average ratings or too few ratings,
//! ensuring we only recommend quality content.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::DataIndex;
use sources::{Candidate, UserContext};
use std::sync::Arc;

/// Removes candidates below quality thresholds.
///
/// ## Algorithm
/// For each candidate:
/// 1. Get MovieStats from DataIndex
/// 2. Check if avg_rating >= min_rating
/// 3. Check if rating_count >= min_count
/// 4. Keep only if both conditions met
pub struct MinimumRatingFilter {
    data_index: Arc<DataIndex>,
    min_rating: f32,
    min_count: u32,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `data_index` - Shared reference to DataIndex for stats lookups
    /// * `min_rating` - Minimum average rating (typically 3.5)
    /// * `min_count` - Minimum number of ratings (typically 10)
    pub fn new(data_index: Arc<DataIndex>, min_rating: f32, min_count: u32) -> Self {
        Self {
            data_index,
            min_rating,
            min_count,
        }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply(
        &self,
        candidates: Vec<Candidate>,
        _context: &UserContext,
    ) -> Result<Vec<Candidate>> {
        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                if let Some(stats) = self.data_index.get_movie_stats(candidate.movie_id) {
                    stats.avg_rating >= self.min_rating && stats.rating_count >= self.min_count
                } else {
                    false
                }
            })
            .collect();

        Ok(filtered)
    }
}
