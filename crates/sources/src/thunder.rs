//! Thunder Source - In-network Collaborative Filtering
//!
//! Generates candidate recommendations based on collaborative filtering:
//! "Users who liked what you liked also liked these movies"
//!
//! ## Algorithm
//! 1. Find movies user rated highly (>= 4.0)
//! 2. For each highly-rated movie:
//!    - Find other users who also rated it highly
//!    - These are "similar users"
//! 3. Find what those similar users rated highly
//! 4. Score candidates by how many similar users liked them
//! 5. Return top ~300 candidates
//!
//! ## Learning Goals
//! - HashSet for deduplication and O(1) lookups
//! - HashMap for scoring aggregation
//! - Nested iterations over user-movie data
//! - Using Rayon for parallel processing (optional optimization)

use crate::types::{Candidate, CandidateSource, UserContext};
use data_loader::{DataIndex, MovieId, UserId};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, instrument};
use rayon::prelude::*;

/// Thunder source generates in-network candidates via collaborative filtering
pub struct ThunderSource {
    /// Shared reference to the data index (read-only, so no Mutex needed)
    data_index: Arc<DataIndex>,

    /// Minimum rating to consider a movie "highly rated"
    high_rating_threshold: f32,

    /// Minimum number of shared highly-rated movies to consider users similar
    min_shared_movies: usize,
}

impl ThunderSource {
    /// Create a new Thunder source
    ///
    /// ## Parameters
    /// - `data_index`: Shared reference to the loaded MovieLens data
    pub fn new(data_index: Arc<DataIndex>) -> Self {
        Self {
            data_index,
            high_rating_threshold: 4.0,
            min_shared_movies: 3,
        }
    }

    /// Configure the high rating threshold (default: 4.0)
    pub fn with_high_rating_threshold(mut self, threshold: f32) -> Self {
        self.high_rating_threshold = threshold;
        self
    }

    /// Configure minimum shared movies to consider users similar (default: 3)
    pub fn with_min_shared_movies(mut self, min: usize) -> Self {
        self.min_shared_movies = min;
        self
    }

    /// Generate candidate recommendations for a user
    #[instrument(skip(self, user_context), fields(user_id = user_context.user_id))]
    pub fn get_candidates(&self, user_context: &UserContext, limit: usize) -> Vec<Candidate> {
        debug!(
            "Generating Thunder candidates for user {} (highly rated: {})",
            user_context.user_id,
            user_context.highly_rated_movies.len()
        );
        // Step 1: Find similar users
        let similar_users = self.find_similar_users(user_context);
        debug!("Found {} similar users", similar_users.len()); // Add this!

        // Step 2: Get candidate movies from similar users
        let candidate_scores = self.get_candidate_scores(&similar_users, user_context);
        // Step 3: Convert to Candidate structs and sort
        let mut candidates: Vec<Candidate> = candidate_scores
            .into_iter()
            .map(|(movie_id, score)| {
                let mut candidate = Candidate::new(
                    movie_id,
                    CandidateSource::Thunder,
                    score as f32,
                );
                candidate.metadata.similar_users_count = Some(score);
                candidate
            })
            .collect();
        
        candidates.sort_by(|a, b| b.base_score.partial_cmp(&a.base_score).unwrap());
        candidates.truncate(limit);
        
        debug!("Generated {} Thunder candidates", candidates.len());
        candidates
        
    }

    /// Find users similar to the target user
    fn find_similar_users(&self, user_context: &UserContext) -> HashSet<UserId> {
        // let mut shared_counts: HashMap<UserId, u32> = HashMap::new();
        
        // for &movie_id in &user_context.highly_rated_movies {
        //     let ratings = self.data_index.get_movie_ratings(movie_id);
        //     for rating in ratings {
        //         if rating.user_id != user_context.user_id
        //             && rating.rating >= self.high_rating_threshold
        //         {
        //             *shared_counts.entry(rating.user_id).or_insert(0) += 1;
        //         }
        //     }
        // }
        let shared_counts = user_context.highly_rated_movies.par_iter().fold(
            || HashMap::new(),
            |mut local_counts, &movie_id| {
                let ratings = self.data_index.get_movie_ratings(movie_id);
                for rating in ratings {
                    if rating.user_id != user_context.user_id
                        && rating.rating >= self.high_rating_threshold
                    {
                        *local_counts.entry(rating.user_id).or_insert(0) += 1;
                    }
                }
                local_counts
            },
        ).reduce(
            || HashMap::new(),
            |mut acc, local_counts| {
                for (user_id, count) in local_counts {
                    *acc.entry(user_id).or_insert(0) += count;
                }
                acc
            },
        );
        
        // Convert to Vec
        let mut shared_counts_vec: Vec<(UserId, u32)> = shared_counts
            .into_iter()
            .filter(|(_user_id, count)| *count >= self.min_shared_movies as u32)
            .collect();

        // Sort by count DESC (cheap, uses the stored counts)
        shared_counts_vec.sort_unstable_by(|a, b| b.1.cmp(&a.1));

        // Take top 500 similar users and collect ids into a HashSet
        shared_counts_vec.truncate(500);
        let result: HashSet<UserId> = shared_counts_vec.into_iter().map(|(uid, _)| uid).collect();

        result
    }

    /// Get candidate movie scores from similar users
    fn get_candidate_scores(
        &self,
        similar_users: &HashSet<UserId>,
        user_context: &UserContext,
    ) -> HashMap<MovieId, u32> {
        let scores = similar_users.par_iter().fold(
            || HashMap::new(),
            |mut local_scores, &similar_user_id| {
                let ratings = self.data_index.get_user_ratings(similar_user_id);
                for rating in ratings {
                    if rating.rating >= self.high_rating_threshold
                        && !user_context.watched_movies.contains(&rating.movie_id)
                    {
                        *local_scores.entry(rating.movie_id).or_insert(0) += 1;
                    }
                }
                local_scores
            },
        ).reduce(
            || HashMap::new(),
            |mut acc, local_scores| {
                for (movie_id, count) in local_scores {
                    *acc.entry(movie_id).or_insert(0) += count;
                }
                acc
            },
        );
        scores
    }
}
