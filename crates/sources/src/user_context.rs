//! Helper functions to build UserContext from DataIndex
//!
//! This module provides utilities to aggregate user information
//! into a UserContext struct for efficient candidate generation.

use crate::types::UserContext;
use anyhow::{anyhow, Result};
use data_loader::{DataIndex, Genre, UserId};
use std::collections::HashMap;

/// Build a UserContext from DataIndex for a given user
///
/// This function aggregates all the user information we need:
/// - Movies watched (all rated movies)
/// - Highly rated movies (rating >= 4.0)
/// - Genre preferences (average rating per genre)
/// - Preferred era (median year of highly-rated movies)
/// - Average rating given by user
///
/// ## Learning Note
/// This demonstrates the "context builder" pattern in Rust:
/// - Gather data once upfront
/// - Avoid repeated DataIndex queries during candidate generation
/// - Use HashSet for O(1) lookups
pub fn build_user_context(data_index: &DataIndex, user_id: UserId) -> Result<UserContext> {
    // Verify user exists
    let _user = data_index
        .get_user(user_id)
        .ok_or_else(|| anyhow!("User {} not found", user_id))?;

    let mut context = UserContext::new(user_id);

    // Get all user's ratings
    let ratings = data_index.get_user_ratings(user_id);

    if ratings.is_empty() {
        // Return early for users with no ratings
        return Ok(context);
    }

    // Compute average rating
    let total: f32 = ratings.iter().map(|r| r.rating).sum();
    context.avg_rating = total / ratings.len() as f32;

    // Build watched movies set and highly rated movies list
    for rating in ratings {
        context.watched_movies.insert(rating.movie_id);

        if rating.rating >= 4.0 {
            context.highly_rated_movies.push(rating.movie_id);
        }
    }

    // Compute genre preferences
    context.genre_preferences = compute_genre_preferences(data_index, ratings);

    // Compute preferred era
    context.preferred_era = compute_preferred_era(data_index, &context.highly_rated_movies);

    Ok(context)
}

/// Compute average rating per genre for a user
fn compute_genre_preferences(
    data_index: &DataIndex,
    ratings: &[data_loader::Rating],
) -> HashMap<Genre, f32> {
    // Steps:
    // 1. Create HashMap<Genre, (f32, u32)> to track (sum, count)
    // 2. Iterate through ratings
    // 3. For each rating, get the movie
    // 4. For each genre in movie, update the (sum, count)
    // 5. Convert to HashMap<Genre, f32> with averages
    let mut genre_stats: HashMap<Genre, (f32, u32)> = HashMap::new();
    for rating in ratings {
        if let Some(movie) = data_index.get_movie(rating.movie_id) {
            for genre in &movie.genres {
                let entry = genre_stats.entry(*genre).or_insert((0.0, 0));
                entry.0 += rating.rating;
                entry.1 += 1;
            }
        }
    }

    // Convert to averages
    genre_stats.into_iter()
        .map(|(genre, (sum, count))| (genre, sum / count as f32))
        .collect()
}

/// Compute user's preferred movie era (median year of highly-rated movies)
fn compute_preferred_era(
    data_index: &DataIndex,
    highly_rated_movies: &[data_loader::MovieId],
) -> Option<u16> {
    // Steps:
    // 1. Collect years: Vec<u16>
    // 2. Filter out movies with no year
    // 3. Sort the years
    // 4. Return middle element
    let mut years: Vec<u16> = highly_rated_movies
        .iter()
        .filter_map(|&movie_id| {
            data_index.get_movie(movie_id)?.year
        })
        .collect();

    if years.is_empty() {
        return None;
    }
    years.sort_unstable();
    Some(years[years.len() / 2])    
}
