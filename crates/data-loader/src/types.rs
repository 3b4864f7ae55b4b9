//! Raw record types for the TMDB-style movie dataset.
//!
//! The dataset ships as two CSV files:
//! - `movies.csv`: one row per movie with metadata, including structured
//!   fields (`genres`, `keywords`) stored as JSON array strings
//! - `credits.csv`: one row per movie with `cast` and `crew` JSON strings
//!
//! These types mirror the CSV columns we consume; columns we don't care
//! about (budget, revenue, production companies, ...) are simply ignored
//! by serde during deserialization.

use serde::{Deserialize, Serialize};

/// Unique identifier for a movie in the source dataset
pub type MovieId = u32;

/// One row of `movies.csv`, as read from disk.
///
/// Optional fields stay `Option` here: the cleaning step downstream decides
/// which absences drop the row and which degrade to fallback values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMovieRecord {
    pub id: MovieId,
    pub title: String,
    /// Free-text plot summary; rows without one are dropped during cleaning
    pub overview: Option<String>,
    /// JSON array string: `[{"id": 28, "name": "Action"}, ...]`
    pub genres: String,
    /// JSON array string, same shape as `genres`
    pub keywords: String,
    /// `YYYY-MM-DD`; rows with unparseable dates are dropped during cleaning
    pub release_date: Option<String>,
    /// Runtime in minutes; the source stores it as a float
    pub runtime: Option<f64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u64>,
    pub popularity: Option<f64>,
}

/// One row of `credits.csv`, as read from disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCreditsRecord {
    pub movie_id: MovieId,
    pub title: String,
    /// JSON array string of cast entries in billing order:
    /// `[{"cast_id": 14, "character": "...", "name": "Tom Hanks", ...}, ...]`
    pub cast: String,
    /// JSON array string of crew entries:
    /// `[{"job": "Director", "name": "...", ...}, ...]`
    pub crew: String,
}
