//! # Data Loader Crate
//!
//! This crate handles loading the raw TMDB-style movie dataset.
//!
//! ## Main Components
//!
//! - **types**: Raw record types (RawMovieRecord, RawCreditsRecord)
//! - **parser**: Read the two CSV files into Rust structs
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{read_movies, read_credits};
//! use std::path::Path;
//!
//! let movies = read_movies(Path::new("data/movies.csv"))?;
//! let credits = read_credits(Path::new("data/credits.csv"))?;
//!
//! println!("{} movies, {} credit rows", movies.len(), credits.len());
//! ```
//!
//! Structured attribute columns (genres, keywords, cast, crew) are kept as
//! raw JSON strings at this layer; the pipeline crate's feature extractor
//! parses them with its recover-to-empty policy.

// Public modules
pub mod error;
pub mod types;
pub mod parser;

// Re-export commonly used items for convenience
pub use error::{DataLoadError, Result};
pub use parser::{read_credits, read_movies};
pub use types::{MovieId, RawCreditsRecord, RawMovieRecord};
