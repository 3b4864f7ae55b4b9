//! Error types for the data-loader crate.

use thiserror::Error;

/// Errors that can occur while loading the raw dataset
///
/// The `#[derive(Error)]` macro from thiserror automatically implements
/// the `std::error::Error` trait and `Display` based on our `#[error(...)]` attributes
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A CSV record couldn't be decoded into the expected shape
    ///
    /// The csv error carries the byte/record position of the failure
    #[error("Decode error in {file}: {source}")]
    DecodeError {
        file: String,
        #[source]
        source: csv::Error,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
