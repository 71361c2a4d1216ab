//! Error module
//!
//! Defines the error type for the prompt library. The decoder and the search
//! filter never fail; errors only come from loading a dataset, exporting
//! results, or invalid command-line usage.

use thiserror::Error;

/// The main error type for the prompt library.
///
/// # Error Categories
///
/// - **Load errors**: the dataset file is missing, unreadable or not UTF-8
/// - **Export errors**: writing JSON or CSV output failed
/// - **Configuration errors**: invalid argument combinations
#[derive(Error, Debug)]
pub enum PromptLibraryError {
    /// General I/O error.
    ///
    /// Raised when the dataset cannot be read or the output cannot be written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset bytes are not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// CSV export error from the csv crate.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON export error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid command-line argument error.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Unrecoverable runtime failure, such as a background task panicking.
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Strict decode check failure.
    ///
    /// The decode report has already been printed; this error signals
    /// that the process should exit with code 3.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}
