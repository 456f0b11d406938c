//! Error types for ctr-kat-cli

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors that end a CLI run with [`crate::EXIT_FATAL`]
#[derive(Debug, Error)]
pub enum Error {
    /// Loading or executing records failed
    #[error(transparent)]
    Runner(#[from] ctr_kat_runner::Error),

    /// Writing a report failed
    #[error(transparent)]
    Report(#[from] ctr_kat_report::Error),
}
