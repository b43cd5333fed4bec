//! Error types for the test framework

use thiserror::Error;

/// Errors raised while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// A fixture description was malformed
    #[error("invalid fixture: {0}")]
    InvalidFixture(String),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] voxseg_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
