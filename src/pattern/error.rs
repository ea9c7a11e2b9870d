// Tue Jan 20 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("Invalid hex byte in pattern: {0:?}")]
    InvalidHex(String),
}
