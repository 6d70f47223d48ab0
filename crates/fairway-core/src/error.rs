use thiserror::Error;

/// Errors raised by the scoring rules.
///
/// Only configuration problems surface here. Incomplete score cards and
/// short points tables degrade to zero contributions instead.
#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("unknown handicap category: {0}")]
    UnknownCategory(String),
    #[error("duplicate handicap category: {0}")]
    DuplicateCategory(String),
    #[error("invalid rules: {0}")]
    InvalidRules(String),
    #[error("failed to parse rules: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ScoringError>;
