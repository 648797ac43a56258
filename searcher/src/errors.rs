use std::time;
use thiserror::Error;

/// Error produced when a search fails.
#[derive(Debug, Error, PartialEq)]
pub enum SearchError {
    /// Every reachable state was explored without finding a goal.
    #[error("No path reaches a goal state")]
    NoResultFound,

    #[error("Gave up after expanding {0} paths")]
    StepLimitExhausted(usize),

    #[error("Gave up after searching for {0:?}")]
    TimeLimitExhausted(time::Duration),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
