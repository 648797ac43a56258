//! Classic state space puzzles, each solved with the generic searches.

use std::fmt;

use searcher::{Path, SearchError};
use thiserror::Error;

pub mod bridge;
pub mod missionaries;
pub mod pour;
pub mod subway;

/// Which way something is moving across a river or bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Across,
    Back,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "->"),
            Direction::Back => write!(f, "<-"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("Glass level {level} exceeds capacity {capacity}")]
    Overfull { level: u32, capacity: u32 },

    #[error("Unknown station: {0}")]
    UnknownStation(String),

    #[error("Can't parse subway line: {0:?}")]
    InvalidLine(String),

    #[error("No stations on line {0}")]
    EmptyLine(String),

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Render a path using the display form of its states and actions.
pub fn describe<S, A, C>(path: &Path<S, A, C>) -> String
where
    S: fmt::Display,
    A: fmt::Display,
{
    let mut out = path.origin().to_string();
    for step in path.steps() {
        out.push_str(&format!(" -[{}]-> {}", step.action, step.state));
    }
    out
}
