use thiserror::Error;

use crate::grid::Pos;

/// Why a maze layout was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMaze {
    #[error("maze must have exactly one start point (found {0})")]
    StartCount(usize),
    #[error("maze must have exactly one goal (found {0})")]
    GoalCount(usize),
    #[error("illegal character {ch:?} at row {row}, col {col}")]
    IllegalChar { ch: char, row: usize, col: usize },
    #[error("endpoint {0} is outside the grid or on a wall")]
    Endpoint(Pos),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid maze: {0}")]
    InvalidMaze(#[from] InvalidMaze),
    #[error("unknown search strategy {0:?} (expected DFS or BFS)")]
    InvalidStrategy(String),
    // only ever seen inside the search loop, which turns it into NoSolution
    #[error("empty frontier")]
    EmptyFrontier,
    #[error("no solution")]
    NoSolution,
}

pub type Result<T> = std::result::Result<T, Error>;
