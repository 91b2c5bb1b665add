pub mod error;
pub mod frontier;
pub mod grid;
pub mod logger;
pub mod node;
pub mod render;
pub mod solver;

pub use error::{Error, InvalidMaze, Result};
pub use frontier::{Frontier, Strategy};
pub use grid::{Action, Maze, Pos};
pub use node::{Node, NodeId, Tree};
pub use solver::{solve_named, Search, SolveState, Solution, Solver};
