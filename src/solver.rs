use std::collections::HashSet;

use crate::{error::{Error, Result}, frontier::{Frontier, Strategy}, grid::{Action, Maze, Pos}, node::{Node, Tree}};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveState { Ready, Running, Solved, Failed }

/// Moves and cells from the start (excluded) to the goal (included).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub actions: Vec<Action>,
    pub cells: Vec<Pos>,
}

impl Solution {
    pub fn len(&self) -> usize { self.actions.len() }
    pub fn is_empty(&self) -> bool { self.actions.is_empty() }
}

/// Outcome of one successful search.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Search {
    pub strategy: Strategy,
    pub solution: Solution,
    /// Nodes taken off the frontier, goal included.
    pub num_explored: usize,
    /// States expanded (goal excluded).
    pub explored: HashSet<Pos>,
    /// `explored` in expansion order.
    pub order: Vec<Pos>,
}

pub struct Solver { strategy: Strategy, state: SolveState }

impl Solver {
    pub fn new(strategy: Strategy) -> Self { Self { strategy, state: SolveState::Ready } }

    pub fn from_name(name: &str) -> Result<Self> { Ok(Self::new(name.parse()?)) }

    pub fn strategy(&self) -> Strategy { self.strategy }
    pub fn state(&self) -> SolveState { self.state }

    /// Search from the maze start until the goal is taken off the frontier.
    /// Every call starts over with a fresh frontier and explored set.
    pub fn solve(&mut self, maze: &Maze) -> Result<Search> {
        self.state = SolveState::Running;
        let res = self.run(maze);
        self.state = if res.is_ok() { SolveState::Solved } else { SolveState::Failed };
        res
    }

    fn run(&self, maze: &Maze) -> Result<Search> {
        let mut frontier = Frontier::new(self.strategy);
        let mut tree = Tree::new();
        let mut explored = HashSet::new();
        let mut order = Vec::new();
        let mut num_explored = 0usize;
        frontier.add(Node::root(maze.start()));

        loop {
            let node = match frontier.remove() {
                Ok(node) => node,
                Err(Error::EmptyFrontier) => return Err(Error::NoSolution),
                Err(e) => return Err(e),
            };
            num_explored += 1;

            if node.state == maze.goal() {
                let (actions, cells) = tree.path_to(&node);
                return Ok(Search { strategy: self.strategy, solution: Solution { actions, cells }, num_explored, explored, order });
            }

            explored.insert(node.state);
            order.push(node.state);
            let id = tree.insert(node);

            for (action, state) in maze.neighbors(node.state) {
                if !frontier.contains_state(state) && !explored.contains(&state) {
                    frontier.add(Node::child(state, id, action));
                }
            }
        }
    }
}

/// Parse `strategy` and solve; an unknown name fails before any search work.
pub fn solve_named(maze: &Maze, strategy: &str) -> Result<Search> {
    Solver::from_name(strategy)?.solve(maze)
}
