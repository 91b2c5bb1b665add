use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::grid::Pos;
use crate::node::Node;

/// Removal policy of a [`Frontier`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Strategy {
    /// Last in, first out: depth-first search.
    Dfs,
    /// First in, first out: breadth-first search, fewest moves first.
    Bfs,
}

impl Strategy {
    pub fn name(self) -> &'static str { match self { Strategy::Dfs => "DFS", Strategy::Bfs => "BFS" } }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DFS" => Ok(Strategy::Dfs),
            "BFS" => Ok(Strategy::Bfs),
            _ => Err(Error::InvalidStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

/// Pending nodes. `add`, `contains_state` and `is_empty` behave the same for
/// both strategies; only `remove` looks at the policy.
#[derive(Debug)]
pub struct Frontier {
    strategy: Strategy,
    nodes: VecDeque<Node>,
    // state -> number of queued nodes holding it
    states: HashMap<Pos, usize>,
}

impl Frontier {
    pub fn new(strategy: Strategy) -> Self { Self { strategy, nodes: VecDeque::new(), states: HashMap::new() } }

    pub fn strategy(&self) -> Strategy { self.strategy }
    pub fn len(&self) -> usize { self.nodes.len() }
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    pub fn add(&mut self, node: Node) {
        *self.states.entry(node.state).or_insert(0) += 1;
        self.nodes.push_back(node);
    }

    pub fn contains_state(&self, state: Pos) -> bool { self.states.contains_key(&state) }

    pub fn remove(&mut self) -> Result<Node> {
        let node = match self.strategy {
            Strategy::Dfs => self.nodes.pop_back(),
            Strategy::Bfs => self.nodes.pop_front(),
        }.ok_or(Error::EmptyFrontier)?;
        if let Some(n) = self.states.get_mut(&node.state) {
            *n -= 1;
            if *n == 0 { self.states.remove(&node.state); }
        }
        Ok(node)
    }
}
