use crate::grid::{Action, Pos};

/// Index of an expanded node inside a [`Tree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A search node: the cell, the node it was reached from and the move taken.
/// The root has neither parent nor action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub state: Pos,
    pub parent: Option<NodeId>,
    pub action: Option<Action>,
}

impl Node {
    pub fn root(state: Pos) -> Self { Self { state, parent: None, action: None } }
    pub fn child(state: Pos, parent: NodeId, action: Action) -> Self { Self { state, parent: Some(parent), action: Some(action) } }
}

/// Arena of expanded nodes. Parent links are indices into it, so a node
/// only ever points back toward the root.
#[derive(Debug, Default)]
pub struct Tree { nodes: Vec<Node> }

impl Tree {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> &Node { &self.nodes[id.0] }
    pub fn len(&self) -> usize { self.nodes.len() }
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    /// Follow parent links from `node` up to the root and return the actions
    /// and cells in root-to-node order, root excluded.
    pub fn path_to(&self, node: &Node) -> (Vec<Action>, Vec<Pos>) {
        let mut actions = Vec::new();
        let mut cells = Vec::new();
        let mut cur = *node;
        while let (Some(parent), Some(action)) = (cur.parent, cur.action) {
            actions.push(action);
            cells.push(cur.state);
            cur = *self.get(parent);
        }
        actions.reverse();
        cells.reverse();
        (actions, cells)
    }
}
