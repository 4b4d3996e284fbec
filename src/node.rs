//! Search nodes and the arena that owns them.
//!
//! Nodes refer to their predecessor by [`NodeId`] rather than by reference,
//! so the back-pointer chain is a plain walk over indices into the arena.

use crate::board::{Board, Move};

/// Handle to a node in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// Which collection of the search currently holds a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    Open,
    Closed,
    /// Superseded by a cheaper node for the same board. Still reachable
    /// through back-pointers of nodes generated before it was replaced.
    Retired,
}

/// A board plus its search bookkeeping.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub board: Board,
    /// Moves from the start (g-cost).
    pub depth: u32,
    /// Cached heuristic estimate (h-cost); `0` until the node is scored.
    pub heuristic_value: u32,
    pub parent: Option<NodeId>,
    pub state: NodeState,
    /// Rank among open nodes with equal f; reassigned whenever its place changes.
    pub order: u64,
}

impl SearchNode {
    pub fn root(board: Board) -> Self {
        Self {
            board,
            depth: 0,
            heuristic_value: 0,
            parent: None,
            state: NodeState::Open,
            order: 0,
        }
    }

    pub fn f(&self) -> u32 {
        self.depth + self.heuristic_value
    }
}

/// Owns every node created during one search.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn insert(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0]
    }

    /// One child per legal blank move of `id`'s board, in legal-move order.
    /// Children are unscored and not yet inserted.
    pub fn children(&self, id: NodeId) -> Vec<SearchNode> {
        let parent = self.get(id);
        let blank = parent.board.blank();

        parent
            .board
            .legal_moves()
            .into_iter()
            .map(|target| {
                let mut board = parent.board;
                board.swap(blank, target);
                SearchNode {
                    board,
                    depth: parent.depth + 1,
                    heuristic_value: 0,
                    parent: Some(id),
                    state: NodeState::Open,
                    order: 0,
                }
            })
            .collect()
    }

    /// Boards from `id` back to, but excluding, the root of its chain.
    pub fn path_to_root(&self, id: NodeId) -> Vec<Board> {
        let mut path = Vec::new();
        let mut current = id;
        while let Some(parent) = self.get(current).parent {
            path.push(self.get(current).board);
            current = parent;
        }
        path
    }

    /// Moves of the blank along the chain ending at `id`, root first.
    pub fn moves_to(&self, id: NodeId) -> Vec<Move> {
        let mut moves = Vec::new();
        let mut current = id;
        while let Some(parent) = self.get(current).parent {
            let from = self.get(parent).board.blank();
            let to = self.get(current).board.blank();
            if let Some(movement) = Move::between(from, to) {
                moves.push(movement);
            }
            current = parent;
        }
        moves.reverse();
        moves
    }
}
