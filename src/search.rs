//! A* search from an arbitrary board to [`Board::GOAL`].
//!
//! The open list behaves like a list that is stably re-sorted on `f` after
//! every expansion, kept as a binary min-heap on `(f, order)`. A node's
//! `order` is its place among equal-f nodes:
//! - nodes appended during an expansion are ranked after everything queued
//!   before, in generation order;
//! - a node whose `f` drops in place keeps its list slot, so the re-sort puts
//!   it after every untouched node of its new `f` and before that expansion's
//!   appended nodes; several such nodes keep their previous relative order.
//!
//! Each change of rank pushes a fresh heap entry; entries whose `f` or
//! `order` no longer match their node are skipped when they surface.
//!
//! Every board has at most one live node across the open and closed lists,
//! found through a hash map keyed on the board. A cheaper path to an open
//! board overwrites that node; a cheaper path to a closed board retires it
//! and opens a new node.

use crate::board::{Board, Move};
use crate::heuristic::Heuristic;
use crate::node::{NodeArena, NodeId, NodeState, SearchNode};
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::{debug, instrument, trace};

/// Outcome of [`solve`].
///
/// `path` runs from the goal back towards the start and excludes the start
/// itself. Two special shapes exist:
/// - the start is already solved: `path == [start]`, `expansions == 1`;
/// - no solution: `path` is empty and `expansions == 0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    pub path: Vec<Board>,
    /// Nodes taken off the open list, the goal included.
    pub expansions: usize,
    /// Blank moves from the start to the goal.
    pub moves: Vec<Move>,
}

impl Solution {
    /// True when the open list ran dry without reaching the goal.
    pub fn is_exhausted(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of moves in the solution.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True when there are no moves to play. This covers both a start that
    /// was already solved and an exhausted search; use
    /// [`is_exhausted`](Self::is_exhausted) to tell them apart.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The path read from the first move to the goal.
    pub fn in_play_order(&self) -> Vec<Board> {
        self.path.iter().rev().copied().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct OpenEntry {
    f: u32,
    order: u64,
    id: NodeId,
}

/// What merging one child into the search did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Merge {
    /// An existing node was at least as cheap.
    Kept,
    /// An open node took the child's cheaper path. Carries its `f` and
    /// `order` from before the update.
    Improved { f: u32, order: u64, id: NodeId },
    /// A new open node, either unseen or reopened.
    Appended(NodeId),
}

struct Search<'h, H: ?Sized> {
    heuristic: &'h H,
    arena: NodeArena,
    open: BinaryHeap<Reverse<OpenEntry>>,
    index: FxHashMap<Board, NodeId>,
    closed: usize,
    next_order: u64,
    expansions: usize,
}

impl<'h, H> Search<'h, H>
where
    H: Heuristic + ?Sized,
{
    fn new(start: Board, heuristic: &'h H) -> Self {
        let mut search = Self {
            heuristic,
            arena: NodeArena::new(),
            open: BinaryHeap::new(),
            index: FxHashMap::default(),
            closed: 0,
            next_order: 0,
            expansions: 0,
        };
        let root = search.insert(SearchNode::root(start));
        search.rank(root);
        search
    }

    /// Stores `node` as the open node for its board.
    fn insert(&mut self, mut node: SearchNode) -> NodeId {
        node.state = NodeState::Open;
        let board = node.board;
        let id = self.arena.insert(node);
        self.index.insert(board, id);
        id
    }

    /// Places `id` behind every open node ranked so far.
    fn rank(&mut self, id: NodeId) {
        let node = self.arena.get_mut(id);
        node.order = self.next_order;
        self.next_order += 1;

        let entry = OpenEntry {
            f: node.f(),
            order: node.order,
            id,
        };
        self.open.push(Reverse(entry));
    }

    /// Next live open node, skipping entries left behind by re-ranking.
    fn pop_open(&mut self) -> Option<NodeId> {
        while let Some(Reverse(entry)) = self.open.pop() {
            let node = self.arena.get(entry.id);
            if node.state == NodeState::Open
                && node.f() == entry.f
                && node.order == entry.order
            {
                return Some(entry.id);
            }
        }
        None
    }

    fn run(mut self) -> Solution {
        while let Some(id) = self.pop_open() {
            self.expansions += 1;

            let node = self.arena.get(id);
            if node.board.is_goal() {
                return self.finish(id);
            }

            self.expand(id);
        }

        debug!(
            nodes = self.arena.len(),
            closed = self.closed,
            "open list exhausted without reaching the goal"
        );
        Solution::default()
    }

    /// Merges every child of `id`, closes it, then re-ranks what changed.
    fn expand(&mut self, id: NodeId) {
        let mut improved = Vec::new();
        let mut appended = Vec::new();

        for child in self.arena.children(id) {
            match self.reconcile(child) {
                Merge::Kept => {}
                Merge::Improved { f, order, id } => improved.push((f, order, id)),
                Merge::Appended(id) => appended.push(id),
            }
        }

        self.arena.get_mut(id).state = NodeState::Closed;
        self.closed += 1;

        // Improved nodes keep their old slots, which were ordered by (f, order).
        improved.sort_unstable();
        for (_, _, id) in improved {
            self.rank(id);
        }
        for id in appended {
            self.rank(id);
        }
    }

    /// Scores `child` and merges it with any existing node for the same board.
    fn reconcile(&mut self, mut child: SearchNode) -> Merge {
        let h = self.heuristic.estimate(&child.board);
        let f = h + child.depth;
        child.heuristic_value = h;

        let Some(existing) = self.index.get(&child.board).copied() else {
            return Merge::Appended(self.insert(child));
        };

        let node = self.arena.get_mut(existing);
        let previous = node.f();
        if f >= previous {
            return Merge::Kept;
        }

        let state = node.state;
        match state {
            NodeState::Open => {
                trace!(from = previous, to = f, "cheaper path to open node");
                node.heuristic_value = h;
                node.parent = child.parent;
                node.depth = child.depth;
                Merge::Improved {
                    f: previous,
                    order: node.order,
                    id: existing,
                }
            }
            NodeState::Closed => {
                trace!(from = previous, to = f, "reopening closed node");
                node.state = NodeState::Retired;
                self.closed -= 1;
                Merge::Appended(self.insert(child))
            }
            // `insert` repoints the index whenever a node retires.
            NodeState::Retired => unreachable!("index points at a retired node"),
        }
    }

    fn finish(self, goal: NodeId) -> Solution {
        let node = self.arena.get(goal);
        let solution = match node.parent {
            Some(_) => Solution {
                path: self.arena.path_to_root(goal),
                expansions: self.expansions,
                moves: self.arena.moves_to(goal),
            },
            None => Solution {
                path: vec![node.board],
                expansions: self.expansions,
                moves: Vec::new(),
            },
        };

        debug!(
            moves = solution.len(),
            expansions = solution.expansions,
            nodes = self.arena.len(),
            "reached goal"
        );
        solution
    }
}

/// Runs A* from `start` to [`Board::GOAL`] guided by `heuristic`.
///
/// Unsolvable starts are searched until every reachable board has been
/// closed, then reported as an exhausted [`Solution`]. Screen with
/// [`Board::is_solvable`] first when that cost matters.
#[instrument(level = "debug", skip_all, fields(start = ?start.flatten()))]
pub fn solve<H>(start: &Board, heuristic: &H) -> Solution
where
    H: Heuristic + ?Sized,
{
    Search::new(*start, heuristic).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::{hamming, manhattan};

    fn zero(_: &Board) -> u32 {
        0
    }

    fn centre() -> Board {
        "123 405 786".parse().unwrap()
    }

    fn step(board: Board, movement: Move) -> Board {
        board.try_move(movement).unwrap()
    }

    fn node(board: Board, depth: u32, parent: NodeId) -> SearchNode {
        let mut node = SearchNode::root(board);
        node.depth = depth;
        node.parent = Some(parent);
        node
    }

    fn appended<H: Heuristic + ?Sized>(search: &mut Search<'_, H>, child: SearchNode) -> NodeId {
        match search.reconcile(child) {
            Merge::Appended(id) => {
                search.rank(id);
                id
            }
            other => panic!("expected a new node, got {:?}", other),
        }
    }

    #[test]
    fn solved_start_returns_itself() {
        let solution = solve(&Board::GOAL, &manhattan);
        assert_eq!(solution.path, vec![Board::GOAL]);
        assert_eq!(solution.expansions, 1);
        assert!(solution.moves.is_empty());
        assert!(!solution.is_exhausted());
    }

    #[test]
    fn one_move_from_goal() {
        let start = Board::GOAL.try_move(Move::Left).unwrap();
        for h in [hamming as fn(&Board) -> u32, manhattan] {
            let solution = solve(&start, &h);
            assert_eq!(solution.path, vec![Board::GOAL]);
            assert_eq!(solution.moves, vec![Move::Right]);
            assert!(solution.expansions >= 1);
        }
    }

    #[test]
    fn path_is_goal_first_and_connected() {
        let start: Board = "123 405 786".parse().unwrap();
        let solution = solve(&start, &manhattan);

        assert_eq!(solution.path.first(), Some(&Board::GOAL));
        assert_eq!(solution.len(), 2);
        assert_eq!(solution.path.len(), 2);

        let mut board = start;
        for (movement, expected) in solution.moves.iter().zip(solution.in_play_order()) {
            assert!(board.apply_move(*movement));
            assert_eq!(board, expected);
        }
    }

    #[test]
    fn zero_heuristic_still_finds_shortest_path() {
        let start: Board = "123 405 786".parse().unwrap();
        let solution = solve(&start, &|_: &Board| 0u32);
        assert_eq!(solution.len(), 2);
    }

    #[test]
    fn unsolvable_start_exhausts() {
        let start: Board = "213 456 780".parse().unwrap();
        let solution = solve(&start, &manhattan);
        assert!(solution.is_exhausted());
        assert_eq!(solution, Solution::default());
        assert_eq!(solution.expansions, 0);
    }

    #[test]
    fn cheaper_path_overwrites_open_node() {
        let start = centre();
        let mut search = Search::new(start, &zero);
        let root = search.index[&start];
        let via = appended(&mut search, node(step(start, Move::Left), 1, root));
        let target = step(start, Move::Up);
        let id = appended(&mut search, node(target, 5, root));
        let nodes = search.arena.len();

        let same = search.reconcile(node(target, 5, via));
        assert_eq!(same, Merge::Kept);

        let merged = search.reconcile(node(target, 2, via));
        let order = search.arena.get(id).order;
        assert_eq!(merged, Merge::Improved { f: 5, order, id });

        let updated = search.arena.get(id);
        assert_eq!(updated.depth, 2);
        assert_eq!(updated.parent, Some(via));
        assert_eq!(updated.state, NodeState::Open);
        assert_eq!(search.arena.len(), nodes);
        assert_eq!(search.index[&target], id);
    }

    #[test]
    fn cheaper_path_reopens_closed_node() {
        let start = centre();
        let mut search = Search::new(start, &zero);
        let root = search.index[&start];
        let via_board = step(start, Move::Left);
        let via = appended(&mut search, node(via_board, 1, root));
        let target = step(start, Move::Up);
        let old = appended(&mut search, node(target, 5, root));
        search.arena.get_mut(old).state = NodeState::Closed;
        search.closed += 1;

        let reopened = appended(&mut search, node(target, 2, via));

        assert_ne!(reopened, old);
        assert_eq!(search.arena.get(old).state, NodeState::Retired);
        assert_eq!(search.arena.get(reopened).state, NodeState::Open);
        assert_eq!(search.index[&target], reopened);
        assert_eq!(search.closed, 0);
        assert_eq!(search.arena.path_to_root(reopened), vec![target, via_board]);
    }

    #[test]
    fn improved_node_ranks_between_old_and_new_ties() {
        let start = centre();
        let mut search = Search::new(start, &zero);
        let root = search.index[&start];
        let untouched = appended(&mut search, node(step(start, Move::Up), 2, root));
        let improved = appended(&mut search, node(step(start, Move::Left), 4, root));

        match search.reconcile(node(step(start, Move::Left), 2, root)) {
            Merge::Improved { id, .. } => search.rank(id),
            other => panic!("expected an improvement, got {:?}", other),
        }
        let fresh = appended(&mut search, node(step(start, Move::Down), 2, root));

        let popped: Vec<_> = std::iter::from_fn(|| search.pop_open()).collect();
        assert_eq!(popped, vec![root, untouched, improved, fresh]);
    }

    #[test]
    fn expansion_counts_follow_stable_resort() {
        let cases = [("256 371 480", 351), ("134 802 756", 229)];
        for (text, expansions) in cases {
            let start: Board = text.parse().unwrap();
            assert_eq!(solve(&start, &manhattan).expansions, expansions, "{}", text);
        }
    }
}
