//! Best-first walk over an `RTree`, shared by nearest-neighbor and skyline
//! search.
//!
//! The walk pops frontier entries in ascending score order. Internal nodes
//! push each admitted child; leaves are handed to the policy. All state lives
//! in the policy value and the frontier local to `walk`, so one index can
//! serve any number of concurrent walks.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::trace;

use crate::node::{NodeId, NodeKind};
use crate::{Point, RTree, Rectangle};

/// Scoring and pruning rules for one kind of query.
pub trait TraversalPolicy {
    /// Lower bound of the score of anything inside `mbr`.
    fn score(&self, mbr: &Rectangle) -> f64;

    /// Whether a node may still hold results, given what has been found so
    /// far. Checked when a child is pushed and again when it is popped.
    fn admits(&self, _mbr: &Rectangle, _score: f64) -> bool {
        true
    }

    /// Fold a leaf's points into the accumulated result.
    fn visit_leaf(&mut self, points: &[Point]);

    /// True once no entry scoring `next_score` or worse can improve the
    /// result. Since the frontier is ascending this ends the whole walk.
    fn is_settled(&self, _next_score: f64) -> bool {
        false
    }
}

/// Counters describing how much of the tree a walk touched.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TraversalStats {
    pub nodes_visited: usize,
    pub leaves_visited: usize,
    pub entries_pruned: usize,
}

struct FrontierEntry {
    score: f64,
    seq: usize,
    node: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: lowest score, then earliest push, on top.
        other
            .score
            .total_cmp(&self.score)
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Run a best-first walk of `tree` under `policy`.
///
/// Equal scores pop in push order, so a walk is deterministic for a given
/// tree.
pub fn walk<P: TraversalPolicy>(tree: &RTree, policy: &mut P) -> TraversalStats {
    let mut stats = TraversalStats::default();
    if tree.is_empty() {
        return stats;
    }

    let mut frontier = BinaryHeap::new();
    let mut seq = 0;
    let root_mbr = tree.envelope();
    frontier.push(FrontierEntry {
        score: policy.score(&root_mbr),
        seq,
        node: tree.root(),
    });

    while let Some(entry) = frontier.pop() {
        if policy.is_settled(entry.score) {
            stats.entries_pruned += frontier.len() + 1;
            break;
        }
        let node = tree.node(entry.node);
        if !policy.admits(&node.mbr(), entry.score) {
            stats.entries_pruned += 1;
            continue;
        }
        stats.nodes_visited += 1;

        match node.kind() {
            NodeKind::Leaf(points) => {
                stats.leaves_visited += 1;
                policy.visit_leaf(points);
            }
            NodeKind::Internal(children) => {
                for &child in children {
                    let mbr = tree.node(child).mbr();
                    let score = policy.score(&mbr);
                    if policy.admits(&mbr, score) {
                        seq += 1;
                        frontier.push(FrontierEntry {
                            score,
                            seq,
                            node: child,
                        });
                    } else {
                        stats.entries_pruned += 1;
                    }
                }
            }
        }
    }

    trace!(
        "Walk visited {} nodes ({} leaves), pruned {} entries",
        stats.nodes_visited,
        stats.leaves_visited,
        stats.entries_pruned
    );
    stats
}
