use log::{debug, warn};

use crate::error::{Error, Result};
use crate::node::{Node, NodeId, NodeKind};
use crate::utils::divup;
use crate::{HasEnvelope, Point, Rectangle};

pub const DEFAULT_DEGREE: usize = 4;

/// A dynamic R-tree over 2-D points, built by one-at-a-time insertion.
///
/// Nodes live in an arena and refer to each other by `NodeId`; a split keeps
/// the overflowing node's slot for its left half, so no slot is ever freed.
#[derive(Debug, Clone)]
pub struct RTree {
    degree: usize,
    min_fill: usize,
    size: usize,
    root: NodeId,
    nodes: Vec<Node>,
}

impl Default for RTree {
    fn default() -> Self {
        RTree {
            degree: DEFAULT_DEGREE,
            min_fill: min_fill_for(DEFAULT_DEGREE),
            size: 0,
            root: NodeId(0),
            nodes: vec![Node::new_leaf(None)],
        }
    }
}

/// Smallest entry count of a freshly split node: `ceil(0.4 * degree)`.
pub(crate) fn min_fill_for(degree: usize) -> usize {
    // Split off the multiple of 5 so nothing is doubled near usize::MAX.
    2 * (degree / 5) + divup(2 * (degree % 5), 5)
}

impl RTree {
    /// Below a degree of 2 a split cannot leave `min_fill` entries on both
    /// sides.
    pub fn new(degree: usize) -> Result<Self> {
        if degree < 2 {
            return Err(Error::Configuration(format!(
                "degree must be at least 2, got {}",
                degree
            )));
        }
        Ok(RTree {
            degree,
            min_fill: min_fill_for(degree),
            ..RTree::default()
        })
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn min_fill(&self) -> usize {
        self.min_fill
    }

    /// Number of levels; a lone root leaf has height 1.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node = self.node(self.root);
        while let Some(&child) = node.children().first() {
            node = self.node(child);
            height += 1;
        }
        height
    }

    pub fn envelope(&self) -> Rectangle {
        self.node(self.root).mbr
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Look up a node of this tree.
    ///
    /// # Panics
    ///
    /// A `NodeId` is only meaningful for the tree that produced it; an id
    /// from a larger tree panics here. Use [`RTree::get`] to check first.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Every indexed point, in storage order.
    pub fn points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.nodes.iter().flat_map(|node| node.points().iter())
    }

    /// Insert a point, splitting overflowing nodes up to the root.
    pub fn insert(&mut self, point: Point) -> Result<()> {
        point.validate()?;

        let leaf = self.choose_leaf(&point);
        if let NodeKind::Leaf(points) = &mut self.nodes[leaf.0].kind {
            points.push(point);
        }

        let mut current = Some(leaf);
        while let Some(id) = current {
            let node = &mut self.nodes[id.0];
            node.mbr.expand(point);
            current = node.parent;
        }

        self.size += 1;
        self.handle_overflow(leaf);
        Ok(())
    }

    /// Insert every point in order, stopping at the first invalid one.
    pub fn extend<I: IntoIterator<Item = Point>>(&mut self, points: I) -> Result<()> {
        for point in points {
            self.insert(point)?;
        }
        Ok(())
    }

    fn choose_leaf(&self, point: &Point) -> NodeId {
        let mut id = self.root;
        loop {
            match &self.nodes[id.0].kind {
                NodeKind::Leaf(_) => return id,
                NodeKind::Internal(children) => id = self.choose_subtree(children, point),
            }
        }
    }

    /// Child whose half-perimeter grows least; the first one wins ties.
    fn choose_subtree(&self, children: &[NodeId], point: &Point) -> NodeId {
        let mut best = children[0];
        let mut best_increase = f64::INFINITY;
        for &child in children {
            let increase = self.nodes[child.0].mbr.enlargement(point);
            if increase < best_increase {
                best_increase = increase;
                best = child;
            }
        }
        best
    }

    fn handle_overflow(&mut self, mut id: NodeId) {
        while self.nodes[id.0].len() > self.degree {
            let sibling = self.split(id);
            match self.nodes[id.0].parent {
                None => {
                    self.grow_root(id, sibling);
                    return;
                }
                Some(parent) => {
                    if let NodeKind::Internal(children) = &mut self.nodes[parent.0].kind {
                        let position = children
                            .iter()
                            .position(|&c| c == id)
                            .map_or(children.len(), |p| p + 1);
                        children.insert(position, sibling);
                    }
                    id = parent;
                }
            }
        }
    }

    fn grow_root(&mut self, left: NodeId, right: NodeId) {
        let new_root = NodeId(self.nodes.len());
        let mbr = self.nodes[left.0].mbr.merge(self.nodes[right.0].mbr);
        self.nodes.push(Node {
            mbr,
            parent: None,
            kind: NodeKind::Internal(vec![left, right]),
        });
        self.nodes[left.0].parent = Some(new_root);
        self.nodes[right.0].parent = Some(new_root);
        self.root = new_root;
    }

    /// Split `id` in place: it keeps the first group and a new sibling, with
    /// the same parent, takes the second. Returns the sibling.
    fn split(&mut self, id: NodeId) -> NodeId {
        let sibling = NodeId(self.nodes.len());
        let kind = std::mem::replace(&mut self.nodes[id.0].kind, NodeKind::Leaf(Vec::new()));
        let (left, right) = match kind {
            NodeKind::Leaf(points) => {
                let (left, right) = partition(points, self.min_fill, |p| p.envelope());
                (NodeKind::Leaf(left), NodeKind::Leaf(right))
            }
            NodeKind::Internal(children) => {
                let nodes = &self.nodes;
                let (left, right) = partition(children, self.min_fill, |c| nodes[c.0].mbr);
                (NodeKind::Internal(left), NodeKind::Internal(right))
            }
        };

        let left_mbr = self.mbr_of(&left);
        let right_mbr = self.mbr_of(&right);
        if let NodeKind::Internal(children) = &right {
            for child in children {
                self.nodes[child.0].parent = Some(sibling);
            }
        }

        let parent = self.nodes[id.0].parent;
        let node = &mut self.nodes[id.0];
        node.kind = left;
        node.mbr = left_mbr;
        self.nodes.push(Node {
            mbr: right_mbr,
            parent,
            kind: right,
        });
        sibling
    }

    fn mbr_of(&self, kind: &NodeKind) -> Rectangle {
        match kind {
            NodeKind::Leaf(points) => Rectangle::of(points),
            NodeKind::Internal(children) => children
                .iter()
                .fold(Rectangle::new_empty(), |mbr, c| mbr.merge(self.nodes[c.0].mbr)),
        }
    }
}

/// Greedy perimeter split.
///
/// Entries are sorted by x then, separately, by y; every offset leaving at
/// least `min_fill` entries per side is tried and the smallest summed
/// half-perimeter wins. Ties go to the first candidate: x before y, lower
/// offset first.
fn partition<T, F>(entries: Vec<T>, min_fill: usize, envelope: F) -> (Vec<T>, Vec<T>)
where
    T: Copy,
    F: Fn(&T) -> Rectangle,
{
    let count = entries.len();
    let mut by_x = entries.clone();
    by_x.sort_by(|a, b| envelope(a).x_min.total_cmp(&envelope(b).x_min));
    let mut by_y = entries;
    by_y.sort_by(|a, b| envelope(a).y_min.total_cmp(&envelope(b).y_min));

    let mut best: Option<(f64, usize, usize)> = None;
    for (axis, sorted) in [&by_x, &by_y].iter().enumerate() {
        let envelopes: Vec<Rectangle> = sorted.iter().map(&envelope).collect();
        // suffix[i] bounds envelopes[i..]
        let mut suffix = vec![Rectangle::new_empty(); count + 1];
        for i in (0..count).rev() {
            suffix[i] = suffix[i + 1].merge(envelopes[i]);
        }
        let mut prefix = Rectangle::new_empty();
        for (i, env) in envelopes.iter().enumerate() {
            let offset = i + 1;
            prefix.expand(*env);
            if offset < min_fill || offset + min_fill > count {
                continue;
            }
            let cost = prefix.half_perimeter() + suffix[offset].half_perimeter();
            if best.map_or(true, |(best_cost, _, _)| cost < best_cost) {
                best = Some((cost, axis, offset));
            }
        }
    }

    let (axis, offset) = best.map_or((0, count / 2), |(_, axis, offset)| (axis, offset));
    let mut left = if axis == 0 { by_x } else { by_y };
    let right = left.split_off(offset);
    (left, right)
}

/// Build an index with the default degree.
pub fn build_index(points: &[Point]) -> Result<RTree> {
    build_index_with_degree(points, DEFAULT_DEGREE)
}

/// Build an index, rejecting the whole build if any point is invalid.
pub fn build_index_with_degree(points: &[Point], degree: usize) -> Result<RTree> {
    let mut tree = RTree::new(degree)?;
    if let Err(err) = tree.extend(points.iter().copied()) {
        warn!("Rejecting index build: {}", err);
        return Err(err);
    }
    debug!(
        "Built index of {} points: height {}, {} nodes, degree {}",
        tree.len(),
        tree.height(),
        tree.node_count(),
        tree.degree()
    );
    Ok(tree)
}
